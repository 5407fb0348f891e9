//! # hk-core
//!
//! Shared error type and common definitions for histkit.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;

pub use error::{Error, Result};

/// Crate version, stamped into serialized artifacts.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
