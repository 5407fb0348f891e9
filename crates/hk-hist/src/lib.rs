//! # hk-hist
//!
//! Histogram data model for histkit.
//!
//! One- and two-dimensional fixed-range histograms with uniform binning,
//! single-pass filling from column data, area normalization, a CSV column
//! source, and a JSON store for saving named histograms and reloading them
//! later.
//!
//! ## Example
//!
//! ```
//! use hk_hist::{Hist1D, normalize_to_unity};
//!
//! let mut h = Hist1D::with_bin_width("x", "", -4.0, 4.0, 1.0).unwrap();
//! assert_eq!(h.n_bins, 8);
//! h.fill(0.3);
//! h.fill(1.7);
//! normalize_to_unity(&mut h).unwrap();
//! assert!((h.integral() - 1.0).abs() < 1e-12);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod binning;
pub mod filler;
pub mod histogram;
pub mod normalize;
pub mod store;
pub mod table;

pub use binning::{bin_count, bin_edges};
pub use filler::{FillSpec, FlowPolicy, fill_from_columns};
pub use histogram::{Hist1D, Hist2D};
pub use normalize::{normalize, normalize_2d, normalize_set, normalize_to_unity};
pub use store::HistStore;
pub use table::ColumnTable;
