//! Error types for histkit

use thiserror::Error;

/// histkit error type
#[derive(Error, Debug)]
pub enum Error {
    /// Bin layout request with a non-positive width or an inverted range
    #[error("invalid binning: min={min}, max={max}, width={width}")]
    InvalidBinning {
        /// Lower edge of the requested range.
        min: f64,
        /// Upper edge of the requested range.
        max: f64,
        /// Requested bin width.
        width: f64,
    },

    /// Normalization of a histogram whose integral is zero or non-finite
    #[error("cannot normalize '{0}': integral is zero or non-finite")]
    ZeroIntegral(String),

    /// A composition needs at least two series
    #[error("need at least 2 series, got {0}")]
    TooFewSeries(usize),

    /// Histograms combined in one plot must share the same bin layout
    #[error("bin layout mismatch between '{0}' and '{1}'")]
    BinMismatch(String, String),

    /// A named column is absent from the input table
    #[error("missing column: '{0}'")]
    MissingColumn(String),

    /// A named histogram is absent from the store
    #[error("missing histogram: '{0}'")]
    MissingHistogram(String),

    /// A table field could not be parsed as a number
    #[error("parse error: {0}")]
    Parse(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV error
    #[error("CSV error: {0}")]
    Csv(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
