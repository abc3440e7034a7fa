// File: crates/frontier-core/src/error.rs
// Summary: Error types for dataset loading and rendering.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DataError {
    #[error("unknown vendor id `{0}`")]
    UnknownVendor(String),

    #[error("unknown filter key `{0}`")]
    UnknownFilter(String),

    #[error("invalid date `{value}`")]
    InvalidDate {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("invalid score {0} for `{1}` (must be finite and non-negative)")]
    InvalidScore(f64, String),

    #[error("dataset contains no records")]
    EmptyDataset,

    #[error("csv error")]
    Csv(#[from] csv::Error),

    #[error("io error")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to create raster surface ({width}x{height})")]
    Surface { width: i32, height: i32 },

    #[error("failed to encode PNG")]
    Encode,

    #[error("io error")]
    Io(#[from] std::io::Error),
}
