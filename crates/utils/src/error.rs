//! Error types for data loading.

use regsearch_primitives::DatasetError;

/// Errors that can occur while loading data.
#[derive(Debug, thiserror::Error)]
pub enum UtilsError {
    /// Polars error.
    #[error("polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    /// The loaded values do not form a valid dataset.
    #[error("dataset error: {0}")]
    Dataset(#[from] DatasetError),

    /// Invalid parameter.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Missing column.
    #[error("missing column: {0}")]
    MissingColumn(String),
}
