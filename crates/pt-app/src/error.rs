//! Error type for the pumptrace service layer.

use std::path::PathBuf;

/// Application error that wraps failures from the backend crates behind a
/// single type for front ends to match on.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The data root could not be scanned. Front ends treat this as "ask
    /// the user for a corrected path", unlike per-run problems which stay
    /// inside the response.
    #[error("Catalog error: {0}")]
    Catalog(#[from] pt_catalog::CatalogError),

    #[error("Run not found in catalog: {0}")]
    RunNotFound(String),

    #[error("Series error: {0}")]
    Series(#[from] pt_series::SeriesError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Failed to read request file: {path}")]
    RequestFileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Request parse error: {0}")]
    RequestParse(#[from] serde_yaml::Error),

    #[error("Chart encode error: {0}")]
    ChartEncode(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type AppResult<T> = Result<T, AppError>;
