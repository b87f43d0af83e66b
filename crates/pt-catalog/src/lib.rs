//! pt-catalog: run-folder discovery and per-run metadata.
//!
//! A data root holds one subdirectory per pump run; each run folder holds
//! per-channel metric files and usually a `journal.txt` with free-form
//! key/value metadata. Everything here works at the directory-listing and
//! journal level; metric file bodies are never opened.

pub mod catalog;
pub mod index;
pub mod metadata;

pub use catalog::{RunCatalog, RunFolder};
pub use index::{available_channels, default_selection};
pub use metadata::RunMetadata;

pub type CatalogResult<T> = Result<T, CatalogError>;

#[derive(thiserror::Error, Debug)]
pub enum CatalogError {
    /// The data root itself is missing or not a directory. Individual runs
    /// never produce this; only the root is load-bearing.
    #[error("Data root not found or not a directory: {path}")]
    PathNotFound { path: std::path::PathBuf },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
