//! pt-series: metric-file parsing and multi-selection loading.
//!
//! The parser turns one tab-separated metric file into a [`TimeSeries`];
//! the loader runs the parser over a whole selection set, in parallel,
//! collecting per-file failures instead of aborting the batch.

pub mod loader;
pub mod parser;
pub mod types;

pub use loader::{LoadFailure, LoadOutcome, load_series};
pub use parser::parse_metric_file;
pub use types::{TimeSeries, TimeSeriesPoint};

pub type SeriesResult<T> = Result<T, SeriesError>;

#[derive(thiserror::Error, Debug)]
pub enum SeriesError {
    /// The file could not be opened or decoded, or was zero-length. Files
    /// with skippable bad lines do not land here; they parse to whatever
    /// points survive.
    #[error("Metric file unreadable: {path}")]
    FileUnreadable {
        path: std::path::PathBuf,
        #[source]
        source: Option<std::io::Error>,
    },
}
