//! Plot request documents: a YAML description of what to put on screen.
//!
//! Requests are stringly typed on purpose so they can be written by hand;
//! resolution against a live catalog happens in the plot service.

use std::path::Path;

use pt_chart::ComposeOptions;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// Serialized form of a plot request.
///
/// Channels use the `PUMP:METRIC` form, e.g. `HP:Pressure` or
/// `A:Actual-flow`; matching is case-insensitive and ignores `-`, `_` and
/// spaces inside the metric name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlotRequestDef {
    /// Run folder names to overlay.
    #[serde(default)]
    pub runs: Vec<String>,
    /// Channels to plot for every listed run.
    #[serde(default)]
    pub channels: Vec<String>,
    #[serde(default)]
    pub options: ComposeOptions,
}

/// Load a request document from a YAML file.
pub fn load_request(path: &Path) -> AppResult<PlotRequestDef> {
    let content = std::fs::read_to_string(path).map_err(|source| AppError::RequestFileRead {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_yaml::from_str(&content)?)
}

/// Write a request document as YAML, the inverse of [`load_request`].
pub fn save_request(path: &Path, request: &PlotRequestDef) -> AppResult<()> {
    let content = serde_yaml::to_string(request)?;
    std::fs::write(path, content)?;
    Ok(())
}
