//! Channel discovery: which metric files exist for a run.
//!
//! Purely filename-level; metric file bodies are never opened here, so
//! listing channels stays cheap even for runs with hours of samples.

use pt_core::{MetricChannel, MetricKind};

use crate::CatalogResult;
use crate::catalog::RunFolder;

/// List the channels recorded for `run`, sorted by pump then metric.
///
/// Files shaped like `Pump-*.txt` that name an unknown pump or metric are
/// skipped; raw logs may grow channel types this vocabulary has not learned
/// yet. A run folder that has vanished since the catalog was refreshed
/// yields an empty list rather than an error.
pub fn available_channels(run: &RunFolder) -> CatalogResult<Vec<MetricChannel>> {
    let mut channels = Vec::new();
    if !run.path().is_dir() {
        return Ok(channels);
    }
    for entry in std::fs::read_dir(run.path())? {
        let entry = entry?;
        if !entry.path().is_file() {
            continue;
        }
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            continue;
        };
        if let Some(channel) = MetricChannel::from_file_name(name) {
            channels.push(channel);
        } else if name.starts_with("Pump-") && name.ends_with(".txt") {
            tracing::debug!(run = run.name(), file = name, "unrecognized metric file");
        }
    }
    channels.sort();
    // Case-variant spellings of one channel decode to the same value.
    channels.dedup();
    Ok(channels)
}

/// The channels an operator looks at first: pressure and actual flow on the
/// high-pressure pump, restricted to what the run actually recorded.
pub fn default_selection(channels: &[MetricChannel]) -> Vec<MetricChannel> {
    channels
        .iter()
        .copied()
        .filter(|channel| {
            channel.pump.is_high_pressure()
                && matches!(channel.metric, MetricKind::Pressure | MetricKind::ActualFlow)
        })
        .collect()
}
