//! Batch loading for a set of (run, channel) selections.

use pt_catalog::RunFolder;
use pt_core::{MetricChannel, SeriesKey};
use rayon::prelude::*;

use crate::parser::parse_metric_file;
use crate::types::TimeSeries;
use crate::{SeriesError, SeriesResult};

/// One selection that failed to load. The batch as a whole carries on.
#[derive(Debug)]
pub struct LoadFailure {
    pub key: SeriesKey,
    pub error: SeriesError,
}

/// Result of loading a selection set: parsed series in selection order plus
/// the failures that did not stop the rest from loading.
#[derive(Debug, Default)]
pub struct LoadOutcome {
    pub series: Vec<TimeSeries>,
    pub failures: Vec<LoadFailure>,
}

impl LoadOutcome {
    pub fn get(&self, key: &SeriesKey) -> Option<&TimeSeries> {
        self.series.iter().find(|series| &series.key == key)
    }
}

/// Load every (run, channel) selection, one file per selection, in parallel.
///
/// A selection that fails, most commonly because the run never recorded
/// that channel, turns into a [`LoadFailure`] instead of aborting the batch.
/// Output order follows selection order, not completion order, so trace
/// ordering downstream is deterministic.
pub fn load_series(selections: &[(&RunFolder, MetricChannel)]) -> LoadOutcome {
    let results: Vec<SeriesResult<TimeSeries>> = selections
        .par_iter()
        .map(|&(run, channel)| {
            let key = SeriesKey::new(run.name(), channel);
            parse_metric_file(&run.channel_path(channel), key)
        })
        .collect();

    let mut outcome = LoadOutcome::default();
    for (&(run, channel), result) in selections.iter().zip(results) {
        match result {
            Ok(series) => outcome.series.push(series),
            Err(error) => {
                let key = SeriesKey::new(run.name(), channel);
                tracing::warn!(%key, %error, "selection failed to load");
                outcome.failures.push(LoadFailure { key, error });
            }
        }
    }
    outcome
}
