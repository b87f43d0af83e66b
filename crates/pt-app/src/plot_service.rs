//! One-call plot pipeline: resolve selections, load, compose, assemble.

use pt_catalog::{RunCatalog, RunFolder};
use pt_chart::{ChartSpec, ColorAllocator, ComposeOptions, build_chart, compose};
use pt_core::{MetricChannel, SeriesKey};
use pt_series::load_series;

use crate::error::{AppError, AppResult};
use crate::request::PlotRequestDef;

/// One (run, channel) pair that could not be plotted.
#[derive(Debug)]
pub struct PlotFailure {
    pub key: SeriesKey,
    pub error: AppError,
}

/// What a plot request produces: a chart plus whatever failed along the
/// way. Failures never empty the chart of the traces that did load.
#[derive(Debug)]
pub struct PlotResponse {
    pub chart: ChartSpec,
    pub failures: Vec<PlotFailure>,
}

/// Resolve run names against `catalog`, load every (run, channel) pair and
/// build the chart.
///
/// Pairs iterate runs outer, channels inner, so traces group by run. A run
/// name the catalog does not know fails each of its channel pairs instead
/// of aborting the request; a vanished folder looks the same as a folder
/// that never recorded the channel.
pub fn compose_plot(
    catalog: &RunCatalog,
    run_names: &[String],
    channels: &[MetricChannel],
    options: &ComposeOptions,
    colors: &mut ColorAllocator,
) -> PlotResponse {
    let mut failures = Vec::new();
    let mut selections: Vec<(&RunFolder, MetricChannel)> = Vec::new();
    for name in run_names {
        match catalog.get(name) {
            Some(run) => {
                for &channel in channels {
                    selections.push((run, channel));
                }
            }
            None => {
                tracing::warn!(run = name.as_str(), "requested run not in catalog");
                for &channel in channels {
                    failures.push(PlotFailure {
                        key: SeriesKey::new(name.clone(), channel),
                        error: AppError::RunNotFound(name.clone()),
                    });
                }
            }
        }
    }

    let outcome = load_series(&selections);
    failures.extend(outcome.failures.into_iter().map(|failure| PlotFailure {
        key: failure.key,
        error: AppError::Series(failure.error),
    }));

    let traces = compose(catalog, &outcome.series, options, colors);
    tracing::debug!(
        traces = traces.len(),
        failures = failures.len(),
        "plot composed"
    );
    PlotResponse {
        chart: build_chart(traces, options),
        failures,
    }
}

/// Resolve a request document against a catalog. Channel strings that do
/// not parse are a hard error; everything after that degrades per pair.
pub fn compose_plot_from_def(
    catalog: &RunCatalog,
    def: &PlotRequestDef,
    colors: &mut ColorAllocator,
) -> AppResult<PlotResponse> {
    let channels = parse_channels(&def.channels)?;
    Ok(compose_plot(
        catalog,
        &def.runs,
        &channels,
        &def.options,
        colors,
    ))
}

/// Parse `PUMP:METRIC` strings into typed channels.
pub fn parse_channels(specs: &[String]) -> AppResult<Vec<MetricChannel>> {
    specs
        .iter()
        .map(|spec| spec.parse::<MetricChannel>().map_err(AppError::InvalidInput))
        .collect()
}
