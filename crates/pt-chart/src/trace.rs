//! Trace composition: loaded series to plot-ready lines.

use pt_catalog::RunCatalog;
use pt_core::{AxisClass, SeriesKey, elapsed_seconds};
use pt_series::TimeSeries;
use serde::{Deserialize, Serialize};

use crate::color::{Color, ColorAllocator};

/// Which Y axis a trace is drawn against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum YAxis {
    Primary,
    Secondary,
}

/// One plot-ready line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trace {
    pub key: SeriesKey,
    /// Legend text: run display name plus channel label.
    pub label: String,
    pub color: Color,
    pub axis: YAxis,
    /// `[elapsed seconds, value]` pairs, renderer-ready.
    pub points: Vec<[f64; 2]>,
}

/// Knobs for one composition, supplied by whatever front end drives this.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComposeOptions {
    /// Split pressure and flow-family traces across two Y axes.
    pub dual_axis: bool,
    /// Upper bound for the pressure axis; `None` lets the renderer
    /// auto-scale.
    pub pressure_axis_max: Option<f64>,
    /// Upper bound for the flow axis; `None` lets the renderer auto-scale.
    pub flow_axis_max: Option<f64>,
    /// Start the X axis at the earliest first sample across the whole
    /// composed set instead of at each series' own first sample. Useful
    /// when channels of one run must keep their relative wall-clock offsets.
    pub align_to_common_origin: bool,
    /// Chart title override.
    pub title: Option<String>,
}

impl Default for ComposeOptions {
    fn default() -> Self {
        Self {
            dual_axis: true,
            pressure_axis_max: None,
            flow_axis_max: None,
            align_to_common_origin: false,
            title: None,
        }
    }
}

/// Compose loaded series into traces, in input order.
///
/// X values are elapsed seconds from each series' own first sample, or from
/// the shared earliest first sample under
/// [`ComposeOptions::align_to_common_origin`]. Colors come from `colors`,
/// which the caller keeps alive for the whole viewing session. In dual-axis
/// mode the metric kind decides the axis; in single-axis mode everything
/// lands on the primary.
pub fn compose(
    catalog: &RunCatalog,
    series: &[TimeSeries],
    options: &ComposeOptions,
    colors: &mut ColorAllocator,
) -> Vec<Trace> {
    let common_origin = if options.align_to_common_origin {
        series.iter().filter_map(TimeSeries::first_time).min()
    } else {
        None
    };

    let mut traces = Vec::with_capacity(series.len());
    for one in series {
        let origin = common_origin.or_else(|| one.first_time());
        let points = one
            .points
            .iter()
            .map(|point| {
                let elapsed = origin
                    .map(|origin| elapsed_seconds(origin, point.time))
                    .unwrap_or(0.0);
                [elapsed, point.value]
            })
            .collect();

        let axis = if options.dual_axis {
            match one.key.channel.metric.axis_class() {
                AxisClass::Pressure => YAxis::Primary,
                AxisClass::Flow => YAxis::Secondary,
            }
        } else {
            YAxis::Primary
        };

        traces.push(Trace {
            label: trace_label(catalog, &one.key),
            color: colors.color_for(&one.key),
            axis,
            points,
            key: one.key.clone(),
        });
    }
    traces
}

/// Legend text for one series. Runs the catalog knows get their journal
/// display name; unknown runs fall back to the raw run name.
fn trace_label(catalog: &RunCatalog, key: &SeriesKey) -> String {
    let run = catalog
        .get(&key.run)
        .map(|run| run.display_name())
        .unwrap_or_else(|| key.run.clone());
    format!("{} — {}", run, key.channel.label())
}
