//! The declarative chart description handed to a renderer.

use serde::{Deserialize, Serialize};

use crate::trace::{ComposeOptions, Trace, YAxis};

/// X axis title; elapsed time is the only X dimension this system plots.
pub const X_AXIS_TITLE: &str = "Time (s)";

const DEFAULT_TITLE: &str = "Pump data traces";
const PRESSURE_AXIS_TITLE: &str = "Pressure [bar]";
const FLOW_AXIS_TITLE: &str = "Flow / Related";

/// One axis of the chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisSpec {
    pub title: String,
    /// Upper bound; `None` lets the renderer auto-scale.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub max: Option<f64>,
    /// Anchor the lower bound at zero, the renderer's `tozero` range mode.
    pub anchor_zero: bool,
}

/// Where the legend sits relative to the plot area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LegendPosition {
    /// Horizontal strip under the plot, where long run labels fit best.
    Below,
    Right,
}

/// Complete chart description: traces plus layout. Serialize it and hand it
/// to whatever renders; nothing here draws.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub title: String,
    pub traces: Vec<Trace>,
    pub x_axis: AxisSpec,
    pub y_axis: AxisSpec,
    /// Present only in dual-axis mode when at least one trace sits on it.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub secondary_y_axis: Option<AxisSpec>,
    pub legend: LegendPosition,
    /// Text a renderer shows centered in the plot area instead of lines.
    /// Set exactly when there are no traces.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub placeholder: Option<String>,
}

impl ChartSpec {
    pub fn is_placeholder(&self) -> bool {
        self.placeholder.is_some()
    }
}

/// Assemble the chart around `traces`. Never fails: an empty trace list
/// produces a placeholder chart the caller can render as-is.
pub fn build_chart(traces: Vec<Trace>, options: &ComposeOptions) -> ChartSpec {
    let title = options
        .title
        .clone()
        .unwrap_or_else(|| DEFAULT_TITLE.to_string());
    let x_axis = AxisSpec {
        title: X_AXIS_TITLE.to_string(),
        max: None,
        anchor_zero: false,
    };

    if traces.is_empty() {
        return ChartSpec {
            title,
            traces,
            x_axis,
            y_axis: AxisSpec {
                title: "Value".to_string(),
                max: options.pressure_axis_max,
                anchor_zero: true,
            },
            secondary_y_axis: None,
            legend: LegendPosition::Below,
            placeholder: Some("No data selected".to_string()),
        };
    }

    let (y_axis, secondary_y_axis) = if options.dual_axis {
        let has_secondary = traces.iter().any(|trace| trace.axis == YAxis::Secondary);
        let y_axis = AxisSpec {
            title: PRESSURE_AXIS_TITLE.to_string(),
            max: options.pressure_axis_max,
            anchor_zero: true,
        };
        let secondary = has_secondary.then(|| AxisSpec {
            title: FLOW_AXIS_TITLE.to_string(),
            max: options.flow_axis_max,
            anchor_zero: true,
        });
        (y_axis, secondary)
    } else {
        let y_axis = AxisSpec {
            title: single_axis_title(&traces),
            max: options.pressure_axis_max,
            anchor_zero: true,
        };
        (y_axis, None)
    };

    ChartSpec {
        title,
        traces,
        x_axis,
        y_axis,
        secondary_y_axis,
        legend: LegendPosition::Below,
        placeholder: None,
    }
}

/// Single-axis mode shares one Y axis across everything, so the title can
/// only be metric-specific when every trace plots the same metric kind.
fn single_axis_title(traces: &[Trace]) -> String {
    let mut kinds = traces.iter().map(|trace| trace.key.channel.metric);
    let Some(first) = kinds.next() else {
        return "Value".to_string();
    };
    if kinds.all(|kind| kind == first) {
        first.label_with_unit()
    } else {
        "Value".to_string()
    }
}
