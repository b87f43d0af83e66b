//! pt-chart: loaded series to a declarative chart description.
//!
//! Composition turns [`pt_series::TimeSeries`] values into renderer-neutral
//! traces: elapsed-time X values, a session-stable color and a Y-axis
//! assignment per trace. Spec assembly then wraps the traces in axis and
//! legend layout. Nothing in this crate draws.

pub mod color;
pub mod spec;
pub mod trace;

pub use color::{Color, ColorAllocator, PALETTE};
pub use spec::{AxisSpec, ChartSpec, LegendPosition, build_chart};
pub use trace::{ComposeOptions, Trace, YAxis, compose};
