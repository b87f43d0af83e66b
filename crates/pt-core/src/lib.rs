//! pt-core: shared vocabulary for pump telemetry.
//!
//! Contains:
//! - channel identity (pump identifiers, metric kinds, the file naming
//!   convention that ties them together)
//! - clock arithmetic for the `HH:MM:SS.mmm` timestamps metric files use

pub mod channel;
pub mod clock;

pub use channel::{AxisClass, MetricChannel, MetricKind, PumpId, SeriesKey};
pub use clock::{elapsed_seconds, format_clock, parse_clock};
