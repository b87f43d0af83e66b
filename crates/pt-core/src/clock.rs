//! Wall-clock timestamps for metric samples.
//!
//! Metric files carry `HH:MM:SS.mmm` times of day with no date component;
//! runs are assumed not to cross midnight.

use chrono::NaiveTime;

/// Format the controller writes and [`format_clock`] reproduces.
const CLOCK_FORMAT: &str = "%H:%M:%S%.3f";

/// Parse an `HH:MM:SS.mmm` timestamp. The fractional part is optional on
/// input, with any number of digits; the controller itself writes three.
pub fn parse_clock(text: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(text.trim(), "%H:%M:%S%.f").ok()
}

/// Render a timestamp in the controller's millisecond form.
pub fn format_clock(time: NaiveTime) -> String {
    time.format(CLOCK_FORMAT).to_string()
}

/// Elapsed seconds from `origin` to `time`, negative when `time` is earlier.
///
/// Computed on whole milliseconds so that values like 0.013 come out exact
/// instead of picking up float noise from subtracting two second counts.
pub fn elapsed_seconds(origin: NaiveTime, time: NaiveTime) -> f64 {
    let millis = time.signed_duration_since(origin).num_milliseconds();
    millis as f64 / 1000.0
}
