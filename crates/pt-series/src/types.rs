//! Time-series data produced by the metric-file parser.

use chrono::NaiveTime;
use pt_core::{SeriesKey, format_clock};

/// One sample: wall-clock time of day and measured value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeSeriesPoint {
    pub time: NaiveTime,
    pub value: f64,
}

/// All samples parsed from one metric file, tagged with their identity.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeSeries {
    pub key: SeriesKey,
    /// Second tab field of the header line, e.g. `Pump HP:Pressure [bar]`,
    /// when the file carried one.
    pub header_label: Option<String>,
    /// Samples in file order. Well-formed files are non-decreasing in time;
    /// duplicate timestamps are kept as written.
    pub points: Vec<TimeSeriesPoint>,
}

impl TimeSeries {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Wall-clock time of the first sample, the series' own elapsed-time
    /// origin.
    pub fn first_time(&self) -> Option<NaiveTime> {
        self.points.first().map(|point| point.time)
    }

    /// Render back to the controller's tab-separated form: a header line
    /// and one `HH:MM:SS.mmm\t<value>` line per sample, three decimals on
    /// both time and value.
    pub fn to_tsv(&self) -> String {
        let header = self
            .header_label
            .clone()
            .unwrap_or_else(|| self.key.channel.header_label());
        let mut out = format!("time\t{header}\n");
        for point in &self.points {
            out.push_str(&format!(
                "{}\t{:.3}\n",
                format_clock(point.time),
                point.value
            ));
        }
        out
    }
}
