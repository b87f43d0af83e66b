//! Tolerant parser for per-pump metric files.
//!
//! The controller appends to these logs while a run executes, so a file may
//! end mid-line or carry stray garbage. Parsing skips what it cannot read
//! and keeps everything else; only a file with no content at all is an
//! error.

use std::path::Path;

use pt_core::{SeriesKey, parse_clock};

use crate::types::{TimeSeries, TimeSeriesPoint};
use crate::{SeriesError, SeriesResult};

/// Parse one metric file into a series tagged with `key`.
///
/// The first line is a header whose presence, not content, is required; its
/// second tab field is kept as [`TimeSeries::header_label`]. Every later
/// line must split on a single tab into a parseable timestamp and a float.
/// Lines that do not are skipped with a debug log. An unopenable,
/// undecodable or zero-length file is [`SeriesError::FileUnreadable`].
pub fn parse_metric_file(path: &Path, key: SeriesKey) -> SeriesResult<TimeSeries> {
    let content =
        std::fs::read_to_string(path).map_err(|source| SeriesError::FileUnreadable {
            path: path.to_path_buf(),
            source: Some(source),
        })?;
    if content.is_empty() {
        return Err(SeriesError::FileUnreadable {
            path: path.to_path_buf(),
            source: None,
        });
    }
    Ok(parse_content(&content, key))
}

fn parse_content(content: &str, key: SeriesKey) -> TimeSeries {
    let mut lines = content.lines();
    let header_label = lines
        .next()
        .and_then(|header| header.split('\t').nth(1))
        .map(|label| label.trim().to_string())
        .filter(|label| !label.is_empty());

    let mut points = Vec::new();
    for line in lines {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() != 2 {
            tracing::debug!(%key, line, "skipping line without exactly two fields");
            continue;
        }
        let Some(time) = parse_clock(fields[0]) else {
            tracing::debug!(%key, timestamp = fields[0], "skipping line with bad timestamp");
            continue;
        };
        let Ok(value) = fields[1].trim().parse::<f64>() else {
            tracing::debug!(%key, value = fields[1], "skipping line with bad value");
            continue;
        };
        points.push(TimeSeriesPoint { time, value });
    }

    TimeSeries {
        key,
        header_label,
        points,
    }
}
