//! Per-run metadata from the `journal.txt` key/value log.

use std::path::Path;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Name of the journal file inside each run folder.
pub const JOURNAL_FILE: &str = "journal.txt";

/// Metadata recorded alongside a run. Every field is optional: runs without
/// a journal, or with a partial one, are still valid catalog entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunMetadata {
    /// `Procedure.Name` journal key.
    pub procedure: Option<String>,
    /// `Procedure.Logname` journal key.
    pub log_name: Option<String>,
    /// `Procedure.Samplename` journal key.
    pub sample: Option<String>,
    /// `Procedure.Vialposition` journal key.
    pub vial: Option<String>,
    /// Start date and time as display text, `YYYY-MM-DD HH:MM:SS`. Filled
    /// from the folder-name suffix when the journal does not provide it.
    pub date_time: Option<String>,
}

impl RunMetadata {
    /// Parse a journal file. A missing or unreadable file yields the default
    /// (all unset); unrecognized or malformed lines are skipped while the
    /// recognized keys around them are kept.
    ///
    /// Journal lines look like `Procedure.Name: 200-SPD`. The value may
    /// itself contain colons (log names embed times), so only the first
    /// colon splits.
    pub fn from_journal(path: &Path) -> Self {
        let mut meta = Self::default();
        let Ok(content) = std::fs::read_to_string(path) else {
            return meta;
        };
        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let Some((key, value)) = line.split_once(':') else {
                tracing::debug!(path = %path.display(), line, "journal line without separator");
                continue;
            };
            let value = value.trim();
            if value.is_empty() {
                continue;
            }
            match key.trim() {
                "Procedure.Name" => meta.procedure = Some(value.to_string()),
                "Procedure.Logname" => meta.log_name = Some(value.to_string()),
                "Procedure.Samplename" => meta.sample = Some(value.to_string()),
                "Procedure.Vialposition" => meta.vial = Some(value.to_string()),
                _ => {}
            }
        }
        meta
    }

    pub fn is_empty(&self) -> bool {
        self.procedure.is_none()
            && self.log_name.is_none()
            && self.sample.is_none()
            && self.vial.is_none()
            && self.date_time.is_none()
    }
}

/// Recover a start date/time from folder names following the controller's
/// `<prefix>_<YYYY-MM-DD>_<HH-MM-SS>` convention. Returns display text like
/// `2025-12-11 12:27:48`; `None` when the name is shaped differently.
pub fn date_time_from_folder_name(name: &str) -> Option<String> {
    let mut parts = name.rsplitn(3, '_');
    let time_part = parts.next()?;
    let date_part = parts.next()?;
    parts.next()?;
    if NaiveDate::parse_from_str(date_part, "%Y-%m-%d").is_err() {
        return None;
    }
    if NaiveTime::parse_from_str(time_part, "%H-%M-%S").is_err() {
        return None;
    }
    Some(format!("{} {}", date_part, time_part.replace('-', ":")))
}
