//! Run discovery: one immutable catalog snapshot per scan.

use std::fs;
use std::path::{Path, PathBuf};

use pt_core::MetricChannel;

use crate::metadata::{self, JOURNAL_FILE, RunMetadata};
use crate::{CatalogError, CatalogResult};

/// One discovered run: a folder of metric files plus its journal metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct RunFolder {
    name: String,
    path: PathBuf,
    metadata: RunMetadata,
}

impl RunFolder {
    /// Folder name, the stable identifier for the run.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn metadata(&self) -> &RunMetadata {
        &self.metadata
    }

    /// Name shown when a human picks runs apart: journal procedure and
    /// sample when present, raw folder name otherwise.
    pub fn display_name(&self) -> String {
        match (&self.metadata.procedure, &self.metadata.sample) {
            (Some(procedure), Some(sample)) => format!("{procedure} ({sample})"),
            (Some(procedure), None) => procedure.clone(),
            (None, Some(sample)) => sample.clone(),
            (None, None) => self.name.clone(),
        }
    }

    /// Path of the metric file for `channel`, by the fixed naming
    /// convention. The file need not exist.
    pub fn channel_path(&self, channel: MetricChannel) -> PathBuf {
        self.path.join(channel.file_name())
    }
}

/// Immutable snapshot of the runs under one data root.
///
/// [`RunCatalog::refresh`] builds a whole new value; callers that share a
/// catalog across threads swap the snapshot wholesale (behind an `Arc`), so
/// readers see either the old or the new listing, never a mix.
#[derive(Debug, Clone, PartialEq)]
pub struct RunCatalog {
    root: PathBuf,
    runs: Vec<RunFolder>,
}

impl RunCatalog {
    /// Scan `root` for run folders, reading each journal as it goes.
    ///
    /// Fails only when the root itself is missing or unreadable. Runs
    /// without a journal are kept with unset metadata, and plain files at
    /// the root level are ignored.
    pub fn refresh(root: &Path) -> CatalogResult<Self> {
        if !root.is_dir() {
            return Err(CatalogError::PathNotFound {
                path: root.to_path_buf(),
            });
        }
        let mut runs = Vec::new();
        for entry in fs::read_dir(root)? {
            let entry = entry?;
            let path = entry.path();
            if !path.is_dir() {
                continue;
            }
            let name = entry.file_name().to_string_lossy().into_owned();
            let mut metadata = RunMetadata::from_journal(&path.join(JOURNAL_FILE));
            if metadata.date_time.is_none() {
                metadata.date_time = metadata::date_time_from_folder_name(&name);
            }
            runs.push(RunFolder {
                name,
                path,
                metadata,
            });
        }
        runs.sort_by(|a, b| a.name.cmp(&b.name));
        tracing::debug!(root = %root.display(), runs = runs.len(), "catalog refreshed");
        Ok(Self {
            root: root.to_path_buf(),
            runs,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Runs in catalog order, sorted by folder name.
    pub fn runs(&self) -> &[RunFolder] {
        &self.runs
    }

    /// Look a run up by folder name.
    pub fn get(&self, name: &str) -> Option<&RunFolder> {
        self.runs.iter().find(|run| run.name == name)
    }

    pub fn len(&self) -> usize {
        self.runs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }
}
