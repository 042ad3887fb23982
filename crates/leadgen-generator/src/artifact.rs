//! Lead workbook naming and latest-artifact discovery.

use std::path::{Path, PathBuf};
use std::time::SystemTime;

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Serialize;

use crate::error::GeneratorError;

pub const ARTIFACT_PREFIX: &str = "Verified_Leads_";
/// Older dashboards wrote this prefix; discovery still accepts it.
pub const LEGACY_ARTIFACT_PREFIX: &str = "Verified_Indian_Leads_";
pub const ARTIFACT_EXTENSION: &str = ".xlsx";

/// The most recently produced lead workbook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtifactRecord {
    pub path: PathBuf,
    pub file_name: String,
    pub created_at: DateTime<Utc>,
}

/// Builds `Verified_Leads_<count>_<YYYYMMDD_HHMMSS>.xlsx`.
#[must_use]
pub fn artifact_file_name(count: u32, timestamp: NaiveDateTime) -> String {
    format!(
        "{ARTIFACT_PREFIX}{count}_{}{ARTIFACT_EXTENSION}",
        timestamp.format("%Y%m%d_%H%M%S")
    )
}

fn matches_prefix(file_name: &str, prefix: &str) -> bool {
    file_name.len() >= prefix.len() + ARTIFACT_EXTENSION.len()
        && file_name.starts_with(prefix)
        && file_name.ends_with(ARTIFACT_EXTENSION)
}

/// Finds the newest lead workbook in `dir`.
///
/// Current-pattern files win; legacy files are only considered when no
/// current-pattern file exists. Files are ordered by creation time, or by
/// modification time on platforms that do not record creation. A missing
/// directory yields `Ok(None)`.
///
/// # Errors
///
/// Returns [`GeneratorError::Io`] if the directory exists but cannot be read.
pub fn discover_latest(dir: &Path) -> Result<Option<ArtifactRecord>, GeneratorError> {
    let io_err = |e: std::io::Error| GeneratorError::Io {
        path: dir.display().to_string(),
        source: e,
    };

    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(io_err(e)),
    };

    let mut current = Vec::new();
    let mut legacy = Vec::new();

    for entry in entries {
        let entry = entry.map_err(io_err)?;
        let Ok(file_name) = entry.file_name().into_string() else {
            continue;
        };
        let bucket = if matches_prefix(&file_name, ARTIFACT_PREFIX) {
            &mut current
        } else if matches_prefix(&file_name, LEGACY_ARTIFACT_PREFIX) {
            &mut legacy
        } else {
            continue;
        };

        let metadata = match entry.metadata() {
            Ok(m) if m.is_file() => m,
            Ok(_) => continue,
            Err(e) => {
                tracing::warn!(file = %file_name, error = %e, "skipping unreadable artifact");
                continue;
            }
        };
        let created: SystemTime = metadata
            .created()
            .or_else(|_| metadata.modified())
            .unwrap_or(SystemTime::UNIX_EPOCH);

        bucket.push(ArtifactRecord {
            path: entry.path(),
            file_name,
            created_at: DateTime::<Utc>::from(created),
        });
    }

    let candidates = if current.is_empty() { legacy } else { current };

    Ok(candidates
        .into_iter()
        .max_by(|a, b| {
            a.created_at
                .cmp(&b.created_at)
                .then_with(|| a.file_name.cmp(&b.file_name))
        }))
}
