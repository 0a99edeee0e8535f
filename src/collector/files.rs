//! Snapshot file discovery.
//!
//! Deltas are only meaningful if snapshots are replayed in the order they
//! were captured. Capture tools embed a timestamp at the start of the file
//! name (`2024_05_01_10_00_00-mysqladmin`), so the lexicographic path order
//! is the capture order. That order is the contract exposed by
//! [`snapshot_sort_key`].

use crate::utils::config::SNAPSHOT_TIMESTAMP_FORMAT;
use crate::utils::error::CollectError;
use chrono::NaiveDateTime;
use log::debug;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// A snapshot file scheduled for ingestion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotFile {
    pub path: PathBuf,

    /// Capture time decoded from the file name, if it carries one
    pub timestamp: Option<NaiveDateTime>,
}

impl SnapshotFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let timestamp = path
            .file_name()
            .and_then(|name| name.to_str())
            .and_then(parse_snapshot_timestamp);
        Self { path, timestamp }
    }

    pub fn sort_key(&self) -> PathBuf {
        snapshot_sort_key(&self.path)
    }
}

/// Key that defines the processing order of snapshot files
///
/// **Public** - ordering contract, tested independently of the filesystem
///
/// Paths compare component by component, which is the order of a sorted
/// depth-first walk: everything inside `a/` comes before a sibling
/// `a-mysqladmin`, even though `-` sorts before `/` as a plain string.
pub fn snapshot_sort_key(path: &Path) -> PathBuf {
    path.to_path_buf()
}

/// Decode the `YYYY_MM_DD_HH_MM_SS` prefix of a snapshot file name
///
/// **Public** - used for reporting the covered time range
///
/// # Returns
/// `None` if the name has no `-` or the prefix is not a timestamp
pub fn parse_snapshot_timestamp(file_name: &str) -> Option<NaiveDateTime> {
    let (prefix, _) = file_name.split_once('-')?;
    NaiveDateTime::parse_from_str(prefix, SNAPSHOT_TIMESTAMP_FORMAT).ok()
}

/// Find every snapshot file below `root`
///
/// **Public** - first stage of ingestion
///
/// # Arguments
/// * `root` - Directory to walk recursively
/// * `suffix` - File name suffix marking a snapshot
///
/// # Returns
/// Regular files whose name ends with `suffix`, sorted by `snapshot_sort_key`
///
/// # Errors
/// * `CollectError::Walk` - root or any subdirectory cannot be read
pub fn discover_snapshot_files(
    root: impl AsRef<Path>,
    suffix: &str,
) -> Result<Vec<SnapshotFile>, CollectError> {
    let root = root.as_ref();
    debug!("Walking {} for *{}", root.display(), suffix);

    let mut files = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry?;
        // Symlinked snapshots are followed; symlinked directories are not walked
        if entry.file_type().is_dir() || !entry.path().is_file() {
            continue;
        }
        let matches = entry
            .file_name()
            .as_encoded_bytes()
            .ends_with(suffix.as_bytes());
        if matches {
            files.push(SnapshotFile::new(entry.into_path()));
        }
    }

    files.sort_by_cached_key(SnapshotFile::sort_key);

    debug!("Found {} snapshot files", files.len());
    Ok(files)
}
