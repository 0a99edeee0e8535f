//! Sequential ingestion of discovered snapshot files.
//!
//! Files are opened one at a time, in `snapshot_sort_key` order, and each
//! handle is dropped before the next file is opened. Any open or read
//! failure aborts the whole run: a gap in the sequence would silently fold
//! two intervals into one delta.

use super::files::{discover_snapshot_files, SnapshotFile};
use crate::aggregator::DeltaAccumulator;
use crate::parser::schema::SeriesTable;
use crate::parser::snapshot::parse_snapshot;
use crate::utils::config::{DEFAULT_GAUGE_PREFIXES, SNAPSHOT_SUFFIX};
use crate::utils::error::CollectError;
use log::{debug, info};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Knobs for one ingestion run
#[derive(Debug, Clone)]
pub struct CollectOptions {
    /// File name suffix marking a snapshot
    pub suffix: String,

    /// Variables recorded at raw value instead of delta
    pub gauge_prefixes: Vec<String>,
}

impl Default for CollectOptions {
    fn default() -> Self {
        Self {
            suffix: SNAPSHOT_SUFFIX.to_string(),
            gauge_prefixes: DEFAULT_GAUGE_PREFIXES.iter().map(|p| p.to_string()).collect(),
        }
    }
}

/// Result of ingesting a directory
#[derive(Debug, Clone)]
pub struct Collection {
    /// Completed per-variable series
    pub series: SeriesTable,

    /// Files in the order they were processed
    pub files: Vec<SnapshotFile>,

    /// Rows recognised across all files
    pub samples: usize,
}

/// Feed every file, in order, through the parser into `accumulator`
///
/// **Public** - used by `collect_directory` and by tests that control ordering
///
/// # Returns
/// Number of samples recorded
///
/// # Errors
/// * `CollectError::Read` - a file could not be opened or read
pub fn collect_into(
    files: &[SnapshotFile],
    accumulator: &mut DeltaAccumulator,
) -> Result<usize, CollectError> {
    let mut total = 0;

    for (i, file) in files.iter().enumerate() {
        debug!("Processing file {}/{}: {}", i + 1, files.len(), file.path.display());
        let count = ingest_file(&file.path, accumulator)?;
        debug!("  {} samples", count);
        total += count;
    }

    Ok(total)
}

/// Parse one file and record its samples
///
/// **Private** - the file handle is released when this returns
fn ingest_file(path: &Path, accumulator: &mut DeltaAccumulator) -> Result<usize, CollectError> {
    let read_error = |source| CollectError::Read {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(read_error)?;
    let samples = parse_snapshot(BufReader::new(file)).map_err(read_error)?;

    Ok(accumulator.ingest(samples))
}

/// Discover and ingest every snapshot below `root`
///
/// **Public** - main entry point for ingestion
///
/// # Arguments
/// * `root` - Directory to scan recursively
/// * `options` - Suffix and gauge configuration
///
/// # Errors
/// * `CollectError::Walk` - directory traversal failed
/// * `CollectError::Read` - a snapshot could not be read
pub fn collect_directory(
    root: impl AsRef<Path>,
    options: &CollectOptions,
) -> Result<Collection, CollectError> {
    let root = root.as_ref();

    let files = discover_snapshot_files(root, &options.suffix)?;
    info!("Found {} snapshot files under {}", files.len(), root.display());

    let mut accumulator = DeltaAccumulator::with_gauge_prefixes(options.gauge_prefixes.iter().cloned());
    let samples = collect_into(&files, &mut accumulator)?;
    debug!("{} distinct variables seen", accumulator.variables_seen());

    Ok(Collection {
        series: accumulator.finish(),
        files,
        samples,
    })
}
