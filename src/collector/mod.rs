//! Snapshot discovery and ordered ingestion.
//!
//! This module walks a capture directory, orders the snapshot files by
//! their capture sequence and replays them through the parser into a
//! single `DeltaAccumulator`.

pub mod files;
pub mod ingest;

// Re-export main types and functions
pub use files::{discover_snapshot_files, parse_snapshot_timestamp, snapshot_sort_key, SnapshotFile};
pub use ingest::{collect_directory, collect_into, CollectOptions, Collection};
