//! Snapshot parsing and schema definitions.
//!
//! This module handles:
//! - Recognising data rows in `mysqladmin` table dumps
//! - Defining the samples, series and grouped statistics passed between stages

pub mod schema;
pub mod snapshot;

// Re-export main types
pub use schema::{DataPoint, GroupedData, RawSample, SeriesTable};
pub use snapshot::{parse_line, parse_snapshot};
