//! Data model shared by the ingestion and presentation stages.
//!
//! Samples flow in from the parser, series are built by the accumulator,
//! and data points / groups are derived once all files are processed.

use std::collections::BTreeMap;

/// One `(name, value)` row extracted from a snapshot file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawSample {
    pub name: String,
    pub value: i64,
}

impl RawSample {
    pub fn new(name: impl Into<String>, value: i64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// Per-variable series of deltas (or raw gauge values), keyed by name
pub type SeriesTable = BTreeMap<String, Vec<i64>>;

/// A variable's series together with its derived statistics
#[derive(Debug, Clone, PartialEq)]
pub struct DataPoint {
    /// Variable name (e.g., "Bytes_sent")
    pub name: String,

    /// Deltas in snapshot order, or raw values for gauges
    pub values: Vec<i64>,

    /// Largest value in the series
    pub max: i64,

    /// Smallest value in the series
    pub min: i64,

    /// Arithmetic mean of the series
    pub avg: f64,
}

/// Data points sharing a naming prefix, charted together
#[derive(Debug, Clone, PartialEq)]
pub struct GroupedData {
    pub prefix: String,

    /// Sorted by name
    pub data_points: Vec<DataPoint>,
}
