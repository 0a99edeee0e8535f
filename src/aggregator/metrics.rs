//! Statistics and prefix grouping over completed series.
//!
//! Runs once, after every snapshot has been ingested. Variables whose
//! series never moves are dropped, the rest are grouped by naming prefix so
//! related counters end up on the same chart.

use crate::parser::schema::{DataPoint, GroupedData, SeriesTable};
use crate::utils::config::{BUFFER_POOL_PREFIX, GROUP_SEPARATOR, INNODB_PREFIX};
use log::debug;
use std::collections::BTreeMap;

impl DataPoint {
    /// Derive statistics for one series
    ///
    /// **Public** - used by `group_series` and tests
    ///
    /// # Returns
    /// `None` if the series is empty or entirely zero
    pub fn from_series(name: impl Into<String>, values: Vec<i64>) -> Option<Self> {
        if values.iter().all(|v| *v == 0) {
            return None;
        }

        let max = *values.iter().max()?;
        let min = *values.iter().min()?;
        let sum: i128 = values.iter().map(|v| *v as i128).sum();
        let avg = sum as f64 / values.len() as f64;

        Some(Self {
            name: name.into(),
            values,
            max,
            min,
            avg,
        })
    }
}

/// Pick the chart group for a variable name
///
/// **Public** - grouping rule, exposed for tests
///
/// Precedence:
/// 1. `Innodb_buffer_pool*` -> `Innodb_buffer_pool`
/// 2. `Innodb*` -> `Innodb`
/// 3. text before the first `_`
/// 4. the whole name
pub fn classify_prefix(name: &str) -> &str {
    if name.starts_with(BUFFER_POOL_PREFIX) {
        BUFFER_POOL_PREFIX
    } else if name.starts_with(INNODB_PREFIX) {
        INNODB_PREFIX
    } else {
        match name.find(GROUP_SEPARATOR) {
            Some(idx) => &name[..idx],
            None => name,
        }
    }
}

/// Build sorted groups from the completed series
///
/// **Public** - main entry point for aggregation
///
/// # Returns
/// Groups sorted by prefix with data points sorted by name, and the number
/// of all-zero series that were dropped
pub fn group_series(series: SeriesTable) -> (Vec<GroupedData>, usize) {
    let mut groups: BTreeMap<String, Vec<DataPoint>> = BTreeMap::new();
    let mut dropped = 0;

    for (name, values) in series {
        let prefix = classify_prefix(&name).to_string();
        match DataPoint::from_series(name, values) {
            Some(point) => groups.entry(prefix).or_default().push(point),
            None => dropped += 1,
        }
    }

    let grouped: Vec<GroupedData> = groups
        .into_iter()
        .map(|(prefix, mut data_points)| {
            data_points.sort_by(|a, b| a.name.cmp(&b.name));
            GroupedData {
                prefix,
                data_points,
            }
        })
        .collect();

    debug!(
        "Grouped {} variables into {} groups ({} all-zero dropped)",
        grouped.iter().map(|g| g.data_points.len()).sum::<usize>(),
        grouped.len(),
        dropped
    );

    (grouped, dropped)
}

/// Counters describing one ingestion run
///
/// **Public** - logged after ingestion, printed by `--summary`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngestSummary {
    /// Snapshot files processed
    pub files: usize,

    /// Rows recognised across all files
    pub samples: usize,

    /// Variables that made it onto a chart
    pub variables: usize,

    /// Number of chart groups
    pub groups: usize,

    /// Variables dropped because their series was all zero
    pub zero_series_dropped: usize,
}

impl IngestSummary {
    /// Get human-readable summary
    ///
    /// **Public** - for logging and debugging
    pub fn summary(&self) -> String {
        format!(
            "Files: {} | Samples: {} | Charted variables: {} | Groups: {} | All-zero dropped: {}",
            self.files, self.samples, self.variables, self.groups, self.zero_series_dropped
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_classify_prefix() {
        assert_eq!(classify_prefix("Innodb_buffer_pool_pages_total"), "Innodb_buffer_pool");
        assert_eq!(classify_prefix("Innodb_buffer_pool_read_requests"), "Innodb_buffer_pool");
        assert_eq!(classify_prefix("Innodb_rows_read"), "Innodb");
        assert_eq!(classify_prefix("Threads_connected"), "Threads");
        assert_eq!(classify_prefix("Bytes_received"), "Bytes");
        assert_eq!(classify_prefix("Uptime"), "Uptime");
    }

    #[test]
    fn test_classify_prefix_edge_cases() {
        assert_eq!(classify_prefix("InnodbX"), "Innodb");
        assert_eq!(classify_prefix("_leading"), "");
        assert_eq!(classify_prefix("Com_show_status"), "Com");
    }

    #[test]
    fn test_data_point_statistics() {
        let point = DataPoint::from_series("Questions", vec![4, -2, 10, 0]).unwrap();
        assert_eq!(point.max, 10);
        assert_eq!(point.min, -2);
        assert_eq!(point.avg, 3.0);
        assert_eq!(point.values, vec![4, -2, 10, 0]);
    }

    #[test]
    fn test_data_point_single_value() {
        let point = DataPoint::from_series("Bytes_sent", vec![150]).unwrap();
        assert_eq!((point.max, point.min, point.avg), (150, 150, 150.0));
    }

    #[test]
    fn test_all_zero_series_rejected() {
        assert!(DataPoint::from_series("Idle", vec![0, 0, 0]).is_none());
        assert!(DataPoint::from_series("Empty", vec![]).is_none());
    }

    #[test]
    fn test_average_does_not_overflow() {
        let point = DataPoint::from_series("Big", vec![i64::MAX, i64::MAX]).unwrap();
        assert_eq!(point.avg, i64::MAX as f64);
    }

    #[test]
    fn test_group_series_sorting_and_filtering() {
        let mut series = SeriesTable::new();
        series.insert("Innodb_rows_read".to_string(), vec![5, 6]);
        series.insert("Bytes_sent".to_string(), vec![150]);
        series.insert("Bytes_received".to_string(), vec![1, 2]);
        series.insert("Innodb_buffer_pool_reads".to_string(), vec![0, 3]);
        series.insert("Aborted_connects".to_string(), vec![0, 0]);
        series.insert("Uptime".to_string(), vec![10, 10]);

        let (groups, dropped) = group_series(series);

        assert_eq!(dropped, 1);
        let prefixes: Vec<&str> = groups.iter().map(|g| g.prefix.as_str()).collect();
        assert_eq!(prefixes, vec!["Bytes", "Innodb", "Innodb_buffer_pool", "Uptime"]);

        let bytes: Vec<&str> = groups[0].data_points.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(bytes, vec!["Bytes_received", "Bytes_sent"]);
    }

    #[test]
    fn test_group_series_empty() {
        let (groups, dropped) = group_series(SeriesTable::new());
        assert!(groups.is_empty());
        assert_eq!(dropped, 0);
    }

    #[test]
    fn test_summary_string() {
        let summary = IngestSummary {
            files: 2,
            samples: 10,
            variables: 3,
            groups: 1,
            zero_series_dropped: 4,
        };
        assert_eq!(
            summary.summary(),
            "Files: 2 | Samples: 10 | Charted variables: 3 | Groups: 1 | All-zero dropped: 4"
        );
    }
}
