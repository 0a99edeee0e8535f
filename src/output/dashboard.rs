//! Immutable dashboard state shared by every request.

use crate::aggregator::{group_series, IngestSummary};
use crate::collector::Collection;
use crate::parser::schema::GroupedData;
use chrono::{Local, NaiveDateTime};
use log::info;

/// Everything the page needs, computed once at startup
#[derive(Debug, Clone)]
pub struct Dashboard {
    /// Groups sorted by prefix
    pub groups: Vec<GroupedData>,

    pub summary: IngestSummary,

    /// When ingestion finished
    pub generated_at: NaiveDateTime,

    /// Capture time of the first timestamped snapshot
    pub first_snapshot: Option<NaiveDateTime>,

    /// Capture time of the last timestamped snapshot
    pub last_snapshot: Option<NaiveDateTime>,
}

impl Dashboard {
    /// Aggregate a finished collection
    ///
    /// **Public** - bridge between ingestion and presentation
    pub fn from_collection(collection: Collection) -> Self {
        let Collection {
            series,
            files,
            samples,
        } = collection;

        let timestamps: Vec<NaiveDateTime> = files.iter().filter_map(|f| f.timestamp).collect();
        let (groups, dropped) = group_series(series);

        let summary = IngestSummary {
            files: files.len(),
            samples,
            variables: groups.iter().map(|g| g.data_points.len()).sum(),
            groups: groups.len(),
            zero_series_dropped: dropped,
        };
        info!("Ingest summary: {}", summary.summary());

        Self {
            groups,
            summary,
            generated_at: Local::now().naive_local(),
            first_snapshot: timestamps.iter().min().copied(),
            last_snapshot: timestamps.iter().max().copied(),
        }
    }
}

/// Plain-text table of every group, for `--summary`
///
/// **Public** - printed to stdout by the serve command
pub fn generate_text_summary(dashboard: &Dashboard) -> String {
    let mut out = String::new();

    for group in &dashboard.groups {
        out.push_str(&format!("{} Variables\n", group.prefix));
        for point in &group.data_points {
            out.push_str(&format!(
                "  {:<48} max {:>14}  min {:>14}  avg {:>14}\n",
                point.name,
                point.max,
                point.min,
                super::view::format_avg(point.avg)
            ));
        }
    }

    if out.is_empty() {
        out.push_str("No variables changed across the snapshots\n");
    }

    out
}
