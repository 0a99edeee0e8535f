//! View-model for the dashboard page.
//!
//! All data shaping happens here: headings, table rows with formatted
//! averages, chart labels and per-series colors. The HTML renderer only
//! lays these values out, so everything below is testable without markup.

use super::dashboard::Dashboard;
use crate::parser::schema::{DataPoint, GroupedData};
use crate::utils::config::HUE_STEP;
use serde::Serialize;

const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Page-level view
#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    pub title: String,
    pub generated_at: String,

    /// "first - last" capture time, when file names carry timestamps
    pub time_range: Option<String>,

    pub summary: String,
    pub groups: Vec<GroupView>,
}

/// One chart card: heading, canvas and statistics table
#[derive(Debug, Clone, Serialize)]
pub struct GroupView {
    pub heading: String,
    pub canvas_id: String,

    /// X axis, `1..=n` for the first series of the group
    pub labels: Vec<usize>,

    pub datasets: Vec<DatasetView>,
    pub rows: Vec<RowView>,
}

/// One Chart.js line dataset (field names follow Chart.js)
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetView {
    pub label: String,
    pub data: Vec<i64>,
    pub border_color: String,
    pub background_color: String,
    pub point_background_color: String,
    pub fill: bool,
    pub border_width: u32,
    pub tension: f64,
    pub point_radius: u32,
    pub point_hover_radius: u32,
}

/// One line of the Name / Max / Min / Avg table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RowView {
    pub name: String,
    pub max: i64,
    pub min: i64,
    pub avg: String,
}

impl DashboardView {
    /// Shape the dashboard for rendering
    ///
    /// **Public** - called on every request
    pub fn from_dashboard(dashboard: &Dashboard) -> Self {
        let time_range = match (dashboard.first_snapshot, dashboard.last_snapshot) {
            (Some(first), Some(last)) => Some(format!(
                "{} - {}",
                first.format(DATETIME_FORMAT),
                last.format(DATETIME_FORMAT)
            )),
            _ => None,
        };

        Self {
            title: "Delta Charts".to_string(),
            generated_at: dashboard.generated_at.format(DATETIME_FORMAT).to_string(),
            time_range,
            summary: dashboard.summary.summary(),
            groups: dashboard
                .groups
                .iter()
                .enumerate()
                .map(|(index, group)| GroupView::from_group(index, group))
                .collect(),
        }
    }
}

impl GroupView {
    pub fn from_group(index: usize, group: &GroupedData) -> Self {
        let labels: Vec<usize> = group
            .data_points
            .first()
            .map(|first| (1..=first.values.len()).collect())
            .unwrap_or_default();

        Self {
            heading: format!("{} Variables", group.prefix),
            canvas_id: format!("chart-{}", index),
            labels,
            datasets: group
                .data_points
                .iter()
                .enumerate()
                .map(|(n, point)| DatasetView::from_point(n, point))
                .collect(),
            rows: group.data_points.iter().map(RowView::from_point).collect(),
        }
    }
}

impl DatasetView {
    /// Dataset for the `n`th series of a chart
    pub fn from_point(n: usize, point: &DataPoint) -> Self {
        let hue = series_hue(n);
        Self {
            label: point.name.clone(),
            data: point.values.clone(),
            border_color: format!("hsl({}, 70%, 50%)", hue),
            background_color: format!("hsla({}, 70%, 50%, 0.2)", hue),
            point_background_color: format!("hsl({}, 70%, 50%)", hue),
            fill: true,
            border_width: 1,
            tension: 0.4,
            point_radius: 2,
            point_hover_radius: 4,
        }
    }
}

impl RowView {
    pub fn from_point(point: &DataPoint) -> Self {
        Self {
            name: point.name.clone(),
            max: point.max,
            min: point.min,
            avg: format_avg(point.avg),
        }
    }
}

/// Hue (degrees) of the `n`th series within a chart
///
/// Not reduced mod 360; CSS `hsl()` wraps the angle itself.
pub fn series_hue(n: usize) -> usize {
    n * HUE_STEP
}

/// Format an average with precision inversely proportional to magnitude
///
/// **Public** - used by the table view and the text summary
///
/// * `>= 1000` -> 0 decimals
/// * `>= 100` -> 1 decimal
/// * `>= 10` -> 2 decimals
/// * otherwise 3 decimals
///
/// Ties round away from zero on the decimal value, so `42.345` gives `"42.35"`.
pub fn format_avg(avg: f64) -> String {
    let decimals: i32 = if avg >= 1000.0 {
        0
    } else if avg >= 100.0 {
        1
    } else if avg >= 10.0 {
        2
    } else {
        3
    };

    let scale = 10f64.powi(decimals);
    let rounded = (avg * scale).round() / scale;
    format!("{:.*}", decimals as usize, rounded)
}
