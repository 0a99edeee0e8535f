//! Presentation of the aggregated statistics.
//!
//! This module handles:
//! - The immutable dashboard state built once after ingestion
//! - The typed view-model (formatting, colors, chart labels)
//! - HTML rendering and the plain-text summary

pub mod dashboard;
pub mod html;
pub mod view;

// Re-export main types and functions
pub use dashboard::{generate_text_summary, Dashboard};
pub use html::render_dashboard;
pub use view::{format_avg, series_hue, DashboardView};
