//! Turning parsed samples into charted statistics.
//!
//! This module transforms the ordered sample stream into:
//! - Per-variable delta series (gauges kept at raw value)
//! - Max / min / average per variable
//! - Prefix groups, sorted for display

pub mod delta;
pub mod metrics;

// Re-export main types and functions
pub use delta::DeltaAccumulator;
pub use metrics::{classify_prefix, group_series, IngestSummary};
