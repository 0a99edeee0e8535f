//! mysqladmin-charts
//!
//! Delta charts for periodic `mysqladmin extended-status` snapshots.
//!
//! Snapshot files found under a directory are replayed in capture order,
//! each counter is turned into a series of deltas between consecutive
//! snapshots, and the series are summarised (max / min / average) and
//! grouped by name prefix into a Chart.js dashboard served over HTTP.
//!
//! ## Getting Started
//!
//! ```bash
//! mysqladmin-charts /var/lib/pt-stalk
//! # then open http://localhost:8080
//! ```

pub mod aggregator;
pub mod collector;
pub mod commands;
pub mod output;
pub mod parser;
pub mod server;
pub mod utils;
