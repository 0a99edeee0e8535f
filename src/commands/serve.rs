//! Serve command implementation.
//!
//! The serve command:
//! 1. Discovers snapshot files and replays them, in order, through the
//!    parser and delta accumulator
//! 2. Aggregates statistics into prefix groups
//! 3. Serves the dashboard over HTTP

use super::models::ServeArgs;
use crate::collector::collect_directory;
use crate::output::{generate_text_summary, Dashboard};
use crate::server::run_server;
use anyhow::{Context, Result};
use log::{debug, info};
use std::time::Instant;

/// Ingest and aggregate, without serving
///
/// **Public** - steps 1-2 of the serve command, also used by tests
///
/// # Errors
/// * Directory traversal failures
/// * Unreadable snapshot files
pub fn build_dashboard(args: &ServeArgs) -> Result<Dashboard> {
    let start_time = Instant::now();

    info!("Step 1/3: Ingesting snapshots from {}...", args.directory.display());
    let collection = collect_directory(&args.directory, &args.collect_options())
        .with_context(|| format!("Failed to ingest snapshots from {}", args.directory.display()))?;
    debug!(
        "Read {} samples from {} files",
        collection.samples,
        collection.files.len()
    );

    info!("Step 2/3: Aggregating statistics...");
    let dashboard = Dashboard::from_collection(collection);

    info!("Ingestion completed in {:.2}s", start_time.elapsed().as_secs_f64());
    Ok(dashboard)
}

/// Execute the serve command
///
/// **Public** - main entry point called from main.rs
///
/// Only returns on error; a running server is stopped by killing the process.
pub fn execute_serve(args: ServeArgs) -> Result<()> {
    let dashboard = build_dashboard(&args)?;

    if args.print_summary {
        println!("\n{}", "=".repeat(80));
        println!("DELTA SUMMARY");
        println!("{}", "=".repeat(80));
        println!("{}", dashboard.summary.summary());
        println!("\n{}", generate_text_summary(&dashboard));
        println!("{}", "=".repeat(80));
    }

    info!("Step 3/3: Starting HTTP server...");
    let runtime = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;
    runtime
        .block_on(run_server(dashboard, &args.host, args.port))
        .context("HTTP server failed")?;

    Ok(())
}

/// Validate serve arguments
///
/// **Public** - can be called before execute_serve for early validation
///
/// # Returns
/// Ok if arguments are valid, Err with message if not
pub fn validate_args(args: &ServeArgs) -> Result<()> {
    if args.directory.as_os_str().is_empty() {
        anyhow::bail!("Snapshot directory cannot be empty");
    }

    if args.host.is_empty() {
        anyhow::bail!("Host cannot be empty");
    }

    if args.port == 0 {
        anyhow::bail!("Port must be greater than 0");
    }

    if args.suffix.is_empty() {
        anyhow::bail!("Snapshot suffix cannot be empty");
    }

    if args.gauge_prefixes.iter().any(|p| p.is_empty()) {
        anyhow::bail!("Gauge prefixes cannot be empty (an empty prefix matches every variable)");
    }

    Ok(())
}
