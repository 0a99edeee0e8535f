//! mysqladmin-charts CLI
//!
//! Reads a directory of `mysqladmin extended-status` snapshots and serves
//! per-variable delta charts over HTTP.

use anyhow::Result;
use clap::Parser;
use env_logger::Env;
use std::path::PathBuf;

use mysqladmin_charts::commands::{execute_serve, validate_args, ServeArgs};
use mysqladmin_charts::utils::config::{DEFAULT_HOST, DEFAULT_PORT, SNAPSHOT_SUFFIX};

/// Delta charts for mysqladmin status snapshots
#[derive(Parser, Debug)]
#[command(name = "mysqladmin-charts")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Directory to scan (recursively) for snapshot files
    directory: PathBuf,

    /// Port for the web server
    #[arg(short, long, default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Address for the web server
    #[arg(long, default_value = DEFAULT_HOST)]
    host: String,

    /// File name suffix identifying snapshot files
    #[arg(long, default_value = SNAPSHOT_SUFFIX)]
    suffix: String,

    /// Name prefix of variables charted at raw value instead of delta (repeatable)
    #[arg(long = "gauge-prefix", value_name = "PREFIX", default_values_t = vec!["Threads_".to_string()])]
    gauge_prefixes: Vec<String>,

    /// Print text summary to stdout before serving
    #[arg(long)]
    summary: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    let args = ServeArgs {
        directory: cli.directory,
        host: cli.host,
        port: cli.port,
        suffix: cli.suffix,
        gauge_prefixes: cli.gauge_prefixes,
        print_summary: cli.summary,
    };

    // Validate args first
    validate_args(&args)?;

    execute_serve(args)
}
