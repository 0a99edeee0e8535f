use std::path::PathBuf;

use crate::collector::CollectOptions;
use crate::utils::config::{DEFAULT_GAUGE_PREFIXES, DEFAULT_HOST, DEFAULT_PORT, SNAPSHOT_SUFFIX};

/// Arguments for the serve command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct ServeArgs {
    /// Root directory holding snapshot files
    pub directory: PathBuf,

    /// Address to bind the HTTP server to
    pub host: String,

    /// Port to bind the HTTP server to
    pub port: u16,

    /// File name suffix marking a snapshot
    pub suffix: String,

    /// Variables recorded at raw value instead of delta
    pub gauge_prefixes: Vec<String>,

    /// Print text summary to stdout
    pub print_summary: bool,
}

impl Default for ServeArgs {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            suffix: SNAPSHOT_SUFFIX.to_string(),
            gauge_prefixes: DEFAULT_GAUGE_PREFIXES.iter().map(|p| p.to_string()).collect(),
            print_summary: false,
        }
    }
}

impl ServeArgs {
    pub fn collect_options(&self) -> CollectOptions {
        CollectOptions {
            suffix: self.suffix.clone(),
            gauge_prefixes: self.gauge_prefixes.clone(),
        }
    }
}
