//! Configuration and constants for the CLI.

/// Default HTTP port for the dashboard
pub const DEFAULT_PORT: u16 = 8080;

/// Default bind address for the dashboard
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// File name suffix identifying a snapshot dump (pt-stalk naming)
pub const SNAPSHOT_SUFFIX: &str = "-mysqladmin";

// Table layout of `mysqladmin extended-status`:
// +-----------------+-------+
// | Variable_name   | Value |
// +-----------------+-------+
// | Bytes_sent      | 100   |
pub const ROW_DELIMITER: char = '|';
pub const BORDER_MARKER: char = '+';

/// Gauge-like variables plotted at raw value instead of delta
pub const DEFAULT_GAUGE_PREFIXES: &[&str] = &["Threads_"];

// Group prefixes, most specific first
pub const BUFFER_POOL_PREFIX: &str = "Innodb_buffer_pool";
pub const INNODB_PREFIX: &str = "Innodb";
pub const GROUP_SEPARATOR: char = '_';

/// Hue distance between consecutive series of one chart (degrees)
pub const HUE_STEP: usize = 30;

/// `strftime` layout of the timestamp prefix in snapshot file names
pub const SNAPSHOT_TIMESTAMP_FORMAT: &str = "%Y_%m_%d_%H_%M_%S";

// Client-side collaborators, loaded by the browser
pub const CHART_JS_URL: &str = "https://cdn.jsdelivr.net/npm/chart.js";
pub const BOOTSTRAP_CSS_URL: &str =
    "https://cdn.jsdelivr.net/npm/bootstrap@5.3.0/dist/css/bootstrap.min.css";
