//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort snapshot ingestion
#[derive(Error, Debug)]
pub enum CollectError {
    #[error("Failed to walk snapshot directory: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("Failed to read snapshot {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors that can occur while rendering the dashboard page
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Failed to serialize chart data: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Failed to write HTML: {0}")]
    Format(#[from] std::fmt::Error),
}

/// Errors that can occur while serving the dashboard
#[derive(Error, Debug)]
pub enum ServeError {
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Server I/O error: {0}")]
    Io(#[from] std::io::Error),
}
