//! CLI command implementations.
//!
//! Commands orchestrate the various library components to perform user tasks.

pub mod models;
pub mod serve;

// Re-export main command functions
pub use models::ServeArgs;
pub use serve::{build_dashboard, execute_serve, validate_args};
