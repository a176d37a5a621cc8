//! CLI layer - Command-line interface
//!
//! Contains argument parsing, output formatting, the config subcommand
//! and the application runners.

pub mod app;
pub mod args;
pub mod config_cmd;
pub mod presenter;

// Re-export commonly used types
pub use app::{run_extract, run_integrate, run_subjects, EXIT_ERROR, EXIT_SUCCESS, EXIT_USAGE_ERROR};
pub use args::{Cli, Commands, ConfigAction, IntegrateOptions};
pub use presenter::Presenter;
