//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the vigil binary.

mod commands;
mod config_cmd;
mod moderate;

pub use commands::{Cli, Commands, OutputFormat};
pub use config_cmd::show_config;
pub use moderate::{ModerateOptions, run_moderate};
