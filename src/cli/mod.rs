//! CLI module for itemstore
//!
//! Provides command-line interface for:
//! - serve: Connect to the store and run the HTTP server
//! - check: Ping the store and exit

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command, CommonArgs};
pub use commands::{check, run, run_command, serve, Config, ServeOverrides};
pub use errors::{CliError, CliErrorCode, CliResult};
