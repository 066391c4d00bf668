//! CLI module for contactd
//!
//! Provides command-line interface for:
//! - init: Create the database file and schema
//! - serve: Run the HTTP server

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{init, run, serve};
pub use errors::{CliError, CliResult};
