//! CLI argument definitions using clap
//!
//! Commands:
//! - contactd init --config <path>
//! - contactd serve --config <path>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// contactd - A minimal contact book HTTP service
#[derive(Parser, Debug)]
#[command(name = "contactd")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create the database file and contacts table, then exit
    Init {
        /// Path to configuration file
        #[arg(long, default_value = "./contactd.json")]
        config: PathBuf,
    },

    /// Start the HTTP server
    Serve {
        /// Path to configuration file
        #[arg(long, default_value = "./contactd.json")]
        config: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
