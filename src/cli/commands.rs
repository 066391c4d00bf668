//! CLI command implementations.
//!
//! `init` provisions the database file and schema. `serve` loads config,
//! opens the connection pool once, and runs the HTTP server until the
//! process is stopped.

use std::path::Path;

use crate::config::Config;
use crate::http_server::HttpServer;
use crate::storage::ContactStore;

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};

/// Parse arguments and dispatch to the requested command.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    match cli.command {
        Command::Init { config } => init(&config),
        Command::Serve { config } => serve(&config),
    }
}

/// Create the database file and contacts table, then exit.
pub fn init(config_path: &Path) -> CliResult<()> {
    init_tracing();
    let config = Config::load(config_path)?;

    // Opening the pool bootstraps the schema.
    let store = ContactStore::open(&config.database.path, config.database.pool_size)?;
    drop(store);

    println!("Initialized database at {}", config.database.path.display());
    Ok(())
}

/// Start the HTTP server and serve until stopped.
pub fn serve(config_path: &Path) -> CliResult<()> {
    init_tracing();
    let config = Config::load(config_path)?;

    // The pool lives for the whole process; handlers share it through the
    // store handle instead of opening connections per request.
    let store = ContactStore::open(&config.database.path, config.database.pool_size)?;
    let server = HttpServer::with_config(config.http, store);

    let runtime = tokio::runtime::Runtime::new().map_err(|e| CliError::Server(e.to_string()))?;
    runtime.block_on(server.start())?;

    Ok(())
}

/// Install the tracing subscriber, honoring RUST_LOG. Defaults to info for
/// this crate and warn for tower_http's request spans.
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("contactd=info,tower_http=warn"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
