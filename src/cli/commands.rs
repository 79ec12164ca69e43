//! CLI command implementations
//!
//! `serve` follows a strict boot sequence: read configuration from the
//! environment, connect to the document store and verify it answers,
//! then bind the HTTP listener. A store that cannot be reached fails
//! the boot instead of deferring the error to the first request.

use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::auth::TokenSigner;
use crate::config::Config;
use crate::http::{AppState, HttpServer};
use crate::store::MongoStore;

use super::args::{Cli, Command};
use super::errors::CliResult;

/// Parse command line arguments and dispatch
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve { port } => serve(port),
    }
}

/// Boot the system and serve HTTP until the process stops
pub fn serve(port: Option<u16>) -> CliResult<()> {
    init_tracing();

    let mut config = Config::from_env()?;
    if let Some(port) = port {
        config.http.port = port;
    }

    info!(version = env!("CARGO_PKG_VERSION"), "booting bookshelf");

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(async {
        let store = MongoStore::connect(&config.store).await?;
        let signer = Arc::new(TokenSigner::new(config.token_secret.as_bytes()));
        let state = AppState::shared(Arc::new(store), signer);

        let server = HttpServer::with_config(config.http, state);
        server.start().await?;
        Ok(())
    })
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
