//! HTTP server command
//!
//! Connects to Postgres, ensures the schema, then serves `/products` behind
//! the bearer-token gate until SIGTERM/Ctrl+C.

use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use anyhow::{ensure, Context, Result};
use clap::Parser;

use catalog_server::{run_server, AppState, ServerConfig, TokenVerifier};

use super::DatabaseArgs;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    #[command(flatten)]
    pub database: DatabaseArgs,

    /// Signing secret used to verify bearer tokens
    #[arg(long, env = "JWT_SECRET", hide_env_values = true)]
    pub jwt_secret: String,

    /// Interface to bind to
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(long, short = 'p', env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// Allow permissive CORS (all methods and headers) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    ensure!(!args.jwt_secret.is_empty(), "JWT_SECRET must not be empty");

    let store = args.database.open_store().await?;
    let state = AppState::new(
        Arc::new(store),
        TokenVerifier::new(args.jwt_secret.as_bytes()),
    );

    let config = ServerConfig {
        bind_addr: SocketAddr::new(args.host, args.port),
        cors_permissive: args.cors_permissive,
    };
    tracing::info!("Starting catalog server on {}", config.bind_addr);

    // Blocks until shutdown
    run_server(state, config).await.context("Server error")?;

    Ok(())
}
