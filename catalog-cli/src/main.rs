//! catalog CLI - runs the product catalog service
//!
//! - `serve`: connect to Postgres, ensure the schema, serve HTTP
//! - `init-db`: ensure the schema and exit

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod config;
mod tracing_setup;

#[derive(Parser, Debug)]
#[command(
    name = "catalog",
    author,
    version,
    about = "Product catalog HTTP service with bearer-token authentication"
)]
struct Cli {
    /// Enable debug logging (RUST_LOG still wins when set)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API server
    Serve(commands::serve::ServeArgs),
    /// Create the products table if it is missing, then exit
    InitDb(commands::init_db::InitDbArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // .env must be loaded before clap reads `env = ...` defaults
    let dotenv = config::load_dotenv();
    let cli = Cli::parse();

    tracing_setup::init(&tracing_setup::TracingConfig { debug: cli.debug }).ok();
    config::report(&dotenv);

    match cli.command {
        Commands::Serve(args) => commands::run_serve(args).await?,
        Commands::InitDb(args) => commands::run_init_db(args).await?,
    }
    Ok(())
}
