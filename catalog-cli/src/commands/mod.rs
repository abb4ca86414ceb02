//! Command implementations for the catalog CLI

pub mod init_db;
pub mod serve;

use anyhow::{Context, Result};
use clap::Args;

use catalog_server::db::{create_pool_with_options, pool::DEFAULT_MAX_CONNECTIONS};
use catalog_server::{PgProductStore, ProductStore};

pub use init_db::run_init_db;
pub use serve::run_serve;

/// Database connection settings shared by every command
#[derive(Args, Debug)]
pub struct DatabaseArgs {
    /// Postgres connection string (falls back to DB_URL)
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: Option<String>,

    /// Maximum pooled connections
    #[arg(long, env = "DATABASE_MAX_CONNECTIONS", default_value_t = DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,
}

impl DatabaseArgs {
    fn url(&self) -> Result<String> {
        self.database_url
            .clone()
            .or_else(|| std::env::var("DB_URL").ok())
            .filter(|url| !url.is_empty())
            .context("DATABASE_URL not set. Set via --database-url, DATABASE_URL or DB_URL env, or ./.env")
    }

    /// Connect and make sure the products table exists.
    pub async fn open_store(&self) -> Result<PgProductStore> {
        let url = self.url()?;

        let pool = create_pool_with_options(&url, self.max_connections)
            .await
            .context("Cannot connect to database")?;
        let store = PgProductStore::new(pool);

        store
            .ensure_schema()
            .await
            .context("Error creating products table")?;
        tracing::info!("Database ready");

        Ok(store)
    }
}
