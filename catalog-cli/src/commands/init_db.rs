//! Schema bootstrap command

use anyhow::Result;
use clap::Parser;

use super::DatabaseArgs;

/// Arguments for the init-db command
#[derive(Parser, Debug)]
pub struct InitDbArgs {
    #[command(flatten)]
    pub database: DatabaseArgs,
}

/// Create the products table if needed
pub async fn run_init_db(args: InitDbArgs) -> Result<()> {
    args.database.open_store().await?;
    println!("products table ready");
    Ok(())
}
