//! Schema bootstrap command

use anyhow::{Context, Result};
use clap::Parser;

use boardstat_server::db::{create_pool, migrations};

use super::DEFAULT_DATABASE_URL;

/// Arguments for the migrate command
#[derive(Parser, Debug)]
pub struct MigrateArgs {
    /// Database URL
    #[arg(long, env = "DATABASE_URL", default_value = DEFAULT_DATABASE_URL, hide_env_values = true)]
    pub database_url: String,
}

/// Create missing tables and exit
pub async fn run_migrate(args: MigrateArgs) -> Result<()> {
    let pool = create_pool(&args.database_url)
        .await
        .context("Failed to create database pool")?;

    migrations::run(&pool)
        .await
        .context("Failed to create database schema")?;

    pool.close().await;
    Ok(())
}
