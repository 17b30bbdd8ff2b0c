//! article-migrate: applies or reverts the SQL migrations in a directory

use anyhow::Context;
use articles::config::{AppConfig, PoolConfig};
use articles::logging::init_tracing;
use articles::migrate::{self, MigrateArgs};
use articles::storage::mysql::connect;
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env must be loaded before clap reads DATABASE_URL from the environment
    let config = AppConfig::load().context("failed to load configuration")?;
    let args = MigrateArgs::parse();
    init_tracing(&config)?;

    let pool_config = PoolConfig {
        max_connections: 1,
        min_connections: 0,
        ..config.database.clone()
    };
    let pool = connect(&args.database_url, &pool_config)
        .await
        .context("failed to connect to the database")?;

    let result = migrate::run(&pool, &args.dir, args.action).await;
    pool.close().await;

    result.with_context(|| format!("migrate {} failed", args.action))
}
