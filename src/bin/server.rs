//! article-server: serves the article API over HTTP

use anyhow::Context;
use articles::config::AppConfig;
use articles::logging::init_tracing;
use articles::server::ServerBuilder;
use articles::storage::MysqlArticleStore;
use articles::storage::mysql::connect;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("failed to load configuration")?;
    init_tracing(&config)?;
    config.warn_if_incomplete();

    tracing::debug!(config = ?config, "configuration loaded");

    let database_url = config.require_database_url()?;
    let pool = connect(database_url, &config.database)
        .await
        .context("failed to connect to the database")?;

    ServerBuilder::new()
        .with_store(MysqlArticleStore::new(pool.clone()))
        .with_messages(config.messages.clone())
        .serve(&config.bind_address())
        .await?;

    pool.close().await;
    Ok(())
}
