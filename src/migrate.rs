//! Schema migrations for the MySQL backend
//!
//! Migrations are reversible `<version>_<name>.up.sql` / `.down.sql` pairs read
//! from a directory at runtime, so the binary does not need to be rebuilt when
//! a migration is added.

use crate::core::error::StorageError;
use clap::{Parser, ValueEnum};
use sqlx::MySqlPool;
use sqlx::migrate::Migrator;
use std::fmt;
use std::path::{Path, PathBuf};

/// Default directory holding migration files
pub const DEFAULT_MIGRATIONS_DIR: &str = "migrations";

/// Which way to migrate
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MigrationAction {
    /// Apply every pending migration
    Up,
    /// Revert every applied migration
    Down,
}

impl fmt::Display for MigrationAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MigrationAction::Up => f.write_str("up"),
            MigrationAction::Down => f.write_str("down"),
        }
    }
}

/// Apply or revert article schema migrations
#[derive(Debug, Parser)]
#[command(name = "article-migrate")]
#[command(about = "Apply or revert article schema migrations", long_about = None)]
pub struct MigrateArgs {
    /// Directory of migration files
    #[arg(short, long, default_value = DEFAULT_MIGRATIONS_DIR)]
    pub dir: PathBuf,

    /// Migration action
    #[arg(short, long, value_enum, default_value_t = MigrationAction::Up)]
    pub action: MigrationAction,

    /// Database connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: String,
}

fn migrate_error(err: sqlx::migrate::MigrateError) -> StorageError {
    StorageError::QueryError {
        backend: "MySQL".to_string(),
        message: format!("migration failed: {}", err),
    }
}

/// Load the migrations found in `dir`
pub async fn load(dir: &Path) -> Result<Migrator, StorageError> {
    Migrator::new(dir).await.map_err(migrate_error)
}

/// Run `action` against `pool` with the migrations found in `dir`
pub async fn run(pool: &MySqlPool, dir: &Path, action: MigrationAction) -> Result<(), StorageError> {
    let migrator = load(dir).await?;

    tracing::info!(
        dir = %dir.display(),
        action = %action,
        available = migrator.iter().count(),
        "starting migration"
    );

    match action {
        MigrationAction::Up => migrator.run(pool).await.map_err(migrate_error)?,
        MigrationAction::Down => migrator.undo(pool, 0).await.map_err(migrate_error)?,
    }

    tracing::info!(action = %action, "migration finished");
    Ok(())
}
