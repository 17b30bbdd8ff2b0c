//! # Article Service
//!
//! A small HTTP CRUD service for articles, backed by MySQL.
//!
//! ## Features
//!
//! - **Declarative validation**: each request shape declares its rules once, as a constant table
//! - **Localized error reports**: field-qualified messages from a configurable template table
//! - **Uniform envelope**: every response is `{success, data?, message?, error?, errors?}`
//! - **Pluggable storage**: MySQL via sqlx, or in memory for tests and development
//! - **Migrations**: reversible SQL files applied by the `article-migrate` binary
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use articles::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     ServerBuilder::new()
//!         .with_store(InMemoryArticleStore::new())
//!         .serve("127.0.0.1:8080")
//!         .await
//! }
//! ```

pub mod article;
pub mod config;
pub mod core;
pub mod logging;
#[cfg(feature = "mysql")]
pub mod migrate;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Article resource ===
    pub use crate::article::{
        ARTICLE_STATUSES, Article, ArticleAppState, ArticleFields, ArticleService, ArticleStatus,
        ArticleStore, CreateArticleRequest, ListFilter, ListResponse, UpdateArticleRequest,
    };

    // === Core ===
    pub use crate::core::{
        error::{AppError, AppResult, ErrorBody, FieldError, StorageError, ValidationError},
        query::{ListQuery, Pagination, PaginationMeta},
        response::{ApiResponse, Reply},
        validation::{
            Constrained, Constraint, ConstraintSet, ErrorFormatter, FieldRules, MessageTemplates,
            Validated, Violation, WireName, validate,
        },
    };

    // === Storage ===
    pub use crate::storage::InMemoryArticleStore;
    #[cfg(feature = "mysql")]
    pub use crate::storage::MysqlArticleStore;

    // === Config ===
    pub use crate::config::{AppConfig, LogFormat, PoolConfig};

    // === Server ===
    pub use crate::server::{ServerBuilder, build_router};

    // === External dependencies ===
    pub use async_trait::async_trait;
    pub use chrono::{DateTime, Utc};
    pub use serde::{Deserialize, Serialize};
}
