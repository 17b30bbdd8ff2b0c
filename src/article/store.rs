//! Storage contract for articles

use super::model::{Article, ArticleFields, ListFilter};
use crate::core::error::StorageError;
use async_trait::async_trait;

pub type StoreResult<T> = Result<T, StorageError>;

/// Persistence for articles
///
/// Implementations assign ids and timestamps. A missing row is reported as
/// `None` or `false`, never as an error; errors are reserved for the backend
/// itself failing.
#[async_trait]
pub trait ArticleStore: Send + Sync {
    /// Insert a new article and return it as stored
    async fn insert(&self, fields: ArticleFields) -> StoreResult<Article>;

    /// Fetch one article
    async fn find_by_id(&self, id: i64) -> StoreResult<Option<Article>>;

    /// Overwrite every user-supplied column and refresh `updated_at`
    ///
    /// Returns `None` when no article has this id.
    async fn update_all(&self, id: i64, fields: ArticleFields) -> StoreResult<Option<Article>>;

    /// Remove an article; `false` when nothing was removed
    async fn delete(&self, id: i64) -> StoreResult<bool>;

    /// One window of matching articles ordered by id, plus the total match count
    async fn list(
        &self,
        limit: i64,
        offset: i64,
        filter: &ListFilter,
    ) -> StoreResult<(Vec<Article>, i64)>;

    /// Number of articles matching the filter
    async fn count(&self, filter: &ListFilter) -> StoreResult<i64>;
}
