//! In-memory implementation of ArticleStore for testing and development

use crate::article::model::{Article, ArticleFields, ListFilter};
use crate::article::store::{ArticleStore, StoreResult};
use crate::core::error::StorageError;
use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

const BACKEND: &str = "in-memory";

#[derive(Debug, Default)]
struct Table {
    rows: BTreeMap<i64, Article>,
    last_id: i64,
}

/// In-memory article store
///
/// Ids are assigned from a counter starting at 1 and never reused. Uses
/// RwLock for thread-safe access; clones share the same table.
#[derive(Clone, Default)]
pub struct InMemoryArticleStore {
    table: Arc<RwLock<Table>>,
}

impl InMemoryArticleStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> StoreResult<RwLockReadGuard<'_, Table>> {
        self.table.read().map_err(|e| StorageError::QueryError {
            backend: BACKEND.to_string(),
            message: format!("Failed to acquire read lock: {}", e),
        })
    }

    fn write(&self) -> StoreResult<RwLockWriteGuard<'_, Table>> {
        self.table.write().map_err(|e| StorageError::QueryError {
            backend: BACKEND.to_string(),
            message: format!("Failed to acquire write lock: {}", e),
        })
    }
}

#[async_trait]
impl ArticleStore for InMemoryArticleStore {
    async fn insert(&self, fields: ArticleFields) -> StoreResult<Article> {
        let mut table = self.write()?;
        table.last_id += 1;

        let now = Utc::now();
        let article = Article {
            id: table.last_id,
            title: fields.title,
            content: fields.content,
            category: fields.category,
            status: fields.status,
            created_at: now,
            updated_at: now,
        };

        table.rows.insert(article.id, article.clone());
        Ok(article)
    }

    async fn find_by_id(&self, id: i64) -> StoreResult<Option<Article>> {
        Ok(self.read()?.rows.get(&id).cloned())
    }

    async fn update_all(&self, id: i64, fields: ArticleFields) -> StoreResult<Option<Article>> {
        let mut table = self.write()?;

        Ok(table.rows.get_mut(&id).map(|article| {
            article.title = fields.title;
            article.content = fields.content;
            article.category = fields.category;
            article.status = fields.status;
            article.updated_at = Utc::now();
            article.clone()
        }))
    }

    async fn delete(&self, id: i64) -> StoreResult<bool> {
        Ok(self.write()?.rows.remove(&id).is_some())
    }

    async fn list(
        &self,
        limit: i64,
        offset: i64,
        filter: &ListFilter,
    ) -> StoreResult<(Vec<Article>, i64)> {
        let table = self.read()?;
        let matching: Vec<&Article> = table.rows.values().filter(|a| filter.matches(a)).collect();

        let total = matching.len() as i64;
        let items = matching
            .into_iter()
            .skip(offset.max(0) as usize)
            .take(limit.max(0) as usize)
            .cloned()
            .collect();

        Ok((items, total))
    }

    async fn count(&self, filter: &ListFilter) -> StoreResult<i64> {
        let table = self.read()?;
        Ok(table.rows.values().filter(|a| filter.matches(a)).count() as i64)
    }
}
