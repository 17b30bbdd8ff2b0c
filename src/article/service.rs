//! Business rules for articles: pagination clamping and partial-update merge

use super::model::{
    ARTICLE, Article, ArticleFields, ArticleStatus, CreateArticleRequest, ListFilter, ListResponse,
    UpdateArticleRequest,
};
use super::store::ArticleStore;
use crate::core::error::{AppError, AppResult, ValidationError};
use crate::core::query::{Pagination, PaginationMeta};
use crate::core::validation::ErrorFormatter;
use std::sync::Arc;

/// Article operations on top of an [`ArticleStore`]
///
/// Payloads are checked against their constraint tables here as well as at
/// the HTTP boundary, so the service is safe to call directly.
#[derive(Clone)]
pub struct ArticleService {
    store: Arc<dyn ArticleStore>,
    formatter: ErrorFormatter,
}

impl ArticleService {
    pub fn new(store: Arc<dyn ArticleStore>) -> Self {
        Self::with_formatter(store, ErrorFormatter::default())
    }

    pub fn with_formatter(store: Arc<dyn ArticleStore>, formatter: ErrorFormatter) -> Self {
        Self { store, formatter }
    }

    pub fn formatter(&self) -> &ErrorFormatter {
        &self.formatter
    }

    pub async fn create(&self, request: CreateArticleRequest) -> AppResult<Article> {
        self.formatter
            .validate_detailed(&request)
            .map_err(ValidationError::FieldErrors)?;

        let fields = ArticleFields {
            title: request.title.unwrap_or_default(),
            content: request.content.unwrap_or_default(),
            category: request.category.unwrap_or_default(),
            status: parse_status(request.status.as_deref().unwrap_or_default())?,
        };

        let article = self.store.insert(fields).await?;
        tracing::info!(id = article.id, status = %article.status, "article created");
        Ok(article)
    }

    /// One page of articles
    ///
    /// `limit` and `page` are raised to their floors (10 and 1) before use.
    /// A window reaching past `i64::MAX` rows is rejected.
    pub async fn list(&self, limit: i64, page: i64, filter: &ListFilter) -> AppResult<ListResponse> {
        let pagination = Pagination::clamped(limit, page);
        let offset = pagination
            .offset()
            .ok_or_else(|| ValidationError::InvalidFilter {
                field: "page".to_string(),
                message: PAGE_RANGE_MESSAGE.to_string(),
            })?;

        let (items, total) = self.store.list(pagination.limit, offset, filter).await?;

        Ok(ListResponse {
            items,
            meta: PaginationMeta::from_offset(pagination.limit, offset, total),
        })
    }

    pub async fn get_by_id(&self, id: i64) -> AppResult<Article> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(ARTICLE, id))
    }

    /// Merge the non-empty fields of `patch` over the stored article
    pub async fn update(&self, id: i64, patch: UpdateArticleRequest) -> AppResult<Article> {
        self.formatter
            .validate_detailed(&patch)
            .map_err(ValidationError::FieldErrors)?;

        let current = self.get_by_id(id).await?;
        let fields = merge(&current, patch)?;

        let article = self
            .store
            .update_all(id, fields)
            .await?
            .ok_or_else(|| AppError::not_found(ARTICLE, id))?;

        tracing::info!(id, "article updated");
        Ok(article)
    }

    pub async fn delete(&self, id: i64) -> AppResult<()> {
        if !self.store.delete(id).await? {
            return Err(AppError::not_found(ARTICLE, id));
        }

        tracing::info!(id, "article deleted");
        Ok(())
    }
}

fn merge(current: &Article, patch: UpdateArticleRequest) -> AppResult<ArticleFields> {
    let mut fields = ArticleFields::from(current);

    if let Some(title) = non_empty(patch.title) {
        fields.title = title;
    }
    if let Some(content) = non_empty(patch.content) {
        fields.content = content;
    }
    if let Some(category) = non_empty(patch.category) {
        fields.category = category;
    }
    if let Some(status) = non_empty(patch.status) {
        fields.status = parse_status(&status)?;
    }

    Ok(fields)
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

const PAGE_RANGE_MESSAGE: &str = "page out of range";

fn parse_status(raw: &str) -> AppResult<ArticleStatus> {
    raw.parse::<ArticleStatus>()
        .map_err(|e| AppError::Internal(e.to_string()))
}
