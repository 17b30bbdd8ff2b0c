//! HTTP handlers for article operations
//!
//! Each handler translates one route into one [`ArticleService`] call and
//! wraps the result in the response envelope.

use axum::{
    extract::{FromRef, FromRequestParts, Path, Query, State, rejection::QueryRejection},
    http::{StatusCode, request::Parts},
};

use super::model::{
    Article, ArticleStatus, CreateArticleRequest, ListFilter, ListResponse, UpdateArticleRequest,
};
use super::service::ArticleService;
use crate::core::error::{AppError, AppResult, ValidationError};
use crate::core::query::ListQuery;
use crate::core::response::{ApiResponse, Reply};
use crate::core::validation::{ErrorFormatter, Validated};

const STATUS_FILTER_MESSAGE: &str = "status filter invalid: pilih publish | draft | thrash";

/// Application state shared across article handlers
#[derive(Clone)]
pub struct ArticleAppState {
    pub service: ArticleService,
}

impl ArticleAppState {
    pub fn new(service: ArticleService) -> Self {
        Self { service }
    }
}

impl FromRef<ArticleAppState> for ErrorFormatter {
    fn from_ref(state: &ArticleAppState) -> Self {
        state.service.formatter().clone()
    }
}

/// Integer `{id}` path segment
///
/// Path extractors run before the body is read, so a bad id is reported
/// ahead of any problem with the payload.
pub struct ArticleId(pub i64);

impl<S> FromRequestParts<S> for ArticleId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| ValidationError::InvalidId {
                value: rejection.body_text(),
            })?;

        Ok(ArticleId(parse_id(&raw)?))
    }
}

/// POST /articles
pub async fn create_article(
    State(state): State<ArticleAppState>,
    Validated(payload): Validated<CreateArticleRequest>,
) -> AppResult<Reply<Article>> {
    let article = state.service.create(payload).await?;

    Ok(ApiResponse::success(article, "article created successfully").with_status(StatusCode::CREATED))
}

/// GET /articles
pub async fn list_articles(
    State(state): State<ArticleAppState>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> AppResult<Reply<ListResponse>> {
    let Query(query) = query.map_err(|rejection| ValidationError::InvalidFilter {
        field: "query".to_string(),
        message: rejection.body_text(),
    })?;

    let filter = list_filter(&query)?;
    let page = state
        .service
        .list(query.limit(), query.page(), &filter)
        .await?;

    Ok(ApiResponse::success(page, "articles retrieved successfully").with_status(StatusCode::OK))
}

/// GET /articles/{id}
pub async fn get_article(
    State(state): State<ArticleAppState>,
    ArticleId(id): ArticleId,
) -> AppResult<Reply<Article>> {
    let article = state.service.get_by_id(id).await?;

    Ok(ApiResponse::success(article, "article retrieved successfully").with_status(StatusCode::OK))
}

/// PUT /articles/{id}
pub async fn update_article(
    State(state): State<ArticleAppState>,
    ArticleId(id): ArticleId,
    Validated(payload): Validated<UpdateArticleRequest>,
) -> AppResult<Reply<Article>> {
    let article = state.service.update(id, payload).await?;

    Ok(ApiResponse::success(article, "article updated successfully").with_status(StatusCode::OK))
}

/// DELETE /articles/{id}
pub async fn delete_article(
    State(state): State<ArticleAppState>,
    ArticleId(id): ArticleId,
) -> AppResult<Reply<()>> {
    state.service.delete(id).await?;

    Ok(ApiResponse::message("article deleted successfully").with_status(StatusCode::OK))
}

fn parse_id(raw: &str) -> Result<i64, ValidationError> {
    raw.parse().map_err(|_| ValidationError::InvalidId {
        value: raw.to_string(),
    })
}

/// Normalize list query parameters into a filter
///
/// `status` is lower-cased and must name a known status, `category` is
/// trimmed and `title` lower-cased.
fn list_filter(query: &ListQuery) -> Result<ListFilter, ValidationError> {
    let status = match query.status.as_deref().map(str::to_lowercase) {
        None => None,
        Some(s) if s.is_empty() => None,
        Some(s) => Some(s.parse::<ArticleStatus>().map_err(|_| {
            ValidationError::InvalidFilter {
                field: "status".to_string(),
                message: STATUS_FILTER_MESSAGE.to_string(),
            }
        })?),
    };

    Ok(ListFilter {
        title: query.title.as_deref().map(str::to_lowercase),
        category: query.category.as_deref().map(|c| c.trim().to_string()),
        status,
    })
}
