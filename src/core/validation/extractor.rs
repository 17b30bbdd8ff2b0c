//! Axum extractor for validated request bodies
//!
//! `Validated<T>` parses the JSON body into `T`, checks it against `T`'s
//! constraint table and only then hands it to the handler.

use super::formatter::ErrorFormatter;
use super::rules::Constrained;
use crate::core::error::{AppError, ValidationError};
use axum::{
    Json,
    extract::{FromRef, FromRequest, Request},
};
use serde::de::DeserializeOwned;

/// Axum extractor that parses and validates a request body
///
/// Rejections:
/// - body is not JSON for `T` → 400 `invalid JSON body`
/// - body violates `T`'s constraints → 422 with one error per field
///
/// # Usage
///
/// ```rust,ignore
/// pub async fn create_article(
///     State(state): State<ArticleAppState>,
///     Validated(payload): Validated<CreateArticleRequest>,
/// ) -> AppResult<Reply<Article>> {
///     // payload already satisfies its constraint table
/// }
/// ```
#[derive(Debug)]
pub struct Validated<T>(pub T);

impl<S, T> FromRequest<S> for Validated<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Constrained + Send,
    ErrorFormatter: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(payload) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ValidationError::InvalidJson {
                message: rejection.body_text(),
            })?;

        ErrorFormatter::from_ref(state)
            .validate_detailed(&payload)
            .map_err(ValidationError::FieldErrors)?;

        Ok(Validated(payload))
    }
}
