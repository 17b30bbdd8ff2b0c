//! Route table and middleware stack

use crate::article::handlers::{
    ArticleAppState, create_article, delete_article, get_article, list_articles, update_article,
};
use crate::core::error::AppError;
use axum::{
    Router,
    http::{HeaderName, Method, Request, Response, header},
    response::IntoResponse,
    routing::get,
};
use std::any::Any;
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any as AnyOrigin, CorsLayer};
use tower_http::trace::{MakeSpan, OnResponse, TraceLayer};
use tracing::Span;

const ALLOWED_METHODS: [Method; 5] = [
    Method::GET,
    Method::POST,
    Method::PUT,
    Method::DELETE,
    Method::OPTIONS,
];

const ALLOWED_HEADERS: [HeaderName; 2] = [header::CONTENT_TYPE, header::AUTHORIZATION];

/// Build the full application router
///
/// Routes:
/// - GET    /health
/// - GET    /articles
/// - POST   /articles
/// - GET    /articles/{id}
/// - PUT    /articles/{id}
/// - DELETE /articles/{id}
pub fn build_router(state: ArticleAppState) -> Router {
    let articles = Router::new()
        .route("/articles", get(list_articles).post(create_article))
        .route(
            "/articles/{id}",
            get(get_article).put(update_article).delete(delete_article),
        )
        .with_state(state);

    Router::new()
        .route("/health", get(health))
        .merge(articles)
        .layer(
            ServiceBuilder::new()
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(RequestSpan)
                        .on_response(RequestLog),
                )
                .layer(cors_layer())
                .layer(CatchPanicLayer::custom(panic_response)),
        )
}

async fn health() -> &'static str {
    "OK"
}

/// Any origin; the fixed method and header lists
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AnyOrigin)
        .allow_methods(ALLOWED_METHODS)
        .allow_headers(ALLOWED_HEADERS)
}

fn panic_response(err: Box<dyn Any + Send + 'static>) -> axum::response::Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };

    AppError::Internal(format!("handler panicked: {}", detail)).into_response()
}

/// Span carrying the method and path of each request
#[derive(Debug, Clone, Copy)]
struct RequestSpan;

impl<B> MakeSpan<B> for RequestSpan {
    fn make_span(&mut self, request: &Request<B>) -> Span {
        tracing::info_span!(
            "request",
            method = %request.method(),
            path = %request.uri().path(),
        )
    }
}

/// One `http_request` line per response
#[derive(Debug, Clone, Copy)]
struct RequestLog;

impl<B> OnResponse<B> for RequestLog {
    fn on_response(self, response: &Response<B>, latency: Duration, _span: &Span) {
        tracing::info!(
            status = response.status().as_u16(),
            latency_ms = latency.as_millis() as u64,
            "http_request"
        );
    }
}
