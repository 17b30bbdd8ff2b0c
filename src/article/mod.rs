//! The article resource: model, storage contract, service and HTTP handlers

pub mod handlers;
pub mod model;
pub mod service;
pub mod store;

pub use handlers::ArticleAppState;
pub use model::{
    ARTICLE_STATUSES, Article, ArticleFields, ArticleStatus, CreateArticleRequest, ListFilter,
    ListResponse, UpdateArticleRequest,
};
pub use service::ArticleService;
pub use store::{ArticleStore, StoreResult};
