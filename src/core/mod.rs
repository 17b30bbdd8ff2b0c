//! Core building blocks shared by every resource: errors, the response
//! envelope, pagination and request validation

pub mod error;
pub mod query;
pub mod response;
pub mod validation;

pub use error::{AppError, AppResult, ErrorBody, FieldError};
pub use query::{ListQuery, Pagination, PaginationMeta};
pub use response::{ApiResponse, Reply};
