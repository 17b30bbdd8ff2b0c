//! HTTP server: route table, middleware and the serve loop

pub mod builder;
pub mod router;

pub use builder::ServerBuilder;
pub use router::build_router;
