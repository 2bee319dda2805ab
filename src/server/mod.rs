//! HTTP server: shared state, request handlers, and the route table

pub mod handlers;
pub mod router;

pub use handlers::AppState;
pub use router::build_router;
