//! Route table for the cat API

use crate::server::handlers::{
    AppState, create_cat, delete_cat, get_cat, list_cats, update_cat,
};
use axum::{Json, Router, routing::get};
use serde_json::{Value, json};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Build the application router
///
/// - GET    /cats        — list all cats
/// - POST   /cats        — create a cat
/// - GET    /cats/{id}   — get one cat
/// - PATCH  /cats/{id}   — update a cat (full replacement)
/// - DELETE /cats/{id}   — delete a cat
/// - GET    /health      — health check
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/cats", get(list_cats).post(create_cat))
        .route(
            "/cats/{id}",
            get(get_cat).patch(update_cat).delete(delete_cat),
        )
        .route("/health", get(health_check))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Health check endpoint handler
async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "catnip"
    }))
}
