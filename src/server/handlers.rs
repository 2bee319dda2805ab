//! HTTP handlers for the cat resource
//!
//! Each handler extracts its input, runs the validator on write paths,
//! delegates persistence to the [`CatService`] collaborator, and maps the
//! outcome onto a status code and JSON body. Validation failures surface as
//! 422 with the violation mapping; unknown ids as 404.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use std::sync::Arc;
use uuid::Uuid;

use crate::core::cat::{Cat, CatPayload};
use crate::core::error::{ApiError, ApiResult};
use crate::core::service::CatService;
use crate::core::validation::validate;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub cats: Arc<dyn CatService>,
}

impl AppState {
    pub fn new(cats: Arc<dyn CatService>) -> Self {
        Self { cats }
    }
}

/// List all cats
///
/// GET /cats — 200 with a JSON array in storage order
pub async fn list_cats(State(state): State<AppState>) -> ApiResult<Json<Vec<Cat>>> {
    let cats = state.cats.list().await?;
    Ok(Json(cats))
}

/// Get a single cat by id
///
/// GET /cats/{id} — 200 with the record, 404 when the id is unknown
pub async fn get_cat(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<Cat>> {
    state
        .cats
        .get(&id)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound { id })
}

/// Create a cat
///
/// POST /cats — 200 with the created record, 422 with the violation mapping
pub async fn create_cat(
    State(state): State<AppState>,
    Json(payload): Json<CatPayload>,
) -> ApiResult<Json<Cat>> {
    let violations = validate(&payload.cat);
    if !violations.is_empty() {
        return Err(ApiError::Validation(violations));
    }

    let cat = state.cats.create(payload.cat).await?;
    tracing::debug!(id = %cat.id, name = %cat.name, "created cat");

    Ok(Json(cat))
}

/// Update a cat (full replacement of the four business fields)
///
/// PATCH /cats/{id} — 200 with the updated record, 404 when the id is
/// unknown, 422 with the violation mapping. The lookup happens before
/// validation, so an invalid body against an unknown id yields 404.
pub async fn update_cat(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<CatPayload>,
) -> ApiResult<Json<Cat>> {
    if state.cats.get(&id).await?.is_none() {
        return Err(ApiError::NotFound { id });
    }

    let violations = validate(&payload.cat);
    if !violations.is_empty() {
        return Err(ApiError::Validation(violations));
    }

    let cat = state
        .cats
        .update(&id, payload.cat)
        .await?
        .ok_or(ApiError::NotFound { id })?;
    tracing::debug!(id = %cat.id, "updated cat");

    Ok(Json(cat))
}

/// Delete a cat
///
/// DELETE /cats/{id} — 204 with an empty body, 404 when the id is unknown
pub async fn delete_cat(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<StatusCode> {
    if !state.cats.delete(&id).await? {
        return Err(ApiError::NotFound { id });
    }
    tracing::debug!(id = %id, "deleted cat");

    Ok(StatusCode::NO_CONTENT)
}
