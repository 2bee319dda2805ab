//! The cat entity and its request-input form

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A cat adoption profile as stored and served by the API
///
/// The `id` is assigned by the storage layer on creation and never changes.
/// Timestamps are managed by the storage layer: `created_at` is set once,
/// `updated_at` is touched on every successful update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cat {
    pub id: Uuid,
    pub name: String,
    pub age: i64,
    pub enjoys: String,
    pub image: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Cat {
    /// Build a fresh record from request input.
    ///
    /// Callers must have run the validator first; blank fields are not
    /// expected here and fall back to defaults rather than panicking.
    pub fn from_params(params: CatParams) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: params.name.unwrap_or_default(),
            age: params.age.unwrap_or_default(),
            enjoys: params.enjoys.unwrap_or_default(),
            image: params.image.unwrap_or_default(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Overwrite all four business fields (full replacement, not a merge)
    /// and touch `updated_at`. Same validation precondition as
    /// [`from_params`](Self::from_params).
    pub fn apply(&mut self, params: CatParams) {
        self.name = params.name.unwrap_or_default();
        self.age = params.age.unwrap_or_default();
        self.enjoys = params.enjoys.unwrap_or_default();
        self.image = params.image.unwrap_or_default();
        self.updated_at = Utc::now();
    }
}

/// Request body for create and update: `{"cat": {...}}`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatPayload {
    #[serde(default)]
    pub cat: CatParams,
}

/// Candidate field values extracted from a request body.
///
/// Every business field is optional so that a missing or null field reaches
/// the validator (which reports it as blank) instead of failing JSON decode.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatParams {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub age: Option<i64>,
    #[serde(default)]
    pub enjoys: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

impl CatParams {
    /// Convenience constructor used by storage tests and examples
    pub fn new(name: &str, age: i64, enjoys: &str, image: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            age: Some(age),
            enjoys: Some(enjoys.to_string()),
            image: Some(image.to_string()),
        }
    }
}
