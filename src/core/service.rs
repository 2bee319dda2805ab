//! Storage collaborator trait for cat records

use crate::core::cat::{Cat, CatParams};
use anyhow::Result;
use async_trait::async_trait;
use uuid::Uuid;

/// Service trait for persisting cat records
///
/// Implementations provide the five CRUD operations the handlers delegate
/// to. The handlers are agnostic to the underlying storage mechanism, so
/// tests can substitute an in-memory implementation.
///
/// Lookup misses are reported as `None` (or `false` for delete), never as
/// errors; the `Err` channel is reserved for storage faults.
#[async_trait]
pub trait CatService: Send + Sync {
    /// Persist a new record, assigning its id and timestamps
    async fn create(&self, params: CatParams) -> Result<Cat>;

    /// Get a record by id
    async fn get(&self, id: &Uuid) -> Result<Option<Cat>>;

    /// List all records in storage order
    async fn list(&self) -> Result<Vec<Cat>>;

    /// Replace all business fields of an existing record
    async fn update(&self, id: &Uuid, params: CatParams) -> Result<Option<Cat>>;

    /// Remove a record; returns whether it existed
    async fn delete(&self, id: &Uuid) -> Result<bool>;
}
