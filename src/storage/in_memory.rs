//! In-memory implementation of CatService for testing and development

use crate::core::cat::{Cat, CatParams};
use crate::core::service::CatService;
use anyhow::{Result, anyhow};
use async_trait::async_trait;
use indexmap::IndexMap;
use std::sync::{Arc, RwLock};
use uuid::Uuid;

/// In-memory cat service implementation
///
/// Uses RwLock for thread-safe access. Records are kept in an insertion-ordered
/// map so `list` returns them in creation order.
#[derive(Clone)]
pub struct InMemoryCatService {
    cats: Arc<RwLock<IndexMap<Uuid, Cat>>>,
}

impl InMemoryCatService {
    /// Create a new, empty in-memory cat service
    pub fn new() -> Self {
        Self {
            cats: Arc::new(RwLock::new(IndexMap::new())),
        }
    }
}

impl Default for InMemoryCatService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CatService for InMemoryCatService {
    async fn create(&self, params: CatParams) -> Result<Cat> {
        let mut cats = self
            .cats
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        let cat = Cat::from_params(params);
        cats.insert(cat.id, cat.clone());

        Ok(cat)
    }

    async fn get(&self, id: &Uuid) -> Result<Option<Cat>> {
        let cats = self
            .cats
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(cats.get(id).cloned())
    }

    async fn list(&self) -> Result<Vec<Cat>> {
        let cats = self
            .cats
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(cats.values().cloned().collect())
    }

    async fn update(&self, id: &Uuid, params: CatParams) -> Result<Option<Cat>> {
        let mut cats = self
            .cats
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        Ok(cats.get_mut(id).map(|cat| {
            cat.apply(params);
            cat.clone()
        }))
    }

    async fn delete(&self, id: &Uuid) -> Result<bool> {
        let mut cats = self
            .cats
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        // shift_remove keeps the remaining records in insertion order
        Ok(cats.shift_remove(id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn felix() -> CatParams {
        CatParams::new("Felix", 2, "Walks in the park", "https://cats.example/felix.jpg")
    }

    fn buster() -> CatParams {
        CatParams::new(
            "Buster",
            4,
            "Meow Mix, and plenty of sunshine.",
            "https://cats.example/buster.jpg",
        )
    }

    #[tokio::test]
    async fn test_create_assigns_id_and_stores_fields() {
        let service = InMemoryCatService::new();

        let cat = service.create(buster()).await.unwrap();

        assert_eq!(cat.name, "Buster");
        assert_eq!(cat.age, 4);
        assert!(!cat.id.is_nil());
    }

    #[tokio::test]
    async fn test_get_returns_stored_record() {
        let service = InMemoryCatService::new();
        let created = service.create(felix()).await.unwrap();

        let retrieved = service.get(&created.id).await.unwrap();
        assert_eq!(retrieved, Some(created));
    }

    #[tokio::test]
    async fn test_get_unknown_id_returns_none() {
        let service = InMemoryCatService::new();
        assert!(service.get(&Uuid::new_v4()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_preserves_creation_order() {
        let service = InMemoryCatService::new();
        service.create(felix()).await.unwrap();
        service.create(buster()).await.unwrap();

        let cats = service.list().await.unwrap();
        assert_eq!(cats.len(), 2);
        assert_eq!(cats[0].name, "Felix");
        assert_eq!(cats[1].name, "Buster");
    }

    #[tokio::test]
    async fn test_update_replaces_fields_and_touches_timestamp() {
        let service = InMemoryCatService::new();
        let created = service.create(felix()).await.unwrap();

        let mut params = felix();
        params.age = Some(3);
        let updated = service.update(&created.id, params).await.unwrap().unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.age, 3);
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at >= created.updated_at);

        let stored = service.get(&created.id).await.unwrap().unwrap();
        assert_eq!(stored.age, 3);
    }

    #[tokio::test]
    async fn test_update_unknown_id_returns_none() {
        let service = InMemoryCatService::new();
        assert!(service.update(&Uuid::new_v4(), felix()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_removes_record() {
        let service = InMemoryCatService::new();
        let created = service.create(felix()).await.unwrap();

        assert!(service.delete(&created.id).await.unwrap());
        assert!(service.get(&created.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_unknown_id_returns_false() {
        let service = InMemoryCatService::new();
        assert!(!service.delete(&Uuid::new_v4()).await.unwrap());
    }
}
