//! In-memory collection store
//!
//! The process-lifetime backing used by the admin screens. An `IndexMap`
//! keyed by id keeps listing order deterministic (insertion order), and a
//! single `RwLock` serializes mutations: each create/update/delete runs
//! to completion under the write lock, so a record is never observed
//! half-updated.

use crate::core::error::CollectionError;
use crate::core::record::Record;
use crate::core::repository::Collection;
use async_trait::async_trait;
use indexmap::IndexMap;
use std::sync::{Arc, RwLock};
use uuid::Uuid;

/// Thread-safe in-memory collection of one record type
#[derive(Clone)]
pub struct InMemoryCollection<T> {
    records: Arc<RwLock<IndexMap<Uuid, T>>>,
}

impl<T: Record> InMemoryCollection<T> {
    /// Create an empty collection
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(IndexMap::new())),
        }
    }

    /// Create a collection pre-seeded with records
    pub fn with_records(records: Vec<T>) -> Self {
        let map: IndexMap<Uuid, T> = records.into_iter().map(|r| (r.id(), r)).collect();
        Self {
            records: Arc::new(RwLock::new(map)),
        }
    }
}

impl<T: Record> Default for InMemoryCollection<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Record> Collection<T> for InMemoryCollection<T> {
    async fn create(&self, record: T) -> Result<T, CollectionError> {
        let mut records = self
            .records
            .write()
            .map_err(|_| CollectionError::LockPoisoned)?;

        if records.contains_key(&record.id()) {
            return Err(CollectionError::AlreadyExists {
                resource: T::resource_name_singular(),
                id: record.id(),
            });
        }

        records.insert(record.id(), record.clone());
        Ok(record)
    }

    async fn get(&self, id: &Uuid) -> Result<Option<T>, CollectionError> {
        let records = self
            .records
            .read()
            .map_err(|_| CollectionError::LockPoisoned)?;

        Ok(records.get(id).cloned())
    }

    async fn list(&self) -> Result<Vec<T>, CollectionError> {
        let records = self
            .records
            .read()
            .map_err(|_| CollectionError::LockPoisoned)?;

        Ok(records.values().cloned().collect())
    }

    async fn update(&self, id: &Uuid, record: T) -> Result<T, CollectionError> {
        let mut records = self
            .records
            .write()
            .map_err(|_| CollectionError::LockPoisoned)?;

        let slot = records.get_mut(id).ok_or(CollectionError::NotFound {
            resource: T::resource_name_singular(),
            id: *id,
        })?;

        *slot = record.clone();
        Ok(record)
    }

    async fn delete(&self, id: &Uuid) -> Result<(), CollectionError> {
        let mut records = self
            .records
            .write()
            .map_err(|_| CollectionError::LockPoisoned)?;

        // shift_remove keeps the remaining records in insertion order
        records
            .shift_remove(id)
            .ok_or(CollectionError::NotFound {
                resource: T::resource_name_singular(),
                id: *id,
            })?;

        Ok(())
    }

    async fn count(&self) -> Result<usize, CollectionError> {
        let records = self
            .records
            .read()
            .map_err(|_| CollectionError::LockPoisoned)?;

        Ok(records.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::category::{Category, CategoryDraft};

    fn category(name: &str) -> Category {
        Category::create(CategoryDraft {
            name: name.to_string(),
        })
    }

    #[tokio::test]
    async fn test_create_and_get() {
        let store = InMemoryCollection::new();
        let created = store.create(category("Electronics")).await.unwrap();

        let fetched = store.get(&created.id).await.unwrap();
        assert_eq!(fetched.unwrap().name, "Electronics");
    }

    #[tokio::test]
    async fn test_create_duplicate_id_fails() {
        let store = InMemoryCollection::new();
        let cat = store.create(category("Electronics")).await.unwrap();

        let err = store.create(cat).await.unwrap_err();
        assert!(matches!(err, CollectionError::AlreadyExists { .. }));
        assert_eq!(store.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_list_preserves_insertion_order() {
        let store = InMemoryCollection::new();
        for name in ["Electronics", "Sensors", "Motors"] {
            store.create(category(name)).await.unwrap();
        }

        let names: Vec<String> = store
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, vec!["Electronics", "Sensors", "Motors"]);
    }

    #[tokio::test]
    async fn test_update_replaces_record() {
        let store = InMemoryCollection::new();
        let mut cat = store.create(category("Electronics")).await.unwrap();

        cat.name = "Electrical".to_string();
        let updated = store.update(&cat.id, cat.clone()).await.unwrap();
        assert_eq!(updated.name, "Electrical");

        let fetched = store.get(&cat.id).await.unwrap().unwrap();
        assert_eq!(fetched.name, "Electrical");
    }

    #[tokio::test]
    async fn test_update_missing_id_fails_and_store_unchanged() {
        let store = InMemoryCollection::new();
        store.create(category("Electronics")).await.unwrap();

        let ghost = category("Ghost");
        let err = store.update(&ghost.id.clone(), ghost).await.unwrap_err();
        assert!(matches!(err, CollectionError::NotFound { .. }));
        assert_eq!(store.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_delete_removes_exactly_one() {
        let store = InMemoryCollection::new();
        let a = store.create(category("A")).await.unwrap();
        store.create(category("B")).await.unwrap();

        store.delete(&a.id).await.unwrap();
        assert_eq!(store.count().await.unwrap(), 1);
        assert!(store.get(&a.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_missing_id_fails() {
        let store: InMemoryCollection<Category> = InMemoryCollection::new();
        let err = store.delete(&Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, CollectionError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_with_records_seeds_collection() {
        let store = InMemoryCollection::with_records(vec![category("A"), category("B")]);
        assert_eq!(store.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_require_surfaces_not_found() {
        let store: InMemoryCollection<Category> = InMemoryCollection::new();
        let err = store.require(&Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, CollectionError::NotFound { resource: "category", .. }));
    }
}
