//! Collection store trait — the mutation gateway boundary
//!
//! Every admin screen talks to its collection through this trait. The
//! crate ships an in-memory backing (see [`crate::storage`]); persistent
//! backings implement the same contract.
//!
//! Mutations are all-or-nothing per record: an operation either fully
//! applies and returns the resulting record, or fails and leaves the
//! store untouched.

use crate::core::error::CollectionError;
use crate::core::record::Record;
use async_trait::async_trait;
use uuid::Uuid;

/// Service trait for managing one collection of records
#[async_trait]
pub trait Collection<T: Record>: Send + Sync {
    /// Insert a new record. Fails if a record with the same id exists.
    async fn create(&self, record: T) -> Result<T, CollectionError>;

    /// Get a record by id
    async fn get(&self, id: &Uuid) -> Result<Option<T>, CollectionError>;

    /// List all records in insertion order
    async fn list(&self) -> Result<Vec<T>, CollectionError>;

    /// Replace the record with the given id. Fails with `NotFound` if the
    /// id is absent; the replacement is atomic.
    async fn update(&self, id: &Uuid, record: T) -> Result<T, CollectionError>;

    /// Remove the record with the given id. Fails with `NotFound` if the
    /// id is absent.
    async fn delete(&self, id: &Uuid) -> Result<(), CollectionError>;

    /// Number of records currently held
    async fn count(&self) -> Result<usize, CollectionError> {
        Ok(self.list().await?.len())
    }

    /// Fetch a record, turning absence into a `NotFound` error
    async fn require(&self, id: &Uuid) -> Result<T, CollectionError> {
        self.get(id).await?.ok_or(CollectionError::NotFound {
            resource: T::resource_name_singular(),
            id: *id,
        })
    }
}
