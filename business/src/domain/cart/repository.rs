use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;

use super::model::CartEntry;

#[async_trait]
pub trait CartRepository: Send + Sync {
    /// All entries in insertion order.
    async fn get_all(&self) -> Result<Vec<CartEntry>, RepositoryError>;
    async fn get_by_id(&self, id: Uuid) -> Result<CartEntry, RepositoryError>;
    async fn count(&self) -> Result<u64, RepositoryError>;
    async fn save(&self, entry: &CartEntry) -> Result<(), RepositoryError>;
    /// Fails with `NotFound` when no entry has this id.
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
    /// Removes every entry atomically and returns how many were removed.
    async fn delete_all(&self) -> Result<u64, RepositoryError>;
}
