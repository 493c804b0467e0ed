//! Storage contract shared by the user and pet repositories.

use async_trait::async_trait;

use crate::domain::{DomainError, DomainResult, Entity};

#[async_trait]
pub trait Repository<T: Entity>: Send + Sync {
    /// Insert and return the row with its assigned ID
    async fn create(&self, entity: &T) -> DomainResult<T>;

    async fn find_by_id(&self, id: T::Id) -> DomainResult<Option<T>>;

    /// Oldest first
    async fn list(&self) -> DomainResult<Vec<T>>;

    /// `NotFound` if the row is gone
    async fn update(&self, entity: &T) -> DomainResult<T>;

    /// `NotFound` if the row is gone
    async fn delete(&self, id: T::Id) -> DomainResult<()>;

    /// Like `find_by_id`, but a missing row is `"{Kind} not found: {id}"`
    async fn fetch(&self, id: T::Id) -> DomainResult<T> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::missing::<T>(id))
    }
}
