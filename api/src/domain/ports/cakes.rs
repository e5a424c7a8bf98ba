//! Cake repository port
//!
//! Persistence interface for cakes. Implementations live in `adapters`.

use async_trait::async_trait;

use crate::domain::entities::{Cake, CakeId, CakeUpdate, NewCake};
use crate::error::DomainError;

/// Repository for Cake entities
#[async_trait]
pub trait CakeRepository: Send + Sync {
    /// List all cakes, ordered by identifier
    async fn find_all(&self) -> Result<Vec<Cake>, DomainError>;

    /// Find a cake by ID
    async fn find_by_id(&self, id: CakeId) -> Result<Option<Cake>, DomainError>;

    /// Create a new cake, assigning it a fresh identifier
    async fn create(&self, cake: &NewCake) -> Result<Cake, DomainError>;

    /// Replace the title and description of a cake.
    /// Returns `None` if no cake has this ID.
    async fn update(&self, id: CakeId, update: &CakeUpdate) -> Result<Option<Cake>, DomainError>;

    /// Delete a cake. Returns `false` if no cake has this ID.
    async fn delete(&self, id: CakeId) -> Result<bool, DomainError>;
}
