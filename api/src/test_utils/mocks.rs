//! Mock implementations of port traits

use async_trait::async_trait;

use crate::domain::entities::{Cake, CakeId, CakeUpdate, NewCake};
use crate::domain::ports::CakeRepository;
use crate::error::DomainError;

// ============================================================================
// Failing Cake Repository
// ============================================================================

/// Repository whose every call fails as if the database were unreachable
pub struct FailingCakeRepository;

fn unavailable() -> DomainError {
    DomainError::Database("connection refused".to_string())
}

#[async_trait]
impl CakeRepository for FailingCakeRepository {
    async fn find_all(&self) -> Result<Vec<Cake>, DomainError> {
        Err(unavailable())
    }

    async fn find_by_id(&self, _id: CakeId) -> Result<Option<Cake>, DomainError> {
        Err(unavailable())
    }

    async fn create(&self, _cake: &NewCake) -> Result<Cake, DomainError> {
        Err(unavailable())
    }

    async fn update(
        &self,
        _id: CakeId,
        _update: &CakeUpdate,
    ) -> Result<Option<Cake>, DomainError> {
        Err(unavailable())
    }

    async fn delete(&self, _id: CakeId) -> Result<bool, DomainError> {
        Err(unavailable())
    }
}
