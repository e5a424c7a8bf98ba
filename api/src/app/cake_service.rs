//! Cake service
//!
//! Use cases for the cake catalogue. Handlers depend on the `CakeService`
//! trait; `CakeServiceImpl` is the production implementation backed by a
//! `CakeRepository`.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::entities::{Cake, CakeId, CakeUpdate, NewCake};
use crate::domain::ports::CakeRepository;
use crate::error::{AppError, DomainError};

/// Operations the HTTP layer needs from the cake catalogue
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CakeService: Send + Sync {
    /// List every live cake
    async fn list(&self) -> Result<Vec<Cake>, AppError>;

    /// Get a single cake. Fails with NotFound for unknown IDs.
    async fn get_by_id(&self, id: CakeId) -> Result<Cake, AppError>;

    /// Create a cake and return it with its assigned ID
    async fn create(&self, cake: NewCake) -> Result<Cake, AppError>;

    /// Replace title and description. Fails with NotFound for unknown IDs.
    async fn update(&self, id: CakeId, update: CakeUpdate) -> Result<Cake, AppError>;

    /// Remove a cake. Fails with NotFound for unknown IDs.
    async fn delete(&self, id: CakeId) -> Result<(), AppError>;
}

/// Repository-backed cake service
pub struct CakeServiceImpl<CR>
where
    CR: CakeRepository,
{
    cakes: Arc<CR>,
}

impl<CR> CakeServiceImpl<CR>
where
    CR: CakeRepository,
{
    pub fn new(cakes: Arc<CR>) -> Self {
        Self { cakes }
    }
}

#[async_trait]
impl<CR> CakeService for CakeServiceImpl<CR>
where
    CR: CakeRepository,
{
    async fn list(&self) -> Result<Vec<Cake>, AppError> {
        Ok(self.cakes.find_all().await?)
    }

    async fn get_by_id(&self, id: CakeId) -> Result<Cake, AppError> {
        self.cakes
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    async fn create(&self, cake: NewCake) -> Result<Cake, AppError> {
        let cake = self.cakes.create(&cake).await?;

        tracing::debug!(cake_id = %cake.id, "Created cake");
        Ok(cake)
    }

    async fn update(&self, id: CakeId, update: CakeUpdate) -> Result<Cake, AppError> {
        let cake = self
            .cakes
            .update(id, &update)
            .await?
            .ok_or_else(|| not_found(id))?;

        tracing::debug!(cake_id = %id, "Updated cake");
        Ok(cake)
    }

    async fn delete(&self, id: CakeId) -> Result<(), AppError> {
        if !self.cakes.delete(id).await? {
            return Err(not_found(id));
        }

        tracing::debug!(cake_id = %id, "Deleted cake");
        Ok(())
    }
}

fn not_found(id: CakeId) -> AppError {
    AppError::Domain(DomainError::NotFound(format!("Cake {} not found", id)))
}
