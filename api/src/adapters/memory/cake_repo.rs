//! In-memory adapter for CakeRepository

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::entities::{Cake, CakeId, CakeUpdate, NewCake};
use crate::domain::ports::CakeRepository;
use crate::error::DomainError;

/// In-memory implementation of CakeRepository
///
/// Cakes are kept ordered by ID so listing follows creation order.
pub struct InMemoryCakeRepository {
    cakes: RwLock<BTreeMap<CakeId, Cake>>,
    next_id: AtomicI64,
}

impl Default for InMemoryCakeRepository {
    fn default() -> Self {
        Self {
            cakes: RwLock::new(BTreeMap::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

impl InMemoryCakeRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with a cake. The ID sequence moves past its ID.
    #[cfg(test)]
    pub fn with_cake(self, cake: Cake) -> Self {
        self.next_id.fetch_max(cake.id.0 + 1, Ordering::SeqCst);
        self.cakes
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .insert(cake.id, cake);
        self
    }
}

fn poisoned() -> DomainError {
    DomainError::Internal("cake store lock poisoned".to_string())
}

#[async_trait]
impl CakeRepository for InMemoryCakeRepository {
    async fn find_all(&self) -> Result<Vec<Cake>, DomainError> {
        let cakes = self.cakes.read().map_err(|_| poisoned())?;
        Ok(cakes.values().cloned().collect())
    }

    async fn find_by_id(&self, id: CakeId) -> Result<Option<Cake>, DomainError> {
        let cakes = self.cakes.read().map_err(|_| poisoned())?;
        Ok(cakes.get(&id).cloned())
    }

    async fn create(&self, new_cake: &NewCake) -> Result<Cake, DomainError> {
        let mut cakes = self.cakes.write().map_err(|_| poisoned())?;

        let cake = Cake {
            id: CakeId(self.next_id.fetch_add(1, Ordering::SeqCst)),
            title: new_cake.title.clone(),
            description: new_cake.description.clone(),
        };
        cakes.insert(cake.id, cake.clone());

        Ok(cake)
    }

    async fn update(&self, id: CakeId, update: &CakeUpdate) -> Result<Option<Cake>, DomainError> {
        let mut cakes = self.cakes.write().map_err(|_| poisoned())?;

        Ok(cakes.get_mut(&id).map(|cake| {
            cake.apply(update);
            cake.clone()
        }))
    }

    async fn delete(&self, id: CakeId) -> Result<bool, DomainError> {
        let mut cakes = self.cakes.write().map_err(|_| poisoned())?;
        Ok(cakes.remove(&id).is_some())
    }
}
