//! PostgreSQL adapter for CakeRepository

use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, Schema, Set,
};

use crate::domain::entities::{Cake, CakeId, CakeUpdate, NewCake};
use crate::domain::ports::CakeRepository;
use crate::entity::cakes;
use crate::error::DomainError;

/// PostgreSQL implementation of CakeRepository
pub struct PostgresCakeRepository {
    db: DatabaseConnection,
}

impl PostgresCakeRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Create the `cakes` table if it does not exist yet
    pub async fn ensure_schema(&self) -> Result<(), DomainError> {
        let backend = self.db.get_database_backend();
        let schema = Schema::new(backend);
        let mut create = schema.create_table_from_entity(cakes::Entity);
        create.if_not_exists();

        self.db
            .execute(backend.build(&create))
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl CakeRepository for PostgresCakeRepository {
    async fn find_all(&self) -> Result<Vec<Cake>, DomainError> {
        let results = cakes::Entity::find()
            .order_by_asc(cakes::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn find_by_id(&self, id: CakeId) -> Result<Option<Cake>, DomainError> {
        let result = cakes::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }

    async fn create(&self, cake: &NewCake) -> Result<Cake, DomainError> {
        // id is left NotSet so the BIGSERIAL sequence assigns it
        let model = cakes::ActiveModel {
            title: Set(cake.title.clone()),
            description: Set(cake.description.clone()),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.into())
    }

    async fn update(&self, id: CakeId, update: &CakeUpdate) -> Result<Option<Cake>, DomainError> {
        // Single statement, so a concurrent delete shows up as zero rows
        let result = cakes::Entity::update_many()
            .col_expr(cakes::Column::Title, Expr::value(update.title.clone()))
            .col_expr(
                cakes::Column::Description,
                Expr::value(update.description.clone()),
            )
            .filter(cakes::Column::Id.eq(id.0))
            .exec(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        Ok(Some(Cake {
            id,
            title: update.title.clone(),
            description: update.description.clone(),
        }))
    }

    async fn delete(&self, id: CakeId) -> Result<bool, DomainError> {
        let result = cakes::Entity::delete_by_id(id.0)
            .exec(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.rows_affected > 0)
    }
}

impl From<cakes::Model> for Cake {
    fn from(m: cakes::Model) -> Self {
        Cake {
            id: CakeId(m.id),
            title: m.title,
            description: m.description,
        }
    }
}
