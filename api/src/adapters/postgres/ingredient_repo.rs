//! PostgreSQL adapter for IngredientRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use crate::domain::entities::Ingredient;
use crate::domain::ports::IngredientRepository;
use crate::entity::ingredients;
use crate::error::DomainError;

/// PostgreSQL implementation of IngredientRepository
pub struct PostgresIngredientRepository {
    db: DatabaseConnection,
}

impl PostgresIngredientRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl IngredientRepository for PostgresIngredientRepository {
    async fn find_by_name(&self, name: &str) -> Result<Option<Ingredient>, DomainError> {
        let result = ingredients::Entity::find()
            .filter(ingredients::Column::Name.eq(name))
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }

    async fn find_all(&self) -> Result<Vec<Ingredient>, DomainError> {
        let results = ingredients::Entity::find()
            .order_by_asc(ingredients::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn create(&self, ingredient: &Ingredient) -> Result<Ingredient, DomainError> {
        let name = ingredient
            .name()
            .ok_or_else(|| DomainError::Validation("Ingredient name is required".to_string()))?;

        let model = ingredients::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(name.to_string()),
            amount: Set(ingredient.amount()),
            created_at: Set(Utc::now().fixed_offset()),
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.into())
    }

    async fn delete(&self, name: &str) -> Result<bool, DomainError> {
        let result = ingredients::Entity::delete_many()
            .filter(ingredients::Column::Name.eq(name))
            .exec(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.rows_affected > 0)
    }
}

/// Convert SeaORM model to domain entity
impl From<ingredients::Model> for Ingredient {
    fn from(model: ingredients::Model) -> Self {
        Ingredient::new(model.name, model.amount)
    }
}
