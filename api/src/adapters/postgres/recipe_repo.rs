//! PostgreSQL adapter for RecipeRepository

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};
use uuid::Uuid;

use crate::domain::entities::{Ingredient, Recipe};
use crate::domain::ports::RecipeRepository;
use crate::entity::{recipe_ingredients, recipes};
use crate::error::DomainError;

/// PostgreSQL implementation of RecipeRepository
///
/// A recipe is one `recipes` row plus its `recipe_ingredients` rows, written
/// together in a single transaction.
pub struct PostgresRecipeRepository {
    db: DatabaseConnection,
}

impl PostgresRecipeRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Ingredient rows for the given recipes, grouped by recipe and ordered by position
    async fn load_ingredients(
        &self,
        recipe_ids: Vec<Uuid>,
    ) -> Result<HashMap<Uuid, Vec<recipe_ingredients::Model>>, DomainError> {
        if recipe_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = recipe_ingredients::Entity::find()
            .filter(recipe_ingredients::Column::RecipeId.is_in(recipe_ids))
            .order_by_asc(recipe_ingredients::Column::Position)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        let mut grouped: HashMap<Uuid, Vec<recipe_ingredients::Model>> = HashMap::new();
        for row in rows {
            grouped.entry(row.recipe_id).or_default().push(row);
        }
        Ok(grouped)
    }
}

#[async_trait]
impl RecipeRepository for PostgresRecipeRepository {
    async fn find_by_name(&self, name: &str) -> Result<Option<Recipe>, DomainError> {
        let result = recipes::Entity::find()
            .filter(recipes::Column::Name.eq(name))
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        let Some(model) = result else {
            return Ok(None);
        };

        let mut ingredients = self.load_ingredients(vec![model.id]).await?;
        let rows = ingredients.remove(&model.id).unwrap_or_default();
        Ok(Some(to_recipe(model, rows)))
    }

    async fn find_all(&self) -> Result<Vec<Recipe>, DomainError> {
        let models = recipes::Entity::find()
            .order_by_asc(recipes::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        let mut ingredients = self
            .load_ingredients(models.iter().map(|m| m.id).collect())
            .await?;

        Ok(models
            .into_iter()
            .map(|m| {
                let rows = ingredients.remove(&m.id).unwrap_or_default();
                to_recipe(m, rows)
            })
            .collect())
    }

    async fn count(&self) -> Result<u64, DomainError> {
        recipes::Entity::find()
            .count(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))
    }

    async fn create(&self, recipe: &Recipe) -> Result<Recipe, DomainError> {
        let name = recipe_name(recipe)?;
        let id = Uuid::new_v4();
        let now = Utc::now().fixed_offset();
        let ingredients = ingredient_models(id, recipe)?;

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        recipes::ActiveModel {
            id: Set(id),
            name: Set(name.to_string()),
            price: Set(recipe.price()),
            created_at: Set(now),
        }
        .insert(&txn)
        .await
        .map_err(|e| DomainError::Database(e.to_string()))?;

        if !ingredients.is_empty() {
            recipe_ingredients::Entity::insert_many(ingredients)
                .exec(&txn)
                .await
                .map_err(|e| DomainError::Database(e.to_string()))?;
        }

        txn.commit()
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(recipe.clone())
    }

    async fn update(&self, recipe: &Recipe) -> Result<Recipe, DomainError> {
        let name = recipe_name(recipe)?;

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        let existing = recipes::Entity::find()
            .filter(recipes::Column::Name.eq(name))
            .one(&txn)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?
            .ok_or_else(|| DomainError::RecipeNotFound(name.to_string()))?;

        let recipe_id = existing.id;
        let ingredients = ingredient_models(recipe_id, recipe)?;

        let mut active: recipes::ActiveModel = existing.into();
        active.price = Set(recipe.price());
        active
            .update(&txn)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        recipe_ingredients::Entity::delete_many()
            .filter(recipe_ingredients::Column::RecipeId.eq(recipe_id))
            .exec(&txn)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        if !ingredients.is_empty() {
            recipe_ingredients::Entity::insert_many(ingredients)
                .exec(&txn)
                .await
                .map_err(|e| DomainError::Database(e.to_string()))?;
        }

        txn.commit()
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(recipe.clone())
    }

    async fn delete(&self, name: &str) -> Result<bool, DomainError> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        let existing = recipes::Entity::find()
            .filter(recipes::Column::Name.eq(name))
            .one(&txn)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        let Some(existing) = existing else {
            return Ok(false);
        };

        recipe_ingredients::Entity::delete_many()
            .filter(recipe_ingredients::Column::RecipeId.eq(existing.id))
            .exec(&txn)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        recipes::Entity::delete_by_id(existing.id)
            .exec(&txn)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        txn.commit()
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(true)
    }
}

fn recipe_name(recipe: &Recipe) -> Result<&str, DomainError> {
    recipe
        .name()
        .ok_or_else(|| DomainError::RecipeInvalid("Recipe name is required".to_string()))
}

fn ingredient_models(
    recipe_id: Uuid,
    recipe: &Recipe,
) -> Result<Vec<recipe_ingredients::ActiveModel>, DomainError> {
    recipe
        .ingredients()
        .iter()
        .enumerate()
        .map(|(position, ingredient)| {
            let name = ingredient.name().ok_or_else(|| {
                DomainError::RecipeInvalid("Ingredient name is required".to_string())
            })?;
            Ok(recipe_ingredients::ActiveModel {
                id: Set(Uuid::new_v4()),
                recipe_id: Set(recipe_id),
                position: Set(position as i32),
                name: Set(name.to_string()),
                amount: Set(ingredient.amount()),
            })
        })
        .collect()
}

/// Convert SeaORM rows to the domain entity
fn to_recipe(model: recipes::Model, rows: Vec<recipe_ingredients::Model>) -> Recipe {
    let mut recipe = Recipe::new(model.name, model.price);
    for row in rows {
        recipe.add_ingredient(Ingredient::new(row.name, row.amount));
    }
    recipe
}
