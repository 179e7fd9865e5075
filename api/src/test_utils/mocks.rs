//! Mock implementations of port traits
//!
//! These are in-memory implementations that can be configured for testing.
//! They store data in memory and allow tests to verify behavior.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::domain::entities::{Ingredient, Inventory, Recipe};
use crate::domain::ports::{IngredientRepository, InventoryRepository, RecipeRepository};
use crate::error::DomainError;

// ============================================================================
// In-Memory Recipe Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryRecipeRepository {
    recipes: Arc<RwLock<Vec<Recipe>>>,
}

impl InMemoryRecipeRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with a recipe for testing
    pub fn with_recipe(self, recipe: Recipe) -> Self {
        self.recipes.write().unwrap().push(recipe);
        self
    }
}

#[async_trait]
impl RecipeRepository for InMemoryRecipeRepository {
    async fn find_by_name(&self, name: &str) -> Result<Option<Recipe>, DomainError> {
        let recipes = self.recipes.read().unwrap();
        Ok(recipes.iter().find(|r| r.name() == Some(name)).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Recipe>, DomainError> {
        Ok(self.recipes.read().unwrap().clone())
    }

    async fn count(&self) -> Result<u64, DomainError> {
        Ok(self.recipes.read().unwrap().len() as u64)
    }

    async fn create(&self, recipe: &Recipe) -> Result<Recipe, DomainError> {
        let mut recipes = self.recipes.write().unwrap();
        if recipes.contains(recipe) {
            return Err(DomainError::Database(
                "duplicate key value violates unique constraint".to_string(),
            ));
        }
        recipes.push(recipe.clone());
        Ok(recipe.clone())
    }

    async fn update(&self, recipe: &Recipe) -> Result<Recipe, DomainError> {
        let mut recipes = self.recipes.write().unwrap();
        match recipes.iter_mut().find(|r| r.name() == recipe.name()) {
            Some(existing) => {
                *existing = recipe.clone();
                Ok(recipe.clone())
            }
            None => Err(DomainError::RecipeNotFound(
                recipe.name().unwrap_or_default().to_string(),
            )),
        }
    }

    async fn delete(&self, name: &str) -> Result<bool, DomainError> {
        let mut recipes = self.recipes.write().unwrap();
        let before = recipes.len();
        recipes.retain(|r| r.name() != Some(name));
        Ok(recipes.len() < before)
    }
}

// ============================================================================
// In-Memory Ingredient Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryIngredientRepository {
    ingredients: Arc<RwLock<Vec<Ingredient>>>,
}

impl InMemoryIngredientRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with an ingredient for testing
    pub fn with_ingredient(self, ingredient: Ingredient) -> Self {
        self.ingredients.write().unwrap().push(ingredient);
        self
    }
}

#[async_trait]
impl IngredientRepository for InMemoryIngredientRepository {
    async fn find_by_name(&self, name: &str) -> Result<Option<Ingredient>, DomainError> {
        let ingredients = self.ingredients.read().unwrap();
        Ok(ingredients.iter().find(|i| i.name() == Some(name)).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Ingredient>, DomainError> {
        Ok(self.ingredients.read().unwrap().clone())
    }

    async fn create(&self, ingredient: &Ingredient) -> Result<Ingredient, DomainError> {
        self.ingredients.write().unwrap().push(ingredient.clone());
        Ok(ingredient.clone())
    }

    async fn delete(&self, name: &str) -> Result<bool, DomainError> {
        let mut ingredients = self.ingredients.write().unwrap();
        let before = ingredients.len();
        ingredients.retain(|i| i.name() != Some(name));
        Ok(ingredients.len() < before)
    }
}

// ============================================================================
// In-Memory Inventory Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryInventoryRepository {
    inventory: Arc<RwLock<Inventory>>,
    saves: Arc<RwLock<usize>>,
}

impl InMemoryInventoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with an inventory for testing
    pub fn with_inventory(self, inventory: Inventory) -> Self {
        *self.inventory.write().unwrap() = inventory;
        self
    }

    /// Snapshot of the stored inventory
    pub fn snapshot(&self) -> Inventory {
        self.inventory.read().unwrap().clone()
    }

    /// Number of times `save` was called
    pub fn save_count(&self) -> usize {
        *self.saves.read().unwrap()
    }
}

#[async_trait]
impl InventoryRepository for InMemoryInventoryRepository {
    async fn load(&self) -> Result<Inventory, DomainError> {
        Ok(self.inventory.read().unwrap().clone())
    }

    async fn save(&self, inventory: &Inventory) -> Result<(), DomainError> {
        *self.inventory.write().unwrap() = inventory.clone();
        *self.saves.write().unwrap() += 1;
        Ok(())
    }
}
