//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (e.g., PostgreSQL).
//! Business rules (name uniqueness, the recipe cap) live in the services,
//! not here.

use async_trait::async_trait;

use crate::domain::entities::{Ingredient, Inventory, Recipe};
use crate::error::DomainError;

/// Repository for Recipe entities, keyed by name
#[async_trait]
pub trait RecipeRepository: Send + Sync {
    /// Find a recipe by name
    async fn find_by_name(&self, name: &str) -> Result<Option<Recipe>, DomainError>;

    /// All recipes in creation order
    async fn find_all(&self) -> Result<Vec<Recipe>, DomainError>;

    /// Number of stored recipes
    async fn count(&self) -> Result<u64, DomainError>;

    /// Store a new recipe with its ingredients
    async fn create(&self, recipe: &Recipe) -> Result<Recipe, DomainError>;

    /// Replace price and ingredients of the recipe with the same name
    async fn update(&self, recipe: &Recipe) -> Result<Recipe, DomainError>;

    /// Delete a recipe by name. Returns false if nothing was deleted.
    async fn delete(&self, name: &str) -> Result<bool, DomainError>;
}

/// Repository for standalone Ingredient records
#[async_trait]
pub trait IngredientRepository: Send + Sync {
    /// Find an ingredient by name
    async fn find_by_name(&self, name: &str) -> Result<Option<Ingredient>, DomainError>;

    /// All ingredients in creation order
    async fn find_all(&self) -> Result<Vec<Ingredient>, DomainError>;

    /// Store a new ingredient
    async fn create(&self, ingredient: &Ingredient) -> Result<Ingredient, DomainError>;

    /// Delete an ingredient by name. Returns false if nothing was deleted.
    async fn delete(&self, name: &str) -> Result<bool, DomainError>;
}

/// Repository for the single machine inventory
#[async_trait]
pub trait InventoryRepository: Send + Sync {
    /// Load the inventory. An empty store yields an empty inventory.
    async fn load(&self) -> Result<Inventory, DomainError>;

    /// Persist every quantity of the inventory in one unit of work
    async fn save(&self, inventory: &Inventory) -> Result<(), DomainError>;
}
