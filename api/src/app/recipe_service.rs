//! Recipe service
//!
//! Validates recipes and enforces the recipe book rules: unique names and at
//! most [`MAX_RECIPES`] recipes.

use std::collections::HashSet;
use std::sync::Arc;

use crate::domain::entities::{Ingredient, Recipe, MAX_RECIPES};
use crate::domain::ports::RecipeRepository;
use crate::error::{AppError, DomainError};

/// Service for managing the recipe book
pub struct RecipeService<RR>
where
    RR: RecipeRepository + ?Sized,
{
    recipes: Arc<RR>,
}

impl<RR> RecipeService<RR>
where
    RR: RecipeRepository + ?Sized,
{
    pub fn new(recipes: Arc<RR>) -> Self {
        Self { recipes }
    }

    /// All recipes in creation order
    pub async fn list(&self) -> Result<Vec<Recipe>, AppError> {
        Ok(self.recipes.find_all().await?)
    }

    /// Find a recipe by name
    pub async fn get(&self, name: &str) -> Result<Recipe, AppError> {
        self.recipes
            .find_by_name(name)
            .await?
            .ok_or_else(|| AppError::Domain(DomainError::RecipeNotFound(name.to_string())))
    }

    /// Add a recipe to the recipe book
    ///
    /// Checks, in order: recipe validity, duplicate name, recipe cap.
    pub async fn create(&self, recipe: Recipe) -> Result<Recipe, AppError> {
        validate_recipe(&recipe)?;
        let name = recipe.name().unwrap_or_default().to_string();

        if self.recipes.find_by_name(&name).await?.is_some() {
            return Err(AppError::Domain(DomainError::DuplicateRecipeName(name)));
        }

        if self.recipes.count().await? >= MAX_RECIPES as u64 {
            tracing::warn!(recipe = %name, max = MAX_RECIPES, "Recipe book is full");
            return Err(AppError::Domain(DomainError::RecipeCapExceeded {
                name,
                max: MAX_RECIPES,
            }));
        }

        let created = self.recipes.create(&recipe).await?;
        tracing::info!(recipe = %name, price = created.price(), "Recipe added");
        Ok(created)
    }

    /// Replace the price and ingredients of an existing recipe
    pub async fn update(
        &self,
        name: &str,
        price: i32,
        ingredients: Vec<Ingredient>,
    ) -> Result<Recipe, AppError> {
        if self.recipes.find_by_name(name).await?.is_none() {
            return Err(AppError::Domain(DomainError::RecipeNotFound(
                name.to_string(),
            )));
        }

        let mut recipe = Recipe::new(name, price);
        recipe.set_ingredients(ingredients);
        validate_recipe(&recipe)?;

        let updated = self.recipes.update(&recipe).await?;
        tracing::info!(recipe = %name, price = price, "Recipe updated");
        Ok(updated)
    }

    /// Remove a recipe from the recipe book
    pub async fn delete(&self, name: &str) -> Result<(), AppError> {
        if !self.recipes.delete(name).await? {
            return Err(AppError::Domain(DomainError::RecipeNotFound(
                name.to_string(),
            )));
        }
        tracing::info!(recipe = %name, "Recipe deleted");
        Ok(())
    }
}

/// Boundary checks for a recipe before it is stored
pub fn validate_recipe(recipe: &Recipe) -> Result<(), DomainError> {
    let name = recipe.name().map(str::trim).unwrap_or_default();
    if name.is_empty() {
        return Err(DomainError::RecipeInvalid(
            "Recipe name is required".to_string(),
        ));
    }

    if recipe.price() < 0 {
        return Err(DomainError::RecipeInvalid(format!(
            "Price cannot be negative: {}",
            recipe.price()
        )));
    }

    let mut seen = HashSet::new();
    for ingredient in recipe.ingredients() {
        let Some(ingredient_name) = ingredient.name().filter(|n| !n.trim().is_empty()) else {
            return Err(DomainError::RecipeInvalid(
                "Ingredient name is required".to_string(),
            ));
        };
        if ingredient.amount() < 0 {
            return Err(DomainError::RecipeInvalid(format!(
                "Amount of {} cannot be negative: {}",
                ingredient_name,
                ingredient.amount()
            )));
        }
        if !seen.insert(ingredient) {
            return Err(DomainError::RecipeInvalid(format!(
                "Ingredient {} is listed more than once",
                ingredient_name
            )));
        }
    }

    if !recipe.check_recipe() {
        return Err(DomainError::RecipeInvalid(
            "Recipe needs at least one ingredient with a positive amount".to_string(),
        ));
    }

    Ok(())
}
