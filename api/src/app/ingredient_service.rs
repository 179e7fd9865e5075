//! Ingredient service
//!
//! CRUD over the ingredient store. Records here are independent of any
//! recipe and of the inventory.

use std::sync::Arc;

use crate::domain::entities::Ingredient;
use crate::domain::ports::IngredientRepository;
use crate::error::{AppError, DomainError};

/// Service for managing ingredient records
pub struct IngredientService<IR>
where
    IR: IngredientRepository + ?Sized,
{
    ingredients: Arc<IR>,
}

impl<IR> IngredientService<IR>
where
    IR: IngredientRepository + ?Sized,
{
    pub fn new(ingredients: Arc<IR>) -> Self {
        Self { ingredients }
    }

    pub async fn list(&self) -> Result<Vec<Ingredient>, AppError> {
        Ok(self.ingredients.find_all().await?)
    }

    pub async fn get(&self, name: &str) -> Result<Ingredient, AppError> {
        self.ingredients
            .find_by_name(name)
            .await?
            .ok_or_else(|| AppError::Domain(DomainError::IngredientNotFound(name.to_string())))
    }

    /// Add an ingredient record. Names are unique.
    pub async fn create(&self, ingredient: Ingredient) -> Result<Ingredient, AppError> {
        let name = ingredient
            .name()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .ok_or_else(|| {
                AppError::Domain(DomainError::Validation(
                    "Ingredient name is required".to_string(),
                ))
            })?
            .to_string();

        if ingredient.amount() < 0 {
            return Err(AppError::Domain(DomainError::InvalidAmount(format!(
                "Amount of {} cannot be negative: {}",
                name,
                ingredient.amount()
            ))));
        }

        if self.ingredients.find_by_name(&name).await?.is_some() {
            return Err(AppError::Domain(DomainError::DuplicateIngredientName(name)));
        }

        let created = self
            .ingredients
            .create(&Ingredient::new(name.as_str(), ingredient.amount()))
            .await?;
        tracing::info!(ingredient = %name, amount = created.amount(), "Ingredient added");
        Ok(created)
    }

    pub async fn delete(&self, name: &str) -> Result<(), AppError> {
        if !self.ingredients.delete(name).await? {
            return Err(AppError::Domain(DomainError::IngredientNotFound(
                name.to_string(),
            )));
        }
        tracing::info!(ingredient = %name, "Ingredient deleted");
        Ok(())
    }
}
