//! Vending service
//!
//! Makes a drink: looks up the recipe, checks payment, then deducts the
//! ingredients through the inventory service and hands back the change.

use std::sync::Arc;

use super::InventoryService;
use crate::domain::ports::{InventoryRepository, RecipeRepository};
use crate::error::{AppError, DomainError};

pub struct VendingService<RR, VR>
where
    RR: RecipeRepository + ?Sized,
    VR: InventoryRepository + ?Sized,
{
    recipes: Arc<RR>,
    inventory: Arc<InventoryService<VR>>,
}

impl<RR, VR> VendingService<RR, VR>
where
    RR: RecipeRepository + ?Sized,
    VR: InventoryRepository + ?Sized,
{
    pub fn new(recipes: Arc<RR>, inventory: Arc<InventoryService<VR>>) -> Self {
        Self { recipes, inventory }
    }

    /// Make one drink and return the change.
    ///
    /// Rejections leave the inventory untouched. Checks run in this order:
    /// negative payment, unknown recipe, short payment, short inventory.
    pub async fn make_coffee(&self, name: &str, paid: i32) -> Result<i32, AppError> {
        if paid < 0 {
            return Err(AppError::Domain(DomainError::InvalidAmount(format!(
                "Paid amount cannot be negative: {}",
                paid
            ))));
        }

        let recipe = self
            .recipes
            .find_by_name(name)
            .await?
            .ok_or_else(|| AppError::Domain(DomainError::RecipeNotFound(name.to_string())))?;

        let price = recipe.price();
        if paid < price {
            tracing::debug!(recipe = %name, paid = paid, price = price, "Payment too low");
            return Err(AppError::Domain(DomainError::InsufficientPayment {
                paid,
                price,
            }));
        }

        if !self.inventory.consume(&recipe).await? {
            return Err(AppError::Domain(DomainError::InsufficientInventory(
                name.to_string(),
            )));
        }

        let change = paid - price;
        tracing::info!(recipe = %name, paid = paid, change = change, "Drink made");
        Ok(change)
    }
}
