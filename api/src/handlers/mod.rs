//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod coffee;
pub mod ingredients;
pub mod inventory;
pub mod recipes;

pub use coffee::make_coffee;
pub use ingredients::{create_ingredient, delete_ingredient, get_ingredient, list_ingredients};
pub use inventory::{get_inventory, put_inventory_ingredient, restock_inventory};
pub use recipes::{create_recipe, delete_recipe, get_recipe, list_recipes, update_recipe};
