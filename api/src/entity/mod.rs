//! SeaORM entities
//!
//! Table definitions used by the PostgreSQL adapters.

pub mod ingredients;
pub mod inventory_items;
pub mod recipe_ingredients;
pub mod recipes;
