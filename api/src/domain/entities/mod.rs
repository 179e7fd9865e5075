//! Domain entities
//!
//! Pure domain models representing core business concepts.
//! These are separate from the SeaORM entities in the `entity` module.

pub mod ingredient;
pub mod inventory;
pub mod recipe;

pub use ingredient::Ingredient;
pub use inventory::{
    Inventory, CHOCOLATE, COFFEE, MILK, NOT_STOCKED, SUGAR, WELL_KNOWN_INGREDIENTS,
};
pub use recipe::{Recipe, MAX_RECIPES};
