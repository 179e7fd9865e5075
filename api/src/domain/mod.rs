//! Domain layer
//!
//! Contains pure business logic with no external dependencies.
//! - `entities`: Ingredient, Recipe and Inventory with the consumption rules
//! - `ports`: Trait definitions for persistence

pub mod entities;
pub mod ports;
