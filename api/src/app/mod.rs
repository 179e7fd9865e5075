//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities and the repository ports.

pub mod ingredient_service;
pub mod inventory_service;
pub mod recipe_service;
pub mod vending_service;

pub use ingredient_service::IngredientService;
pub use inventory_service::InventoryService;
pub use recipe_service::RecipeService;
pub use vending_service::VendingService;
