//! PostgreSQL adapters
//!
//! Implementations of repository traits using SeaORM and PostgreSQL.

pub mod ingredient_repo;
pub mod inventory_repo;
pub mod recipe_repo;
pub mod schema;


pub use ingredient_repo::PostgresIngredientRepository;
pub use inventory_repo::PostgresInventoryRepository;
pub use recipe_repo::PostgresRecipeRepository;
pub use schema::create_schema;
