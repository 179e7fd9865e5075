//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use crate::domain::entities::{Inventory, Recipe, CHOCOLATE, COFFEE, MILK, SUGAR};

/// Create a recipe using the four well-known ingredients
pub fn test_recipe(
    name: &str,
    price: i32,
    coffee: i32,
    milk: i32,
    sugar: i32,
    chocolate: i32,
) -> Recipe {
    Recipe::new(name, price)
        .with_ingredient(COFFEE, coffee)
        .with_ingredient(MILK, milk)
        .with_ingredient(SUGAR, sugar)
        .with_ingredient(CHOCOLATE, chocolate)
}

/// The "Coffee" recipe: price 50, needs 3 coffee, 1 milk, 1 sugar
pub fn test_coffee() -> Recipe {
    test_recipe("Coffee", 50, 3, 1, 1, 0)
}

/// Inventory with the same amount of every well-known ingredient
pub fn test_inventory(amount: i32) -> Inventory {
    Inventory::with_stock(amount, amount, amount, amount).unwrap()
}
