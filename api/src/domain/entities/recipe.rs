//! Recipe domain entity
//!
//! A named, priced bundle of ingredient requirements.

use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use super::Ingredient;

/// Maximum number of recipes the machine can hold at once
pub const MAX_RECIPES: usize = 3;

/// Recipe for a beverage.
///
/// Equality and hashing consider only `name`. Range checks on price and
/// ingredient amounts are not performed here; see `RecipeService`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Recipe {
    name: Option<String>,
    price: i32,
    ingredients: Vec<Ingredient>,
}

impl Recipe {
    pub fn new(name: impl Into<String>, price: i32) -> Self {
        Self {
            name: Some(name.into()),
            price,
            ingredients: Vec::new(),
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = Some(name.into());
    }

    pub fn price(&self) -> i32 {
        self.price
    }

    pub fn set_price(&mut self, price: i32) {
        self.price = price;
    }

    pub fn ingredients(&self) -> &[Ingredient] {
        &self.ingredients
    }

    /// Append an ingredient. No de-duplication happens here.
    pub fn add_ingredient(&mut self, ingredient: Ingredient) {
        self.ingredients.push(ingredient);
    }

    /// Builder-style `add_ingredient`
    pub fn with_ingredient(mut self, name: impl Into<String>, amount: i32) -> Self {
        self.add_ingredient(Ingredient::new(name, amount));
        self
    }

    /// Replace the ingredient list, keeping the given order
    pub fn set_ingredients(&mut self, ingredients: Vec<Ingredient>) {
        self.ingredients = ingredients;
    }

    /// A recipe is valid when at least one ingredient has a positive amount.
    pub fn check_recipe(&self) -> bool {
        self.ingredients.iter().any(|i| i.amount() > 0)
    }
}

impl PartialEq for Recipe {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Recipe {}

impl Hash for Recipe {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl std::fmt::Display for Recipe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let ingredients: Vec<String> = self.ingredients.iter().map(|i| i.to_string()).collect();
        write!(
            f,
            "{} ({}) [{}]",
            self.name.as_deref().unwrap_or("<unnamed>"),
            self.price,
            ingredients.join(", ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn check_recipe_requires_a_positive_amount() {
        let recipe = Recipe::new("Coffee", 50)
            .with_ingredient("Coffee", 3)
            .with_ingredient("Chocolate", 0);
        assert!(recipe.check_recipe());
    }

    #[test]
    fn check_recipe_rejects_empty_and_all_zero() {
        assert!(!Recipe::new("Empty", 5).check_recipe());

        let zero = Recipe::new("Water", 0)
            .with_ingredient("Coffee", 0)
            .with_ingredient("Milk", 0);
        assert!(!zero.check_recipe());
    }

    #[test]
    fn add_ingredient_keeps_order_and_duplicates() {
        let mut recipe = Recipe::new("Mocha", 10);
        recipe.add_ingredient(Ingredient::new("Chocolate", 2));
        recipe.add_ingredient(Ingredient::new("Coffee", 5));
        recipe.add_ingredient(Ingredient::new("Chocolate", 1));

        let names: Vec<_> = recipe.ingredients().iter().map(|i| i.name()).collect();
        assert_eq!(
            names,
            vec![Some("Chocolate"), Some("Coffee"), Some("Chocolate")]
        );
    }

    #[test]
    fn equality_is_by_name_only() {
        let a = Recipe::new("Latte", 60).with_ingredient("Milk", 2);
        let b = Recipe::new("Latte", 1).with_ingredient("Coffee", 9);
        let c = Recipe::new("Mocha", 60).with_ingredient("Milk", 2);

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(Recipe::default(), Recipe::default());
    }

    #[test]
    fn hash_is_by_name_only() {
        let mut set = HashSet::new();
        set.insert(Recipe::new("Latte", 60));
        set.insert(Recipe::new("Latte", 70));
        set.insert(Recipe::default());
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn set_price_and_name() {
        let mut recipe = Recipe::default();
        recipe.set_name("Coffee");
        recipe.set_price(70);
        assert_eq!(recipe.name(), Some("Coffee"));
        assert_eq!(recipe.price(), 70);
    }

    #[test]
    fn display_lists_ingredients() {
        let recipe = Recipe::new("Mocha", 10)
            .with_ingredient("Chocolate", 2)
            .with_ingredient("Coffee", 5);
        assert_eq!(recipe.to_string(), "Mocha (10) [Chocolate: 2, Coffee: 5]");
    }
}
