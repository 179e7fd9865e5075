//! Inventory domain entity
//!
//! The on-hand quantity of every stocked ingredient. There is exactly one
//! inventory per machine; `InventoryService` owns its lifecycle.

use std::collections::BTreeMap;

use serde::Serialize;

use super::Recipe;
use crate::error::DomainError;

pub const COFFEE: &str = "Coffee";
pub const MILK: &str = "Milk";
pub const SUGAR: &str = "Sugar";
pub const CHOCOLATE: &str = "Chocolate";

/// The four ingredients every machine stocks
pub const WELL_KNOWN_INGREDIENTS: [&str; 4] = [COFFEE, MILK, SUGAR, CHOCOLATE];

/// Returned by [`Inventory::get_amount`] for an ingredient that is not stocked
pub const NOT_STOCKED: i32 = -1;

/// Mapping from ingredient name to on-hand amount.
///
/// Invariant: every stored amount is >= 0. Mutations either fully apply or
/// leave the map untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Inventory {
    quantities: BTreeMap<String, i32>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inventory holding only the four well-known ingredients
    pub fn with_stock(
        coffee: i32,
        milk: i32,
        sugar: i32,
        chocolate: i32,
    ) -> Result<Self, DomainError> {
        let mut inventory = Self::new();
        inventory.add_ingredients(coffee, milk, sugar, chocolate)?;
        Ok(inventory)
    }

    /// Rebuild an inventory from persisted quantities
    pub fn from_quantities(quantities: BTreeMap<String, i32>) -> Result<Self, DomainError> {
        if let Some((name, amount)) = quantities.iter().find(|(_, amount)| **amount < 0) {
            return Err(DomainError::InvalidAmount(format!(
                "Stored amount for {} is negative: {}",
                name, amount
            )));
        }
        Ok(Self { quantities })
    }

    pub fn quantities(&self) -> &BTreeMap<String, i32> {
        &self.quantities
    }

    /// Amount on hand for `name`, or [`NOT_STOCKED`] (-1) if the ingredient
    /// is unknown to the inventory.
    pub fn get_amount(&self, name: &str) -> i32 {
        self.amount_of(name).unwrap_or(NOT_STOCKED)
    }

    /// Amount on hand for `name`, `None` if not stocked
    pub fn amount_of(&self, name: &str) -> Option<i32> {
        self.quantities.get(name).copied()
    }

    /// Additive restock of the four well-known ingredients.
    ///
    /// All four amounts are checked before anything is written.
    pub fn add_ingredients(
        &mut self,
        coffee: i32,
        milk: i32,
        sugar: i32,
        chocolate: i32,
    ) -> Result<(), DomainError> {
        let additions = [(COFFEE, coffee), (MILK, milk), (SUGAR, sugar), (CHOCOLATE, chocolate)];

        if additions.iter().any(|(_, amount)| *amount < 0) {
            return Err(DomainError::InvalidAmount(
                "Amount cannot be negative".to_string(),
            ));
        }

        let mut staged = Vec::with_capacity(additions.len());
        for (name, amount) in additions {
            let current = self.amount_of(name).unwrap_or(0);
            let total = current.checked_add(amount).ok_or_else(|| {
                DomainError::InvalidAmount(format!("Amount of {} would overflow", name))
            })?;
            staged.push((name, total));
        }

        for (name, total) in staged {
            self.quantities.insert(name.to_string(), total);
        }
        Ok(())
    }

    /// Set the amount for an arbitrary ingredient, replacing any prior value.
    pub fn put_ingredient(&mut self, name: &str, amount: i32) -> Result<i32, DomainError> {
        if amount < 0 {
            return Err(DomainError::InvalidAmount(
                "Amount must be a positive integer".to_string(),
            ));
        }
        self.quantities.insert(name.to_string(), amount);
        Ok(amount)
    }

    /// True when every ingredient the recipe needs is on hand.
    ///
    /// Ingredients the inventory does not stock count as zero on hand.
    /// Requirements for the same name listed more than once are summed.
    pub fn enough_ingredients(&self, recipe: &Recipe) -> bool {
        requirements(recipe)
            .into_iter()
            .all(|(name, required)| self.on_hand(name) >= required)
    }

    /// Deduct the recipe's requirements if, and only if, all of them are
    /// satisfied. Returns false and leaves the inventory untouched otherwise.
    pub fn use_ingredients(&mut self, recipe: &Recipe) -> bool {
        if !self.enough_ingredients(recipe) {
            return false;
        }

        let mut staged = Vec::new();
        for (name, required) in requirements(recipe) {
            let Some(name) = name else { continue };
            let Some(current) = self.amount_of(name) else {
                continue;
            };
            match i32::try_from(i64::from(current) - required) {
                Ok(remaining) => staged.push((name, remaining)),
                Err(_) => return false,
            }
        }

        for (name, remaining) in staged {
            self.quantities.insert(name.to_string(), remaining);
        }
        true
    }

    fn on_hand(&self, name: Option<&str>) -> i64 {
        name.and_then(|n| self.amount_of(n))
            .map(i64::from)
            .unwrap_or(0)
    }
}

/// Total requirement per ingredient name, in first-seen order
fn requirements(recipe: &Recipe) -> Vec<(Option<&str>, i64)> {
    let mut totals: Vec<(Option<&str>, i64)> = Vec::new();
    for ingredient in recipe.ingredients() {
        let amount = i64::from(ingredient.amount());
        match totals.iter_mut().find(|(name, _)| *name == ingredient.name()) {
            Some((_, total)) => *total += amount,
            None => totals.push((ingredient.name(), amount)),
        }
    }
    totals
}

impl std::fmt::Display for Inventory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (name, amount) in &self.quantities {
            writeln!(f, "{}: {}", name, amount)?;
        }
        Ok(())
    }
}
