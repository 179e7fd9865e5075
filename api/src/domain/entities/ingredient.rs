//! Ingredient domain entity
//!
//! A (name, amount) pair used both as a recipe requirement and as a stock
//! entry in the ingredient store.

use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// Ingredient with a name and a quantity.
///
/// Equality and hashing consider only `name`; `amount` is not part of an
/// ingredient's identity. Two unnamed ingredients are equal to each other.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Ingredient {
    name: Option<String>,
    amount: i32,
}

impl Ingredient {
    pub fn new(name: impl Into<String>, amount: i32) -> Self {
        Self {
            name: Some(name.into()),
            amount,
        }
    }

    /// Ingredient without a name
    pub fn unnamed(amount: i32) -> Self {
        Self { name: None, amount }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = Some(name.into());
    }

    pub fn amount(&self) -> i32 {
        self.amount
    }

    pub fn set_amount(&mut self, amount: i32) {
        self.amount = amount;
    }
}

impl PartialEq for Ingredient {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Ingredient {}

impl Hash for Ingredient {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl std::fmt::Display for Ingredient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.name {
            Some(name) => write!(f, "{}: {}", name, self.amount),
            None => write!(f, "<unnamed>: {}", self.amount),
        }
    }
}
