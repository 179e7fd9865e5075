//! Inventory handlers
//!
//! Endpoints for reading and restocking the machine inventory.

use std::collections::BTreeMap;

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::domain::entities::Inventory;
use crate::error::AppError;
use crate::AppState;

/// Inventory as returned by the API
#[derive(Debug, Serialize, Deserialize)]
pub struct InventoryResponse {
    pub ingredients: BTreeMap<String, i32>,
}

impl From<Inventory> for InventoryResponse {
    fn from(inventory: Inventory) -> Self {
        Self {
            ingredients: inventory.quantities().clone(),
        }
    }
}

/// Amounts to add to the well-known ingredients. Missing fields add nothing.
#[derive(Debug, Default, Deserialize)]
pub struct RestockRequest {
    #[serde(default)]
    pub coffee: i32,
    #[serde(default)]
    pub milk: i32,
    #[serde(default)]
    pub sugar: i32,
    #[serde(default)]
    pub chocolate: i32,
}

/// GET /inventory
pub async fn get_inventory(
    State(state): State<AppState>,
) -> Result<Json<InventoryResponse>, AppError> {
    let inventory = state.inventory_service.get().await?;
    Ok(Json(inventory.into()))
}

/// PUT /inventory
///
/// Additive restock. A negative amount rejects the whole request.
pub async fn restock_inventory(
    State(state): State<AppState>,
    Json(request): Json<RestockRequest>,
) -> Result<Json<InventoryResponse>, AppError> {
    let inventory = state
        .inventory_service
        .restock(request.coffee, request.milk, request.sugar, request.chocolate)
        .await?;
    Ok(Json(inventory.into()))
}

/// PUT /inventory/:name
///
/// Body is the new amount as a bare integer.
pub async fn put_inventory_ingredient(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Json(amount): Json<i32>,
) -> Result<Json<InventoryResponse>, AppError> {
    let inventory = state.inventory_service.put_ingredient(&name, amount).await?;
    Ok(Json(inventory.into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn restock_fields_default_to_zero() {
        let request: RestockRequest = serde_json::from_str(r#"{"milk":4}"#).unwrap();

        assert_eq!(request.coffee, 0);
        assert_eq!(request.milk, 4);
        assert_eq!(request.sugar, 0);
        assert_eq!(request.chocolate, 0);
    }
}
