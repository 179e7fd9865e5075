//! Vending handler

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct MakeCoffeeResponse {
    pub recipe: String,
    pub paid: i32,
    pub change: i32,
    pub message: String,
}

/// POST /makecoffee/:name
///
/// Body is the paid amount as a bare integer.
pub async fn make_coffee(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Json(paid): Json<i32>,
) -> Result<Json<MakeCoffeeResponse>, AppError> {
    let change = state.vending_service.make_coffee(&name, paid).await?;

    Ok(Json(MakeCoffeeResponse {
        message: format!("Enjoy your {}", name),
        recipe: name,
        paid,
        change,
    }))
}
