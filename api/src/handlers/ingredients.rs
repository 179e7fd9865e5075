//! Ingredient handlers
//!
//! Endpoints for the ingredient store.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::domain::entities::Ingredient;
use crate::error::AppError;
use crate::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct IngredientResponse {
    pub name: String,
    pub amount: i32,
}

impl From<Ingredient> for IngredientResponse {
    fn from(ingredient: Ingredient) -> Self {
        Self {
            name: ingredient.name().unwrap_or_default().to_string(),
            amount: ingredient.amount(),
        }
    }
}

/// Request to add an ingredient
#[derive(Debug, Deserialize)]
pub struct CreateIngredientRequest {
    pub name: String,
    #[serde(default)]
    pub amount: i32,
}

/// GET /ingredients
pub async fn list_ingredients(
    State(state): State<AppState>,
) -> Result<Json<Vec<IngredientResponse>>, AppError> {
    let ingredients = state.ingredient_service.list().await?;
    Ok(Json(
        ingredients
            .into_iter()
            .map(IngredientResponse::from)
            .collect(),
    ))
}

/// GET /ingredients/:name
pub async fn get_ingredient(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<IngredientResponse>, AppError> {
    let ingredient = state.ingredient_service.get(&name).await?;
    Ok(Json(ingredient.into()))
}

/// POST /ingredients
pub async fn create_ingredient(
    State(state): State<AppState>,
    Json(request): Json<CreateIngredientRequest>,
) -> Result<(StatusCode, Json<IngredientResponse>), AppError> {
    let created = state
        .ingredient_service
        .create(Ingredient::new(request.name, request.amount))
        .await?;
    Ok((StatusCode::CREATED, Json(created.into())))
}

/// DELETE /ingredients/:name
pub async fn delete_ingredient(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<StatusCode, AppError> {
    state.ingredient_service.delete(&name).await?;
    Ok(StatusCode::NO_CONTENT)
}
