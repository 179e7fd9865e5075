//! Recipe handlers
//!
//! Endpoints for the recipe book.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use super::ingredients::IngredientResponse;
use crate::domain::entities::{Ingredient, Recipe};
use crate::error::AppError;
use crate::AppState;

/// One ingredient line of a recipe
#[derive(Debug, Serialize, Deserialize)]
pub struct RecipeIngredient {
    pub name: String,
    pub amount: i32,
}

impl From<RecipeIngredient> for Ingredient {
    fn from(i: RecipeIngredient) -> Self {
        Ingredient::new(i.name, i.amount)
    }
}

/// Recipe as returned by the API
#[derive(Debug, Serialize, Deserialize)]
pub struct RecipeResponse {
    pub name: String,
    pub price: i32,
    pub ingredients: Vec<IngredientResponse>,
}

impl From<Recipe> for RecipeResponse {
    fn from(recipe: Recipe) -> Self {
        Self {
            name: recipe.name().unwrap_or_default().to_string(),
            price: recipe.price(),
            ingredients: recipe
                .ingredients()
                .iter()
                .cloned()
                .map(IngredientResponse::from)
                .collect(),
        }
    }
}

/// Request to add a recipe
#[derive(Debug, Deserialize)]
pub struct CreateRecipeRequest {
    pub name: String,
    pub price: i32,
    #[serde(default)]
    pub ingredients: Vec<RecipeIngredient>,
}

/// Request to edit a recipe. The name comes from the path.
#[derive(Debug, Deserialize)]
pub struct UpdateRecipeRequest {
    pub price: i32,
    #[serde(default)]
    pub ingredients: Vec<RecipeIngredient>,
}

/// GET /recipes
pub async fn list_recipes(
    State(state): State<AppState>,
) -> Result<Json<Vec<RecipeResponse>>, AppError> {
    let recipes = state.recipe_service.list().await?;
    Ok(Json(recipes.into_iter().map(RecipeResponse::from).collect()))
}

/// GET /recipes/:name
pub async fn get_recipe(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<RecipeResponse>, AppError> {
    let recipe = state.recipe_service.get(&name).await?;
    Ok(Json(recipe.into()))
}

/// POST /recipes
///
/// Add a recipe. Fails once the recipe book holds three recipes.
pub async fn create_recipe(
    State(state): State<AppState>,
    Json(request): Json<CreateRecipeRequest>,
) -> Result<(StatusCode, Json<RecipeResponse>), AppError> {
    let mut recipe = Recipe::new(request.name, request.price);
    recipe.set_ingredients(request.ingredients.into_iter().map(Ingredient::from).collect());

    let created = state.recipe_service.create(recipe).await?;
    Ok((StatusCode::CREATED, Json(created.into())))
}

/// PUT /recipes/:name
///
/// Replace the price and ingredients of an existing recipe.
pub async fn update_recipe(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Json(request): Json<UpdateRecipeRequest>,
) -> Result<Json<RecipeResponse>, AppError> {
    let ingredients = request
        .ingredients
        .into_iter()
        .map(Ingredient::from)
        .collect();

    let updated = state
        .recipe_service
        .update(&name, request.price, ingredients)
        .await?;
    Ok(Json(updated.into()))
}

/// DELETE /recipes/:name
pub async fn delete_recipe(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<StatusCode, AppError> {
    state.recipe_service.delete(&name).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_request_defaults_to_no_ingredients() {
        let request: CreateRecipeRequest =
            serde_json::from_str(r#"{"name":"Coffee","price":50}"#).unwrap();

        assert_eq!(request.name, "Coffee");
        assert!(request.ingredients.is_empty());
    }

    #[test]
    fn response_keeps_ingredient_order() {
        let recipe = Recipe::new("Mocha", 10)
            .with_ingredient("Coffee", 5)
            .with_ingredient("Chocolate", 2);

        let json = serde_json::to_value(RecipeResponse::from(recipe)).unwrap();

        assert_eq!(json["name"], "Mocha");
        assert_eq!(json["price"], 10);
        assert_eq!(json["ingredients"][0]["name"], "Coffee");
        assert_eq!(json["ingredients"][1]["amount"], 2);
    }
}
