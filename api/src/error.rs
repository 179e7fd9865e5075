//! Unified error types for the CoffeeMaker API
//!
//! This module defines error types for each layer:
//! - `DomainError`: Business rule and persistence errors
//! - `AppError`: Application layer errors (wraps domain errors for HTTP responses)

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Domain layer errors
///
/// Every business variant is a rejected operation: nothing is mutated when one
/// of these is returned.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Invalid recipe: {0}")]
    RecipeInvalid(String),

    #[error("Not enough money paid")]
    InsufficientPayment { paid: i32, price: i32 },

    #[error("Not enough inventory")]
    InsufficientInventory(String),

    #[error("No recipe selected: {0}")]
    RecipeNotFound(String),

    #[error("Ingredient not found: {0}")]
    IngredientNotFound(String),

    #[error("Recipe with the name {0} already exists")]
    DuplicateRecipeName(String),

    #[error("Ingredient with the name {0} already exists")]
    DuplicateIngredientName(String),

    #[error("Insufficient space in recipe book for recipe {name} (max {max})")]
    RecipeCapExceeded { name: String, max: usize },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Error response body for JSON responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::Domain(e) => match e {
                DomainError::RecipeNotFound(_) | DomainError::IngredientNotFound(_) => {
                    StatusCode::NOT_FOUND
                }
                DomainError::DuplicateRecipeName(_)
                | DomainError::DuplicateIngredientName(_)
                | DomainError::InsufficientPayment { .. }
                | DomainError::InsufficientInventory(_) => StatusCode::CONFLICT,
                DomainError::RecipeCapExceeded { .. } => StatusCode::INSUFFICIENT_STORAGE,
                DomainError::InvalidAmount(_)
                | DomainError::RecipeInvalid(_)
                | DomainError::Validation(_) => StatusCode::BAD_REQUEST,
                DomainError::Database(_) | DomainError::Internal(_) => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            },
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        let message = match &self {
            AppError::Domain(DomainError::Database(msg)) => {
                tracing::error!("Database error: {}", msg);
                "Internal server error".to_string()
            }
            AppError::Domain(DomainError::Internal(msg)) | AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "Internal server error".to_string()
            }
            AppError::Domain(e) => e.to_string(),
            AppError::BadRequest(msg) => msg.clone(),
        };

        (status, Json(ErrorResponse { message })).into_response()
    }
}
