//! CoffeeMaker API Server
//!
//! A coffee vending machine: a recipe book of at most three recipes, an
//! ingredient store, and one shared inventory that drinks are made from.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{
    routing::{get, post, put},
    Json, Router,
};
use sea_orm::Database;
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod entity;
mod error;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::{
    create_schema, PostgresIngredientRepository, PostgresInventoryRepository,
    PostgresRecipeRepository,
};
use app::{IngredientService, InventoryService, RecipeService, VendingService};
use config::Config;
use domain::ports::{IngredientRepository, InventoryRepository, RecipeRepository};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub recipe_service: Arc<RecipeService<dyn RecipeRepository>>,
    pub ingredient_service: Arc<IngredientService<dyn IngredientRepository>>,
    pub inventory_service: Arc<InventoryService<dyn InventoryRepository>>,
    pub vending_service: Arc<VendingService<dyn RecipeRepository, dyn InventoryRepository>>,
}

impl AppState {
    /// Wire the services over the given repositories
    pub fn new(
        recipes: Arc<dyn RecipeRepository>,
        ingredients: Arc<dyn IngredientRepository>,
        inventory: Arc<dyn InventoryRepository>,
    ) -> Self {
        let inventory_service = Arc::new(InventoryService::new(inventory));

        Self {
            recipe_service: Arc::new(RecipeService::new(recipes.clone())),
            ingredient_service: Arc::new(IngredientService::new(ingredients)),
            vending_service: Arc::new(VendingService::new(recipes, inventory_service.clone())),
            inventory_service,
        }
    }
}

#[derive(Serialize, Deserialize)]
struct HealthResponse {
    status: String,
    version: String,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Build the HTTP router
pub fn build_router(state: AppState) -> Router {
    let api = Router::new()
        .route(
            "/recipes",
            get(handlers::list_recipes).post(handlers::create_recipe),
        )
        .route(
            "/recipes/:name",
            get(handlers::get_recipe)
                .put(handlers::update_recipe)
                .delete(handlers::delete_recipe),
        )
        .route(
            "/ingredients",
            get(handlers::list_ingredients).post(handlers::create_ingredient),
        )
        .route(
            "/ingredients/:name",
            get(handlers::get_ingredient).delete(handlers::delete_ingredient),
        )
        .route(
            "/inventory",
            get(handlers::get_inventory).put(handlers::restock_inventory),
        )
        .route(
            "/inventory/:name",
            put(handlers::put_inventory_ingredient),
        )
        .route("/makecoffee/:name", post(handlers::make_coffee));

    Router::new()
        // Health check
        .route("/health", get(health))
        .nest("/api/v1", api)
        // Middleware
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,coffeemaker_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting CoffeeMaker API...");

    // Load configuration
    let config = Config::from_env()?;

    // Connect to PostgreSQL
    tracing::info!("Connecting to database...");
    let db = Database::connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Database connected");

    create_schema(&db)
        .await
        .context("Failed to create database schema")?;

    // Create adapters
    let recipe_repo = Arc::new(PostgresRecipeRepository::new(db.clone()));
    let ingredient_repo = Arc::new(PostgresIngredientRepository::new(db.clone()));
    let inventory_repo = Arc::new(PostgresInventoryRepository::new(db.clone()));

    let state = AppState::new(recipe_repo, ingredient_repo, inventory_repo);

    state
        .inventory_service
        .initialize(config.initial_stock)
        .await
        .context("Failed to initialize inventory")?;

    let app = build_router(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
