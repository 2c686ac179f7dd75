use axum::{
    Json, Router,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, patch, post},
};
use serde_json::json;
use sqlx::SqlitePool;
use tower_http::cors::CorsLayer;

mod grocery_lists;
mod health;
mod import;
mod meal_plans;
mod recipes;
mod webhook;

#[derive(Clone)]
pub struct AppState {
    pub recipe_command: mealplanner_recipe::Command,
    pub recipe_query: mealplanner_recipe::Query,
    pub mealplan_command: mealplanner_mealplan::Command,
    pub mealplan_query: mealplanner_mealplan::Query,
    pub grocery_command: mealplanner_grocery::Command,
    pub grocery_query: mealplanner_grocery::Query,
    pub pool: SqlitePool,
}

impl AppState {
    pub fn new(state: mealplanner_shared::State) -> Self {
        Self {
            recipe_command: mealplanner_recipe::Command::new(state.clone()),
            recipe_query: mealplanner_recipe::Query(state.read_db.clone()),
            mealplan_command: mealplanner_mealplan::Command::new(state.clone()),
            mealplan_query: mealplanner_mealplan::Query(state.read_db.clone()),
            grocery_command: mealplanner_grocery::Command::new(state.clone()),
            grocery_query: mealplanner_grocery::Query(state.read_db.clone()),
            pool: state.read_db,
        }
    }
}

pub async fn fallback() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(json!({"error": "Not found"})))
}

pub fn router(app_state: AppState) -> Router {
    let api = Router::new()
        .route("/recipes", get(recipes::list))
        .route(
            "/recipes/{id}",
            get(recipes::detail)
                .patch(recipes::update)
                .delete(recipes::delete),
        )
        .route("/meal-plans", get(meal_plans::list).post(meal_plans::add))
        .route(
            "/meal-plans/{id}",
            patch(meal_plans::update).delete(meal_plans::delete),
        )
        .route(
            "/grocery-lists",
            get(grocery_lists::list).post(grocery_lists::create),
        )
        .route("/grocery-lists/preview", get(grocery_lists::preview))
        .route("/grocery-lists/generate", post(grocery_lists::generate))
        .route(
            "/grocery-lists/{id}",
            get(grocery_lists::detail).delete(grocery_lists::delete),
        )
        .route("/grocery-lists/{id}/items", post(grocery_lists::add_item))
        .route(
            "/grocery-lists/{id}/items/{item_id}",
            patch(grocery_lists::set_checked).delete(grocery_lists::delete_item),
        )
        .route("/webhook/recipe", post(webhook::recipe))
        .route("/import/recipes/bulk", post(import::bulk));

    Router::new()
        // Health check endpoints
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .with_state(app_state.pool.clone())
        .nest("/api", api)
        .fallback(fallback)
        .with_state(app_state)
        .layer(CorsLayer::permissive())
}
