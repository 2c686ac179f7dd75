use axum::{
    Json,
    extract::{Path, Query, State},
};
use mealplanner_recipe::{FilterQuery, RecipeRow, UpdateRecipeInput};
use serde_json::{Value, json};

use crate::{
    error::{ApiError, ApiResult},
    routes::AppState,
};

pub async fn list(
    State(state): State<AppState>,
    Query(input): Query<FilterQuery>,
) -> ApiResult<Json<Vec<RecipeRow>>> {
    Ok(Json(state.recipe_query.filter(input).await?))
}

pub async fn detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<RecipeRow>> {
    match state.recipe_query.find(id).await? {
        Some(recipe) => Ok(Json(recipe)),
        None => Err(ApiError::not_found("Recipe not found")),
    }
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<UpdateRecipeInput>,
) -> ApiResult<Json<Value>> {
    state.recipe_command.update(id, input).await?;

    Ok(Json(json!({"success": true, "message": "Recipe updated"})))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Value>> {
    state.recipe_command.delete(id).await?;

    Ok(Json(json!({"success": true, "message": "Recipe deleted"})))
}
