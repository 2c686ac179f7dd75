use axum::{Json, extract::State};
use mealplanner_recipe::ImportReport;
use serde::Serialize;
use serde_json::Value;

use crate::{
    error::{ApiError, ApiResult},
    routes::AppState,
};

#[derive(Serialize)]
pub struct ImportResponse {
    pub success: bool,
    #[serde(flatten)]
    pub report: ImportReport,
}

/// POST /api/import/recipes/bulk - `{ "recipes": [ ... ] }`
pub async fn bulk(
    State(state): State<AppState>,
    Json(mut payload): Json<Value>,
) -> ApiResult<Json<ImportResponse>> {
    let Value::Array(records) = payload
        .get_mut("recipes")
        .map(Value::take)
        .unwrap_or_default()
    else {
        return Err(ApiError::bad_request("recipes must be an array"));
    };

    let report = state.recipe_command.import(records).await?;

    Ok(Json(ImportResponse {
        success: true,
        report,
    }))
}
