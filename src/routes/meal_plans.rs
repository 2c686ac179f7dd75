use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use mealplanner_mealplan::{AddMealPlanInput, FilterQuery, MealPlanRow, UpdateMealPlanInput};
use serde::Deserialize;
use serde_json::{Value, json};

use crate::{error::ApiResult, routes::AppState};

#[derive(Deserialize, Default)]
pub struct ListParams {
    pub start: Option<String>,
    pub end: Option<String>,
}

fn optional_date(value: Option<String>) -> mealplanner_shared::Result<Option<time::Date>> {
    value
        .filter(|v| !v.trim().is_empty())
        .map(|v| mealplanner_shared::parse_date(&v))
        .transpose()
}

pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> ApiResult<Json<Vec<MealPlanRow>>> {
    let input = FilterQuery {
        start: optional_date(params.start)?,
        end: optional_date(params.end)?,
    };

    Ok(Json(state.mealplan_query.filter(input).await?))
}

pub async fn add(
    State(state): State<AppState>,
    Json(input): Json<AddMealPlanInput>,
) -> ApiResult<(StatusCode, Json<Value>)> {
    let is_custom = input.custom_item.as_deref().is_some_and(|v| !v.is_empty());
    let id = state.mealplan_command.add(input).await?;
    let message = if is_custom {
        "Custom item added to plan"
    } else {
        "Meal added to plan"
    };

    Ok((
        StatusCode::CREATED,
        Json(json!({"success": true, "id": id, "message": message})),
    ))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<UpdateMealPlanInput>,
) -> ApiResult<Json<Value>> {
    state.mealplan_command.update(id, input).await?;

    Ok(Json(json!({"success": true, "message": "Meal plan updated"})))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Value>> {
    state.mealplan_command.delete(id).await?;

    Ok(Json(json!({"success": true, "message": "Meal removed from plan"})))
}
