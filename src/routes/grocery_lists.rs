use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use mealplanner_grocery::{
    AddItemInput, CreateGroceryListInput, GenerateInput, GroceryListRow, GroceryListSummaryRow,
};
use serde::Deserialize;
use serde_json::{Value, json};

use crate::{
    error::{ApiError, ApiResult},
    routes::AppState,
};

#[derive(Deserialize, Default)]
pub struct RangeParams {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

#[derive(Deserialize, Default)]
pub struct GenerateBody {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub name: Option<String>,
}

#[derive(Deserialize, Default)]
pub struct CheckedBody {
    #[serde(default)]
    pub checked: bool,
}

pub async fn list(State(state): State<AppState>) -> ApiResult<Json<Vec<GroceryListSummaryRow>>> {
    Ok(Json(state.grocery_query.list().await?))
}

pub async fn preview(
    State(state): State<AppState>,
    Query(params): Query<RangeParams>,
) -> ApiResult<Json<Value>> {
    let (start, end) = mealplanner_shared::parse_date_range(
        params.start_date.as_deref(),
        params.end_date.as_deref(),
    )?;

    let items = state.grocery_query.preview(start, end).await?;

    Ok(Json(json!({ "items": items })))
}

pub async fn generate(
    State(state): State<AppState>,
    Json(body): Json<GenerateBody>,
) -> ApiResult<(StatusCode, Json<Value>)> {
    let (start, end) = mealplanner_shared::parse_date_range(
        body.start_date.as_deref(),
        body.end_date.as_deref(),
    )?;

    let generated = state
        .grocery_command
        .generate(GenerateInput {
            start,
            end,
            name: body.name,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "id": generated.id,
            "message": "Grocery list generated",
            "item_count": generated.item_count,
        })),
    ))
}

pub async fn detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<GroceryListRow>> {
    match state.grocery_query.find(id).await? {
        Some(list) => Ok(Json(list)),
        None => Err(ApiError::not_found("Grocery list not found")),
    }
}

pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateGroceryListInput>,
) -> ApiResult<(StatusCode, Json<Value>)> {
    let id = state.grocery_command.create(input).await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({"success": true, "id": id, "message": "Grocery list created"})),
    ))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Value>> {
    state.grocery_command.delete(id).await?;

    Ok(Json(json!({"success": true, "message": "Grocery list deleted"})))
}

pub async fn add_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<AddItemInput>,
) -> ApiResult<(StatusCode, Json<Value>)> {
    let item_id = state.grocery_command.add_item(id, input).await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({"success": true, "id": item_id, "message": "Item added"})),
    ))
}

pub async fn set_checked(
    State(state): State<AppState>,
    Path((id, item_id)): Path<(String, String)>,
    Json(body): Json<CheckedBody>,
) -> ApiResult<Json<Value>> {
    state
        .grocery_command
        .set_checked(id, item_id, body.checked)
        .await?;

    Ok(Json(json!({"success": true, "message": "Item updated"})))
}

pub async fn delete_item(
    State(state): State<AppState>,
    Path((id, item_id)): Path<(String, String)>,
) -> ApiResult<Json<Value>> {
    state.grocery_command.delete_item(id, item_id).await?;

    Ok(Json(json!({"success": true, "message": "Item deleted"})))
}
