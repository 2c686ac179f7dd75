use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use mealplanner_recipe::CreateRecipeInput;
use serde_json::{Map, Value, json};

use crate::{error::ApiResult, routes::AppState};

/// POST /api/webhook/recipe - recipe pushed by an automation service
pub async fn recipe(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> ApiResult<Response> {
    let data = match payload {
        Value::Object(map) => map,
        _ => Map::new(),
    };
    let received_fields = data.keys().cloned().collect::<Vec<_>>();

    let Some(input) = CreateRecipeInput::from_payload(&data) else {
        tracing::warn!(?received_fields, "webhook payload without recipe name");

        return Ok((
            StatusCode::BAD_REQUEST,
            Json(json!({
                "success": false,
                "error": "Recipe name is required",
                "received_fields": received_fields,
            })),
        )
            .into_response());
    };

    let id = state.recipe_command.create(input).await?;
    tracing::info!(recipe = id, "recipe received from webhook");

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "id": id,
            "message": "Recipe added successfully",
        })),
    )
        .into_response())
}
