use axum::http::StatusCode;
use serde_json::json;

mod common;

#[tokio::test]
async fn test_meal_plan_calendar() -> anyhow::Result<()> {
    let app = common::create_test_app().await?;

    let (_, body) = app
        .post(
            "/api/webhook/recipe",
            json!({"recipe_name": "Curry", "ingredients": ["Rice", "Chickpeas"], "tags": ["spicy"]}),
        )
        .await;
    let recipe_id = body["id"].as_str().unwrap().to_owned();

    let (status, body) = app
        .post(
            "/api/meal-plans",
            json!({"recipe_id": recipe_id, "planned_date": "2024-03-18", "meal_type": "Dinner"}),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "Meal added to plan");
    let entry_id = body["id"].as_str().unwrap().to_owned();

    let (status, body) = app
        .post(
            "/api/meal-plans",
            json!({"custom_item": "Takeout", "planned_date": "2024-03-19", "meal_type": "Dinner"}),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "Custom item added to plan");

    let (status, body) = app.get("/api/meal-plans?start=2024-03-18&end=2024-03-24").await;
    assert_eq!(status, StatusCode::OK);
    let entries = body.as_array().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["recipe_name"], "Curry");
    assert_eq!(entries[0]["tags"], json!(["spicy"]));
    assert_eq!(entries[0]["is_custom"], false);
    assert_eq!(entries[1]["recipe_name"], "Takeout");
    assert_eq!(entries[1]["is_custom"], true);

    let (status, _) = app
        .patch(&format!("/api/meal-plans/{entry_id}"), json!({"servings": 4}))
        .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = app.delete(&format!("/api/meal-plans/{entry_id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Meal removed from plan");

    let (status, body) = app.delete(&format!("/api/meal-plans/{entry_id}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Meal plan not found"}));

    Ok(())
}

#[tokio::test]
async fn test_meal_plan_validation() -> anyhow::Result<()> {
    let app = common::create_test_app().await?;

    let (status, body) = app
        .post(
            "/api/meal-plans",
            json!({"planned_date": "2024-03-18", "meal_type": "Dinner"}),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({"error": "Either recipe_id or custom_item is required (but not both)"})
    );

    let (status, body) = app
        .post("/api/meal-plans", json!({"custom_item": "Takeout"}))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({"error": "planned_date and meal_type are required"})
    );

    let (status, _) = app
        .post(
            "/api/meal-plans",
            json!({"recipe_id": "01HZZZZZZZZZZZZZZZZZZZZZZZ", "planned_date": "2024-03-18", "meal_type": "Dinner"}),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    Ok(())
}
