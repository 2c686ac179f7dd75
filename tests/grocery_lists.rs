use axum::http::StatusCode;
use serde_json::{Value, json};

mod common;

async fn plan_week(app: &common::TestApp) -> anyhow::Result<()> {
    let (_, body) = app
        .post(
            "/api/webhook/recipe",
            json!({"recipe_name": "Pancakes", "ingredients": ["Milk", "2 eggs"]}),
        )
        .await;
    let pancakes = body["id"].as_str().unwrap().to_owned();

    let (_, body) = app
        .post(
            "/api/webhook/recipe",
            json!({"recipe_name": "Porridge", "ingredients": ["Oats", " milk "]}),
        )
        .await;
    let porridge = body["id"].as_str().unwrap().to_owned();

    for entry in [
        json!({"custom_item": "  Milk", "planned_date": "2024-03-18", "meal_type": "Breakfast"}),
        json!({"recipe_id": pancakes, "planned_date": "2024-03-19", "meal_type": "Breakfast"}),
        json!({"recipe_id": porridge, "planned_date": "2024-03-20", "meal_type": "Breakfast"}),
        json!({"custom_item": "Cake", "planned_date": "2024-03-30", "meal_type": "Dinner"}),
    ] {
        let (status, _) = app.post("/api/meal-plans", entry).await;
        assert_eq!(status, StatusCode::CREATED);
    }

    Ok(())
}

fn pairs(items: &Value) -> Vec<(String, String)> {
    let mut pairs = items
        .as_array()
        .unwrap()
        .iter()
        .map(|i| {
            (
                i["ingredient"].as_str().unwrap().to_owned(),
                i["quantity"].as_str().unwrap_or_default().to_owned(),
            )
        })
        .collect::<Vec<_>>();
    pairs.sort();
    pairs
}

#[tokio::test]
async fn test_preview_and_generate() -> anyhow::Result<()> {
    let app = common::create_test_app().await?;
    plan_week(&app).await?;

    let (status, body) = app
        .get("/api/grocery-lists/preview?start_date=2024-03-18&end_date=2024-03-24")
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["items"],
        json!([
            {"ingredient": "milk", "quantity": "x3", "checked": false},
            {"ingredient": "2 eggs", "quantity": "", "checked": false},
            {"ingredient": "oats", "quantity": "", "checked": false}
        ])
    );
    let preview = pairs(&body["items"]);

    let (status, body) = app
        .post(
            "/api/grocery-lists/generate",
            json!({"start_date": "2024-03-18", "end_date": "2024-03-24"}),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Grocery list generated");
    assert_eq!(body["item_count"], 3);
    let id = body["id"].as_str().unwrap().to_owned();

    let (status, body) = app.get(&format!("/api/grocery-lists/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Grocery List 2024-03-18 to 2024-03-24");
    assert_eq!(pairs(&body["items"]), preview);

    let (_, body) = app.get("/api/grocery-lists").await;
    assert_eq!(body[0]["item_count"], 3);
    assert_eq!(body[0]["checked_count"], 0);

    Ok(())
}

#[tokio::test]
async fn test_preview_requires_dates() -> anyhow::Result<()> {
    let app = common::create_test_app().await?;

    let (status, body) = app
        .get("/api/grocery-lists/preview?start_date=2024-03-18")
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "start_date and end_date are required"}));

    let (status, _) = app
        .post(
            "/api/grocery-lists/generate",
            json!({"start_date": "2024-03-24", "end_date": "2024-03-18"}),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, body) = app.get("/api/grocery-lists").await;
    assert!(body.as_array().unwrap().is_empty());

    Ok(())
}

#[tokio::test]
async fn test_generate_empty_range() -> anyhow::Result<()> {
    let app = common::create_test_app().await?;

    let (status, body) = app
        .get("/api/grocery-lists/preview?start_date=2024-03-18&end_date=2024-03-24")
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"items": []}));

    let (status, body) = app
        .post(
            "/api/grocery-lists/generate",
            json!({"start_date": "2024-03-18", "end_date": "2024-03-24", "name": "Quiet week"}),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["item_count"], 0);

    let id = body["id"].as_str().unwrap().to_owned();
    let (_, body) = app.get(&format!("/api/grocery-lists/{id}")).await;
    assert_eq!(body["name"], "Quiet week");
    assert_eq!(body["items"], json!([]));

    Ok(())
}

#[tokio::test]
async fn test_manual_list() -> anyhow::Result<()> {
    let app = common::create_test_app().await?;

    let (status, body) = app.post("/api/grocery-lists", json!({})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "name is required"}));

    let (status, body) = app
        .post("/api/grocery-lists", json!({"name": "Hardware store"}))
        .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = body["id"].as_str().unwrap().to_owned();

    let (status, body) = app
        .post(
            &format!("/api/grocery-lists/{id}/items"),
            json!({"ingredient": "Light bulbs", "quantity": "4"}),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    let item_id = body["id"].as_str().unwrap().to_owned();

    let (status, _) = app
        .patch(
            &format!("/api/grocery-lists/{id}/items/{item_id}"),
            json!({"checked": true}),
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = app.get(&format!("/api/grocery-lists/{id}")).await;
    assert_eq!(body["items"][0]["checked"], true);
    assert_eq!(body["items"][0]["quantity"], "4");

    let (status, _) = app
        .delete(&format!("/api/grocery-lists/{id}/items/{item_id}"))
        .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = app
        .delete(&format!("/api/grocery-lists/{id}/items/{item_id}"))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Item not found"}));

    let (status, _) = app.delete(&format!("/api/grocery-lists/{id}")).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = app.get(&format!("/api/grocery-lists/{id}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Grocery list not found"}));

    Ok(())
}
