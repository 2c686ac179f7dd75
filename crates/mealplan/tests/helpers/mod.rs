use std::{path::PathBuf, str::FromStr};

use mealplanner_mealplan::AddMealPlanInput;
use mealplanner_recipe::CreateRecipeInput;
use mealplanner_shared::State;
use sqlx::{SqlitePool, sqlite::SqliteConnectOptions};
use sqlx_migrator::{Migrate, Plan};

pub async fn setup_test_state(path: PathBuf) -> anyhow::Result<State> {
    let opts = SqliteConnectOptions::from_str(&format!("sqlite:{}", path.to_str().unwrap()))?
        .create_if_missing(true)
        .foreign_keys(true);
    let pool = SqlitePool::connect_with(opts).await?;
    let mut conn = pool.acquire().await?;
    mealplanner_db::migrator()?
        .run(&mut conn, &Plan::apply_all())
        .await?;

    Ok(State::single(pool))
}

#[allow(dead_code)]
pub async fn create_recipe(
    state: &State,
    name: &str,
    ingredients: &[&str],
) -> anyhow::Result<String> {
    let cmd = mealplanner_recipe::Command::new(state.clone());

    Ok(cmd
        .create(CreateRecipeInput {
            recipe_name: name.to_owned(),
            ingredients: ingredients.iter().map(|i| i.to_string()).collect(),
            tags: vec!["weeknight".to_owned()],
            cook_time: Some("20 min".to_owned()),
            ..Default::default()
        })
        .await?)
}

#[allow(dead_code)]
pub fn recipe_slot(recipe_id: &str, date: &str, meal_type: &str) -> AddMealPlanInput {
    AddMealPlanInput {
        recipe_id: Some(recipe_id.to_owned()),
        planned_date: Some(date.to_owned()),
        meal_type: Some(meal_type.to_owned()),
        ..Default::default()
    }
}

#[allow(dead_code)]
pub fn custom_slot(text: &str, date: &str, meal_type: &str) -> AddMealPlanInput {
    AddMealPlanInput {
        custom_item: Some(text.to_owned()),
        planned_date: Some(date.to_owned()),
        meal_type: Some(meal_type.to_owned()),
        ..Default::default()
    }
}

/// Writes a meal-plan row pointing at a recipe that does not exist, bypassing
/// the foreign key the way a hand-edited database would.
#[allow(dead_code)]
pub async fn insert_dangling_entry(state: &State, date: &str) -> anyhow::Result<()> {
    let mut conn = state.write_db.acquire().await?;

    sqlx::query("PRAGMA foreign_keys = OFF")
        .execute(&mut *conn)
        .await?;
    sqlx::query(
        "INSERT INTO meal_plan (id, recipe_id, custom_item, planned_date, meal_type, servings, created_at)
         VALUES ('01HAAAAAAAAAAAAAAAAAAAAAAA', '01HZZZZZZZZZZZZZZZZZZZZZZZ', NULL, ?, 'Dinner', 1, 0)",
    )
    .bind(date)
    .execute(&mut *conn)
    .await?;
    sqlx::query("PRAGMA foreign_keys = ON")
        .execute(&mut *conn)
        .await?;

    Ok(())
}
