use std::{path::PathBuf, str::FromStr};

use mealplanner_recipe::CreateRecipeInput;
use mealplanner_shared::State;
use sqlx::{SqlitePool, sqlite::SqliteConnectOptions};
use sqlx_migrator::{Migrate, Plan};

pub async fn setup_test_state(path: PathBuf) -> anyhow::Result<State> {
    let opts = SqliteConnectOptions::from_str(&format!("sqlite:{}", path.to_str().unwrap()))?
        .create_if_missing(true);
    let pool = SqlitePool::connect_with(opts).await?;
    let mut conn = pool.acquire().await?;
    mealplanner_db::migrator()?
        .run(&mut conn, &Plan::apply_all())
        .await?;

    Ok(State::single(pool))
}

#[allow(dead_code)]
pub fn recipe(name: impl Into<String>, ingredients: &[&str]) -> CreateRecipeInput {
    CreateRecipeInput {
        recipe_name: name.into(),
        ingredients: ingredients.iter().map(|i| i.to_string()).collect(),
        instructions: "Cook it.".to_owned(),
        ..Default::default()
    }
}
