use mealplanner_db::table::{MealPlan, Recipe};
use mealplanner_shared::format_date;
use sea_query::{Expr, ExprTrait, Order, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use serde::Serialize;
use sqlx::{prelude::FromRow, types::Json};
use time::Date;

#[derive(FromRow)]
struct MealPlanRecord {
    id: String,
    recipe_id: Option<String>,
    custom_item: Option<String>,
    planned_date: String,
    meal_type: String,
    servings: i64,
    notes: Option<String>,
    created_at: i64,
    recipe_name: Option<String>,
    image_url: Option<String>,
    cook_time: Option<String>,
    tags: Option<Json<Vec<String>>>,
}

/// Calendar view of a meal-plan entry. `recipe_name` holds the custom text
/// for free-text entries.
#[derive(Debug, Serialize)]
pub struct MealPlanRow {
    pub id: String,
    pub recipe_id: Option<String>,
    pub custom_item: Option<String>,
    pub planned_date: String,
    pub meal_type: String,
    pub servings: i64,
    pub notes: Option<String>,
    pub created_at: i64,
    pub recipe_name: Option<String>,
    pub image_url: Option<String>,
    pub cook_time: Option<String>,
    pub tags: Vec<String>,
    pub is_custom: bool,
}

impl From<MealPlanRecord> for MealPlanRow {
    fn from(value: MealPlanRecord) -> Self {
        let custom_item = value.custom_item.filter(|v| !v.is_empty());

        Self {
            is_custom: custom_item.is_some(),
            recipe_name: custom_item.to_owned().or(value.recipe_name),
            tags: value.tags.map(|t| t.0).unwrap_or_default(),
            id: value.id,
            recipe_id: value.recipe_id,
            custom_item,
            planned_date: value.planned_date,
            meal_type: value.meal_type,
            servings: value.servings,
            notes: value.notes,
            created_at: value.created_at,
            image_url: value.image_url,
            cook_time: value.cook_time,
        }
    }
}

#[derive(Debug, Default, Clone)]
pub struct FilterQuery {
    pub start: Option<Date>,
    pub end: Option<Date>,
}

impl super::Query {
    /// Entries ordered by date then meal type. Both bounds are optional and
    /// inclusive.
    pub async fn filter(&self, input: FilterQuery) -> anyhow::Result<Vec<MealPlanRow>> {
        let mut statement = sea_query::Query::select()
            .columns([
                (MealPlan::Table, MealPlan::Id),
                (MealPlan::Table, MealPlan::RecipeId),
                (MealPlan::Table, MealPlan::CustomItem),
                (MealPlan::Table, MealPlan::PlannedDate),
                (MealPlan::Table, MealPlan::MealType),
                (MealPlan::Table, MealPlan::Servings),
                (MealPlan::Table, MealPlan::Notes),
                (MealPlan::Table, MealPlan::CreatedAt),
            ])
            .columns([
                (Recipe::Table, Recipe::RecipeName),
                (Recipe::Table, Recipe::ImageUrl),
                (Recipe::Table, Recipe::CookTime),
                (Recipe::Table, Recipe::Tags),
            ])
            .from(MealPlan::Table)
            .left_join(
                Recipe::Table,
                Expr::col((MealPlan::Table, MealPlan::RecipeId)).equals((Recipe::Table, Recipe::Id)),
            )
            .order_by((MealPlan::Table, MealPlan::PlannedDate), Order::Asc)
            .order_by((MealPlan::Table, MealPlan::MealType), Order::Asc)
            .to_owned();

        if let Some(start) = input.start {
            statement.and_where(
                Expr::col((MealPlan::Table, MealPlan::PlannedDate)).gte(format_date(start)),
            );
        }

        if let Some(end) = input.end {
            statement
                .and_where(Expr::col((MealPlan::Table, MealPlan::PlannedDate)).lte(format_date(end)));
        }

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let records = sqlx::query_as_with::<_, MealPlanRecord, _>(&sql, values)
            .fetch_all(&self.0)
            .await?;

        Ok(records.into_iter().map(MealPlanRow::from).collect())
    }
}
