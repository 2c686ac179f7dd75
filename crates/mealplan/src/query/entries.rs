use mealplanner_db::table::{MealPlan, Recipe};
use mealplanner_shared::{
    format_date, parse_date,
    mealplan::{MealPlanEntry, PlannedItem},
};
use sea_query::{Expr, ExprTrait, Order, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use sqlx::{prelude::FromRow, types::Json};
use time::Date;

#[derive(FromRow)]
struct EntryRow {
    id: String,
    recipe_id: Option<String>,
    custom_item: Option<String>,
    planned_date: String,
    meal_type: String,
    ingredients: Option<Json<Vec<String>>>,
}

impl TryFrom<EntryRow> for MealPlanEntry {
    type Error = anyhow::Error;

    fn try_from(row: EntryRow) -> Result<Self, Self::Error> {
        let recipe_id = row.recipe_id.filter(|v| !v.is_empty());
        let custom_item = row.custom_item.filter(|v| !v.is_empty());

        let item = match (recipe_id, custom_item) {
            (Some(id), None) => {
                let Some(ingredients) = row.ingredients else {
                    anyhow::bail!("meal plan entry {} references missing recipe {id}", row.id);
                };

                PlannedItem::Recipe {
                    id,
                    ingredients: ingredients.0,
                }
            }
            (None, Some(text)) => PlannedItem::Custom(text),
            _ => anyhow::bail!(
                "meal plan entry {} must reference exactly one of recipe_id or custom_item",
                row.id
            ),
        };

        Ok(MealPlanEntry {
            planned_date: parse_date(&row.planned_date)?,
            id: row.id,
            meal_type: row.meal_type,
            item,
        })
    }
}

impl super::Query {
    /// Every entry planned within `[start, end]`, recipe entries carrying
    /// their ingredient lines. Read-only.
    pub async fn entries_between(
        &self,
        start: Date,
        end: Date,
    ) -> anyhow::Result<Vec<MealPlanEntry>> {
        let statement = sea_query::Query::select()
            .columns([
                (MealPlan::Table, MealPlan::Id),
                (MealPlan::Table, MealPlan::RecipeId),
                (MealPlan::Table, MealPlan::CustomItem),
                (MealPlan::Table, MealPlan::PlannedDate),
                (MealPlan::Table, MealPlan::MealType),
            ])
            .column((Recipe::Table, Recipe::Ingredients))
            .from(MealPlan::Table)
            .left_join(
                Recipe::Table,
                Expr::col((MealPlan::Table, MealPlan::RecipeId)).equals((Recipe::Table, Recipe::Id)),
            )
            .and_where(Expr::col((MealPlan::Table, MealPlan::PlannedDate)).gte(format_date(start)))
            .and_where(Expr::col((MealPlan::Table, MealPlan::PlannedDate)).lte(format_date(end)))
            .order_by((MealPlan::Table, MealPlan::PlannedDate), Order::Asc)
            .order_by((MealPlan::Table, MealPlan::MealType), Order::Asc)
            .order_by((MealPlan::Table, MealPlan::Id), Order::Asc)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let rows = sqlx::query_as_with::<_, EntryRow, _>(&sql, values)
            .fetch_all(&self.0)
            .await?;

        rows.into_iter().map(MealPlanEntry::try_from).collect()
    }
}
