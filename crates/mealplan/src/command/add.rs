use mealplanner_db::table::{MealPlan, Recipe};
use mealplanner_shared::{format_date, parse_date};
use sea_query::{Expr, ExprTrait, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use serde::Deserialize;
use ulid::Ulid;
use validator::Validate;

#[derive(Validate, Deserialize, Clone, Debug, Default)]
pub struct AddMealPlanInput {
    pub recipe_id: Option<String>,
    pub custom_item: Option<String>,
    pub planned_date: Option<String>,
    pub meal_type: Option<String>,
    #[validate(range(min = 1))]
    pub servings: Option<i64>,
    pub notes: Option<String>,
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

impl super::Command {
    /// Schedules a recipe or a free-text item on a date and meal slot.
    pub async fn add(&self, input: AddMealPlanInput) -> mealplanner_shared::Result<String> {
        input.validate()?;

        let recipe_id = present(input.recipe_id);
        let custom_item = present(input.custom_item);

        if recipe_id.is_some() == custom_item.is_some() {
            mealplanner_shared::user!(
                "Either recipe_id or custom_item is required (but not both)"
            );
        }

        let (Some(planned_date), Some(meal_type)) =
            (present(input.planned_date), present(input.meal_type))
        else {
            mealplanner_shared::user!("planned_date and meal_type are required");
        };

        let planned_date = parse_date(&planned_date)?;

        if let Some(recipe_id) = &recipe_id {
            let statement = Query::select()
                .column(Recipe::Id)
                .from(Recipe::Table)
                .and_where(Expr::col(Recipe::Id).eq(recipe_id))
                .limit(1)
                .to_owned();

            let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
            let recipe = sqlx::query_as_with::<_, (String,), _>(&sql, values)
                .fetch_optional(&self.write_db)
                .await?;

            if recipe.is_none() {
                mealplanner_shared::not_found!("Recipe not found");
            }
        }

        let id = Ulid::new().to_string();
        let statement = Query::insert()
            .into_table(MealPlan::Table)
            .columns([
                MealPlan::Id,
                MealPlan::RecipeId,
                MealPlan::CustomItem,
                MealPlan::PlannedDate,
                MealPlan::MealType,
                MealPlan::Servings,
                MealPlan::Notes,
                MealPlan::CreatedAt,
            ])
            .values_panic([
                id.to_owned().into(),
                recipe_id.into(),
                custom_item.into(),
                format_date(planned_date).into(),
                meal_type.into(),
                input.servings.unwrap_or(1).into(),
                present(input.notes).into(),
                mealplanner_shared::now().into(),
            ])
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values)
            .execute(&self.write_db)
            .await?;

        tracing::debug!(meal_plan = id, "meal plan entry added");

        Ok(id)
    }
}
