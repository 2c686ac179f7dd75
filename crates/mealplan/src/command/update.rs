use mealplanner_db::table::MealPlan;
use mealplanner_shared::{format_date, parse_date};
use sea_query::{Expr, ExprTrait, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use serde::Deserialize;
use validator::Validate;

#[derive(Validate, Deserialize, Clone, Debug, Default)]
pub struct UpdateMealPlanInput {
    pub planned_date: Option<String>,
    #[validate(length(min = 1))]
    pub meal_type: Option<String>,
    #[validate(range(min = 1))]
    pub servings: Option<i64>,
    pub notes: Option<String>,
}

impl super::Command {
    pub async fn update(
        &self,
        id: impl Into<String>,
        input: UpdateMealPlanInput,
    ) -> mealplanner_shared::Result<()> {
        input.validate()?;

        let id = id.into();
        let mut values: Vec<(MealPlan, Expr)> = vec![];

        if let Some(planned_date) = input.planned_date {
            values.push((
                MealPlan::PlannedDate,
                format_date(parse_date(&planned_date)?).into(),
            ));
        }

        if let Some(meal_type) = input.meal_type {
            values.push((MealPlan::MealType, meal_type.into()));
        }

        if let Some(servings) = input.servings {
            values.push((MealPlan::Servings, servings.into()));
        }

        if let Some(notes) = input.notes {
            values.push((MealPlan::Notes, notes.into()));
        }

        if values.is_empty() {
            mealplanner_shared::user!("No fields to update");
        }

        let statement = Query::update()
            .table(MealPlan::Table)
            .values(values)
            .and_where(Expr::col(MealPlan::Id).eq(&id))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let result = sqlx::query_with(&sql, values)
            .execute(&self.write_db)
            .await?;

        if result.rows_affected() == 0 {
            mealplanner_shared::not_found!("Meal plan not found");
        }

        Ok(())
    }
}
