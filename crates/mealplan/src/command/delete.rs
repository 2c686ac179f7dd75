use mealplanner_db::table::MealPlan;
use sea_query::{Expr, ExprTrait, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;

impl super::Command {
    pub async fn delete(&self, id: impl Into<String>) -> mealplanner_shared::Result<()> {
        let id = id.into();
        let statement = Query::delete()
            .from_table(MealPlan::Table)
            .and_where(Expr::col(MealPlan::Id).eq(&id))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let result = sqlx::query_with(&sql, values)
            .execute(&self.write_db)
            .await?;

        if result.rows_affected() == 0 {
            mealplanner_shared::not_found!("Meal plan not found");
        }

        tracing::debug!(meal_plan = id, "meal plan entry deleted");

        Ok(())
    }
}
