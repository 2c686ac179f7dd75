use mealplanner_db::table::GroceryList;
use sea_query::{Expr, ExprTrait, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;

impl super::Command {
    /// Deletes a grocery list together with its items.
    pub async fn delete(&self, id: impl Into<String>) -> mealplanner_shared::Result<()> {
        let id = id.into();
        let statement = Query::delete()
            .from_table(GroceryList::Table)
            .and_where(Expr::col(GroceryList::Id).eq(&id))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let result = sqlx::query_with(&sql, values)
            .execute(&self.write_db)
            .await?;

        if result.rows_affected() == 0 {
            mealplanner_shared::not_found!("Grocery list not found");
        }

        tracing::debug!(grocery_list = id, "grocery list deleted");

        Ok(())
    }
}
