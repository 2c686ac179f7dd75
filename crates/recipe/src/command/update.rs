use mealplanner_db::table::Recipe;
use sea_query::{Expr, ExprTrait, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use serde::Deserialize;

#[derive(Deserialize, Clone, Debug, Default)]
pub struct UpdateRecipeInput {
    pub rating: Option<i64>,
    pub notes: Option<String>,
    pub leftover_score: Option<String>,
}

impl super::Command {
    pub async fn update(
        &self,
        id: impl Into<String>,
        input: UpdateRecipeInput,
    ) -> mealplanner_shared::Result<()> {
        let id = id.into();
        let mut values: Vec<(Recipe, Expr)> = vec![];

        if let Some(rating) = input.rating {
            values.push((Recipe::Rating, rating.into()));
        }

        if let Some(notes) = input.notes {
            values.push((Recipe::Notes, notes.into()));
        }

        if let Some(leftover_score) = input.leftover_score {
            values.push((Recipe::LeftoverScore, leftover_score.into()));
        }

        if values.is_empty() {
            mealplanner_shared::user!("No fields to update");
        }

        let statement = Query::update()
            .table(Recipe::Table)
            .values(values)
            .and_where(Expr::col(Recipe::Id).eq(&id))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let result = sqlx::query_with(&sql, values)
            .execute(&self.write_db)
            .await?;

        if result.rows_affected() == 0 {
            mealplanner_shared::not_found!("Recipe not found");
        }

        Ok(())
    }
}
