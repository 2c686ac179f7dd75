use mealplanner_db::table::GroceryList;
use sea_query::{Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use serde::Deserialize;
use ulid::Ulid;
use validator::Validate;

#[derive(Validate, Deserialize, Clone, Debug, Default)]
pub struct CreateGroceryListInput {
    #[validate(length(max = 200))]
    pub name: Option<String>,
}

impl super::Command {
    /// Creates an empty grocery list without a date range.
    pub async fn create(
        &self,
        input: CreateGroceryListInput,
    ) -> mealplanner_shared::Result<String> {
        input.validate()?;

        let Some(name) = input.name.filter(|v| !v.is_empty()) else {
            mealplanner_shared::user!("name is required");
        };

        let id = Ulid::new().to_string();
        let statement = Query::insert()
            .into_table(GroceryList::Table)
            .columns([GroceryList::Id, GroceryList::Name, GroceryList::CreatedAt])
            .values_panic([
                id.to_owned().into(),
                name.into(),
                mealplanner_shared::now().into(),
            ])
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values)
            .execute(&self.write_db)
            .await?;

        tracing::debug!(grocery_list = id, "grocery list created");

        Ok(id)
    }
}
