use mealplanner_db::table::{GroceryList, GroceryListItem};
use sea_query::{Expr, ExprTrait, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use serde::Deserialize;
use ulid::Ulid;
use validator::Validate;

#[derive(Validate, Deserialize, Clone, Debug, Default)]
pub struct AddItemInput {
    #[validate(length(max = 500))]
    pub ingredient: Option<String>,
    #[validate(length(max = 100))]
    pub quantity: Option<String>,
}

impl super::Command {
    /// Appends a manual item to an existing list.
    pub async fn add_item(
        &self,
        list_id: impl Into<String>,
        input: AddItemInput,
    ) -> mealplanner_shared::Result<String> {
        input.validate()?;

        let list_id = list_id.into();
        let Some(ingredient) = input.ingredient.filter(|v| !v.is_empty()) else {
            mealplanner_shared::user!("ingredient is required");
        };

        let statement = Query::select()
            .column(GroceryList::Id)
            .from(GroceryList::Table)
            .and_where(Expr::col(GroceryList::Id).eq(&list_id))
            .limit(1)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let list = sqlx::query_as_with::<_, (String,), _>(&sql, values)
            .fetch_optional(&self.write_db)
            .await?;

        if list.is_none() {
            mealplanner_shared::not_found!("Grocery list not found");
        }

        let statement = Query::select()
            .expr(Expr::cust("COALESCE(MAX(\"position\"), -1)"))
            .from(GroceryListItem::Table)
            .and_where(Expr::col(GroceryListItem::ListId).eq(&list_id))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let (last_position,) = sqlx::query_as_with::<_, (i64,), _>(&sql, values)
            .fetch_one(&self.write_db)
            .await?;

        let id = Ulid::new().to_string();
        let statement = Query::insert()
            .into_table(GroceryListItem::Table)
            .columns([
                GroceryListItem::Id,
                GroceryListItem::ListId,
                GroceryListItem::Ingredient,
                GroceryListItem::Quantity,
                GroceryListItem::Position,
            ])
            .values_panic([
                id.to_owned().into(),
                list_id.into(),
                ingredient.into(),
                input.quantity.filter(|v| !v.is_empty()).into(),
                (last_position + 1).into(),
            ])
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values)
            .execute(&self.write_db)
            .await?;

        Ok(id)
    }

    pub async fn set_checked(
        &self,
        list_id: impl Into<String>,
        item_id: impl Into<String>,
        checked: bool,
    ) -> mealplanner_shared::Result<()> {
        let list_id = list_id.into();
        let item_id = item_id.into();
        let statement = Query::update()
            .table(GroceryListItem::Table)
            .value(GroceryListItem::Checked, checked)
            .and_where(Expr::col(GroceryListItem::Id).eq(&item_id))
            .and_where(Expr::col(GroceryListItem::ListId).eq(&list_id))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let result = sqlx::query_with(&sql, values)
            .execute(&self.write_db)
            .await?;

        if result.rows_affected() == 0 {
            mealplanner_shared::not_found!("Item not found");
        }

        Ok(())
    }

    pub async fn delete_item(
        &self,
        list_id: impl Into<String>,
        item_id: impl Into<String>,
    ) -> mealplanner_shared::Result<()> {
        let list_id = list_id.into();
        let item_id = item_id.into();
        let statement = Query::delete()
            .from_table(GroceryListItem::Table)
            .and_where(Expr::col(GroceryListItem::Id).eq(&item_id))
            .and_where(Expr::col(GroceryListItem::ListId).eq(&list_id))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let result = sqlx::query_with(&sql, values)
            .execute(&self.write_db)
            .await?;

        if result.rows_affected() == 0 {
            mealplanner_shared::not_found!("Item not found");
        }

        Ok(())
    }
}
