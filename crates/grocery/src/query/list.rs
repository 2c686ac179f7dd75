use mealplanner_db::table::{GroceryList, GroceryListItem};
use sea_query::{Alias, Expr, ExprTrait, Order, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use serde::Serialize;
use sqlx::prelude::FromRow;

#[derive(Debug, FromRow, Serialize)]
pub struct GroceryListSummaryRow {
    pub id: String,
    pub name: String,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub created_at: i64,
    pub item_count: i64,
    pub checked_count: i64,
}

#[derive(Debug, FromRow, Serialize)]
pub struct GroceryListItemRow {
    pub id: String,
    pub list_id: String,
    pub ingredient: String,
    pub quantity: Option<String>,
    pub checked: bool,
    pub position: i64,
}

#[derive(Debug, FromRow, Serialize)]
pub struct GroceryListRow {
    pub id: String,
    pub name: String,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub created_at: i64,
    #[sqlx(skip)]
    pub items: Vec<GroceryListItemRow>,
}

impl super::Query {
    /// Every list with its item and checked counts, newest first.
    pub async fn list(&self) -> anyhow::Result<Vec<GroceryListSummaryRow>> {
        let statement = sea_query::Query::select()
            .columns([
                (GroceryList::Table, GroceryList::Id),
                (GroceryList::Table, GroceryList::Name),
                (GroceryList::Table, GroceryList::StartDate),
                (GroceryList::Table, GroceryList::EndDate),
                (GroceryList::Table, GroceryList::CreatedAt),
            ])
            .expr_as(
                Expr::cust(r#"COUNT("grocery_list_item"."id")"#),
                Alias::new("item_count"),
            )
            .expr_as(
                Expr::cust(r#"COALESCE(SUM("grocery_list_item"."checked"), 0)"#),
                Alias::new("checked_count"),
            )
            .from(GroceryList::Table)
            .left_join(
                GroceryListItem::Table,
                Expr::col((GroceryList::Table, GroceryList::Id))
                    .equals((GroceryListItem::Table, GroceryListItem::ListId)),
            )
            .group_by_col((GroceryList::Table, GroceryList::Id))
            .order_by((GroceryList::Table, GroceryList::CreatedAt), Order::Desc)
            .order_by_expr(Expr::cust(r#""grocery_list"."rowid""#), Order::Desc)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        Ok(
            sqlx::query_as_with::<_, GroceryListSummaryRow, _>(&sql, values)
                .fetch_all(&self.0)
                .await?,
        )
    }

    /// A list with its items, unchecked first, then alphabetical.
    pub async fn find(&self, id: impl Into<String>) -> anyhow::Result<Option<GroceryListRow>> {
        let id = id.into();
        let statement = sea_query::Query::select()
            .columns([
                GroceryList::Id,
                GroceryList::Name,
                GroceryList::StartDate,
                GroceryList::EndDate,
                GroceryList::CreatedAt,
            ])
            .from(GroceryList::Table)
            .and_where(Expr::col(GroceryList::Id).eq(&id))
            .limit(1)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let Some(mut list) = sqlx::query_as_with::<_, GroceryListRow, _>(&sql, values)
            .fetch_optional(&self.0)
            .await?
        else {
            return Ok(None);
        };

        let statement = sea_query::Query::select()
            .columns([
                GroceryListItem::Id,
                GroceryListItem::ListId,
                GroceryListItem::Ingredient,
                GroceryListItem::Quantity,
                GroceryListItem::Checked,
                GroceryListItem::Position,
            ])
            .from(GroceryListItem::Table)
            .and_where(Expr::col(GroceryListItem::ListId).eq(&id))
            .order_by(GroceryListItem::Checked, Order::Asc)
            .order_by(GroceryListItem::Ingredient, Order::Asc)
            .order_by(GroceryListItem::Position, Order::Asc)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        list.items = sqlx::query_as_with::<_, GroceryListItemRow, _>(&sql, values)
            .fetch_all(&self.0)
            .await?;

        Ok(Some(list))
    }
}
