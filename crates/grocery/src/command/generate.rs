use mealplanner_db::table::{GroceryList, GroceryListItem};
use mealplanner_shared::format_date;
use sea_query::{Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use serde::Serialize;
use time::Date;
use ulid::Ulid;

use crate::consolidate;

/// Rows per multi-row item insert. Five bound parameters each keeps a
/// statement under SQLite's historical limit of 999 variables.
const ITEMS_PER_INSERT: usize = 150;

#[derive(Clone, Debug)]
pub struct GenerateInput {
    pub start: Date,
    pub end: Date,
    pub name: Option<String>,
}

#[derive(Clone, Debug, Serialize)]
pub struct GeneratedList {
    pub id: String,
    pub item_count: usize,
}

impl super::Command {
    /// Consolidates the meal plan between `start` and `end` and stores the
    /// result as a new grocery list. Entries are read before anything is
    /// written; list and items are inserted in one transaction.
    pub async fn generate(
        &self,
        input: GenerateInput,
    ) -> mealplanner_shared::Result<GeneratedList> {
        let entries = mealplanner_mealplan::Query(self.read_db.clone())
            .entries_between(input.start, input.end)
            .await?;
        let items = consolidate(&entries);

        let start = format_date(input.start);
        let end = format_date(input.end);
        let name = input
            .name
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| format!("Grocery List {start} to {end}"));

        let id = Ulid::new().to_string();
        let mut tx = self.write_db.begin().await?;

        let statement = Query::insert()
            .into_table(GroceryList::Table)
            .columns([
                GroceryList::Id,
                GroceryList::Name,
                GroceryList::StartDate,
                GroceryList::EndDate,
                GroceryList::CreatedAt,
            ])
            .values_panic([
                id.to_owned().into(),
                name.into(),
                start.into(),
                end.into(),
                mealplanner_shared::now().into(),
            ])
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values).execute(&mut *tx).await?;

        for (chunk_index, chunk) in items.chunks(ITEMS_PER_INSERT).enumerate() {
            let mut statement = Query::insert()
                .into_table(GroceryListItem::Table)
                .columns([
                    GroceryListItem::Id,
                    GroceryListItem::ListId,
                    GroceryListItem::Ingredient,
                    GroceryListItem::Quantity,
                    GroceryListItem::Position,
                ])
                .to_owned();

            for (offset, item) in chunk.iter().enumerate() {
                let position = chunk_index * ITEMS_PER_INSERT + offset;
                statement.values_panic([
                    Ulid::new().to_string().into(),
                    id.to_owned().into(),
                    item.name.to_owned().into(),
                    item.display_quantity().into(),
                    (position as i64).into(),
                ]);
            }

            let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
            sqlx::query_with(&sql, values).execute(&mut *tx).await?;
        }

        tx.commit().await?;

        tracing::info!(
            grocery_list = id,
            entries = entries.len(),
            items = items.len(),
            "grocery list generated"
        );

        Ok(GeneratedList {
            id,
            item_count: items.len(),
        })
    }
}
