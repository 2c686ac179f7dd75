use sea_query::{
    ColumnDef, ForeignKey, ForeignKeyAction, Index, IndexCreateStatement, IndexDropStatement,
    Table, TableCreateStatement, TableDropStatement,
};

use crate::table::{GroceryList, GroceryListItem};

pub struct CreateTable;

fn create_table() -> TableCreateStatement {
    Table::create()
        .table(GroceryListItem::Table)
        .col(
            ColumnDef::new(GroceryListItem::Id)
                .string()
                .not_null()
                .string_len(26)
                .primary_key(),
        )
        .col(
            ColumnDef::new(GroceryListItem::ListId)
                .string()
                .not_null()
                .string_len(26),
        )
        .col(ColumnDef::new(GroceryListItem::Ingredient).string().not_null())
        .col(ColumnDef::new(GroceryListItem::Quantity).string().null())
        .col(
            ColumnDef::new(GroceryListItem::Checked)
                .boolean()
                .not_null()
                .default(false),
        )
        .col(
            ColumnDef::new(GroceryListItem::Position)
                .integer()
                .not_null()
                .default(0),
        )
        .foreign_key(
            ForeignKey::create()
                .name("fk_grocery_list_item_list")
                .from(GroceryListItem::Table, GroceryListItem::ListId)
                .to(GroceryList::Table, GroceryList::Id)
                .on_delete(ForeignKeyAction::Cascade),
        )
        .to_owned()
}

fn drop_table() -> TableDropStatement {
    Table::drop().table(GroceryListItem::Table).to_owned()
}

#[async_trait::async_trait]
impl sqlx_migrator::Operation<sqlx::Sqlite> for CreateTable {
    async fn up(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = create_table().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }

    async fn down(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = drop_table().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }
}

pub struct CreateListIdx;

fn create_list_idx() -> IndexCreateStatement {
    Index::create()
        .name("idx_grocery_list_item_list_id")
        .table(GroceryListItem::Table)
        .col(GroceryListItem::ListId)
        .to_owned()
}

fn drop_list_idx() -> IndexDropStatement {
    Index::drop()
        .name("idx_grocery_list_item_list_id")
        .table(GroceryListItem::Table)
        .to_owned()
}

#[async_trait::async_trait]
impl sqlx_migrator::Operation<sqlx::Sqlite> for CreateListIdx {
    async fn up(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = create_list_idx().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }

    async fn down(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = drop_list_idx().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }
}
