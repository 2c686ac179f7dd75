use sea_query::{
    ColumnDef, Expr, ExprTrait, ForeignKey, ForeignKeyAction, Index, IndexCreateStatement,
    IndexDropStatement, Table, TableCreateStatement, TableDropStatement,
};

use crate::table::{MealPlan, Recipe};

pub struct CreateTable;

fn create_table() -> TableCreateStatement {
    Table::create()
        .table(MealPlan::Table)
        .col(
            ColumnDef::new(MealPlan::Id)
                .string()
                .not_null()
                .string_len(26)
                .primary_key(),
        )
        .col(ColumnDef::new(MealPlan::RecipeId).string().null().string_len(26))
        .col(ColumnDef::new(MealPlan::CustomItem).string().null())
        .col(ColumnDef::new(MealPlan::PlannedDate).string().not_null())
        .col(ColumnDef::new(MealPlan::MealType).string().not_null())
        .col(
            ColumnDef::new(MealPlan::Servings)
                .integer()
                .not_null()
                .default(1),
        )
        .col(ColumnDef::new(MealPlan::Notes).text().null())
        .col(ColumnDef::new(MealPlan::CreatedAt).big_integer().not_null())
        .foreign_key(
            ForeignKey::create()
                .name("fk_meal_plan_recipe")
                .from(MealPlan::Table, MealPlan::RecipeId)
                .to(Recipe::Table, Recipe::Id)
                .on_delete(ForeignKeyAction::Cascade),
        )
        // A slot holds a recipe or a custom item, never both, never neither.
        .check(
            Expr::col(MealPlan::RecipeId)
                .is_not_null()
                .and(Expr::col(MealPlan::CustomItem).is_null())
                .or(Expr::col(MealPlan::RecipeId)
                    .is_null()
                    .and(Expr::col(MealPlan::CustomItem).is_not_null())),
        )
        .to_owned()
}

fn drop_table() -> TableDropStatement {
    Table::drop().table(MealPlan::Table).to_owned()
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

pub struct CreatePlannedDateIdx;

fn create_planned_date_idx() -> IndexCreateStatement {
    Index::create()
        .name("idx_meal_plan_planned_date")
        .table(MealPlan::Table)
        .col(MealPlan::PlannedDate)
        .to_owned()
}

fn drop_planned_date_idx() -> IndexDropStatement {
    Index::drop()
        .name("idx_meal_plan_planned_date")
        .table(MealPlan::Table)
        .to_owned()
}

#[async_trait::async_trait]
impl sqlx_migrator::Operation<sqlx::Sqlite> for CreatePlannedDateIdx {
    async fn up(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = create_planned_date_idx().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }

    async fn down(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = drop_planned_date_idx().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }
}
