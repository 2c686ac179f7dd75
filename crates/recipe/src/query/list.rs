use mealplanner_db::table::Recipe;
use sea_query::{Cond, Expr, ExprTrait, Order, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use serde::{Deserialize, Serialize};
use sqlx::{prelude::FromRow, types::Json};

#[derive(Debug, FromRow, Serialize)]
pub struct RecipeRow {
    pub id: String,
    pub recipe_name: String,
    pub ingredients: Json<Vec<String>>,
    pub instructions: String,
    pub tags: Json<Vec<String>>,
    pub main_ingredients: Json<Vec<String>>,
    pub cook_time: Option<String>,
    pub servings: Option<String>,
    pub rating: Option<i64>,
    pub leftover_score: Option<String>,
    pub notes: Option<String>,
    pub source_url: Option<String>,
    pub image_url: Option<String>,
    pub meal: Option<String>,
    pub created_at: i64,
}

#[derive(Debug, Default, Clone, Deserialize)]
pub struct FilterQuery {
    pub search: Option<String>,
    pub meal: Option<String>,
    pub tags: Option<String>,
}

fn columns() -> [Recipe; 15] {
    [
        Recipe::Id,
        Recipe::RecipeName,
        Recipe::Ingredients,
        Recipe::Instructions,
        Recipe::Tags,
        Recipe::MainIngredients,
        Recipe::CookTime,
        Recipe::Servings,
        Recipe::Rating,
        Recipe::LeftoverScore,
        Recipe::Notes,
        Recipe::SourceUrl,
        Recipe::ImageUrl,
        Recipe::Meal,
        Recipe::CreatedAt,
    ]
}

impl super::Query {
    /// Newest recipes first. `search` matches name, ingredients and main
    /// ingredients; `tags` matches anywhere in the tag list.
    pub async fn filter(&self, input: FilterQuery) -> anyhow::Result<Vec<RecipeRow>> {
        let mut cond = Cond::all();

        if let Some(search) = input.search.filter(|v| !v.is_empty()) {
            let pattern = format!("%{search}%");
            cond = cond.add(
                Cond::any()
                    .add(Expr::col(Recipe::RecipeName).like(pattern.to_owned()))
                    .add(Expr::col(Recipe::Ingredients).like(pattern.to_owned()))
                    .add(Expr::col(Recipe::MainIngredients).like(pattern)),
            );
        }

        if let Some(meal) = input.meal.filter(|v| !v.is_empty()) {
            cond = cond.add(Expr::col(Recipe::Meal).eq(meal));
        }

        if let Some(tags) = input.tags.filter(|v| !v.is_empty()) {
            cond = cond.add(Expr::col(Recipe::Tags).like(format!("%{tags}%")));
        }

        let statement = sea_query::Query::select()
            .columns(columns())
            .from(Recipe::Table)
            .cond_where(cond)
            .order_by(Recipe::CreatedAt, Order::Desc)
            .order_by_expr(Expr::cust("rowid"), Order::Desc)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        Ok(sqlx::query_as_with::<_, RecipeRow, _>(&sql, values)
            .fetch_all(&self.0)
            .await?)
    }

    pub async fn find(&self, id: impl Into<String>) -> anyhow::Result<Option<RecipeRow>> {
        let id = id.into();
        let statement = sea_query::Query::select()
            .columns(columns())
            .from(Recipe::Table)
            .and_where(Expr::col(Recipe::Id).eq(&id))
            .limit(1)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        Ok(sqlx::query_as_with::<_, RecipeRow, _>(&sql, values)
            .fetch_optional(&self.0)
            .await?)
    }

    pub async fn exists(&self, id: impl Into<String>) -> anyhow::Result<bool> {
        let id = id.into();
        let statement = sea_query::Query::select()
            .column(Recipe::Id)
            .from(Recipe::Table)
            .and_where(Expr::col(Recipe::Id).eq(&id))
            .limit(1)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let row = sqlx::query_as_with::<_, (String,), _>(&sql, values)
            .fetch_optional(&self.0)
            .await?;

        Ok(row.is_some())
    }
}
