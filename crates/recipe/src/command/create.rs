use mealplanner_db::table::Recipe;
use sea_query::{Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use ulid::Ulid;
use validator::Validate;

#[derive(Validate, Clone, Debug, Default, PartialEq)]
pub struct CreateRecipeInput {
    #[validate(length(min = 1, max = 200))]
    pub recipe_name: String,
    pub ingredients: Vec<String>,
    pub instructions: String,
    pub tags: Vec<String>,
    pub main_ingredients: Vec<String>,
    pub cook_time: Option<String>,
    pub servings: Option<String>,
    pub rating: Option<i64>,
    pub leftover_score: Option<String>,
    pub notes: Option<String>,
    pub source_url: Option<String>,
    pub image_url: Option<String>,
    pub meal: Option<String>,
}

impl super::Command {
    pub async fn create(&self, input: CreateRecipeInput) -> mealplanner_shared::Result<String> {
        input.validate()?;

        let id = Ulid::new().to_string();
        let statement = Query::insert()
            .into_table(Recipe::Table)
            .columns([
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
            ])
            .values_panic([
                id.to_owned().into(),
                input.recipe_name.into(),
                serde_json::to_string(&input.ingredients)?.into(),
                input.instructions.into(),
                serde_json::to_string(&input.tags)?.into(),
                serde_json::to_string(&input.main_ingredients)?.into(),
                input.cook_time.into(),
                input.servings.into(),
                input.rating.into(),
                input.leftover_score.into(),
                input.notes.into(),
                input.source_url.into(),
                input.image_url.into(),
                input.meal.into(),
                mealplanner_shared::now().into(),
            ])
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values)
            .execute(&self.write_db)
            .await?;

        tracing::debug!(recipe = id, "recipe created");

        Ok(id)
    }
}
