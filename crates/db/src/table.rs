use sea_query::Iden;

#[derive(Iden, Clone)]
pub enum Recipe {
    Table,
    Id,
    RecipeName,
    Ingredients,
    Instructions,
    Tags,
    MainIngredients,
    CookTime,
    Servings,
    Rating,
    LeftoverScore,
    Notes,
    SourceUrl,
    ImageUrl,
    Meal,
    CreatedAt,
}

#[derive(Iden, Clone)]
pub enum MealPlan {
    Table,
    Id,
    RecipeId,
    CustomItem,
    PlannedDate,
    MealType,
    Servings,
    Notes,
    CreatedAt,
}

#[derive(Iden, Clone)]
pub enum GroceryList {
    Table,
    Id,
    Name,
    StartDate,
    EndDate,
    CreatedAt,
}

#[derive(Iden, Clone)]
pub enum GroceryListItem {
    Table,
    Id,
    ListId,
    Ingredient,
    Quantity,
    Checked,
    Position,
}
