use mealplanner_shared::field::{self, Candidates};
use serde_json::{Map, Value};

use crate::CreateRecipeInput;

pub const RECIPE_NAME: Candidates = &["Recipe Name", "recipeName", "recipe_name", "name", "Name"];
pub const INGREDIENTS: Candidates = &["Ingredients", "ingredients"];
pub const INSTRUCTIONS: Candidates = &["Instructions", "instructions"];
pub const TAGS: Candidates = &["Tags", "tags"];
pub const MAIN_INGREDIENTS: Candidates =
    &["Main Ingredients", "mainIngredients", "main_ingredients"];
pub const COOK_TIME: Candidates = &["Cook Time", "cookTime", "cook_time"];
pub const SERVINGS: Candidates = &["Servings", "servings"];
pub const RATING: Candidates = &["Rating", "rating", "Stars", "stars"];
pub const LEFTOVER_SCORE: Candidates = &[
    "Leftover Score",
    "leftoverScore",
    "leftover_score",
    "Leftover Friendly",
];
pub const NOTES: Candidates = &["Notes", "notes"];
pub const SOURCE_URL: Candidates = &["Source URL", "sourceUrl", "source_url", "url"];
pub const IMAGE_URL: Candidates = &["Image URL", "imageUrl", "image_url", "image"];
pub const MEAL: Candidates = &["Meal", "meal"];

impl CreateRecipeInput {
    /// Maps a loosely named payload (automation webhook, spreadsheet export)
    /// onto a recipe. Returns `None` when no recipe name can be found.
    pub fn from_payload(data: &Map<String, Value>) -> Option<Self> {
        let recipe_name = field::text(data, RECIPE_NAME)?;

        Some(Self {
            recipe_name,
            ingredients: field::lines(data, INGREDIENTS),
            instructions: field::text(data, INSTRUCTIONS).unwrap_or_default(),
            tags: field::lines(data, TAGS),
            main_ingredients: field::lines(data, MAIN_INGREDIENTS),
            cook_time: field::text(data, COOK_TIME),
            servings: field::text(data, SERVINGS),
            rating: field::integer(data, RATING),
            leftover_score: field::text(data, LEFTOVER_SCORE),
            notes: field::text(data, NOTES),
            source_url: field::text(data, SOURCE_URL),
            image_url: field::text(data, IMAGE_URL),
            meal: field::text(data, MEAL),
        })
    }
}
