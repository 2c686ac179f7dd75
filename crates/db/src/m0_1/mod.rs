mod grocery_list;
mod grocery_list_item;
mod meal_plan;
mod recipe;

use sqlx_migrator::vec_box;

pub struct Migration;

sqlx_migrator::sqlite_migration!(
    Migration,
    "mealplanner",
    "m0_1",
    vec_box![],
    vec_box![
        recipe::CreateTable,
        meal_plan::CreateTable,
        meal_plan::CreatePlannedDateIdx,
        grocery_list::CreateTable,
        grocery_list_item::CreateTable,
        grocery_list_item::CreateListIdx
    ]
);
