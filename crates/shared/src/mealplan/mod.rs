use time::Date;

/// What occupies a meal slot: a catalog recipe (with its ingredient lines
/// resolved) or a free-text item. A slot always holds exactly one of them.
#[derive(Clone, Debug, PartialEq)]
pub enum PlannedItem {
    Recipe { id: String, ingredients: Vec<String> },
    Custom(String),
}

impl PlannedItem {
    /// Raw lines this item contributes to a grocery list: one per recipe
    /// ingredient, or the custom text itself.
    pub fn lines(&self) -> &[String] {
        match self {
            PlannedItem::Recipe { ingredients, .. } => ingredients,
            PlannedItem::Custom(text) => std::slice::from_ref(text),
        }
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, PlannedItem::Custom(_))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct MealPlanEntry {
    pub id: String,
    pub planned_date: Date,
    pub meal_type: String,
    pub item: PlannedItem,
}
