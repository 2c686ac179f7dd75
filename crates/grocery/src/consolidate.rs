use std::collections::HashMap;

use mealplanner_shared::mealplan::MealPlanEntry;
use serde::Serialize;

/// One line of a grocery list: a normalized ingredient string and how many
/// times it appeared across the planned meals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConsolidatedItem {
    pub name: String,
    pub occurrence_count: usize,
}

impl ConsolidatedItem {
    /// `""` for a single occurrence, `"x{n}"` otherwise.
    pub fn display_quantity(&self) -> String {
        if self.occurrence_count > 1 {
            format!("x{}", self.occurrence_count)
        } else {
            String::new()
        }
    }
}

/// Trims surrounding whitespace and lower-cases. Nothing else: quantities,
/// units and punctuation are part of the key.
pub fn normalize(line: &str) -> String {
    line.trim().to_lowercase()
}

/// Reduces planned meals to a counted ingredient list.
///
/// Every recipe ingredient line and every custom item is one occurrence of
/// its normalized text. Blank lines are dropped. Items keep the order in
/// which their key was first seen.
pub fn consolidate<'a>(
    entries: impl IntoIterator<Item = &'a MealPlanEntry>,
) -> Vec<ConsolidatedItem> {
    let mut positions: HashMap<String, usize> = HashMap::new();
    let mut items: Vec<ConsolidatedItem> = vec![];

    for line in entries.into_iter().flat_map(|entry| entry.item.lines()) {
        let name = normalize(line);
        if name.is_empty() {
            continue;
        }

        match positions.get(&name) {
            Some(&pos) => items[pos].occurrence_count += 1,
            None => {
                positions.insert(name.to_owned(), items.len());
                items.push(ConsolidatedItem {
                    name,
                    occurrence_count: 1,
                });
            }
        }
    }

    items
}
