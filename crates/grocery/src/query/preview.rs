use serde::Serialize;
use time::Date;

use crate::consolidate;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreviewItem {
    pub ingredient: String,
    pub quantity: String,
    pub checked: bool,
}

impl super::Query {
    /// Consolidated ingredients for `[start, end]` without saving anything.
    pub async fn preview(&self, start: Date, end: Date) -> anyhow::Result<Vec<PreviewItem>> {
        let entries = mealplanner_mealplan::Query(self.0.clone())
            .entries_between(start, end)
            .await?;

        Ok(consolidate(&entries)
            .into_iter()
            .map(|item| PreviewItem {
                quantity: item.display_quantity(),
                ingredient: item.name,
                checked: false,
            })
            .collect())
    }
}
