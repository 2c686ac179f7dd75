use serde::Serialize;
use serde_json::Value;

use crate::CreateRecipeInput;

#[derive(Debug, Default, Serialize)]
pub struct ImportError {
    pub recipe: String,
    pub error: String,
}

#[derive(Debug, Default, Serialize)]
pub struct ImportReport {
    pub imported: usize,
    pub skipped: usize,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ImportError>,
}

impl super::Command {
    /// Imports each record independently. Records without a name are
    /// skipped, records that fail to insert are skipped and reported.
    pub async fn import(&self, records: Vec<Value>) -> mealplanner_shared::Result<ImportReport> {
        let mut report = ImportReport::default();

        for record in records {
            let Some(input) = record.as_object().and_then(CreateRecipeInput::from_payload) else {
                report.skipped += 1;
                continue;
            };

            let recipe = input.recipe_name.to_owned();
            match self.create(input).await {
                Ok(_) => report.imported += 1,
                Err(err) => {
                    tracing::warn!(recipe = recipe, err = %err, "failed to import recipe");
                    report.skipped += 1;
                    report.errors.push(ImportError {
                        recipe,
                        error: err.to_string(),
                    });
                }
            }
        }

        tracing::info!(
            imported = report.imported,
            skipped = report.skipped,
            "bulk recipe import finished"
        );

        Ok(report)
    }
}
