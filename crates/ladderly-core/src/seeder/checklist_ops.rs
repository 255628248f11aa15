//! Checklist operations for the Seeder.

use log::{debug, info};

use super::Seeder;
use crate::{
    error::Result,
    models::{Checklist, ReconcileOutcome, DEFAULT_CHECKLIST_VERSION},
    params::{ChecklistName, Id},
    seed::{normalize_items, plan_reconciliation, SeedDefinition},
};

impl Seeder {
    /// Creates a brand new checklist from a seed definition.
    ///
    /// Existing checklists with the same name are left untouched; the new
    /// row becomes the latest one for that name. Every item slot is
    /// normalized before anything is written, so a malformed slot aborts
    /// with no rows created.
    pub async fn create_new_checklist(&self, definition: &SeedDefinition) -> Result<Checklist> {
        let name = definition.name.clone();
        let items = normalize_items(definition)?;

        let checklist = self
            .with_database(move |db| db.create_checklist(&name, DEFAULT_CHECKLIST_VERSION, &items))
            .await?;

        info!(
            "Created checklist '{}' (id {}) with {} items",
            checklist.name,
            checklist.id,
            checklist.items.len()
        );

        Ok(checklist)
    }

    /// Reconciles the latest checklist named by `definition` in place.
    ///
    /// The checklist id and every positionally aligned item id survive, so
    /// user progress stays attached. When no checklist with that name exists
    /// yet, one is created instead.
    pub async fn update_checklist_in_place(
        &self,
        definition: &SeedDefinition,
    ) -> Result<ReconcileOutcome> {
        let name = definition.name.clone();
        let desired = normalize_items(definition)?;

        let latest = self
            .with_database(move |db| db.find_latest_checklist(&name))
            .await?;

        let Some(latest) = latest else {
            info!(
                "No checklist named '{}' exists yet, creating it",
                definition.name
            );
            let checklist = self.create_new_checklist(definition).await?;
            return Ok(ReconcileOutcome::Created { checklist });
        };

        let plan = plan_reconciliation(&latest.items, &desired);
        let summary = plan.summary();

        debug!(
            "Reconciliation plan for checklist '{}' (id {}): {}",
            latest.name, latest.id, summary
        );

        let checklist_id = latest.id;
        let checklist = self
            .with_database(move |db| db.apply_reconciliation(checklist_id, &plan))
            .await?;

        if summary.is_empty() {
            info!(
                "Checklist '{}' (id {}) is already up to date",
                checklist.name, checklist.id
            );
        } else {
            info!(
                "Updated checklist '{}' (id {}): {}",
                checklist.name, checklist.id, summary
            );
        }

        Ok(ReconcileOutcome::Updated { checklist, summary })
    }

    /// Retrieves the latest checklist with the given name.
    pub async fn get_latest_checklist(&self, params: &ChecklistName) -> Result<Option<Checklist>> {
        let name = params.name.clone();
        self.with_database(move |db| db.find_latest_checklist(&name))
            .await
    }

    /// Retrieves a checklist by its ID.
    pub async fn get_checklist(&self, params: &Id) -> Result<Option<Checklist>> {
        let checklist_id = params.id;
        self.with_database(move |db| db.get_checklist(checklist_id))
            .await
    }

    /// Lists every checklist, most recently updated first.
    pub async fn list_checklists(&self) -> Result<Vec<Checklist>> {
        self.with_database(|db| db.list_checklists()).await
    }
}
