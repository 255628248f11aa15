//! User progress operations for the Seeder.

use super::Seeder;
use crate::{
    error::Result,
    models::{UserChecklist, UserChecklistProgress},
    params::{CreateUserChecklist, SetItemCompletion, UserChecklistByName},
};

impl Seeder {
    /// Starts tracking a user's progress against a checklist.
    pub async fn create_user_checklist(&self, params: &CreateUserChecklist) -> Result<UserChecklist> {
        let user_id = params.user_id;
        let checklist_id = params.checklist_id;

        self.with_database(move |db| db.create_user_checklist(user_id, checklist_id))
            .await
    }

    /// Retrieves the user's most recent progress for a checklist name,
    /// together with the latest checklist of that name.
    ///
    /// Returns `None` when the user has no progress for that name or no
    /// checklist carries it.
    pub async fn get_latest_user_checklist_by_name(
        &self,
        params: &UserChecklistByName,
    ) -> Result<Option<UserChecklistProgress>> {
        let user_id = params.user_id;
        let name = params.name.clone();

        self.with_database(move |db| {
            let Some(user_checklist) = db.find_latest_user_checklist_by_name(user_id, &name)? else {
                return Ok(None);
            };
            let latest = db.find_latest_checklist(&name)?;

            Ok(latest.map(|latest| UserChecklistProgress::new(user_checklist, latest)))
        })
        .await
    }

    /// Marks a progress row complete or open.
    pub async fn set_user_checklist_item_complete(
        &self,
        params: &SetItemCompletion,
    ) -> Result<UserChecklist> {
        let user_item_id = params.user_item_id;
        let is_complete = params.is_complete;

        self.with_database(move |db| db.set_user_checklist_item_complete(user_item_id, is_complete))
            .await
    }
}
