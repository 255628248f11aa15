use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::Checklist;

/// A user's progress record against one checklist.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserChecklist {
    pub id: u64,
    pub user_id: u64,
    pub checklist_id: u64,

    /// True once every required item is complete
    pub is_complete: bool,

    pub created_at: Timestamp,
    pub updated_at: Timestamp,

    /// Progress rows ordered by the checklist item's `display_index`
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<UserChecklistItem>,
}

/// Completion state of a single checklist item for one user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserChecklistItem {
    pub id: u64,
    pub user_checklist_id: u64,
    pub checklist_item_id: u64,
    pub is_complete: bool,

    /// Display text of the referenced checklist item
    pub display_text: String,

    /// Whether the referenced checklist item is required
    pub is_required: bool,

    pub display_index: u32,
}

/// A user's most recent progress for a checklist name, together with the
/// latest checklist carrying that name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserChecklistProgress {
    pub user_checklist: UserChecklist,
    pub latest_checklist: Checklist,

    /// True when the progress record points at the latest checklist
    pub is_latest_version: bool,
}

impl UserChecklistProgress {
    pub fn new(user_checklist: UserChecklist, latest_checklist: Checklist) -> Self {
        let is_latest_version = user_checklist.checklist_id == latest_checklist.id;
        Self {
            user_checklist,
            latest_checklist,
            is_latest_version,
        }
    }
}
