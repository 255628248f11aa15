//! Parameter structures for seeder operations
//!
//! These structures are shared by every front end (the `ladderly-seed` CLI,
//! tests, other tools) and carry no framework-specific derives. Interface
//! layers define their own argument types and convert into these with
//! `From` implementations:
//!
//! ```text
//! CLI Args (clap) ──From──▶ Core Params ──▶ Seeder
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Parameters for a full seed run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeedChecklists {
    /// Directory holding the seed files
    pub seed_dir: PathBuf,

    /// Only process checklists with exactly this name; empty means all
    pub name: Option<String>,

    /// Reconcile the latest checklist of each name in place instead of
    /// creating new rows
    pub update_latest_checklists: bool,
}

impl SeedChecklists {
    /// The effective name filter, treating an empty name as no filter.
    pub fn name_filter(&self) -> Option<&str> {
        self.name.as_deref().filter(|name| !name.is_empty())
    }

    /// Whether a definition with `name` is processed by this run.
    pub fn matches(&self, name: &str) -> bool {
        self.name_filter().map_or(true, |filter| filter == name)
    }
}

/// Parameters for operations addressing a checklist by name.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChecklistName {
    /// Exact checklist name
    pub name: String,
}

/// Generic parameters for operations requiring just an ID.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Id {
    /// The ID of the resource to operate on
    pub id: u64,
}

/// Parameters for starting progress tracking.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateUserChecklist {
    pub user_id: u64,
    pub checklist_id: u64,
}

/// Parameters for looking up a user's progress by checklist name.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserChecklistByName {
    pub user_id: u64,
    pub name: String,
}

/// Parameters for marking a progress row complete or open.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SetItemCompletion {
    /// ID of the user checklist item
    pub user_item_id: u64,
    pub is_complete: bool,
}
