//! Data models for checklists, votables and user progress.
//!
//! Models are plain serde-serializable structs. Their markdown rendering
//! lives in [`crate::display`], mirroring how the CLI prints them.
//!
//! # Identity
//!
//! Checklist and item ids are SQLite `AUTOINCREMENT` keys and are never
//! reused. In-place reconciliation keeps the checklist id and every
//! positionally aligned item id, so [`UserChecklistItem::checklist_item_id`]
//! stays valid across seed runs.
//!
//! ```rust
//! use ladderly_core::models::{ItemContent, VotableType};
//!
//! let content = ItemContent::text("Write a resume");
//! assert!(content.is_required);
//! assert!(content.link_uri.is_empty());
//!
//! assert_eq!("SCHOOL".parse::<VotableType>(), Ok(VotableType::School));
//! ```

mod checklist;
mod report;
mod user_checklist;
mod votable;

#[cfg(test)]
mod tests;

pub use checklist::{
    latest_by_recency, Checklist, ChecklistItem, ItemContent, DEFAULT_CHECKLIST_VERSION,
};
pub use report::{ChecklistOutcome, ReconcileOutcome, SeedReport};
pub use user_checklist::{UserChecklist, UserChecklistItem, UserChecklistProgress};
pub use votable::{Votable, VotableSeed, VotableType};
