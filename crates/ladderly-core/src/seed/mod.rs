//! Pure stages of the seed pipeline.
//!
//! Seeding runs in two phases. Everything in this module belongs to the
//! first one and has no side effects:
//!
//! ```text
//! JSON document ──▶ schema::validate_seed_document ──▶ Vec<SeedDefinition>
//!                                                          │
//!                       normalize::normalize_items ◀───────┘
//!                                   │
//!   existing items ──▶ diff::plan_reconciliation ──▶ ReconciliationPlan
//! ```
//!
//! The second phase ([`crate::Seeder`] on top of [`crate::Database`]) writes
//! the result, one transaction per checklist.

use serde::{Deserialize, Serialize};

pub mod diff;
pub mod normalize;
pub mod schema;

pub use diff::{plan_reconciliation, ReconcileOp, ReconciliationPlan, PlanSummary};
pub use normalize::{normalize_item, normalize_items};
pub use schema::validate_seed_document;

/// Desired state of one checklist, as written in a seed file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SeedDefinition {
    pub name: String,

    /// Item slots in display order; `None` marks an absent slot
    pub items: Vec<Option<SeedItem>>,
}

impl SeedDefinition {
    /// Builds a definition from present items.
    pub fn new(name: impl Into<String>, items: impl IntoIterator<Item = SeedItem>) -> Self {
        Self {
            name: name.into(),
            items: items.into_iter().map(Some).collect(),
        }
    }
}

/// A seed item is either bare display text or a structured record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum SeedItem {
    Text(String),
    Detailed(DetailedSeedItem),
}

impl From<&str> for SeedItem {
    fn from(text: &str) -> Self {
        SeedItem::Text(text.to_string())
    }
}

impl From<DetailedSeedItem> for SeedItem {
    fn from(item: DetailedSeedItem) -> Self {
        SeedItem::Detailed(item)
    }
}

/// Structured seed item; only `displayText` is mandatory.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DetailedSeedItem {
    pub display_text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_uri: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_required: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail_text: Option<String>,
}

impl DetailedSeedItem {
    pub fn new(display_text: impl Into<String>) -> Self {
        Self {
            display_text: display_text.into(),
            ..Self::default()
        }
    }
}
