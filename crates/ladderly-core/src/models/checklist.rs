use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// Version label written on every checklist created by the seeder.
///
/// The free-text version is only a display label; the latest checklist for
/// a name is resolved by `updated_at` recency.
pub const DEFAULT_CHECKLIST_VERSION: &str = "ignoreme_version_field_deprecation_in_progress";

/// Canonical content of a checklist item, independent of identity and
/// position.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ItemContent {
    /// Text shown for the step
    pub display_text: String,

    /// Label of the optional link
    pub link_text: String,

    /// Target of the optional link
    pub link_uri: String,

    /// Longer explanation shown on demand
    pub detail_text: String,

    /// Whether the step counts towards completion
    pub is_required: bool,
}

impl ItemContent {
    /// Creates required content with only display text set.
    pub fn text(display_text: impl Into<String>) -> Self {
        Self {
            display_text: display_text.into(),
            link_text: String::new(),
            link_uri: String::new(),
            detail_text: String::new(),
            is_required: true,
        }
    }
}

/// A named, versioned, ordered set of actionable items.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Checklist {
    /// Unique identifier, stable across in-place updates
    pub id: u64,

    /// Name of the checklist lineage
    pub name: String,

    /// Free-text version label
    pub version: String,

    /// Timestamp when the checklist was created (UTC)
    pub created_at: Timestamp,

    /// Timestamp when the checklist was last reconciled (UTC)
    pub updated_at: Timestamp,

    /// Items ordered by `display_index`
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<ChecklistItem>,
}

impl Checklist {
    /// Number of items that count towards completion.
    pub fn required_count(&self) -> usize {
        self.items.iter().filter(|i| i.content.is_required).count()
    }
}

/// One step within a checklist.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChecklistItem {
    /// Unique identifier, referenced by user progress records
    pub id: u64,

    /// ID of the owning checklist
    pub checklist_id: u64,

    /// Zero-based display position
    pub display_index: u32,

    #[serde(flatten)]
    pub content: ItemContent,

    /// Version label of the checklist when the item was created
    pub version: String,

    /// Timestamp when the item was created (UTC)
    pub created_at: Timestamp,

    /// Timestamp when the item was last updated (UTC)
    pub updated_at: Timestamp,
}

/// Picks the most recently updated checklist, breaking ties by highest id.
pub fn latest_by_recency(candidates: impl IntoIterator<Item = Checklist>) -> Option<Checklist> {
    candidates
        .into_iter()
        .max_by(|a, b| (a.updated_at, a.id).cmp(&(b.updated_at, b.id)))
}
