//! Conversion of raw seed items into canonical item content.

use super::{SeedDefinition, SeedItem};
use crate::{
    error::{Result, SeedError},
    models::ItemContent,
};

/// Normalizes one item slot at `index` of the checklist `checklist_name`.
///
/// Bare strings become required items with empty link and detail text.
/// Structured items default their optional text fields to empty and
/// `is_required` to `true`; an explicit `false` is kept.
pub fn normalize_item(
    item: Option<&SeedItem>,
    index: usize,
    checklist_name: &str,
) -> Result<ItemContent> {
    match item {
        None => Err(SeedError::MalformedSeedItem {
            checklist: checklist_name.to_string(),
            index,
        }),
        Some(SeedItem::Text(text)) => Ok(ItemContent::text(text.as_str())),
        Some(SeedItem::Detailed(detailed)) => Ok(ItemContent {
            display_text: detailed.display_text.clone(),
            link_text: detailed.link_text.clone().unwrap_or_default(),
            link_uri: detailed.link_uri.clone().unwrap_or_default(),
            detail_text: detailed.detail_text.clone().unwrap_or_default(),
            is_required: detailed.is_required.unwrap_or(true),
        }),
    }
}

/// Normalizes every slot of a definition in index order, stopping at the
/// first absent slot.
pub fn normalize_items(definition: &SeedDefinition) -> Result<Vec<ItemContent>> {
    definition
        .items
        .iter()
        .enumerate()
        .map(|(index, item)| normalize_item(item.as_ref(), index, &definition.name))
        .collect()
}
