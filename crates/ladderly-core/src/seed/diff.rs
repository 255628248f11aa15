//! Positional reconciliation of existing checklist items with a seed.
//!
//! Items are matched by position, not by content: the item at position `i`
//! of the existing checklist keeps its id and takes the content of seed item
//! `i`, even when its text changed. Progress records reference item ids, so
//! a typo fix in a seed file must not orphan them. Seed authors append new
//! steps at the end; reordering or inserting in the middle of a list shifts
//! identities onto different steps.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::{ChecklistItem, ItemContent};

/// One write needed to converge an existing checklist to its seed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum ReconcileOp {
    /// Item beyond the new length
    Delete { item_id: u64 },
    /// Aligned item whose content changed; its index is rewritten too
    Update {
        item_id: u64,
        display_index: u32,
        content: ItemContent,
    },
    /// Aligned item with unchanged content stored at a different index
    Reorder { item_id: u64, display_index: u32 },
    /// Seed item beyond the old length
    Create {
        display_index: u32,
        content: ItemContent,
    },
}

/// Ordered list of operations: deletes, then updates and reorders by
/// ascending index, then creates by ascending index.
///
/// Applying the operations in this order never puts two items of one
/// checklist on the same `display_index`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconciliationPlan {
    ops: Vec<ReconcileOp>,
}

impl ReconciliationPlan {
    pub fn ops(&self) -> &[ReconcileOp] {
        &self.ops
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn summary(&self) -> PlanSummary {
        self.ops
            .iter()
            .fold(PlanSummary::default(), |mut summary, op| {
                match op {
                    ReconcileOp::Delete { .. } => summary.deleted += 1,
                    ReconcileOp::Update { .. } => summary.updated += 1,
                    ReconcileOp::Reorder { .. } => summary.reordered += 1,
                    ReconcileOp::Create { .. } => summary.created += 1,
                }
                summary
            })
    }
}

impl IntoIterator for ReconciliationPlan {
    type Item = ReconcileOp;
    type IntoIter = std::vec::IntoIter<ReconcileOp>;

    fn into_iter(self) -> Self::IntoIter {
        self.ops.into_iter()
    }
}

impl FromIterator<ReconcileOp> for ReconciliationPlan {
    fn from_iter<I: IntoIterator<Item = ReconcileOp>>(iter: I) -> Self {
        Self {
            ops: iter.into_iter().collect(),
        }
    }
}

/// Counts of operations in a plan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanSummary {
    pub created: usize,
    pub updated: usize,
    pub reordered: usize,
    pub deleted: usize,
}

impl PlanSummary {
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    pub fn total(&self) -> usize {
        self.created + self.updated + self.reordered + self.deleted
    }
}

impl fmt::Display for PlanSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "no changes");
        }
        write!(
            f,
            "{} created, {} updated, {} reordered, {} deleted",
            self.created, self.updated, self.reordered, self.deleted
        )
    }
}

/// Computes the operations turning `existing` into `desired`.
///
/// `existing` may come in any order; it is aligned by `display_index`
/// (ties by id) before matching.
pub fn plan_reconciliation(existing: &[ChecklistItem], desired: &[ItemContent]) -> ReconciliationPlan {
    let mut aligned: Vec<&ChecklistItem> = existing.iter().collect();
    aligned.sort_by_key(|item| (item.display_index, item.id));

    let kept = aligned.len().min(desired.len());
    let mut ops = Vec::with_capacity(aligned.len().max(desired.len()));

    ops.extend(
        aligned[kept..]
            .iter()
            .map(|item| ReconcileOp::Delete { item_id: item.id }),
    );

    for (position, (item, content)) in aligned.iter().zip(desired).enumerate() {
        let display_index = position as u32;
        if item.content != *content {
            ops.push(ReconcileOp::Update {
                item_id: item.id,
                display_index,
                content: content.clone(),
            });
        } else if item.display_index != display_index {
            ops.push(ReconcileOp::Reorder {
                item_id: item.id,
                display_index,
            });
        }
    }

    ops.extend(
        desired
            .iter()
            .enumerate()
            .skip(kept)
            .map(|(position, content)| ReconcileOp::Create {
                display_index: position as u32,
                content: content.clone(),
            }),
    );

    ReconciliationPlan { ops }
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;

    use super::*;
    use crate::models::DEFAULT_CHECKLIST_VERSION;

    fn item(id: u64, display_index: u32, text: &str) -> ChecklistItem {
        ChecklistItem {
            id,
            checklist_id: 1,
            display_index,
            content: ItemContent::text(text),
            version: DEFAULT_CHECKLIST_VERSION.to_string(),
            created_at: Timestamp::from_second(1640995200).unwrap(),
            updated_at: Timestamp::from_second(1640995200).unwrap(),
        }
    }

    fn contents(texts: &[&str]) -> Vec<ItemContent> {
        texts.iter().map(|t| ItemContent::text(*t)).collect()
    }

    #[test]
    fn test_unchanged_seed_yields_empty_plan() {
        let existing = vec![item(1, 0, "A"), item(2, 1, "B")];
        let plan = plan_reconciliation(&existing, &contents(&["A", "B"]));

        assert!(plan.is_empty());
        assert!(plan.summary().is_empty());
    }

    #[test]
    fn test_changed_text_updates_in_place() {
        let existing = vec![item(1, 0, "A"), item(2, 1, "B"), item(3, 2, "C")];
        let plan = plan_reconciliation(&existing, &contents(&["A'", "B", "D"]));

        assert_eq!(
            plan.ops(),
            [
                ReconcileOp::Update {
                    item_id: 1,
                    display_index: 0,
                    content: ItemContent::text("A'"),
                },
                ReconcileOp::Update {
                    item_id: 3,
                    display_index: 2,
                    content: ItemContent::text("D"),
                },
            ]
        );
    }

    #[test]
    fn test_shrinking_deletes_tail_first() {
        let existing = vec![item(1, 0, "A"), item(2, 1, "B"), item(3, 2, "C"), item(4, 3, "X")];
        let plan = plan_reconciliation(&existing, &contents(&["A'", "B", "D"]));

        assert_eq!(plan.ops()[0], ReconcileOp::Delete { item_id: 4 });
        assert_eq!(
            plan.summary(),
            PlanSummary {
                created: 0,
                updated: 2,
                reordered: 0,
                deleted: 1,
            }
        );
    }

    #[test]
    fn test_growing_creates_after_updates() {
        let existing = vec![item(1, 0, "A")];
        let plan = plan_reconciliation(&existing, &contents(&["A", "B", "C"]));

        assert_eq!(
            plan.ops(),
            [
                ReconcileOp::Create {
                    display_index: 1,
                    content: ItemContent::text("B"),
                },
                ReconcileOp::Create {
                    display_index: 2,
                    content: ItemContent::text("C"),
                },
            ]
        );
    }

    #[test]
    fn test_gapped_indexes_are_compacted() {
        let existing = vec![item(7, 4, "B"), item(5, 0, "A"), item(9, 9, "C")];
        let plan = plan_reconciliation(&existing, &contents(&["A", "B", "C"]));

        assert_eq!(
            plan.ops(),
            [
                ReconcileOp::Reorder {
                    item_id: 7,
                    display_index: 1,
                },
                ReconcileOp::Reorder {
                    item_id: 9,
                    display_index: 2,
                },
            ]
        );
    }

    #[test]
    fn test_required_flag_change_is_an_update() {
        let existing = vec![item(1, 0, "A")];
        let desired = vec![ItemContent {
            is_required: false,
            ..ItemContent::text("A")
        }];
        let plan = plan_reconciliation(&existing, &desired);

        assert_eq!(plan.summary().updated, 1);
    }

    #[test]
    fn test_empty_seed_deletes_everything() {
        let existing = vec![item(1, 0, "A"), item(2, 1, "B")];
        let plan = plan_reconciliation(&existing, &[]);

        assert_eq!(plan.summary().deleted, 2);
        assert_eq!(plan.len(), 2);
    }

    #[test]
    fn test_middle_insertion_shifts_identity() {
        // Positional matching: inserting "X" in the middle rewrites the item
        // that used to be "B" and creates a fresh id for the tail.
        let existing = vec![item(1, 0, "A"), item(2, 1, "B")];
        let plan = plan_reconciliation(&existing, &contents(&["A", "X", "B"]));

        assert_eq!(
            plan.ops(),
            [
                ReconcileOp::Update {
                    item_id: 2,
                    display_index: 1,
                    content: ItemContent::text("X"),
                },
                ReconcileOp::Create {
                    display_index: 2,
                    content: ItemContent::text("B"),
                },
            ]
        );
    }

    #[test]
    fn test_summary_display() {
        assert_eq!(PlanSummary::default().to_string(), "no changes");
        let summary = PlanSummary {
            created: 1,
            updated: 2,
            reordered: 0,
            deleted: 3,
        };
        assert_eq!(summary.to_string(), "1 created, 2 updated, 0 reordered, 3 deleted");
    }
}
