use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::Checklist;
use crate::seed::PlanSummary;

/// Result of reconciling one seed definition with storage.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "action", rename_all = "lowercase")]
pub enum ReconcileOutcome {
    /// A fresh checklist row was written
    Created { checklist: Checklist },
    /// An existing checklist was reconciled in place
    Updated {
        checklist: Checklist,
        summary: PlanSummary,
    },
}

impl ReconcileOutcome {
    pub fn checklist(&self) -> &Checklist {
        match self {
            ReconcileOutcome::Created { checklist } => checklist,
            ReconcileOutcome::Updated { checklist, .. } => checklist,
        }
    }

    /// True when an in-place update found nothing to change.
    pub fn is_unchanged(&self) -> bool {
        matches!(self, ReconcileOutcome::Updated { summary, .. } if summary.is_empty())
    }
}

/// Outcome of one definition within a seed file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChecklistOutcome {
    /// Seed file the definition came from
    pub source: PathBuf,
    pub outcome: ReconcileOutcome,
}

/// Everything a seed run did, in processing order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SeedReport {
    /// Number of votable rows inserted
    pub votables_seeded: usize,

    /// Seed files that did not exist and were skipped
    pub skipped_files: Vec<PathBuf>,

    pub checklists: Vec<ChecklistOutcome>,
}

impl SeedReport {
    pub fn created_count(&self) -> usize {
        self.checklists
            .iter()
            .filter(|c| matches!(c.outcome, ReconcileOutcome::Created { .. }))
            .count()
    }

    pub fn updated_count(&self) -> usize {
        self.checklists
            .iter()
            .filter(|c| matches!(c.outcome, ReconcileOutcome::Updated { .. }) && !c.outcome.is_unchanged())
            .count()
    }

    pub fn unchanged_count(&self) -> usize {
        self.checklists
            .iter()
            .filter(|c| c.outcome.is_unchanged())
            .count()
    }
}
