//! Display implementations for seed outcomes.

use std::fmt;

use crate::models::{ReconcileOutcome, SeedReport};

impl fmt::Display for ReconcileOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReconcileOutcome::Created { checklist } => write!(
                f,
                "Created checklist '{}' (ID: {}) with {} items",
                checklist.name,
                checklist.id,
                checklist.items.len()
            ),
            ReconcileOutcome::Updated { checklist, summary } => write!(
                f,
                "Updated checklist '{}' (ID: {}): {}",
                checklist.name, checklist.id, summary
            ),
        }
    }
}

impl fmt::Display for SeedReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Seed report")?;
        writeln!(f)?;
        writeln!(f, "- Checklists created: {}", self.created_count())?;
        writeln!(f, "- Checklists updated: {}", self.updated_count())?;
        writeln!(f, "- Checklists unchanged: {}", self.unchanged_count())?;
        writeln!(f, "- Votables seeded: {}", self.votables_seeded)?;

        if !self.checklists.is_empty() {
            writeln!(f, "\n## Checklists")?;
            writeln!(f)?;
            for entry in &self.checklists {
                writeln!(f, "- {} *(from {})*", entry.outcome, entry.source.display())?;
            }
        }

        if !self.skipped_files.is_empty() {
            writeln!(f, "\n## Skipped files")?;
            writeln!(f)?;
            for path in &self.skipped_files {
                writeln!(f, "- {}", path.display())?;
            }
        }

        Ok(())
    }
}
