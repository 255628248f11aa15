//! Collection wrapper types for displaying groups of domain objects.

use std::fmt;

use super::datetime::LocalDateTime;
use crate::models::{Checklist, Votable};

/// Newtype wrapper for displaying a list of checklists without their items.
pub struct Checklists(pub Vec<Checklist>);

impl Checklists {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for Checklists {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No checklists found.");
        }

        for checklist in &self.0 {
            writeln!(
                f,
                "- **{}. {}** ({} items, updated {})",
                checklist.id,
                checklist.name,
                checklist.items.len(),
                LocalDateTime(&checklist.updated_at)
            )?;
        }

        Ok(())
    }
}

/// Newtype wrapper for displaying votables.
pub struct Votables(pub Vec<Votable>);

impl fmt::Display for Votables {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No votables found.");
        }

        for (i, votable) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{votable}")?;
        }

        Ok(())
    }
}
