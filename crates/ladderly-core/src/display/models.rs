//! Display implementations for domain models.

use std::fmt;

use super::datetime::LocalDateTime;
use crate::models::{
    Checklist, ChecklistItem, UserChecklist, UserChecklistItem, UserChecklistProgress, Votable,
};

impl fmt::Display for Checklist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {}", self.id, self.name)?;
        writeln!(f)?;

        writeln!(f, "- Version: {}", self.version)?;
        writeln!(
            f,
            "- Items: {} ({} required)",
            self.items.len(),
            self.required_count()
        )?;
        writeln!(f, "- Created: {}", LocalDateTime(&self.created_at))?;
        writeln!(f, "- Updated: {}", LocalDateTime(&self.updated_at))?;

        if self.items.is_empty() {
            writeln!(f, "\nNo items in this checklist.")?;
            return Ok(());
        }

        writeln!(f, "\n## Items")?;
        writeln!(f)?;
        for item in &self.items {
            write!(f, "{item}")?;
        }

        Ok(())
    }
}

impl fmt::Display for ChecklistItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let content = &self.content;
        let optional = if content.is_required { "" } else { " *(optional)*" };

        write!(
            f,
            "{}. {}{} `#{}`",
            self.display_index, content.display_text, optional, self.id
        )?;

        if !content.link_uri.is_empty() {
            let label = if content.link_text.is_empty() {
                &content.link_uri
            } else {
                &content.link_text
            };
            write!(f, " [{label}]({})", content.link_uri)?;
        }
        writeln!(f)?;

        if !content.detail_text.is_empty() {
            writeln!(f, "   > {}", content.detail_text)?;
        }

        Ok(())
    }
}

impl fmt::Display for UserChecklistItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mark = if self.is_complete { "x" } else { " " };
        let optional = if self.is_required { "" } else { " *(optional)*" };
        writeln!(
            f,
            "- [{mark}] {}{optional} `#{}`",
            self.display_text, self.id
        )
    }
}

impl fmt::Display for UserChecklist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let done = self.items.iter().filter(|i| i.is_complete).count();

        writeln!(
            f,
            "# User checklist {} (user {}, checklist {})",
            self.id, self.user_id, self.checklist_id
        )?;
        writeln!(f)?;
        writeln!(
            f,
            "- Status: {}",
            if self.is_complete { "complete" } else { "in progress" }
        )?;
        writeln!(f, "- Progress: {done}/{}", self.items.len())?;
        writeln!(f, "- Updated: {}", LocalDateTime(&self.updated_at))?;

        if !self.items.is_empty() {
            writeln!(f)?;
            for item in &self.items {
                write!(f, "{item}")?;
            }
        }

        Ok(())
    }
}

impl fmt::Display for UserChecklistProgress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.user_checklist)?;

        if !self.is_latest_version {
            writeln!(f)?;
            writeln!(
                f,
                "A newer version of '{}' exists (checklist {}).",
                self.latest_checklist.name, self.latest_checklist.id
            )?;
        }

        Ok(())
    }
}

impl fmt::Display for Votable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "### {}. {} ({})", self.id, self.name, self.votable_type)?;
        writeln!(f)?;

        if let Some(description) = &self.description {
            writeln!(f, "{description}")?;
            writeln!(f)?;
        }

        writeln!(
            f,
            "- Prestige: {} | Votes: {}",
            self.prestige_score, self.vote_count
        )?;
        if let Some(website) = &self.website {
            writeln!(f, "- Website: {website}")?;
        }
        if !self.tags.is_empty() {
            writeln!(f, "- Tags: {}", self.tags.join(", "))?;
        }

        Ok(())
    }
}
