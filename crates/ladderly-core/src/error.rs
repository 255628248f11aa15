//! Error types for the seeding library.

use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all seeding operations.
#[derive(Error, Debug)]
pub enum SeedError {
    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// An item slot in a seed definition is absent
    #[error("Checklist item is undefined for checklist: {checklist} item idx: {index}")]
    MalformedSeedItem { checklist: String, index: usize },
    /// The seed document does not match the checklist seed schema
    #[error("Seed document failed schema validation at '{path}': {message}{}", additional_suffix(.additional))]
    SchemaValidation {
        path: String,
        message: String,
        additional: usize,
    },
    /// A field carries a value outside its enumeration
    #[error("Invalid value '{value}' for field '{field}'")]
    InvalidEnumValue { field: String, value: String },
    /// Checklist not found for the given ID
    #[error("Checklist with ID {id} not found")]
    ChecklistNotFound { id: u64 },
    /// Checklist item not found for the given ID
    #[error("Checklist item with ID {id} not found")]
    ChecklistItemNotFound { id: u64 },
    /// User checklist item not found for the given ID
    #[error("User checklist item with ID {id} not found")]
    UserChecklistItemNotFound { id: u64 },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
    /// A seed file could not be processed
    #[error("Failed to seed from '{path}': {source}")]
    SeedFile {
        path: PathBuf,
        #[source]
        source: Box<SeedError>,
    },
    /// A checklist within a seed file could not be processed
    #[error("Failed to seed checklist '{name}' from '{path}': {source}")]
    SeedChecklist {
        path: PathBuf,
        name: String,
        #[source]
        source: Box<SeedError>,
    },
}

fn additional_suffix(additional: &usize) -> String {
    match *additional {
        0 => String::new(),
        1 => " (and 1 more violation)".to_string(),
        n => format!(" (and {n} more violations)"),
    }
}

impl SeedError {
    /// Creates a new database error with additional context.
    pub fn database_error(message: &str, source: rusqlite::Error) -> Self {
        Self::Database {
            message: message.into(),
            source,
        }
    }

    /// Wraps an error with the seed file it came from.
    pub fn in_file(self, path: impl Into<PathBuf>) -> Self {
        Self::SeedFile {
            path: path.into(),
            source: Box::new(self),
        }
    }

    /// Wraps an error with the seed file and checklist it came from.
    pub fn in_checklist(self, path: impl Into<PathBuf>, name: impl Into<String>) -> Self {
        Self::SeedChecklist {
            path: path.into(),
            name: name.into(),
            source: Box::new(self),
        }
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| SeedError::database_error(message, e))
    }
}

/// Result type alias for seeding operations
pub type Result<T> = std::result::Result<T, SeedError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_item_names_checklist_and_index() {
        let err = SeedError::MalformedSeedItem {
            checklist: "Job Checklist".into(),
            index: 3,
        };
        assert_eq!(
            err.to_string(),
            "Checklist item is undefined for checklist: Job Checklist item idx: 3"
        );
    }

    #[test]
    fn test_schema_validation_counts_extra_violations() {
        let single = SeedError::SchemaValidation {
            path: "/0/name".into(),
            message: "1 is not of type \"string\"".into(),
            additional: 0,
        };
        assert!(single.to_string().ends_with("\"string\""));

        let several = SeedError::SchemaValidation {
            path: "/0".into(),
            message: "\"name\" is a required property".into(),
            additional: 2,
        };
        assert!(several.to_string().contains("/0"));
        assert!(several.to_string().ends_with("(and 2 more violations)"));
    }

    #[test]
    fn test_checklist_context_preserves_source() {
        let err = SeedError::MalformedSeedItem {
            checklist: "A".into(),
            index: 0,
        }
        .in_checklist("db/checklists.json", "A");

        let message = err.to_string();
        assert!(message.contains("db/checklists.json"));
        assert!(message.contains("item idx: 0"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
