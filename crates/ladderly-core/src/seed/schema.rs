//! Structural validation of checklist seed documents.

use jsonschema::Draft;
use serde_json::Value;

use super::SeedDefinition;
use crate::error::{Result, SeedError};

const CHECKLIST_SEED_SCHEMA: &str = include_str!("../../assets/checklists.schema.json");

/// Validates a parsed seed document and converts it into typed definitions.
///
/// Validation is all-or-nothing: a single violation anywhere rejects the
/// whole document, reporting the JSON pointer of the first violation.
pub fn validate_seed_document(document: Value) -> Result<Vec<SeedDefinition>> {
    let schema: Value = serde_json::from_str(CHECKLIST_SEED_SCHEMA)?;
    let validator = jsonschema::options()
        .with_draft(Draft::Draft202012)
        .build(&schema)
        .map_err(|e| SeedError::Configuration {
            message: format!("Invalid checklist seed schema: {e}"),
        })?;

    let violations: Vec<(String, String)> = validator
        .iter_errors(&document)
        .map(|e| (e.instance_path.to_string(), e.to_string()))
        .collect();

    if let Some((path, message)) = violations.first() {
        return Err(SeedError::SchemaValidation {
            path: if path.is_empty() { "/".into() } else { path.clone() },
            message: message.clone(),
            additional: violations.len() - 1,
        });
    }

    Ok(serde_json::from_value(document)?)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::seed::{normalize_items, DetailedSeedItem, SeedItem};

    #[test]
    fn test_accepts_mixed_items() {
        let document = json!([
            {
                "name": "Job Checklist",
                "items": [
                    "Write a resume",
                    { "displayText": "Apply", "isRequired": false, "linkUri": "https://example.com" }
                ]
            }
        ]);

        let definitions = validate_seed_document(document).unwrap();
        assert_eq!(definitions.len(), 1);
        assert_eq!(definitions[0].name, "Job Checklist");
        assert_eq!(
            definitions[0].items,
            vec![
                Some(SeedItem::from("Write a resume")),
                Some(SeedItem::from(DetailedSeedItem {
                    is_required: Some(false),
                    link_uri: Some("https://example.com".into()),
                    ..DetailedSeedItem::new("Apply")
                })),
            ]
        );
    }

    #[test]
    fn test_ignores_unknown_keys() {
        let document = json!([
            { "name": "A", "items": [{ "displayText": "x", "emoji": "🚀" }], "notes": "draft" }
        ]);
        assert!(validate_seed_document(document).is_ok());
    }

    #[test]
    fn test_null_optional_fields_take_defaults() {
        let document = json!([
            { "name": "A", "items": [{ "displayText": "x", "linkText": null, "isRequired": null }] }
        ]);

        let definitions = validate_seed_document(document).unwrap();
        let items = normalize_items(&definitions[0]).unwrap();
        assert_eq!(items[0].display_text, "x");
        assert_eq!(items[0].link_text, "");
        assert!(items[0].is_required);
    }

    #[test]
    fn test_rejects_missing_name() {
        let document = json!([
            { "name": "Fine", "items": [] },
            { "items": ["orphan"] }
        ]);

        match validate_seed_document(document).unwrap_err() {
            SeedError::SchemaValidation { path, .. } => assert_eq!(path, "/1"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_rejects_item_of_wrong_shape() {
        let document = json!([{ "name": "A", "items": ["ok", 42] }]);

        match validate_seed_document(document).unwrap_err() {
            SeedError::SchemaValidation { path, .. } => assert_eq!(path, "/0/items/1"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_rejects_structured_item_without_display_text() {
        let document = json!([{ "name": "A", "items": [{ "linkText": "docs" }] }]);
        let err = validate_seed_document(document).unwrap_err();
        assert!(matches!(err, SeedError::SchemaValidation { .. }));
    }

    #[test]
    fn test_rejects_null_item_slot() {
        let document = json!([{ "name": "A", "items": ["ok", null] }]);
        let err = validate_seed_document(document).unwrap_err();
        assert!(matches!(err, SeedError::SchemaValidation { .. }));
    }

    #[test]
    fn test_rejects_non_array_document() {
        let document = json!({ "name": "A", "items": [] });

        match validate_seed_document(document).unwrap_err() {
            SeedError::SchemaValidation { path, .. } => assert_eq!(path, "/"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_counts_every_violation() {
        let document = json!([{ "items": [] }, { "name": 7, "items": [] }]);

        match validate_seed_document(document).unwrap_err() {
            SeedError::SchemaValidation { additional, .. } => assert_eq!(additional, 1),
            other => panic!("unexpected error: {other}"),
        }
    }
}
