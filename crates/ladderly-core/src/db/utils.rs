//! Row conversion helpers shared by the query modules.

use jiff::Timestamp;
use rusqlite::{types::Type, Row};

use crate::error::Result;

/// Reads a TEXT column holding an RFC 3339 timestamp.
pub(crate) fn timestamp_column(row: &Row, idx: usize) -> rusqlite::Result<Timestamp> {
    row.get::<_, String>(idx)?
        .parse::<Timestamp>()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}

/// Reads an INTEGER primary or foreign key column.
pub(crate) fn id_column(row: &Row, idx: usize) -> rusqlite::Result<u64> {
    Ok(row.get::<_, i64>(idx)? as u64)
}

/// Reads a TEXT column holding a JSON array of strings; NULL reads as empty.
pub(crate) fn list_column(row: &Row, idx: usize) -> rusqlite::Result<Vec<String>> {
    let raw: Option<String> = row.get(idx)?;
    match raw.filter(|s| !s.is_empty()) {
        Some(json) => serde_json::from_str(&json)
            .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e))),
        None => Ok(Vec::new()),
    }
}

/// Encodes a list as a JSON array for storage; an empty list is stored as
/// NULL.
pub(crate) fn encode_list(values: &[String]) -> Result<Option<String>> {
    if values.is_empty() {
        return Ok(None);
    }
    Ok(Some(serde_json::to_string(values)?))
}
