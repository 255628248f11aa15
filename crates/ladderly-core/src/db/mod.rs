//! SQLite storage for checklists, votables and user progress.
//!
//! This module provides the synchronous storage layer. Every method that
//! writes more than one row runs inside a single transaction, so a failure
//! leaves the affected checklist exactly as it was.

use std::path::Path;

use rusqlite::Connection;

use crate::error::{DatabaseResultExt, Result};

pub mod checklist_queries;
pub mod migrations;
pub mod user_checklist_queries;
pub mod utils;
pub mod votable_queries;

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Creates a new database connection and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }
}
