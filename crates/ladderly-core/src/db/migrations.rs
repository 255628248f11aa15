//! Database schema initialization and migrations.

use crate::error::{DatabaseResultExt, Result};

impl super::Database {
    /// Initializes the database schema using the embedded SQL file.
    pub(super) fn initialize_schema(&self) -> Result<()> {
        // Cascades from checklists to items to progress rely on this
        self.connection
            .execute("PRAGMA foreign_keys = ON", [])
            .db_context("Failed to enable foreign keys")?;

        let schema_sql = include_str!("../../assets/schema.sql");
        self.connection
            .execute_batch(schema_sql)
            .db_context("Failed to initialize database schema")?;

        self.apply_migrations()?;

        Ok(())
    }

    /// Apply database migrations for existing databases
    fn apply_migrations(&self) -> Result<()> {
        // Databases seeded before detail text existed lack the column
        let has_detail_text: bool = self
            .connection
            .query_row(
                "SELECT COUNT(*) FROM pragma_table_info('checklist_items') WHERE name = 'detail_text'",
                [],
                |row| row.get(0),
            )
            .map(|count: i64| count > 0)
            .db_context("Failed to inspect checklist_items columns")?;

        if !has_detail_text {
            self.connection
                .execute(
                    "ALTER TABLE checklist_items ADD COLUMN detail_text TEXT NOT NULL DEFAULT ''",
                    [],
                )
                .db_context("Failed to add detail_text column to checklist_items table")?;
        }

        Ok(())
    }
}
