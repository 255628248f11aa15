//! Opening the seed target database.
//!
//! A seed run always writes into a database whose schema is current, so the
//! builder creates the file and applies pending migrations (for example the
//! `detail_text` column) before handing out a [`Seeder`].

use std::path::{Path, PathBuf};

use log::debug;

use super::{run_blocking, Seeder};
use crate::{
    db::Database,
    error::{Result, SeedError},
};

const DATA_DIR_PREFIX: &str = "ladderly";
const DATABASE_FILE_NAME: &str = "ladderly.db";

/// Chooses the SQLite file seeds are written to.
#[derive(Debug, Clone, Default)]
pub struct SeederBuilder {
    database_path: Option<PathBuf>,
}

impl SeederBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Points the seeder at a specific database file. `None` keeps the
    /// shared location, `$XDG_DATA_HOME/ladderly/ladderly.db`.
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Creates missing parent directories, then opens the database once so
    /// that the checklist, votable and user progress tables exist and older
    /// files are migrated. A database that cannot be migrated fails here,
    /// before any seed file is read.
    ///
    /// # Errors
    ///
    /// `SeedError::FileSystem` when a parent directory cannot be created,
    /// `SeedError::XdgDirectory` when no default location is available and
    /// `SeedError::Database` when the schema cannot be applied.
    pub async fn build(self) -> Result<Seeder> {
        let db_path = match self.database_path {
            Some(path) => path,
            None => shared_database_path()?,
        };

        ensure_parent_dir(&db_path)?;

        let migrate_path = db_path.clone();
        run_blocking(move || Database::new(&migrate_path).map(drop)).await?;
        debug!("Seed database ready at {}", db_path.display());

        Ok(Seeder::new(db_path))
    }
}

fn ensure_parent_dir(db_path: &Path) -> Result<()> {
    match db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        Some(parent) => std::fs::create_dir_all(parent).map_err(|e| SeedError::FileSystem {
            path: parent.to_path_buf(),
            source: e,
        }),
        None => Ok(()),
    }
}

fn shared_database_path() -> Result<PathBuf> {
    xdg::BaseDirectories::with_prefix(DATA_DIR_PREFIX)
        .place_data_file(DATABASE_FILE_NAME)
        .map_err(|e| SeedError::XdgDirectory(e.to_string()))
}
