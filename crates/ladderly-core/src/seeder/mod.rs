//! High-level async API for seeding and reconciling checklists.
//!
//! [`Seeder`] coordinates the pure seed stages in [`crate::seed`] with the
//! storage layer in [`crate::db`]:
//!
//! ```text
//! ┌──────────────┐    ┌──────────────────┐    ┌─────────────────┐
//! │    driver    │    │  checklist_ops   │    │    Database     │
//! │ (run_seed,   │───▶│ votable_ops      │───▶│   (via db/)     │
//! │  seed files) │    │ user_checklist_ops│   │                 │
//! └──────────────┘    └──────────────────┘    └─────────────────┘
//! ```
//!
//! Every storage call runs on the blocking thread pool with its own
//! connection, and calls are awaited one at a time: the seed run is a
//! strictly sequential batch.
//!
//! ```rust
//! use ladderly_core::{
//!     seed::{DetailedSeedItem, SeedDefinition, SeedItem},
//!     SeederBuilder,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let seeder = SeederBuilder::new()
//!     .with_database_path(Some("ladderly.db"))
//!     .build()
//!     .await?;
//!
//! let definition = SeedDefinition::new(
//!     "Job Checklist",
//!     vec![
//!         SeedItem::from("Write a resume"),
//!         SeedItem::from(DetailedSeedItem {
//!             is_required: Some(false),
//!             ..DetailedSeedItem::new("Apply")
//!         }),
//!     ],
//! );
//!
//! let outcome = seeder.update_checklist_in_place(&definition).await?;
//! println!("{}", outcome.checklist());
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;

use tokio::task;

use crate::{
    db::Database,
    error::{Result, SeedError},
};

pub mod builder;
pub mod checklist_ops;
pub mod driver;
pub mod user_checklist_ops;
pub mod votable_ops;


pub use builder::SeederBuilder;
pub use driver::{CHECKLIST_SEED_FILES, VOTABLE_SEED_FILE};

/// Main interface for seeding checklists and reading them back.
pub struct Seeder {
    pub(crate) db_path: PathBuf,
}

impl Seeder {
    /// Creates a new seeder with the specified database path.
    pub(crate) fn new(db_path: PathBuf) -> Self {
        Self { db_path }
    }

    /// Path of the SQLite database this seeder writes to.
    pub fn database_path(&self) -> &PathBuf {
        &self.db_path
    }

    /// Runs `f` against a fresh connection on the blocking thread pool.
    pub(crate) async fn with_database<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut Database) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let db_path = self.db_path.clone();

        run_blocking(move || {
            let mut db = Database::new(&db_path)?;
            f(&mut db)
        })
        .await
    }
}

/// Runs blocking work such as file or database I/O off the async runtime.
pub(crate) async fn run_blocking<T, F>(f: F) -> Result<T>
where
    F: FnOnce() -> Result<T> + Send + 'static,
    T: Send + 'static,
{
    task::spawn_blocking(f)
        .await
        .map_err(|e| SeedError::Configuration {
            message: format!("Task join error: {e}"),
        })?
}
