//! Core library for seeding and reconciling Ladderly checklists.
//!
//! Checklists are named, versioned, ordered lists of items. They are
//! authored as JSON seed files and written to SQLite either as brand new
//! rows or by reconciling the latest checklist of the same name in place,
//! which keeps checklist and item ids stable so user progress survives
//! content edits.
//!
//! - [`seed`]: pure stages (schema validation, normalization, diff planning)
//! - [`db`]: SQLite storage, one transaction per checklist
//! - [`seeder`]: async API tying both together, plus full seed runs
//! - [`display`]: markdown rendering used by the CLI
//!
//! # Quick Start
//!
//! ```rust
//! use ladderly_core::{params::SeedChecklists, SeederBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let seeder = SeederBuilder::new()
//!     .with_database_path(Some("ladderly.db"))
//!     .build()
//!     .await?;
//!
//! let report = seeder
//!     .run_seed(&SeedChecklists {
//!         seed_dir: "db".into(),
//!         name: None,
//!         update_latest_checklists: true,
//!     })
//!     .await?;
//! println!("{report}");
//! # Ok(())
//! # }
//! ```

pub mod db;
pub mod display;
pub mod error;
pub mod models;
pub mod params;
pub mod seed;
pub mod seeder;

// Re-export commonly used types
pub use db::Database;
pub use display::{Checklists, LocalDateTime, Votables};
pub use error::{Result, SeedError};
pub use models::{
    Checklist, ChecklistItem, ItemContent, ReconcileOutcome, SeedReport, UserChecklist,
    UserChecklistProgress, Votable, VotableType,
};
pub use params::{
    ChecklistName, CreateUserChecklist, Id, SeedChecklists, SetItemCompletion,
    UserChecklistByName,
};
pub use seed::{SeedDefinition, SeedItem};
pub use seeder::{Seeder, SeederBuilder};
