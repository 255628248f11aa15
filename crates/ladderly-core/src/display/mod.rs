//! Markdown display formatting for checklists, votables and seed runs.
//!
//! Domain models implement `Display` directly (see [`models`]); collections
//! and seed outcomes go through small wrapper types so that empty results
//! and summaries render consistently:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │  Wrappers and   │    │    Markdown     │
//! │ (Checklist, ..) │───▶│  Display impls  │───▶│  (terminal)     │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ```rust
//! use ladderly_core::{display::Checklists, models::Checklist};
//! use jiff::Timestamp;
//!
//! let checklist = Checklist {
//!     id: 1,
//!     name: "Job Checklist".to_string(),
//!     version: "v1".to_string(),
//!     created_at: Timestamp::now(),
//!     updated_at: Timestamp::now(),
//!     items: vec![],
//! };
//!
//! let output = Checklists(vec![checklist]).to_string();
//! assert!(output.contains("Job Checklist"));
//! assert!(Checklists(vec![]).to_string().contains("No checklists found."));
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;

pub use collections::{Checklists, Votables};
pub use datetime::LocalDateTime;
