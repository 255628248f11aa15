use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{SeedArgs, ShowChecklistArgs, UserCommands};

/// Seed Ladderly checklists and votables from JSON files
///
/// Without a subcommand, reads `votables.json`, `checklists.json` and
/// `premium-checklists.json` from the seed directory and writes them to the
/// database. By default every checklist is written as a new row; with
/// `--update-latest-checklists` the latest checklist of each name is
/// reconciled in place so that user progress stays attached.
#[derive(Parser)]
#[command(version, about, name = "ladderly-seed")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/ladderly/ladderly.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(flatten)]
    pub seed: SeedArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Inspection and progress commands
#[derive(Subcommand)]
pub enum Commands {
    /// Show the latest checklist with the given name
    Show(ShowChecklistArgs),
    /// List all checklists, most recently updated first
    #[command(alias = "ls")]
    List,
    /// List all votables
    Votables,
    /// Manage user checklist progress
    #[command(alias = "u")]
    User {
        #[command(subcommand)]
        command: UserCommands,
    },
}
