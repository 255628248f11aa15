//! Command handlers and clap argument wrappers.
//!
//! Argument structs carry the clap derives and convert into the core
//! parameter types, which stay free of CLI concerns:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Seeder
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use ladderly_core::{
    display::{Checklists, Votables},
    params::{
        ChecklistName, CreateUserChecklist, SeedChecklists, SetItemCompletion,
        UserChecklistByName,
    },
    Seeder,
};

use crate::renderer::TerminalRenderer;

/// Options of a seed run
#[derive(Args)]
pub struct SeedArgs {
    /// Directory containing the seed files
    #[arg(long, default_value = ".")]
    pub seed_dir: PathBuf,

    /// Only seed checklists with exactly this name; empty seeds all
    #[arg(long, value_name = "CHECKLIST_NAME")]
    pub name: Option<String>,

    /// Reconcile the latest checklist of each name in place instead of
    /// creating new checklists
    #[arg(long)]
    pub update_latest_checklists: bool,
}

impl From<SeedArgs> for SeedChecklists {
    fn from(args: SeedArgs) -> Self {
        SeedChecklists {
            seed_dir: args.seed_dir,
            name: args.name,
            update_latest_checklists: args.update_latest_checklists,
        }
    }
}

/// Show the latest checklist with a name
#[derive(Args)]
pub struct ShowChecklistArgs {
    /// Exact checklist name
    pub name: String,
}

impl From<ShowChecklistArgs> for ChecklistName {
    fn from(args: ShowChecklistArgs) -> Self {
        ChecklistName { name: args.name }
    }
}

/// Start tracking a user's progress against a checklist
#[derive(Args)]
pub struct CreateUserChecklistArgs {
    /// ID of the user
    #[arg(long)]
    pub user_id: u64,
    /// ID of the checklist to track
    #[arg(long)]
    pub checklist_id: u64,
}

impl From<CreateUserChecklistArgs> for CreateUserChecklist {
    fn from(args: CreateUserChecklistArgs) -> Self {
        CreateUserChecklist {
            user_id: args.user_id,
            checklist_id: args.checklist_id,
        }
    }
}

/// Show a user's latest progress for a checklist name
#[derive(Args)]
pub struct ShowUserChecklistArgs {
    /// ID of the user
    #[arg(long)]
    pub user_id: u64,
    /// Exact checklist name
    pub name: String,
}

impl From<ShowUserChecklistArgs> for UserChecklistByName {
    fn from(args: ShowUserChecklistArgs) -> Self {
        UserChecklistByName {
            user_id: args.user_id,
            name: args.name,
        }
    }
}

/// Mark a user checklist item complete
#[derive(Args)]
pub struct CompleteItemArgs {
    /// ID of the user checklist item
    pub user_item_id: u64,
    /// Mark the item open again instead
    #[arg(long)]
    pub undo: bool,
}

impl From<CompleteItemArgs> for SetItemCompletion {
    fn from(args: CompleteItemArgs) -> Self {
        SetItemCompletion {
            user_item_id: args.user_item_id,
            is_complete: !args.undo,
        }
    }
}

/// User progress commands
#[derive(Subcommand)]
pub enum UserCommands {
    /// Start tracking progress against a checklist
    #[command(alias = "c")]
    Create(CreateUserChecklistArgs),
    /// Show the latest progress for a checklist name
    Show(ShowUserChecklistArgs),
    /// Mark a user checklist item complete
    Complete(CompleteItemArgs),
}

/// Runs commands against a seeder and renders their output.
pub struct Cli {
    seeder: Seeder,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(seeder: Seeder, renderer: TerminalRenderer) -> Self {
        Self { seeder, renderer }
    }

    pub async fn seed(&self, args: SeedArgs) -> Result<()> {
        let params = SeedChecklists::from(args);
        let report = self
            .seeder
            .run_seed(&params)
            .await
            .with_context(|| format!("Failed to seed from {}", params.seed_dir.display()))?;

        self.renderer.render(&report.to_string())
    }

    pub async fn show_checklist(&self, args: ShowChecklistArgs) -> Result<()> {
        let params = ChecklistName::from(args);
        let checklist = self
            .seeder
            .get_latest_checklist(&params)
            .await
            .context("Failed to load checklist")?;

        match checklist {
            Some(checklist) => self.renderer.render(&checklist.to_string()),
            None => self
                .renderer
                .render(&format!("No checklist named '{}' found.\n", params.name)),
        }
    }

    pub async fn list_checklists(&self) -> Result<()> {
        let checklists = self
            .seeder
            .list_checklists()
            .await
            .context("Failed to list checklists")?;

        self.renderer.render(&Checklists(checklists).to_string())
    }

    pub async fn list_votables(&self) -> Result<()> {
        let votables = self
            .seeder
            .list_votables()
            .await
            .context("Failed to list votables")?;

        self.renderer.render(&Votables(votables).to_string())
    }

    pub async fn handle_user_command(&self, command: UserCommands) -> Result<()> {
        match command {
            UserCommands::Create(args) => {
                let user_checklist = self
                    .seeder
                    .create_user_checklist(&args.into())
                    .await
                    .context("Failed to create user checklist")?;
                self.renderer.render(&format!(
                    "Created user checklist with ID: {}\n\n{user_checklist}",
                    user_checklist.id
                ))
            }
            UserCommands::Show(args) => {
                let params = UserChecklistByName::from(args);
                let progress = self
                    .seeder
                    .get_latest_user_checklist_by_name(&params)
                    .await
                    .context("Failed to load user checklist")?;

                match progress {
                    Some(progress) => self.renderer.render(&progress.to_string()),
                    None => self.renderer.render(&format!(
                        "User {} has no progress for '{}'.\n",
                        params.user_id, params.name
                    )),
                }
            }
            UserCommands::Complete(args) => {
                let user_checklist = self
                    .seeder
                    .set_user_checklist_item_complete(&args.into())
                    .await
                    .context("Failed to update user checklist item")?;
                self.renderer.render(&user_checklist.to_string())
            }
        }
    }
}
