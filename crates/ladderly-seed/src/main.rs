//! Ladderly seed CLI
//!
//! Seeds checklists and votables from JSON files and inspects the result.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use ladderly_core::SeederBuilder;
use log::info;
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        seed,
        command,
    } = Args::parse();

    let seeder = SeederBuilder::new()
        .with_database_path(database_file)
        .build()
        .await
        .context("Failed to initialize seeder")?;

    info!("Using database {}", seeder.database_path().display());

    let cli = Cli::new(seeder, TerminalRenderer::new(!no_color));

    match command {
        Some(Show(args)) => cli.show_checklist(args).await,
        Some(List) => cli.list_checklists().await,
        Some(Votables) => cli.list_votables().await,
        Some(User { command }) => cli.handle_user_command(command).await,
        None => cli.seed(seed).await,
    }
}
