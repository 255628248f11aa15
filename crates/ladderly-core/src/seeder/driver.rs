//! Seed runs over the files of a seed directory.

use std::{io::ErrorKind, path::Path};

use log::{debug, info, warn};

use super::{run_blocking, Seeder};
use crate::{
    error::{Result, SeedError},
    models::{ChecklistOutcome, ReconcileOutcome, SeedReport},
    params::SeedChecklists,
    seed::{validate_seed_document, SeedDefinition},
};

/// Checklist seed files, processed in this order.
pub const CHECKLIST_SEED_FILES: [&str; 2] = ["checklists.json", "premium-checklists.json"];

/// Votable seed file, processed before any checklist file.
pub const VOTABLE_SEED_FILE: &str = "votables.json";

/// Reads a seed file, returning `None` when it does not exist.
pub(crate) fn read_seed_text(path: &Path) -> Result<Option<String>> {
    match std::fs::read_to_string(path) {
        Ok(text) => Ok(Some(text)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(SeedError::FileSystem {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}

/// Reads, parses and validates a checklist seed file.
///
/// Returns `None` when the file does not exist. Any other failure is
/// wrapped with the file path.
pub fn read_checklist_seed_file(path: &Path) -> Result<Option<Vec<SeedDefinition>>> {
    let parse = || -> Result<Option<Vec<SeedDefinition>>> {
        let Some(text) = read_seed_text(path)? else {
            return Ok(None);
        };
        let document: serde_json::Value = serde_json::from_str(&text)?;
        validate_seed_document(document).map(Some)
    };

    parse().map_err(|e| e.in_file(path))
}

impl Seeder {
    /// Runs a full seed over `params.seed_dir`.
    ///
    /// Votables are seeded first, then each checklist seed file in order.
    /// A missing file is logged and skipped. A file that fails to parse or
    /// validate aborts the run before any of its checklists is written; a
    /// checklist that fails aborts the run with earlier checklists already
    /// committed.
    pub async fn run_seed(&self, params: &SeedChecklists) -> Result<SeedReport> {
        let mut report = SeedReport::default();

        let votables_path = params.seed_dir.join(VOTABLE_SEED_FILE);
        match self.seed_votables(&votables_path).await? {
            Some(count) => report.votables_seeded = count,
            None => report.skipped_files.push(votables_path),
        }

        for file_name in CHECKLIST_SEED_FILES {
            let path = params.seed_dir.join(file_name);

            let read_path = path.clone();
            let Some(definitions) =
                run_blocking(move || read_checklist_seed_file(&read_path)).await?
            else {
                warn!("Checklist seed file not found, skipping: {}", path.display());
                report.skipped_files.push(path);
                continue;
            };

            info!(
                "Seeding {} checklist definitions from {}",
                definitions.len(),
                path.display()
            );

            for definition in &definitions {
                if !params.matches(&definition.name) {
                    debug!("Skipping checklist '{}': name filter", definition.name);
                    continue;
                }

                let outcome = self
                    .seed_definition(definition, params.update_latest_checklists)
                    .await
                    .map_err(|e| e.in_checklist(&path, &definition.name))?;

                report.checklists.push(ChecklistOutcome {
                    source: path.clone(),
                    outcome,
                });
            }
        }

        info!(
            "Seed run finished: {} created, {} updated, {} unchanged, {} votables",
            report.created_count(),
            report.updated_count(),
            report.unchanged_count(),
            report.votables_seeded
        );

        Ok(report)
    }

    async fn seed_definition(
        &self,
        definition: &SeedDefinition,
        update_in_place: bool,
    ) -> Result<ReconcileOutcome> {
        if update_in_place {
            self.update_checklist_in_place(definition).await
        } else {
            let checklist = self.create_new_checklist(definition).await?;
            Ok(ReconcileOutcome::Created { checklist })
        }
    }
}

