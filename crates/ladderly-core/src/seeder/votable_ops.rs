//! Votable operations for the Seeder.

use std::path::Path;

use log::{info, warn};

use super::{driver::read_seed_text, run_blocking, Seeder};
use crate::{
    error::{Result, SeedError},
    models::{Votable, VotableSeed, VotableType},
};

impl Seeder {
    /// Inserts every record of a votables seed file.
    ///
    /// Returns `None` when the file does not exist. Records are inserted in
    /// file order; a record whose `type` is not a known [`VotableType`]
    /// aborts the run at that record.
    pub async fn seed_votables(&self, path: impl AsRef<Path>) -> Result<Option<usize>> {
        let path = path.as_ref().to_path_buf();

        let read_path = path.clone();
        let Some(text) = run_blocking(move || read_seed_text(&read_path)).await? else {
            warn!("Votables seed file not found, skipping: {}", path.display());
            return Ok(None);
        };

        let seeds: Vec<VotableSeed> =
            serde_json::from_str(&text).map_err(|e| SeedError::from(e).in_file(&path))?;

        let count = self
            .with_database(move |db| {
                for seed in &seeds {
                    let votable_type = seed.votable_type.parse::<VotableType>().map_err(|_| {
                        SeedError::InvalidEnumValue {
                            field: "type".into(),
                            value: seed.votable_type.clone(),
                        }
                    })?;
                    db.create_votable(votable_type, seed)?;
                }
                Ok(seeds.len())
            })
            .await
            .map_err(|e| e.in_file(&path))?;

        info!("Seeded {} votables from {}", count, path.display());

        Ok(Some(count))
    }

    /// Lists all votables in insertion order.
    pub async fn list_votables(&self) -> Result<Vec<Votable>> {
        self.with_database(|db| db.list_votables()).await
    }
}
