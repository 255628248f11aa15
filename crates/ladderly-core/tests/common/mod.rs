use std::path::Path;

use ladderly_core::{Seeder, SeederBuilder};
use tempfile::TempDir;

/// Helper function to create a test seeder
pub async fn create_test_seeder() -> (TempDir, Seeder) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let seeder = SeederBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create seeder");
    (temp_dir, seeder)
}

/// Writes a seed file into `dir`.
pub fn write_seed_file(dir: &Path, name: &str, contents: &str) {
    std::fs::write(dir.join(name), contents).expect("Failed to write seed file");
}
