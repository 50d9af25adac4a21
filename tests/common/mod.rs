/*!
 * Common test utilities shared across integration tests
 */

use anyhow::Result;
use std::path::PathBuf;
use tempfile::TempDir;

/// Create a temporary directory for test artifacts
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Path for a database file inside the given temporary directory
pub fn temp_db_path(dir: &TempDir) -> PathBuf {
    dir.path().join("cameroon_languages.db")
}
