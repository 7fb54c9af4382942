//! Command implementations for the volleyball match tracker CLI

pub mod record;
pub mod report;

use crate::{error::VolleyError, storage::MatchDatabase, Result, DATABASE_PATH_ENV_VAR};
use std::path::{Path, PathBuf};

/// Pick the database file: explicit path, then `VOLLEY_TRACKER_DB`, then the
/// per-user data directory.
pub fn resolve_database_path(database: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = database {
        return Ok(path);
    }
    if let Some(path) = std::env::var_os(DATABASE_PATH_ENV_VAR).filter(|p| !p.is_empty()) {
        return Ok(PathBuf::from(path));
    }
    default_database_path()
}

/// `<data dir>/volley-tracker/matches.db`
pub fn default_database_path() -> Result<PathBuf> {
    let data_dir = dirs::data_dir().ok_or(VolleyError::NoDataDir)?;
    Ok(data_dir.join("volley-tracker").join("matches.db"))
}

/// Open the database at `path`, creating its directory if needed, and
/// provision the volleyball schema.
pub fn open_database(path: &Path) -> Result<MatchDatabase> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    MatchDatabase::new(path)
}

/// Handle the init command
pub fn handle_init(db: &MatchDatabase) -> Result<()> {
    let tables = db.table_names()?;
    println!("✓ Match database ready at {}", db.path().display());
    println!("Tables: {}", tables.join(", "));
    Ok(())
}
