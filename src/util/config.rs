use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use thiserror::Error;
use tracing::{info, warn};

use crate::domain::{ReferenceTables, TablesError, TablesSource, ValuationInput};

const APP_QUALIFIER: &str = "com";
const APP_ORG: &str = "SaasValuator";
const APP_DIR: &str = "SaasValuator";
const TABLES_FILE: &str = "tables.json";

/// `tables.json` in the platform config directory, if one can be determined.
pub fn default_tables_path() -> Option<PathBuf> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_DIR)
        .map(|dirs| dirs.config_dir().join(TABLES_FILE))
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Io { path: PathBuf, source: io::Error },
    #[error("{} is not valid JSON: {source}", path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("{}: {source}", path.display())]
    InvalidTables { path: PathBuf, source: TablesError },
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let data = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&data).map_err(|source| ConfigError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Reads and validates a tables file. Keys left out keep their default.
pub fn load_tables_file(path: &Path) -> Result<ReferenceTables, ConfigError> {
    let tables: ReferenceTables = read_json(path)?;
    tables
        .validate()
        .map_err(|source| ConfigError::InvalidTables {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(tables)
}

/// Picks the reference tables for this run.
///
/// An explicit path must load. The per-user file is optional: a broken one
/// is logged and the built-in tables are used instead.
pub fn resolve_tables(
    explicit: Option<&Path>,
) -> Result<(ReferenceTables, TablesSource), ConfigError> {
    resolve_tables_from(explicit, default_tables_path().as_deref())
}

fn resolve_tables_from(
    explicit: Option<&Path>,
    user_file: Option<&Path>,
) -> Result<(ReferenceTables, TablesSource), ConfigError> {
    if let Some(path) = explicit {
        let tables = load_tables_file(path)?;
        info!(path = %path.display(), "loaded reference tables");
        return Ok((tables, TablesSource::File(path.to_path_buf())));
    }

    if let Some(path) = user_file.filter(|path| path.is_file()) {
        match load_tables_file(path) {
            Ok(tables) => {
                info!(path = %path.display(), "loaded reference tables from config directory");
                return Ok((tables, TablesSource::File(path.to_path_buf())));
            }
            Err(err) => warn!("ignoring reference tables: {err}"),
        }
    }

    Ok((ReferenceTables::default(), TablesSource::BuiltIn))
}

pub fn load_input_file(path: &Path) -> Result<ValuationInput, ConfigError> {
    let input = read_json(path)?;
    info!(path = %path.display(), "loaded valuation input");
    Ok(input)
}
