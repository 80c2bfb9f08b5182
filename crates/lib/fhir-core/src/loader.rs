//! One-time bundle loading.
//!
//! Reads the FHIR definitions bundle from disk and builds the index. The
//! daemon runs this to completion before accepting any query.

use std::path::{Path, PathBuf};
use std::{error::Error, fmt};

use fhir_model::Bundle;

use crate::index::DefinitionIndex;

/// Location of the R5 definitions bundle inside an unpacked FHIR
/// specification download.
pub const DEFAULT_DEFINITIONS_PATH: &str = "definitions/definitions.json/profiles-resources.json";

/// Error type for bundle load failures. Fatal at startup.
#[derive(Debug)]
pub enum LoadError {
    Io(std::io::Error),
    Json(serde_json::Error),
    Task(tokio::task::JoinError),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "failed to read definitions bundle: {err}"),
            Self::Json(err) => write!(f, "failed to parse definitions bundle: {err}"),
            Self::Task(err) => write!(f, "definitions load task failed: {err}"),
        }
    }
}

impl Error for LoadError {}

impl From<std::io::Error> for LoadError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

impl From<tokio::task::JoinError> for LoadError {
    fn from(err: tokio::task::JoinError) -> Self {
        Self::Task(err)
    }
}

/// Reads and parses the definitions bundle at `path`.
///
/// # Errors
/// Returns `LoadError` if the file cannot be read or is not a JSON document.
pub fn load_bundle(path: &Path) -> Result<Bundle, LoadError> {
    let text = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

/// Loads the bundle at `path` and builds the definition index.
///
/// # Errors
/// Returns `LoadError` if the bundle cannot be read or parsed.
pub fn load_index(path: &Path) -> Result<DefinitionIndex, LoadError> {
    Ok(DefinitionIndex::from_bundle(load_bundle(path)?))
}

/// Loads the index on a blocking task.
///
/// # Errors
/// Returns `LoadError` if loading fails or the task panics.
pub async fn load_index_async(path: PathBuf) -> Result<DefinitionIndex, LoadError> {
    tokio::task::spawn_blocking(move || load_index(&path)).await?
}
