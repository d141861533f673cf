//! Snapshot source - the seam to the external data-fetching collaborator
//!
//! The collaborator (out of scope here) resolves weather and errors; this
//! module only reads its output: a JSON document carrying the input triple
//! `{weather, loading, error}`.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::state::WeatherRecord;

/// The input triple as written by the data-fetching collaborator
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnapshotDocument {
    pub weather: Option<WeatherRecord>,
    pub loading: bool,
    pub error: Option<String>,
}

/// Snapshot read error type
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("Erreur de lecture du fichier météo: {0}")]
    Io(#[from] std::io::Error),

    #[error("Document météo invalide: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A snapshot document on disk
#[derive(Clone, Debug)]
pub struct SnapshotSource {
    path: PathBuf,
}

impl SnapshotSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the snapshot document
    pub fn load(&self) -> Result<SnapshotDocument, SnapshotError> {
        let text = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&text)?)
    }
}
