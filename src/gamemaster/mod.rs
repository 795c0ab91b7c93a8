//! Game master module
//!
//! Handles the game's configuration dump: downloading it into the local cache,
//! extracting move and creature records from it, and loading the auxiliary
//! legacy move lists.

pub mod extract;
pub mod fetch;
pub mod legacy;

use std::fs;
use std::path::Path;

use crate::game::{ChargedMove, Creature, FastMove};

pub use extract::{extract_str, extract_value};
pub use fetch::{download, game_master_path, GameMasterSource, GAME_MASTER_FILE};
pub use legacy::{LegacyError, LegacyMoves};

/// Records extracted from a game master
#[derive(Debug, Clone, Default)]
pub struct GameMasterData {
    pub fast_moves: Vec<FastMove>,
    pub charged_moves: Vec<ChargedMove>,
    /// Active creatures, after form supersession
    pub creatures: Vec<Creature>,
    pub report: ExtractReport,
}

/// Diagnostics collected while extracting
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtractReport {
    /// Number of item templates inspected
    pub templates: usize,
    /// Templates that were neither moves nor creatures
    pub ignored: usize,
    /// Fast moves whose duration was missing and assumed to be 1 turn
    pub defaulted_durations: Vec<String>,
    /// Form-less creatures dropped in favor of their forms
    pub superseded: usize,
}

/// Read and extract a game master file
pub fn load_game_master(path: &Path) -> Result<GameMasterData, ExtractError> {
    log::info!("Loading game master from {}", path.display());
    let text = fs::read_to_string(path).map_err(|source| ExtractError::Io {
        path: path.display().to_string(),
        source,
    })?;
    extract_str(&text)
}

/// Game master extraction errors
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("Failed to read game master {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid game master JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{item}: missing required field `{field}`")]
    MissingField { item: String, field: &'static str },
    #[error("{item}: malformed identifier `{value}`")]
    MalformedId { item: String, value: String },
    #[error("{item}: unknown type `{value}`")]
    UnknownType { item: String, value: String },
}

/// Download errors
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Failed to download game master: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Failed to write {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
