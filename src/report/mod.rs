//! Report views
//!
//! Text renderings of the analysis: move leaderboards, the creature inspector
//! and the roster-wide moveset leaderboard.

pub mod fuzzy;
pub mod inspector;
pub mod leaderboard;
pub mod moves;
pub mod table;

use std::fs;
use std::path::Path;

pub use fuzzy::{default_suggester, NameSuggester, NoSuggester};
#[cfg(feature = "fuzzy")]
pub use fuzzy::FuzzySuggester;
pub use inspector::{Inspector, Query, Resolution};
pub use leaderboard::{moveset_table, write_leaderboard};
pub use moves::{write_move_reports, MoveView, Preview};
pub use table::{Align, Table};

/// Report output errors
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("Failed to write {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

fn ensure_dir(dir: &Path) -> Result<(), ReportError> {
    fs::create_dir_all(dir).map_err(|source| ReportError::Io {
        path: dir.display().to_string(),
        source,
    })
}
