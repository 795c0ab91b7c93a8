//! User settings
//!
//! Defines where data lives, which game master to use, the scoring constants
//! and how much of each report to show.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::ConfigError;
use crate::formulas::ScoringConstants;
use crate::gamemaster::{game_master_path, GameMasterSource};

/// Default legacy fast move list inside the data directory
pub const LEGACY_FAST_FILE: &str = "legacy_fast_moves.csv";
/// Default legacy charged move list inside the data directory
pub const LEGACY_CHARGED_FILE: &str = "legacy_charge_moves.csv";

/// Main settings structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Cache directory holding the game master and legacy lists
    pub data_dir: PathBuf,
    /// Explicit game master path, overrides `data_dir`
    pub game_master: Option<PathBuf>,
    /// Where report files are written, `data_dir` when unset
    pub output_dir: Option<PathBuf>,
    /// Explicit legacy fast move list
    pub legacy_fast: Option<PathBuf>,
    /// Explicit legacy charged move list
    pub legacy_charged: Option<PathBuf>,
    /// Version fetched by `download` without `--latest`
    pub source: GameMasterSource,
    /// Scoring constants
    pub scoring: ScoringConstants,
    /// Report sizes and format
    pub reports: ReportSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            game_master: None,
            output_dir: None,
            legacy_fast: None,
            legacy_charged: None,
            source: GameMasterSource::Pinned,
            scoring: ScoringConstants::default(),
            reports: ReportSettings::default(),
        }
    }
}

impl Settings {
    /// Settings that track the newest game master
    pub fn latest_preset() -> Self {
        Self {
            source: GameMasterSource::Latest,
            ..Default::default()
        }
    }

    /// Settings that write every report as CSV for spreadsheets
    pub fn spreadsheet_preset() -> Self {
        Self {
            reports: ReportSettings {
                csv: true,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    /// Read settings from a JSON file. Missing fields keep their defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let settings = serde_json::from_str(&text).map_err(|source| ConfigError::Invalid {
            path: path.display().to_string(),
            source,
        })?;
        log::debug!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Write settings as pretty JSON
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let text = serde_json::to_string_pretty(self).map_err(|source| ConfigError::Invalid {
            path: path.display().to_string(),
            source,
        })?;
        fs::write(path, text).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })
    }

    /// Resolved game master path
    pub fn game_master_path(&self) -> PathBuf {
        self.game_master
            .clone()
            .unwrap_or_else(|| game_master_path(&self.data_dir))
    }

    /// Resolved report directory
    pub fn output_dir(&self) -> PathBuf {
        self.output_dir
            .clone()
            .unwrap_or_else(|| self.data_dir.clone())
    }

    /// Explicit legacy fast list, or the default file when it exists
    pub fn legacy_fast_path(&self) -> Option<PathBuf> {
        resolve_optional(&self.legacy_fast, &self.data_dir, LEGACY_FAST_FILE)
    }

    /// Explicit legacy charged list, or the default file when it exists
    pub fn legacy_charged_path(&self) -> Option<PathBuf> {
        resolve_optional(&self.legacy_charged, &self.data_dir, LEGACY_CHARGED_FILE)
    }
}

fn resolve_optional(explicit: &Option<PathBuf>, data_dir: &Path, file: &str) -> Option<PathBuf> {
    match explicit {
        Some(path) => Some(path.clone()),
        None => {
            let path = data_dir.join(file);
            path.is_file().then_some(path)
        }
    }
}

/// Per-user configuration directory, `./pogokit` when no home is known
pub fn default_data_dir() -> PathBuf {
    match directories::ProjectDirs::from("", "", "pogokit") {
        Some(dirs) => dirs.config_dir().to_path_buf(),
        None => {
            log::warn!("No home directory found, using ./pogokit");
            PathBuf::from("pogokit")
        }
    }
}

/// Report sizes and format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportSettings {
    /// Rows of each fast move table shown on screen
    pub fast_preview: usize,
    /// Rows of the charged move table shown on screen
    pub charged_preview: usize,
    /// Rows of the moveset leaderboard shown on screen
    pub leaderboard_top: usize,
    /// Movesets listed per creature in the inspector
    pub max_movesets: usize,
    /// Write report files as CSV instead of aligned text
    pub csv: bool,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            fast_preview: 10,
            charged_preview: 30,
            leaderboard_top: 30,
            max_movesets: 10,
            csv: false,
        }
    }
}

impl ReportSettings {
    /// Extension for report files
    pub fn extension(&self) -> &'static str {
        if self.csv {
            "csv"
        } else {
            "txt"
        }
    }
}
