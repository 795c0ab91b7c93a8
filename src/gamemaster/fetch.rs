//! Game master download
//!
//! A single blocking request; any failure aborts the command. There is no
//! retry.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::FetchError;

/// File name of the cached game master inside the data directory
pub const GAME_MASTER_FILE: &str = "GAME_MASTER.json";

const LATEST_GAME_MASTER_URL: &str = "https://raw.githubusercontent.com/pokemongo-dev-contrib/pokemongo-game-master/master/versions/latest/GAME_MASTER.json";
const PINNED_GAME_MASTER_URL: &str = "https://raw.githubusercontent.com/pokemongo-dev-contrib/pokemongo-game-master/master/versions/1545819471259/GAME_MASTER.json";

/// Which game master version to fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GameMasterSource {
    /// Known-good version the formulas were checked against
    #[default]
    Pinned,
    /// Whatever was published last
    Latest,
}

impl GameMasterSource {
    pub fn url(&self) -> &'static str {
        match self {
            GameMasterSource::Pinned => PINNED_GAME_MASTER_URL,
            GameMasterSource::Latest => LATEST_GAME_MASTER_URL,
        }
    }
}

/// Path of the cached game master inside `data_dir`
pub fn game_master_path(data_dir: &Path) -> PathBuf {
    data_dir.join(GAME_MASTER_FILE)
}

/// Download the game master into `data_dir`, returning the written path
pub fn download(data_dir: &Path, version: GameMasterSource) -> Result<PathBuf, FetchError> {
    fs::create_dir_all(data_dir).map_err(|source| FetchError::Io {
        path: data_dir.display().to_string(),
        source,
    })?;

    let path = game_master_path(data_dir);
    log::info!("Downloading {:?} game master to {}", version, path.display());

    let body = reqwest::blocking::get(version.url())?
        .error_for_status()?
        .bytes()?;

    fs::write(&path, &body).map_err(|source| FetchError::Io {
        path: path.display().to_string(),
        source,
    })?;
    log::info!("Saved {} bytes", body.len());

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_source_is_pinned() {
        assert_eq!(GameMasterSource::default(), GameMasterSource::Pinned);
        assert!(GameMasterSource::Pinned.url().contains("1545819471259"));
        assert!(GameMasterSource::Latest.url().contains("/latest/"));
    }

    #[test]
    fn test_game_master_path() {
        let path = game_master_path(Path::new("/tmp/pogokit"));
        assert_eq!(path, PathBuf::from("/tmp/pogokit/GAME_MASTER.json"));
    }
}
