//! pogokit - number cruncher for Pokemon GO trainer battles
//!
//! This library reads the game master published by the game, scores every
//! fast and charged move, ranks creature movesets per league and renders the
//! results as plain text reports.
//!
//! ## Pipeline
//!
//! Extraction (`gamemaster`) feeds scoring (`analysis::scorer`), which feeds
//! ranking (`analysis::ranker`), which feeds the report views (`report`).
//! Every stage returns new values; nothing is enriched in place.

pub mod analysis;
pub mod config;
pub mod formulas;
pub mod game;
pub mod gamemaster;
pub mod report;

use std::io::Write;
use std::path::PathBuf;

use crate::analysis::{MoveBook, MovesetRanker, ScoreError, SortKey};
use crate::config::{ConfigError, Settings};
use crate::game::Creature;
use crate::gamemaster::{
    ExtractError, FetchError, GameMasterData, GameMasterSource, LegacyError, LegacyMoves,
};
use crate::report::{Inspector, ReportError};

/// Loaded game data, ready for reports
pub struct Pogokit {
    pub settings: Settings,
    pub data: GameMasterData,
    pub book: MoveBook,
    pub legacy: LegacyMoves,
}

impl Pogokit {
    /// Load the game master and legacy lists named by `settings`
    pub fn load(settings: Settings) -> Result<Self, PogoError> {
        let path = settings.game_master_path();
        if !path.is_file() {
            return Err(PogoError::MissingGameMaster { path });
        }
        let data = gamemaster::load_game_master(&path)?;
        let legacy = LegacyMoves::load(
            settings.legacy_fast_path().as_deref(),
            settings.legacy_charged_path().as_deref(),
        )?;
        Self::from_parts(settings, data, legacy)
    }

    /// Score already extracted data
    pub fn from_parts(
        settings: Settings,
        data: GameMasterData,
        legacy: LegacyMoves,
    ) -> Result<Self, PogoError> {
        let book = MoveBook::build(
            &data.fast_moves,
            &data.charged_moves,
            settings.scoring.quality_c,
        )?;
        log::info!(
            "Scored {} fast and {} charged moves for {} creatures",
            book.fast_moves().len(),
            book.charged_moves().len(),
            data.creatures.len()
        );
        Ok(Self {
            settings,
            data,
            book,
            legacy,
        })
    }

    pub fn creatures(&self) -> &[Creature] {
        &self.data.creatures
    }

    pub fn ranker(&self) -> MovesetRanker {
        MovesetRanker::new(self.settings.scoring)
    }

    /// Inspector over the loaded roster
    pub fn inspector(&self) -> Inspector<'_> {
        Inspector::new(self.creatures(), &self.book, &self.legacy, self.ranker())
            .with_max_movesets(self.settings.reports.max_movesets)
    }

    /// Print and write the move leaderboards
    pub fn write_move_reports<W: Write>(&self, out: &mut W) -> Result<Vec<PathBuf>, PogoError> {
        Ok(report::write_move_reports(
            &self.book,
            &self.settings.reports,
            &self.settings.output_dir(),
            out,
        )?)
    }

    /// Print and write the roster-wide moveset leaderboard
    pub fn write_leaderboard<W: Write>(
        &self,
        key: SortKey,
        out: &mut W,
    ) -> Result<Vec<PathBuf>, PogoError> {
        let mut movesets = self
            .ranker()
            .rank_roster(self.creatures(), &self.book, &self.legacy);
        Ok(report::write_leaderboard(
            &mut movesets,
            key,
            &self.settings.reports,
            &self.settings.output_dir(),
            out,
        )?)
    }
}

/// Download the game master into the configured data directory
pub fn download(settings: &Settings, source: GameMasterSource) -> Result<PathBuf, PogoError> {
    Ok(gamemaster::download(&settings.data_dir, source)?)
}

/// Top-level error
#[derive(Debug, thiserror::Error)]
pub enum PogoError {
    #[error("No game master at {}; run `pogo download` first", path.display())]
    MissingGameMaster { path: PathBuf },
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Extract(#[from] ExtractError),
    #[error(transparent)]
    Score(#[from] ScoreError),
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Legacy(#[from] LegacyError),
    #[error(transparent)]
    Report(#[from] ReportError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    const GAME_MASTER: &str = r#"{"itemTemplates": [
        {"templateId": "COMBAT_V0234_MOVE_COUNTER_FAST",
         "combatMove": {"uniqueId": "COUNTER_FAST", "type": "POKEMON_TYPE_FIGHTING",
                        "power": 8, "energyDelta": 7, "durationTurns": 2}},
        {"templateId": "COMBAT_V0245_MOVE_CROSS_CHOP",
         "combatMove": {"uniqueId": "CROSS_CHOP", "type": "POKEMON_TYPE_FIGHTING",
                        "power": 50, "energyDelta": -35}},
        {"templateId": "COMBAT_V0245_MOVE_DYNAMIC_PUNCH",
         "combatMove": {"uniqueId": "DYNAMIC_PUNCH", "type": "POKEMON_TYPE_FIGHTING",
                        "power": 90, "energyDelta": -50}},
        {"templateId": "V0068_POKEMON_MACHAMP",
         "pokemonSettings": {"pokemonId": "MACHAMP", "type": "POKEMON_TYPE_FIGHTING",
                             "stats": {"baseStamina": 180, "baseAttack": 234, "baseDefense": 159},
                             "quickMoves": ["COUNTER_FAST"],
                             "cinematicMoves": ["CROSS_CHOP"]}}
    ]}"#;

    fn settings_in(dir: &std::path::Path) -> Settings {
        Settings {
            data_dir: dir.to_path_buf(),
            output_dir: Some(dir.join("reports")),
            ..Default::default()
        }
    }

    #[test]
    fn test_missing_game_master() {
        let dir = tempfile::tempdir().unwrap();
        let err = Pogokit::load(settings_in(dir.path())).err().unwrap();
        assert!(matches!(err, PogoError::MissingGameMaster { .. }));
        assert!(err.to_string().contains("pogo download"));
    }

    #[test]
    fn test_load_and_report() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("GAME_MASTER.json"), GAME_MASTER).unwrap();
        std::fs::write(
            dir.path().join(config::settings::LEGACY_CHARGED_FILE),
            "pokemon_name,charge_move\nMachamp,Dynamic Punch\n",
        )
        .unwrap();

        let kit = Pogokit::load(settings_in(dir.path())).unwrap();
        assert_eq!(kit.creatures().len(), 1);
        assert!(!kit.legacy.is_empty());

        let mut screen = Vec::new();
        let moves = kit.write_move_reports(&mut screen).unwrap();
        assert_eq!(moves.len(), 6);
        assert!(moves[0].starts_with(dir.path().join("reports")));

        let boards = kit
            .write_leaderboard(SortKey::Throughput, &mut screen)
            .unwrap();
        assert_eq!(boards.len(), 2);
        let full = std::fs::read_to_string(&boards[0]).unwrap();
        // Counter with Cross Chop and with legacy Dynamic Punch
        assert_eq!(full.lines().count(), 3);
        assert!(full.contains("Dynamic Punch*"));

        let mut out = Vec::new();
        kit.inspector().run_query("68", &mut out).unwrap();
        assert!(String::from_utf8(out).unwrap().contains("# 068 Machamp (Fighting)"));
    }

    #[test]
    fn test_zero_energy_charged_move_fails_load() {
        let broken = GAME_MASTER.replace("\"energyDelta\": -35", "\"energyDelta\": 0");
        let data = gamemaster::extract_str(&broken).unwrap();
        let err = Pogokit::from_parts(Settings::default(), data, LegacyMoves::new())
            .err()
            .unwrap();
        assert!(matches!(err, PogoError::Score(ScoreError::ZeroEnergy { .. })));
    }
}
