//! Legacy move lists
//!
//! Two small CSV tables list moves a creature could learn in the past but can no
//! longer obtain: one for fast moves, one for charged moves. Both map a creature
//! display name to a move display name. Fields may be double-quoted, with `""`
//! standing for a literal quote inside a quoted field.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::game::MoveKind;

/// Pairs that appear in community lists but were never obtainable
const NEVER_OBTAINABLE: [(&str, &str); 4] = [
    ("Kyogre", "Dragon Tail"),
    ("Zapdos", "Discharge"),
    ("Moltres", "Ember"),
    ("Moltres", "Flamethrower"),
];

/// Legacy moves keyed by creature display name
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LegacyMoves {
    fast: BTreeMap<String, Vec<String>>,
    charged: BTreeMap<String, Vec<String>>,
}

impl LegacyMoves {
    /// Empty lists
    pub fn new() -> Self {
        Self::default()
    }

    /// Load whichever of the two CSV files are given
    pub fn load(fast_csv: Option<&Path>, charged_csv: Option<&Path>) -> Result<Self, LegacyError> {
        let mut legacy = Self::new();
        if let Some(path) = fast_csv {
            legacy.load_file(MoveKind::Fast, path)?;
        }
        if let Some(path) = charged_csv {
            legacy.load_file(MoveKind::Charged, path)?;
        }
        Ok(legacy)
    }

    fn load_file(&mut self, kind: MoveKind, path: &Path) -> Result<(), LegacyError> {
        let label = path.display().to_string();
        let text = fs::read_to_string(path).map_err(|source| LegacyError::Io {
            path: label.clone(),
            source,
        })?;
        let count = self.parse(kind, &text, &label)?;
        log::info!("Loaded {} legacy {:?} moves from {}", count, kind, label);
        Ok(())
    }

    /// Parse CSV text with a header row and `creature,move` rows.
    ///
    /// Returns the number of entries added.
    pub fn parse(&mut self, kind: MoveKind, text: &str, source: &str) -> Result<usize, LegacyError> {
        let mut added = 0;
        for (index, line) in text.lines().enumerate().skip(1) {
            if line.trim().is_empty() {
                continue;
            }
            let fields = split_record(line);
            let [creature, move_name] = fields.as_slice() else {
                return Err(LegacyError::Malformed {
                    path: source.to_string(),
                    line: index + 1,
                });
            };
            if creature.is_empty() || move_name.is_empty() {
                return Err(LegacyError::Malformed {
                    path: source.to_string(),
                    line: index + 1,
                });
            }
            if self.insert(kind, creature, move_name) {
                added += 1;
            }
        }
        Ok(added)
    }

    /// Add one entry. Never-obtainable pairs and duplicates are skipped.
    pub fn insert(&mut self, kind: MoveKind, creature: &str, move_name: &str) -> bool {
        if NEVER_OBTAINABLE
            .iter()
            .any(|&(c, m)| c == creature && m == move_name)
        {
            log::debug!("Skipping never obtainable {} for {}", move_name, creature);
            return false;
        }
        let moves = self.table_mut(kind).entry(creature.to_string()).or_default();
        if moves.iter().any(|m| m == move_name) {
            return false;
        }
        moves.push(move_name.to_string());
        true
    }

    /// Legacy move display names for a creature
    pub fn moves_for(&self, kind: MoveKind, creature: &str) -> &[String] {
        self.table(kind)
            .get(creature)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.fast.is_empty() && self.charged.is_empty()
    }

    fn table(&self, kind: MoveKind) -> &BTreeMap<String, Vec<String>> {
        match kind {
            MoveKind::Fast => &self.fast,
            MoveKind::Charged => &self.charged,
        }
    }

    fn table_mut(&mut self, kind: MoveKind) -> &mut BTreeMap<String, Vec<String>> {
        match kind {
            MoveKind::Fast => &mut self.fast,
            MoveKind::Charged => &mut self.charged,
        }
    }
}

/// Split one CSV record, honouring commas inside quoted fields
fn split_record(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut quoted = false;
    let mut chars = line.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '"' if quoted && chars.peek() == Some(&'"') => {
                field.push('"');
                chars.next();
            }
            '"' => quoted = !quoted,
            ',' if !quoted => fields.push(std::mem::take(&mut field).trim().to_string()),
            _ => field.push(c),
        }
    }
    fields.push(field.trim().to_string());
    fields
}

/// Legacy list errors
#[derive(Debug, thiserror::Error)]
pub enum LegacyError {
    #[error("Failed to read legacy moves {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("{path}:{line}: expected `creature,move`")]
    Malformed { path: String, line: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_fast_moves() {
        let mut legacy = LegacyMoves::new();
        let text = "pokemon_name,fast_move\nCharizard,Ember\nCharizard,Wing Attack\n\nDragonite,\"Dragon Breath\"\n";
        let added = legacy.parse(MoveKind::Fast, text, "fast.csv").unwrap();

        assert_eq!(added, 3);
        assert_eq!(
            legacy.moves_for(MoveKind::Fast, "Charizard"),
            ["Ember".to_string(), "Wing Attack".to_string()]
        );
        assert_eq!(
            legacy.moves_for(MoveKind::Fast, "Dragonite"),
            ["Dragon Breath".to_string()]
        );
        assert!(legacy.moves_for(MoveKind::Charged, "Charizard").is_empty());
    }

    #[test]
    fn test_never_obtainable_pairs_are_skipped() {
        let mut legacy = LegacyMoves::new();
        let text = "pokemon_name,charge_move\nMoltres,Flamethrower\nMoltres,Heat Wave\n";
        legacy.parse(MoveKind::Charged, text, "charged.csv").unwrap();

        assert_eq!(
            legacy.moves_for(MoveKind::Charged, "Moltres"),
            ["Heat Wave".to_string()]
        );
    }

    #[test]
    fn test_quoted_fields() {
        let mut legacy = LegacyMoves::new();
        let text = "pokemon_name,fast_move\n\"Farfetch'd, Galarian\",\"Fury Cutter\"\nMr. Mime,\"Zen \"\"Headbutt\"\"\"\n";
        let added = legacy.parse(MoveKind::Fast, text, "fast.csv").unwrap();

        assert_eq!(added, 2);
        assert_eq!(
            legacy.moves_for(MoveKind::Fast, "Farfetch'd, Galarian"),
            ["Fury Cutter".to_string()]
        );
        assert_eq!(
            legacy.moves_for(MoveKind::Fast, "Mr. Mime"),
            ["Zen \"Headbutt\"".to_string()]
        );

        let err = legacy
            .parse(MoveKind::Fast, "pokemon_name,fast_move\nA,B,C\n", "fast.csv")
            .unwrap_err();
        assert!(matches!(err, LegacyError::Malformed { line: 2, .. }));
    }

    #[test]
    fn test_malformed_line() {
        let mut legacy = LegacyMoves::new();
        let err = legacy
            .parse(MoveKind::Fast, "pokemon_name,fast_move\nMewtwo\n", "fast.csv")
            .unwrap_err();
        assert!(matches!(err, LegacyError::Malformed { line: 2, .. }));
    }

    #[test]
    fn test_load_from_files() {
        let dir = tempfile::tempdir().unwrap();
        let fast = dir.path().join("legacy_fast_moves.csv");
        std::fs::write(&fast, "pokemon_name,fast_move\nMewtwo,Psycho Cut\n").unwrap();

        let legacy = LegacyMoves::load(Some(fast.as_path()), None).unwrap();
        assert!(!legacy.is_empty());
        assert_eq!(legacy.moves_for(MoveKind::Fast, "Mewtwo").len(), 1);
    }
}
