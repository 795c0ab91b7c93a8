//! Move scoring
//!
//! Derives per-turn metrics for fast moves and per-energy metrics for charged
//! moves. Scoring never mutates the input records; it returns new ones.

use std::collections::HashMap;

use super::ScoreError;
use crate::formulas::move_quality_score;
use crate::game::{ChargedMove, FastMove, ScoredChargedMove, ScoredFastMove};

/// Score one fast move with quality weight `c`
pub fn score_fast_move(base: &FastMove, c: f64) -> ScoredFastMove {
    let turns = f64::from(base.duration_turns.max(1));
    let power_per_turn = base.power / turns;
    let energy_per_turn = f64::from(base.energy_delta) / turns;

    ScoredFastMove {
        base: base.clone(),
        power_per_turn,
        energy_per_turn,
        quality: move_quality_score(power_per_turn, energy_per_turn, c),
    }
}

/// Score every fast move
pub fn score_fast_moves(moves: &[FastMove], c: f64) -> Vec<ScoredFastMove> {
    moves.iter().map(|m| score_fast_move(m, c)).collect()
}

/// Score one charged move. A zero energy cost is a data error.
pub fn score_charged_move(base: &ChargedMove) -> Result<ScoredChargedMove, ScoreError> {
    if base.energy_delta == 0 {
        return Err(ScoreError::ZeroEnergy {
            id: base.id.clone(),
        });
    }
    let power_per_energy = base.power / f64::from(base.energy_delta.unsigned_abs());

    Ok(ScoredChargedMove {
        base: base.clone(),
        power_per_energy,
        power_per_100_energy: (power_per_energy * 100.0).floor() as i64,
    })
}

/// Score every charged move, failing on the first bad record
pub fn score_charged_moves(moves: &[ChargedMove]) -> Result<Vec<ScoredChargedMove>, ScoreError> {
    moves.iter().map(score_charged_move).collect()
}

/// Scored moves indexed by identifier and by display name
#[derive(Debug, Clone, Default)]
pub struct MoveBook {
    fast: Vec<ScoredFastMove>,
    charged: Vec<ScoredChargedMove>,
    fast_ids: HashMap<String, usize>,
    charged_ids: HashMap<String, usize>,
    fast_names: HashMap<String, usize>,
    charged_names: HashMap<String, usize>,
}

impl MoveBook {
    /// Score raw moves and index them
    pub fn build(fast: &[FastMove], charged: &[ChargedMove], c: f64) -> Result<Self, ScoreError> {
        Ok(Self::from_scored(
            score_fast_moves(fast, c),
            score_charged_moves(charged)?,
        ))
    }

    /// Index already scored moves. The first record wins on duplicate identifiers.
    pub fn from_scored(fast: Vec<ScoredFastMove>, charged: Vec<ScoredChargedMove>) -> Self {
        let mut book = Self::default();

        for m in fast {
            if book.fast_ids.contains_key(m.id()) {
                log::warn!("Duplicate fast move {}, keeping the first", m.id());
                continue;
            }
            let i = book.fast.len();
            book.fast_ids.insert(m.id().to_string(), i);
            book.fast_names.entry(m.name().to_string()).or_insert(i);
            book.fast.push(m);
        }
        for m in charged {
            if book.charged_ids.contains_key(m.id()) {
                log::warn!("Duplicate charged move {}, keeping the first", m.id());
                continue;
            }
            let i = book.charged.len();
            book.charged_ids.insert(m.id().to_string(), i);
            book.charged_names.entry(m.name().to_string()).or_insert(i);
            book.charged.push(m);
        }

        book
    }

    /// All fast moves, in game master order
    pub fn fast_moves(&self) -> &[ScoredFastMove] {
        &self.fast
    }

    /// All charged moves, in game master order
    pub fn charged_moves(&self) -> &[ScoredChargedMove] {
        &self.charged
    }

    pub fn fast_by_id(&self, id: &str) -> Option<&ScoredFastMove> {
        self.fast_ids.get(id).map(|&i| &self.fast[i])
    }

    pub fn charged_by_id(&self, id: &str) -> Option<&ScoredChargedMove> {
        self.charged_ids.get(id).map(|&i| &self.charged[i])
    }

    pub fn fast_by_name(&self, name: &str) -> Option<&ScoredFastMove> {
        self.fast_names.get(name).map(|&i| &self.fast[i])
    }

    pub fn charged_by_name(&self, name: &str) -> Option<&ScoredChargedMove> {
        self.charged_names.get(name).map(|&i| &self.charged[i])
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::formulas::SCORING;
    use crate::game::ElementType;

    pub(crate) fn fast(id: &str, move_type: ElementType, power: f64, energy: i32, turns: u32) -> FastMove {
        FastMove {
            id: id.to_string(),
            name: crate::gamemaster::extract::display_name(id.trim_end_matches("_FAST")),
            move_type,
            power,
            energy_delta: energy,
            duration_turns: turns,
        }
    }

    pub(crate) fn charged(id: &str, move_type: ElementType, power: f64, energy: i32) -> ChargedMove {
        ChargedMove {
            id: id.to_string(),
            name: crate::gamemaster::extract::display_name(id),
            move_type,
            power,
            energy_delta: energy,
        }
    }

    #[test]
    fn test_fast_move_metrics() {
        let m = fast("TEST_FAST", ElementType::Normal, 10.0, 8, 2);
        let scored = score_fast_move(&m, SCORING.quality_c);

        assert_eq!(scored.power_per_turn, 5.0);
        assert_eq!(scored.energy_per_turn, 4.0);
        assert!((scored.quality - 10.6).abs() < 1e-9);
    }

    #[test]
    fn test_charged_move_metrics() {
        let m = charged("TEST", ElementType::Normal, 100.0, -50);
        let scored = score_charged_move(&m).unwrap();

        assert_eq!(scored.power_per_energy, 2.0);
        assert_eq!(scored.power_per_100_energy, 200);
    }

    #[test]
    fn test_power_per_100_energy_floors() {
        let m = charged("BODY_SLAM", ElementType::Normal, 60.0, -35);
        let scored = score_charged_move(&m).unwrap();
        assert_eq!(scored.power_per_100_energy, 171);
    }

    #[test]
    fn test_zero_energy_charged_move_is_rejected() {
        let m = charged("STRUGGLE", ElementType::Normal, 35.0, 0);
        let err = score_charged_move(&m).unwrap_err();
        assert!(matches!(err, ScoreError::ZeroEnergy { ref id } if id == "STRUGGLE"));

        let all = vec![charged("WRAP", ElementType::Normal, 60.0, -45), m];
        assert!(score_charged_moves(&all).is_err());
    }

    #[test]
    fn test_rescoring_is_idempotent() {
        let moves = vec![
            fast("COUNTER_FAST", ElementType::Fighting, 8.0, 7, 2),
            fast("MUD_SHOT_FAST", ElementType::Ground, 3.0, 9, 2),
        ];
        let once = score_fast_moves(&moves, 1.4);
        let bases: Vec<FastMove> = once.iter().map(|s| s.base.clone()).collect();
        let twice = score_fast_moves(&bases, 1.4);
        assert_eq!(once, twice);

        let charged_moves = vec![charged("CROSS_CHOP", ElementType::Fighting, 50.0, -35)];
        let once = score_charged_moves(&charged_moves).unwrap();
        let bases: Vec<ChargedMove> = once.iter().map(|s| s.base.clone()).collect();
        assert_eq!(once, score_charged_moves(&bases).unwrap());
    }

    #[test]
    fn test_move_book_lookup() {
        let book = MoveBook::build(
            &[
                fast("COUNTER_FAST", ElementType::Fighting, 8.0, 7, 2),
                fast("COUNTER_FAST", ElementType::Fighting, 99.0, 7, 2),
            ],
            &[charged("CROSS_CHOP", ElementType::Fighting, 50.0, -35)],
            1.4,
        )
        .unwrap();

        assert_eq!(book.fast_by_id("COUNTER_FAST").unwrap().base.power, 8.0);
        assert_eq!(book.fast_by_name("Counter").unwrap().id(), "COUNTER_FAST");
        assert_eq!(book.charged_by_name("Cross Chop").unwrap().id(), "CROSS_CHOP");
        assert!(book.charged_by_id("HYPER_BEAM").is_none());
        assert_eq!(book.fast_moves().len(), 1);
    }
}
