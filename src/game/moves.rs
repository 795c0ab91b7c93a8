//! Fast and charged move records
//!
//! Raw records come straight out of the game master. The scored variants carry
//! the per-turn and per-energy metrics derived by [`crate::analysis::scorer`].

use serde::{Deserialize, Serialize};

use super::ElementType;

/// Which slot a move occupies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveKind {
    /// Generates energy every few turns
    Fast,
    /// Spends energy for a big hit
    Charged,
}

/// A fast move as defined by the game master
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FastMove {
    /// Unique identifier, e.g. `COUNTER_FAST`
    pub id: String,
    /// Display name, e.g. `Counter`
    pub name: String,
    pub move_type: ElementType,
    pub power: f64,
    /// Energy gained per use
    pub energy_delta: i32,
    /// Turns the move takes (at least 1)
    pub duration_turns: u32,
}

/// A charged move as defined by the game master
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChargedMove {
    /// Unique identifier, e.g. `CROSS_CHOP`
    pub id: String,
    /// Display name, e.g. `Cross Chop`
    pub name: String,
    pub move_type: ElementType,
    pub power: f64,
    /// Energy spent per use (negative in the game master)
    pub energy_delta: i32,
}

/// A fast move with its derived metrics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredFastMove {
    pub base: FastMove,
    /// Damage per turn
    pub power_per_turn: f64,
    /// Energy per turn
    pub energy_per_turn: f64,
    /// `power_per_turn + C * energy_per_turn`
    pub quality: f64,
}

impl ScoredFastMove {
    pub fn id(&self) -> &str {
        &self.base.id
    }

    pub fn name(&self) -> &str {
        &self.base.name
    }

    pub fn move_type(&self) -> ElementType {
        self.base.move_type
    }
}

/// A charged move with its derived metrics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredChargedMove {
    pub base: ChargedMove,
    /// `power / |energy_delta|`
    pub power_per_energy: f64,
    /// `floor(power_per_energy * 100)`
    pub power_per_100_energy: i64,
}

impl ScoredChargedMove {
    pub fn id(&self) -> &str {
        &self.base.id
    }

    pub fn name(&self) -> &str {
        &self.base.name
    }

    pub fn move_type(&self) -> ElementType {
        self.base.move_type
    }
}
