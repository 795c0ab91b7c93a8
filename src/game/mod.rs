//! Game data module
//!
//! This module contains the data structures extracted from the game master:
//! elemental types, moves, creatures, and the PvP league brackets.

pub mod creature;
pub mod league;
pub mod moves;
pub mod types;

pub use creature::{supersede_forms, BaseStats, Creature};
pub use league::{League, LeagueValues};
pub use moves::{ChargedMove, FastMove, MoveKind, ScoredChargedMove, ScoredFastMove};
pub use types::ElementType;
