//! Analysis module
//!
//! Turns extracted moves into scored moves and ranks every moveset a creature
//! can run.

pub mod ranker;
pub mod scorer;

pub use ranker::{
    sort_movesets, ChargedChoice, CreatureRanking, FastChoice, Moveset, MovesetRanker, SortKey,
};
pub use scorer::{score_charged_move, score_charged_moves, score_fast_move, score_fast_moves, MoveBook};

/// Move scoring errors
#[derive(Debug, thiserror::Error)]
pub enum ScoreError {
    #[error("Charged move {id} has zero energy cost")]
    ZeroEnergy { id: String },
}
