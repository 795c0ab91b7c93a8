//! Formula library
//!
//! Closed-form PvP formulas: combat power, hit points, the fast move quality
//! score, total damage output and the league level search. Everything here is
//! pure and operates on the level multiplier table in [`cpm`].

pub mod cpm;

use serde::{Deserialize, Serialize};

use crate::game::{BaseStats, League, LeagueValues};

/// Shared scoring constants
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringConstants {
    /// Weight of energy per turn in the fast move quality score
    pub quality_c: f64,
    /// Same-type attack bonus multiplier
    pub stab_multiplier: f64,
    /// Individual-value bonus added to each base stat for a perfect creature
    pub iv_bonus: u32,
    /// Opponent used for total damage output estimates
    pub reference_opponent: OpponentProfile,
}

/// Default constants used across the toolkit
pub const SCORING: ScoringConstants = ScoringConstants {
    quality_c: 1.4,
    stab_multiplier: 1.2,
    iv_bonus: 15,
    reference_opponent: REFERENCE_OPPONENT,
};

impl Default for ScoringConstants {
    fn default() -> Self {
        SCORING
    }
}

/// What a creature brings to a total damage output estimate
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttackerProfile {
    /// Level-scaled attack
    pub attack: f64,
    /// Level-scaled defense
    pub defense: f64,
    pub hit_points: f64,
    pub fast_power_per_turn: f64,
    pub fast_energy_per_turn: f64,
    pub charged_power_per_energy: f64,
    pub fast_multiplier: f64,
    pub charged_multiplier: f64,
}

/// The opponent side of a total damage output estimate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OpponentProfile {
    pub attack: f64,
    pub defense: f64,
    pub fast_power_per_turn: f64,
    pub fast_energy_per_turn: f64,
    pub charged_power_per_energy: f64,
    pub fast_multiplier: f64,
    pub charged_multiplier: f64,
}

/// Generic opponent every moveset is measured against
pub const REFERENCE_OPPONENT: OpponentProfile = OpponentProfile {
    attack: 200.0,
    defense: 150.0,
    fast_power_per_turn: 5.0,
    fast_energy_per_turn: 5.0,
    charged_power_per_energy: 1.8,
    fast_multiplier: 1.0,
    charged_multiplier: 1.0,
};

/// Combat power. Stats must already include any individual-value bonus.
pub fn combat_power(attack: f64, defense: f64, stamina: f64, multiplier: f64) -> u32 {
    (attack * defense.sqrt() * stamina.sqrt() * multiplier.powi(2) / 10.0).floor() as u32
}

/// Hit points at a given multiplier
pub fn hit_points(stamina: f64, multiplier: f64) -> u32 {
    (stamina * multiplier).floor() as u32
}

/// Fast move quality: damage per turn plus weighted energy per turn
pub fn move_quality_score(power_per_turn: f64, energy_per_turn: f64, c: f64) -> f64 {
    power_per_turn + c * energy_per_turn
}

/// Total damage output of `attacker` relative to `opponent`.
///
/// This is a throughput-times-bulk heuristic for ranking, not the outcome of a
/// simulated battle. The opponent's charged term is scaled by the opponent's
/// fast move multiplier rather than its charged one.
pub fn total_damage_output(attacker: &AttackerProfile, opponent: &OpponentProfile) -> f64 {
    let a = attacker;
    let b = opponent;
    let attacker_rate = a.fast_power_per_turn * a.fast_multiplier
        + a.fast_energy_per_turn * a.charged_power_per_energy * a.charged_multiplier;
    let opponent_rate = b.fast_power_per_turn * b.fast_multiplier
        + b.fast_energy_per_turn * b.charged_power_per_energy * b.fast_multiplier;

    (attacker_rate * a.attack * a.defense * a.hit_points) / (opponent_rate * b.attack * b.defense)
}

/// Total damage output against [`REFERENCE_OPPONENT`]
pub fn total_damage_output_vs_reference(attacker: &AttackerProfile) -> f64 {
    total_damage_output(attacker, &REFERENCE_OPPONENT)
}

/// Highest level a creature can reach in one league
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LeagueFit {
    pub level: f64,
    /// Within the league cap only when `fits` is true. Otherwise this is the
    /// level-1 combat power, which is above the cap.
    pub combat_power: u32,
    pub multiplier: f64,
    /// False when even the lowest level exceeds the league cap
    pub fits: bool,
}

/// Find the maximum level, and its combat power, for every league.
///
/// Stats must already include any individual-value bonus. Levels whose combat
/// power exceeds a finite cap are masked out; among the rest the highest
/// combat power wins and ties go to the highest level. A creature too strong
/// for a league even at level 1 is reported at level 1 with `fits == false`.
pub fn find_league_levels(stats: BaseStats) -> LeagueValues<LeagueFit> {
    let attack = f64::from(stats.attack);
    let defense = f64::from(stats.defense);
    let stamina = f64::from(stats.stamina);

    let candidates: Vec<LeagueFit> = cpm::levels()
        .map(|(level, multiplier)| LeagueFit {
            level,
            combat_power: combat_power(attack, defense, stamina, multiplier),
            multiplier,
            fits: true,
        })
        .collect();

    LeagueValues::from_fn(|league| best_fit(&candidates, league))
}

fn best_fit(candidates: &[LeagueFit], league: League) -> LeagueFit {
    let mut best: Option<LeagueFit> = None;
    for candidate in candidates {
        if league.cp_cap().is_some_and(|cap| candidate.combat_power > cap) {
            continue;
        }
        // `>=` keeps the last of equally strong levels
        let better = match best {
            Some(b) => candidate.combat_power >= b.combat_power,
            None => true,
        };
        if better {
            best = Some(*candidate);
        }
    }

    best.unwrap_or(LeagueFit {
        fits: false,
        ..candidates[0]
    })
}

/// Combat power and hit points at the top level
pub fn max_combat_power(stats: BaseStats) -> (u32, u32) {
    let m = cpm::max_multiplier();
    (
        combat_power(
            f64::from(stats.attack),
            f64::from(stats.defense),
            f64::from(stats.stamina),
            m,
        ),
        hit_points(f64::from(stats.stamina), m),
    )
}
