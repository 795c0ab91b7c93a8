//! Moveset ranking
//!
//! Pairs every eligible fast move of a creature with every eligible charged
//! move, applies the same-type attack bonus and estimates total damage output
//! in each league.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use super::scorer::MoveBook;
use crate::formulas::{
    cpm, find_league_levels, hit_points, max_combat_power, total_damage_output,
    AttackerProfile, LeagueFit, ScoringConstants,
};
use crate::game::{
    BaseStats, Creature, League, LeagueValues, MoveKind, ScoredChargedMove, ScoredFastMove,
};
use crate::gamemaster::LegacyMoves;

/// A fast move as a specific creature would use it
#[derive(Debug, Clone, Copy)]
pub struct FastChoice<'a> {
    pub scored: &'a ScoredFastMove,
    /// Same-type attack bonus applies
    pub stab: bool,
    /// Only learnable in the past
    pub legacy: bool,
    pub multiplier: f64,
    /// Bonus-adjusted damage per turn
    pub power_per_turn: f64,
    /// Bonus-adjusted quality score
    pub quality: f64,
}

/// A charged move as a specific creature would use it
#[derive(Debug, Clone, Copy)]
pub struct ChargedChoice<'a> {
    pub scored: &'a ScoredChargedMove,
    pub stab: bool,
    pub legacy: bool,
    pub multiplier: f64,
    /// Bonus-adjusted damage per energy
    pub power_per_energy: f64,
    pub power_per_100_energy: i64,
}

/// One creature with one fast and one charged move
#[derive(Debug, Clone)]
pub struct Moveset<'a> {
    pub creature: &'a Creature,
    pub fast: FastChoice<'a>,
    pub charged: ChargedChoice<'a>,
    /// Damage per turn including charged moves fuelled by the fast move
    pub throughput: f64,
    /// Total damage output per league for a perfect creature
    pub tdo: LeagueValues<f64>,
    /// Total damage output at level 1 without individual-value bonus
    pub level1_tdo: f64,
}

/// Everything the inspector shows about one creature
#[derive(Debug, Clone)]
pub struct CreatureRanking<'a> {
    pub creature: &'a Creature,
    /// Combat power and hit points at the top level, with bonus
    pub max_cp: u32,
    pub max_hp: u32,
    pub league_fits: LeagueValues<LeagueFit>,
    /// Sorted by bonus-adjusted quality, best first
    pub fast_moves: Vec<FastChoice<'a>>,
    /// Sorted by bonus-adjusted damage per energy, best first
    pub charged_moves: Vec<ChargedChoice<'a>>,
    /// Sorted by throughput, best first
    pub movesets: Vec<Moveset<'a>>,
}

/// Leaderboard ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Throughput,
    Tdo(League),
    Level1Tdo,
}

impl SortKey {
    pub fn value(&self, moveset: &Moveset<'_>) -> f64 {
        match self {
            SortKey::Throughput => moveset.throughput,
            SortKey::Tdo(league) => moveset.tdo[*league],
            SortKey::Level1Tdo => moveset.level1_tdo,
        }
    }

    /// Suffix used in output file names
    pub fn slug(&self) -> &'static str {
        match self {
            SortKey::Throughput => "throughput",
            SortKey::Tdo(League::Great) => "gl_tdo",
            SortKey::Tdo(League::Ultra) => "ul_tdo",
            SortKey::Tdo(League::Master) => "ml_tdo",
            SortKey::Level1Tdo => "level1_tdo",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortKey::Throughput => f.write_str("throughput"),
            SortKey::Tdo(league) => write!(f, "{} TDO", league),
            SortKey::Level1Tdo => f.write_str("level 1 TDO"),
        }
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "throughput" | "dpt" => Ok(SortKey::Throughput),
            "gl" | "great" => Ok(SortKey::Tdo(League::Great)),
            "ul" | "ultra" => Ok(SortKey::Tdo(League::Ultra)),
            "ml" | "master" => Ok(SortKey::Tdo(League::Master)),
            "level1" | "min" => Ok(SortKey::Level1Tdo),
            other => Err(format!(
                "unknown sort key `{}` (expected throughput, gl, ul, ml or level1)",
                other
            )),
        }
    }
}

/// Stable descending sort by `key`
pub fn sort_movesets(movesets: &mut [Moveset<'_>], key: SortKey) {
    movesets.sort_by(|a, b| descending(key.value(a), key.value(b)));
}

fn descending(a: f64, b: f64) -> Ordering {
    b.total_cmp(&a)
}

/// Moveset ranking engine
pub struct MovesetRanker {
    scoring: ScoringConstants,
}

impl MovesetRanker {
    pub fn new(scoring: ScoringConstants) -> Self {
        Self { scoring }
    }

    /// Rank all movesets of one creature
    pub fn rank_creature<'a>(
        &self,
        creature: &'a Creature,
        book: &'a MoveBook,
        legacy: &LegacyMoves,
    ) -> CreatureRanking<'a> {
        let perfect = creature.stats.with_bonus(self.scoring.iv_bonus);
        let league_fits = find_league_levels(perfect);
        let (max_cp, max_hp) = max_combat_power(perfect);

        let fast_moves = self.fast_choices(creature, book, legacy);
        let charged_moves = self.charged_choices(creature, book, legacy);

        let mut movesets = Vec::with_capacity(fast_moves.len() * charged_moves.len());
        for fast in &fast_moves {
            for charged in &charged_moves {
                movesets.push(self.build_moveset(creature, *fast, *charged, perfect, &league_fits));
            }
        }
        sort_movesets(&mut movesets, SortKey::Throughput);

        let mut fast_sorted = fast_moves;
        fast_sorted.sort_by(|a, b| descending(a.quality, b.quality));
        let mut charged_sorted = charged_moves;
        charged_sorted.sort_by(|a, b| descending(a.power_per_energy, b.power_per_energy));

        CreatureRanking {
            creature,
            max_cp,
            max_hp,
            league_fits,
            fast_moves: fast_sorted,
            charged_moves: charged_sorted,
            movesets,
        }
    }

    /// Rank every creature and concatenate their movesets, in roster order
    pub fn rank_roster<'a>(
        &self,
        creatures: &'a [Creature],
        book: &'a MoveBook,
        legacy: &LegacyMoves,
    ) -> Vec<Moveset<'a>> {
        let movesets: Vec<Moveset<'a>> = creatures
            .iter()
            .flat_map(|c| self.rank_creature(c, book, legacy).movesets)
            .collect();
        log::info!(
            "Ranked {} movesets across {} creatures",
            movesets.len(),
            creatures.len()
        );
        movesets
    }

    fn stab_multiplier(&self, stab: bool) -> f64 {
        if stab {
            self.scoring.stab_multiplier
        } else {
            1.0
        }
    }

    fn fast_choices<'a>(
        &self,
        creature: &Creature,
        book: &'a MoveBook,
        legacy: &LegacyMoves,
    ) -> Vec<FastChoice<'a>> {
        let mut choices: Vec<FastChoice<'a>> = Vec::new();
        for id in &creature.fast_moves {
            match book.fast_by_id(id) {
                Some(scored) => choices.push(self.fast_choice(creature, scored, false)),
                None => log::warn!("{}: unknown fast move {}", creature.full_name, id),
            }
        }
        for name in legacy_names(legacy, MoveKind::Fast, creature) {
            let Some(scored) = book.fast_by_name(name) else {
                log::debug!("{}: legacy fast move {} not in game master", creature.full_name, name);
                continue;
            };
            if choices.iter().all(|c| c.scored.id() != scored.id()) {
                choices.push(self.fast_choice(creature, scored, true));
            }
        }
        choices
    }

    fn fast_choice<'a>(&self, creature: &Creature, scored: &'a ScoredFastMove, legacy: bool) -> FastChoice<'a> {
        let stab = creature.has_type(scored.move_type());
        let multiplier = self.stab_multiplier(stab);
        let power_per_turn = scored.power_per_turn * multiplier;
        FastChoice {
            scored,
            stab,
            legacy,
            multiplier,
            power_per_turn,
            quality: crate::formulas::move_quality_score(
                power_per_turn,
                scored.energy_per_turn,
                self.scoring.quality_c,
            ),
        }
    }

    fn charged_choices<'a>(
        &self,
        creature: &Creature,
        book: &'a MoveBook,
        legacy: &LegacyMoves,
    ) -> Vec<ChargedChoice<'a>> {
        let mut choices: Vec<ChargedChoice<'a>> = Vec::new();
        for id in &creature.charged_moves {
            match book.charged_by_id(id) {
                Some(scored) => choices.push(self.charged_choice(creature, scored, false)),
                None => log::warn!("{}: unknown charged move {}", creature.full_name, id),
            }
        }
        for name in legacy_names(legacy, MoveKind::Charged, creature) {
            let Some(scored) = book.charged_by_name(name) else {
                log::debug!("{}: legacy charged move {} not in game master", creature.full_name, name);
                continue;
            };
            if choices.iter().all(|c| c.scored.id() != scored.id()) {
                choices.push(self.charged_choice(creature, scored, true));
            }
        }
        choices
    }

    fn charged_choice<'a>(&self, creature: &Creature, scored: &'a ScoredChargedMove, legacy: bool) -> ChargedChoice<'a> {
        let stab = creature.has_type(scored.move_type());
        let multiplier = self.stab_multiplier(stab);
        let power_per_energy = scored.power_per_energy * multiplier;
        ChargedChoice {
            scored,
            stab,
            legacy,
            multiplier,
            power_per_energy,
            power_per_100_energy: (power_per_energy * 100.0).floor() as i64,
        }
    }

    fn build_moveset<'a>(
        &self,
        creature: &'a Creature,
        fast: FastChoice<'a>,
        charged: ChargedChoice<'a>,
        perfect: BaseStats,
        league_fits: &LeagueValues<LeagueFit>,
    ) -> Moveset<'a> {
        let throughput = fast.power_per_turn + charged.power_per_energy * fast.scored.energy_per_turn;
        let tdo = league_fits.map(|_, fit| self.tdo_at(perfect, fit.multiplier, &fast, &charged));
        let level1_tdo = self.tdo_at(creature.stats, cpm::CP_MULTIPLIERS[0], &fast, &charged);

        Moveset {
            creature,
            fast,
            charged,
            throughput,
            tdo,
            level1_tdo,
        }
    }

    fn tdo_at(&self, stats: BaseStats, multiplier: f64, fast: &FastChoice<'_>, charged: &ChargedChoice<'_>) -> f64 {
        let attacker = AttackerProfile {
            attack: f64::from(stats.attack) * multiplier,
            defense: f64::from(stats.defense) * multiplier,
            hit_points: f64::from(hit_points(f64::from(stats.stamina), multiplier)),
            fast_power_per_turn: fast.scored.power_per_turn,
            fast_energy_per_turn: fast.scored.energy_per_turn,
            charged_power_per_energy: charged.scored.power_per_energy,
            fast_multiplier: fast.multiplier,
            charged_multiplier: charged.multiplier,
        };
        total_damage_output(&attacker, &self.scoring.reference_opponent)
    }
}

impl Default for MovesetRanker {
    fn default() -> Self {
        Self::new(ScoringConstants::default())
    }
}

/// Legacy names listed under the creature's short or full name
fn legacy_names<'l>(legacy: &'l LegacyMoves, kind: MoveKind, creature: &Creature) -> Vec<&'l str> {
    let mut names: Vec<&str> = legacy
        .moves_for(kind, &creature.name)
        .iter()
        .map(String::as_str)
        .collect();
    if creature.full_name != creature.name {
        for name in legacy.moves_for(kind, &creature.full_name) {
            if !names.contains(&name.as_str()) {
                names.push(name);
            }
        }
    }
    names
}
