//! Creature records
//!
//! A creature is one species (or one form of a species) with its base stats and
//! the moves it can learn.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::ElementType;

/// Base stats before level scaling and individual values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BaseStats {
    pub attack: u32,
    pub defense: u32,
    pub stamina: u32,
}

impl BaseStats {
    pub fn new(attack: u32, defense: u32, stamina: u32) -> Self {
        Self {
            attack,
            defense,
            stamina,
        }
    }

    /// Add the same individual-value bonus to every stat
    pub fn with_bonus(&self, bonus: u32) -> Self {
        Self {
            attack: self.attack + bonus,
            defense: self.defense + bonus,
            stamina: self.stamina + bonus,
        }
    }
}

/// A creature as defined by the game master
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Creature {
    /// National dex number, shared by all forms
    pub dex: u32,
    /// Internal identifier, e.g. `RATTATA`
    pub id: String,
    /// Short display name, e.g. `Rattata`
    pub name: String,
    /// Fully qualified display name, e.g. `Rattata Alola`
    pub full_name: String,
    /// Form tag, e.g. `RATTATA_ALOLA`
    pub form: Option<String>,
    pub primary_type: ElementType,
    pub secondary_type: Option<ElementType>,
    pub stats: BaseStats,
    /// Eligible fast move identifiers, in game master order
    pub fast_moves: Vec<String>,
    /// Eligible charged move identifiers, in game master order
    pub charged_moves: Vec<String>,
}

impl Creature {
    /// Whether a move of this type gets the same-type attack bonus
    pub fn has_type(&self, move_type: ElementType) -> bool {
        self.primary_type == move_type || self.secondary_type == Some(move_type)
    }

    /// Type label such as `Grass-Poison`
    pub fn type_label(&self) -> String {
        match self.secondary_type {
            Some(second) => format!("{}-{}", self.primary_type, second),
            None => self.primary_type.to_string(),
        }
    }
}

/// Drop form-less entries for every dex number that has at least one form.
///
/// Returns the remaining creatures, in input order, and the number of
/// entries dropped.
pub fn supersede_forms(creatures: Vec<Creature>) -> (Vec<Creature>, usize) {
    let mut has_form: BTreeMap<u32, bool> = BTreeMap::new();
    for creature in &creatures {
        *has_form.entry(creature.dex).or_default() |= creature.form.is_some();
    }

    let before = creatures.len();
    let active: Vec<Creature> = creatures
        .into_iter()
        .filter(|c| c.form.is_some() || !has_form.get(&c.dex).copied().unwrap_or(false))
        .collect();
    let dropped = before - active.len();

    (active, dropped)
}
