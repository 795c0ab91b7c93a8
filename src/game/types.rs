//! Elemental types
//!
//! Every move and creature carries one of the eighteen elemental types. The
//! game master spells them as `POKEMON_TYPE_<NAME>` template identifiers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Prefix used by the game master for type identifiers
const TYPE_PREFIX: &str = "POKEMON_TYPE_";

/// Elemental type of a move or creature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ElementType {
    Normal,
    Fighting,
    Flying,
    Poison,
    Ground,
    Rock,
    Bug,
    Ghost,
    Steel,
    Fire,
    Water,
    Grass,
    Electric,
    Psychic,
    Ice,
    Dragon,
    Dark,
    Fairy,
}

impl ElementType {
    /// All types, in game master order
    pub const ALL: [ElementType; 18] = [
        ElementType::Normal,
        ElementType::Fighting,
        ElementType::Flying,
        ElementType::Poison,
        ElementType::Ground,
        ElementType::Rock,
        ElementType::Bug,
        ElementType::Ghost,
        ElementType::Steel,
        ElementType::Fire,
        ElementType::Water,
        ElementType::Grass,
        ElementType::Electric,
        ElementType::Psychic,
        ElementType::Ice,
        ElementType::Dragon,
        ElementType::Dark,
        ElementType::Fairy,
    ];

    /// Parse a game master type identifier such as `POKEMON_TYPE_FIRE`
    pub fn from_template_id(template_id: &str) -> Option<Self> {
        let name = template_id.strip_prefix(TYPE_PREFIX)?;
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.template_name() == name)
    }

    /// Upper-case name as it appears after the template prefix
    fn template_name(&self) -> &'static str {
        match self {
            ElementType::Normal => "NORMAL",
            ElementType::Fighting => "FIGHTING",
            ElementType::Flying => "FLYING",
            ElementType::Poison => "POISON",
            ElementType::Ground => "GROUND",
            ElementType::Rock => "ROCK",
            ElementType::Bug => "BUG",
            ElementType::Ghost => "GHOST",
            ElementType::Steel => "STEEL",
            ElementType::Fire => "FIRE",
            ElementType::Water => "WATER",
            ElementType::Grass => "GRASS",
            ElementType::Electric => "ELECTRIC",
            ElementType::Psychic => "PSYCHIC",
            ElementType::Ice => "ICE",
            ElementType::Dragon => "DRAGON",
            ElementType::Dark => "DARK",
            ElementType::Fairy => "FAIRY",
        }
    }

    /// Display name, e.g. `Fire`
    pub fn name(&self) -> &'static str {
        match self {
            ElementType::Normal => "Normal",
            ElementType::Fighting => "Fighting",
            ElementType::Flying => "Flying",
            ElementType::Poison => "Poison",
            ElementType::Ground => "Ground",
            ElementType::Rock => "Rock",
            ElementType::Bug => "Bug",
            ElementType::Ghost => "Ghost",
            ElementType::Steel => "Steel",
            ElementType::Fire => "Fire",
            ElementType::Water => "Water",
            ElementType::Grass => "Grass",
            ElementType::Electric => "Electric",
            ElementType::Psychic => "Psychic",
            ElementType::Ice => "Ice",
            ElementType::Dragon => "Dragon",
            ElementType::Dark => "Dark",
            ElementType::Fairy => "Fairy",
        }
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}
