//! PvP league brackets
//!
//! Each league caps the combat power of the creatures allowed to enter.
//! Master League has no cap.

use std::fmt;
use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

/// A competitive bracket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum League {
    /// CP 1500 and below
    Great,
    /// CP 2500 and below
    Ultra,
    /// No CP limit
    Master,
}

impl League {
    /// All leagues, from lowest to highest cap
    pub const ALL: [League; 3] = [League::Great, League::Ultra, League::Master];

    /// Maximum allowed combat power, `None` when unbounded
    pub fn cp_cap(&self) -> Option<u32> {
        match self {
            League::Great => Some(1500),
            League::Ultra => Some(2500),
            League::Master => None,
        }
    }

    /// Two-letter abbreviation used in tables
    pub fn short_name(&self) -> &'static str {
        match self {
            League::Great => "GL",
            League::Ultra => "UL",
            League::Master => "ML",
        }
    }

    fn index(&self) -> usize {
        match self {
            League::Great => 0,
            League::Ultra => 1,
            League::Master => 2,
        }
    }
}

impl fmt::Display for League {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            League::Great => "Great League",
            League::Ultra => "Ultra League",
            League::Master => "Master League",
        };
        f.write_str(name)
    }
}

/// One value per league
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LeagueValues<T> {
    values: [T; 3],
}

impl<T> LeagueValues<T> {
    /// Build by evaluating `f` for every league
    pub fn from_fn(mut f: impl FnMut(League) -> T) -> Self {
        Self {
            values: League::ALL.map(&mut f),
        }
    }

    /// Iterate over `(league, value)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (League, &T)> {
        League::ALL.into_iter().zip(self.values.iter())
    }

    /// Transform every value
    pub fn map<U>(&self, mut f: impl FnMut(League, &T) -> U) -> LeagueValues<U> {
        LeagueValues::from_fn(|league| f(league, &self[league]))
    }
}

impl<T> Index<League> for LeagueValues<T> {
    type Output = T;

    fn index(&self, league: League) -> &T {
        &self.values[league.index()]
    }
}

impl<T> IndexMut<League> for LeagueValues<T> {
    fn index_mut(&mut self, league: League) -> &mut T {
        &mut self.values[league.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_caps() {
        assert_eq!(League::Great.cp_cap(), Some(1500));
        assert_eq!(League::Ultra.cp_cap(), Some(2500));
        assert_eq!(League::Master.cp_cap(), None);
    }

    #[test]
    fn test_league_values_indexing() {
        let mut values = LeagueValues::from_fn(|l| l.cp_cap().unwrap_or(0));
        assert_eq!(values[League::Ultra], 2500);

        values[League::Master] = 9999;
        let collected: Vec<_> = values.iter().map(|(l, v)| (l, *v)).collect();
        assert_eq!(
            collected,
            vec![
                (League::Great, 1500),
                (League::Ultra, 2500),
                (League::Master, 9999)
            ]
        );
    }

    #[test]
    fn test_league_values_map() {
        let values = LeagueValues::from_fn(|_| 2u32);
        let doubled = values.map(|_, v| v * 2);
        assert_eq!(doubled[League::Great], 4);
    }
}
