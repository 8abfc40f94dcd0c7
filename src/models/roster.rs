//! Roster: a fixed, ordered sequence of cards and the rule that maps numbers onto it.

use crate::models::entity::Entity;
use serde::{Deserialize, Serialize};

/// Numbers offered to the user in flat mode, independent of the roster length.
pub const FLAT_NUMBER_RANGE: u32 = 91;

/// Auction round in round mode.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Round {
    One,
    Two,
    Three,
}

impl Round {
    pub const ALL: [Round; 3] = [Round::One, Round::Two, Round::Three];

    pub fn number(self) -> u8 {
        match self {
            Round::One => 1,
            Round::Two => 2,
            Round::Three => 3,
        }
    }
}

impl TryFrom<u8> for Round {
    type Error = String;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        match n {
            1 => Ok(Round::One),
            2 => Ok(Round::Two),
            3 => Ok(Round::Three),
            _ => Err(format!("round must be 1, 2 or 3 (got {n})")),
        }
    }
}

impl From<Round> for u8 {
    fn from(r: Round) -> Self {
        r.number()
    }
}

/// How a roster is built and offered.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RosterMode {
    /// One 91-card roster.
    Flat,
    /// Three separately drawn rounds.
    #[default]
    Rounds,
}

impl std::str::FromStr for RosterMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "flat" => Ok(RosterMode::Flat),
            "rounds" | "round" => Ok(RosterMode::Rounds),
            other => Err(format!("unknown roster mode: {other}")),
        }
    }
}

/// Number-to-position rule. Each roster mode uses exactly one.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mapping {
    /// `roster[(n - 1) mod len]`, numbers `1..=FLAT_NUMBER_RANGE`.
    Modular,
    /// `roster[n - 1]`, numbers `1..=len`.
    Direct,
}

/// Fixed, ordered cards. Cloning is O(1).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    entities: im::Vector<Entity>,
    mapping: Mapping,
}

impl Roster {
    pub fn new(entities: impl IntoIterator<Item = Entity>, mapping: Mapping) -> Self {
        Self {
            entities: entities.into_iter().collect(),
            mapping,
        }
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn mapping(&self) -> Mapping {
        self.mapping
    }

    /// Highest number a user may pick.
    pub fn number_range(&self) -> u32 {
        match self.mapping {
            Mapping::Modular => FLAT_NUMBER_RANGE,
            Mapping::Direct => self.entities.len() as u32,
        }
    }

    /// Card at 0-based position.
    pub fn get(&self, index: usize) -> Option<&Entity> {
        self.entities.get(index)
    }

    /// Card a (range-checked) number resolves to.
    pub fn resolve(&self, number: u32) -> Option<&Entity> {
        if number == 0 || self.entities.is_empty() {
            return None;
        }
        let index = match self.mapping {
            Mapping::Modular => (number as usize - 1) % self.entities.len(),
            Mapping::Direct => number as usize - 1,
        };
        self.entities.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }
}
