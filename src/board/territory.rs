//! Identifier and metadata types for territories, continents, and players.

use std::fmt;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

/// Index of a territory on the board. Identifiers are dense: `0..territory_count`.
pub type TerritoryId = usize;

/// Index of a continent in the board's continent table.
pub type ContinentId = usize;

/// A player seated at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub u8);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "player {}", self.0)
    }
}

/// A territory named either by identifier or by display name.
///
/// Resolved against a board with `Board::resolve`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TerritoryRef {
    Id(TerritoryId),
    Name(String),
}

impl From<TerritoryId> for TerritoryRef {
    fn from(id: TerritoryId) -> Self {
        TerritoryRef::Id(id)
    }
}

impl From<&str> for TerritoryRef {
    fn from(name: &str) -> Self {
        TerritoryRef::Name(name.to_string())
    }
}

/// Static metadata for one territory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Territory {
    pub id: TerritoryId,
    pub name: String,
    pub continent: ContinentId,
    /// Sorted, deduplicated, symmetric adjacency.
    pub neighbors: Vec<TerritoryId>,
}

/// A named group of territories occupying a contiguous identifier range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Continent {
    pub name: String,
    pub first: TerritoryId,
    pub last: TerritoryId,
    /// Bonus armies granted each turn to a player controlling every territory.
    pub reward: u32,
}

impl Continent {
    /// Creates a continent covering `first..=last`.
    pub fn new(name: impl Into<String>, first: TerritoryId, last: TerritoryId, reward: u32) -> Self {
        Continent {
            name: name.into(),
            first,
            last,
            reward,
        }
    }

    /// Returns the `(min, max)` identifiers of this continent, both inclusive.
    pub const fn id_range(&self) -> (TerritoryId, TerritoryId) {
        (self.first, self.last)
    }

    /// Iterates the identifiers of every territory in this continent.
    pub fn territories(&self) -> RangeInclusive<TerritoryId> {
        self.first..=self.last
    }

    /// Returns true if `territory` falls inside this continent's range.
    pub const fn contains(&self, territory: TerritoryId) -> bool {
        territory >= self.first && territory <= self.last
    }

    /// Number of territories in the continent.
    pub const fn len(&self) -> usize {
        self.last - self.first + 1
    }
}
