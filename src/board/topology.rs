//! Static board description and lookup helpers.
//!
//! A `Board` partitions the dense identifier space `0..territory_count` into
//! contiguous continent ranges and stores symmetric adjacency. It is built
//! once, validated, and then only read.

use std::collections::BTreeSet;

use super::classic::{BORDERS, CONTINENTS, TERRITORY_NAMES};
use super::territory::{Continent, ContinentId, Territory, TerritoryId, TerritoryRef};
use crate::error::{AgentError, Result};

/// Immutable board topology: territories, continents, and adjacency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    territories: Vec<Territory>,
    continents: Vec<Continent>,
}

impl Board {
    /// Builds and validates a board from territory names, continent ranges,
    /// and an undirected border list.
    ///
    /// Continents must be listed in identifier order and tile
    /// `0..names.len()` with no gaps or overlaps. Borders must reference
    /// territories on the board and may not be self loops; each border is
    /// mirrored so adjacency is symmetric.
    pub fn new<S: AsRef<str>>(
        names: &[S],
        continents: Vec<Continent>,
        borders: &[(TerritoryId, TerritoryId)],
    ) -> Result<Self> {
        let count = names.len();
        if count == 0 {
            return Err(AgentError::InvalidBoard("board has no territories".into()));
        }

        let mut next = 0;
        let mut continent_of = vec![0; count];
        for (cid, c) in continents.iter().enumerate() {
            if c.first != next {
                return Err(AgentError::InvalidBoard(format!(
                    "continent '{}' starts at {} but {} is the next unassigned territory",
                    c.name, c.first, next
                )));
            }
            if c.last < c.first || c.last >= count {
                return Err(AgentError::InvalidBoard(format!(
                    "continent '{}' has invalid range {}..={}",
                    c.name, c.first, c.last
                )));
            }
            for slot in &mut continent_of[c.first..=c.last] {
                *slot = cid;
            }
            next = c.last + 1;
        }
        if next != count {
            return Err(AgentError::InvalidBoard(format!(
                "territories {}..{} belong to no continent",
                next, count
            )));
        }

        let mut neighbors: Vec<BTreeSet<TerritoryId>> = vec![BTreeSet::new(); count];
        for &(a, b) in borders {
            if a >= count || b >= count {
                return Err(AgentError::InvalidBoard(format!(
                    "border {}-{} references a territory outside 0..{}",
                    a, b, count
                )));
            }
            if a == b {
                return Err(AgentError::InvalidBoard(format!(
                    "territory {} borders itself",
                    a
                )));
            }
            neighbors[a].insert(b);
            neighbors[b].insert(a);
        }

        let territories = names
            .iter()
            .zip(neighbors)
            .enumerate()
            .map(|(id, (name, adj))| Territory {
                id,
                name: name.as_ref().to_string(),
                continent: continent_of[id],
                neighbors: adj.into_iter().collect(),
            })
            .collect();

        Ok(Board {
            territories,
            continents,
        })
    }

    /// Builds the standard 42-territory world map.
    pub fn classic() -> Self {
        let continents = CONTINENTS
            .iter()
            .map(|&(name, first, last, reward)| Continent::new(name, first, last, reward))
            .collect();
        // The static tables are covered by tests; a failure here is a table typo.
        match Board::new(&TERRITORY_NAMES, continents, &BORDERS) {
            Ok(board) => board,
            Err(e) => unreachable!("classic board tables are inconsistent: {}", e),
        }
    }

    /// Number of territories on the board.
    pub fn territory_count(&self) -> usize {
        self.territories.len()
    }

    /// All continents in identifier order.
    pub fn continents(&self) -> &[Continent] {
        &self.continents
    }

    /// All territories in identifier order.
    pub fn territories(&self) -> &[Territory] {
        &self.territories
    }

    /// Returns metadata for a territory.
    pub fn territory(&self, territory: TerritoryId) -> Result<&Territory> {
        self.territories
            .get(territory)
            .ok_or(AgentError::InvalidTerritory(territory))
    }

    /// Returns the identifier of the continent containing `territory`.
    pub fn continent_id_of(&self, territory: TerritoryId) -> Result<ContinentId> {
        self.territory(territory).map(|t| t.continent)
    }

    /// Returns the continent containing `territory`.
    pub fn continent_of(&self, territory: TerritoryId) -> Result<&Continent> {
        let cid = self.continent_id_of(territory)?;
        Ok(&self.continents[cid])
    }

    /// Returns the `(min, max)` identifier range of a continent.
    pub fn id_range_of(&self, continent: ContinentId) -> Option<(TerritoryId, TerritoryId)> {
        self.continents.get(continent).map(Continent::id_range)
    }

    pub fn continent_reward(&self, continent: ContinentId) -> Option<u32> {
        self.continents.get(continent).map(|c| c.reward)
    }

    /// Returns the neighbors of `territory`, sorted by identifier.
    pub fn neighbors_of(&self, territory: TerritoryId) -> Result<&[TerritoryId]> {
        self.territory(territory).map(|t| t.neighbors.as_slice())
    }

    /// Returns true if the two territories share a border.
    pub fn are_adjacent(&self, a: TerritoryId, b: TerritoryId) -> Result<bool> {
        Ok(self.neighbors_of(a)?.binary_search(&b).is_ok())
    }

    /// Looks up a continent by its display name.
    pub fn continent_by_name(&self, name: &str) -> Option<(ContinentId, &Continent)> {
        self.continents
            .iter()
            .enumerate()
            .find(|(_, c)| c.name == name)
    }

    /// Resolves a territory name (case-insensitive) to its identifier.
    pub fn territory_id(&self, name: &str) -> Result<TerritoryId> {
        self.territories
            .iter()
            .find(|t| t.name.eq_ignore_ascii_case(name))
            .map(|t| t.id)
            .ok_or_else(|| AgentError::UnknownTerritory(name.to_string()))
    }

    /// Resolves an identifier-or-name reference, checking identifiers are on
    /// the board.
    pub fn resolve(&self, territory: &TerritoryRef) -> Result<TerritoryId> {
        match territory {
            TerritoryRef::Id(id) => self.territory(*id).map(|t| t.id),
            TerritoryRef::Name(name) => self.territory_id(name),
        }
    }

    /// Returns every territory with at least one neighbor in another continent.
    pub fn derived_borders(&self) -> BTreeSet<TerritoryId> {
        self.territories
            .iter()
            .filter(|t| {
                t.neighbors
                    .iter()
                    .any(|&n| self.territories[n].continent != t.continent)
            })
            .map(|t| t.id)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::classic::*;

    #[test]
    fn classic_board_shape() {
        let board = Board::classic();
        assert_eq!(board.territory_count(), TERRITORY_COUNT);
        assert_eq!(board.continents().len(), CONTINENT_COUNT);
        let directed: usize = board.territories().iter().map(|t| t.neighbors.len()).sum();
        assert_eq!(directed, BORDER_COUNT * 2);
    }

    #[test]
    fn continent_lookup_matches_legacy_ranges() {
        let board = Board::classic();
        let expect = |t: TerritoryId, name: &str| {
            assert_eq!(board.continent_of(t).unwrap().name, name, "territory {}", t);
        };
        expect(0, "N. America");
        expect(8, "N. America");
        expect(9, "S. America");
        expect(12, "S. America");
        expect(13, "Africa");
        expect(18, "Africa");
        expect(19, "Europe");
        expect(25, "Europe");
        expect(26, "Asia");
        expect(37, "Asia");
        expect(38, "Australia");
        expect(41, "Australia");
    }

    #[test]
    fn continent_rewards() {
        let board = Board::classic();
        let rewards: Vec<u32> = (0..CONTINENT_COUNT)
            .filter_map(|c| board.continent_reward(c))
            .collect();
        assert_eq!(rewards, vec![5, 2, 3, 5, 7, 2]);
        assert_eq!(board.continent_reward(CONTINENT_COUNT), None);
    }

    #[test]
    fn continent_id_range_roundtrip() {
        let board = Board::classic();
        for t in 0..board.territory_count() {
            let cid = board.continent_id_of(t).unwrap();
            let (lo, hi) = board.id_range_of(cid).unwrap();
            assert!(lo <= t && t <= hi);
            assert_eq!(board.continent_id_of(lo).unwrap(), cid);
            assert_eq!(board.continent_id_of(hi).unwrap(), cid);
        }
    }

    #[test]
    fn adjacency_is_symmetric() {
        let board = Board::classic();
        for t in board.territories() {
            for &n in &t.neighbors {
                assert!(
                    board.are_adjacent(n, t.id).unwrap(),
                    "{} -> {} is not mirrored",
                    t.name,
                    board.territory(n).unwrap().name
                );
            }
        }
    }

    #[test]
    fn known_neighbors() {
        let board = Board::classic();
        assert_eq!(board.neighbors_of(ARGENTINA).unwrap(), &[BRAZIL, PERU]);
        assert!(board.are_adjacent(ALASKA, KAMCHATKA).unwrap());
        assert!(board.are_adjacent(BRAZIL, NORTH_AFRICA).unwrap());
        assert!(!board.are_adjacent(BRAZIL, EGYPT).unwrap());
        assert_eq!(board.neighbors_of(UKRAINE).unwrap().len(), 6);
    }

    #[test]
    fn out_of_range_territory_is_rejected() {
        let board = Board::classic();
        assert!(matches!(
            board.neighbors_of(42),
            Err(AgentError::InvalidTerritory(42))
        ));
        assert!(matches!(
            board.continent_of(1000),
            Err(AgentError::InvalidTerritory(1000))
        ));
        assert_eq!(board.id_range_of(6), None);
    }

    #[test]
    fn references_resolve_by_id_or_name() {
        let board = Board::classic();
        assert_eq!(board.resolve(&TerritoryRef::Id(PERU)).unwrap(), PERU);
        assert_eq!(board.resolve(&"peru".into()).unwrap(), PERU);
        assert!(matches!(
            board.resolve(&TerritoryRef::Id(42)),
            Err(AgentError::InvalidTerritory(42))
        ));
        assert!(matches!(
            board.resolve(&"Narnia".into()),
            Err(AgentError::UnknownTerritory(ref n)) if n == "Narnia"
        ));
    }

    #[test]
    fn territory_names_resolve() {
        let board = Board::classic();
        assert_eq!(board.territory_id("Venezuela").unwrap(), VENEZUELA);
        assert_eq!(board.territory_id("eastern australia").unwrap(), EASTERN_AUSTRALIA);
        assert!(matches!(
            board.territory_id("Atlantis"),
            Err(AgentError::UnknownTerritory(_))
        ));
    }

    #[test]
    fn derived_borders_extend_the_legacy_table() {
        let board = Board::classic();
        let derived = board.derived_borders();
        for t in DEFAULT_BORDER_TERRITORIES {
            assert!(derived.contains(&t), "territory {} should be a border", t);
        }
        assert!(derived.contains(&EAST_AFRICA));
        assert_eq!(derived.len(), DEFAULT_BORDER_TERRITORIES.len() + 1);
    }

    #[test]
    fn gap_between_continents_is_rejected() {
        let names = ["a", "b", "c"];
        let continents = vec![Continent::new("X", 0, 0, 1), Continent::new("Y", 2, 2, 1)];
        let err = Board::new(&names, continents, &[(0, 2)]).unwrap_err();
        assert!(matches!(err, AgentError::InvalidBoard(_)));
    }

    #[test]
    fn uncovered_tail_is_rejected() {
        let names = ["a", "b", "c"];
        let continents = vec![Continent::new("X", 0, 1, 1)];
        let err = Board::new(&names, continents, &[]).unwrap_err();
        assert!(matches!(err, AgentError::InvalidBoard(_)));
    }

    #[test]
    fn border_out_of_range_is_rejected() {
        let names = ["a", "b"];
        let continents = vec![Continent::new("X", 0, 1, 1)];
        assert!(Board::new(&names, continents.clone(), &[(0, 5)]).is_err());
        assert!(Board::new(&names, continents, &[(1, 1)]).is_err());
    }

    #[test]
    fn small_custom_board() {
        let names = ["west", "east", "island"];
        let continents = vec![Continent::new("Main", 0, 1, 2), Continent::new("Isle", 2, 2, 1)];
        let board = Board::new(&names, continents, &[(0, 1), (1, 2)]).unwrap();
        assert_eq!(board.neighbors_of(1).unwrap(), &[0, 2]);
        assert_eq!(board.derived_borders().into_iter().collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(board.continent_by_name("Isle").map(|(id, _)| id), Some(1));
    }
}
