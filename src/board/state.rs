//! Game state representation.
//!
//! Holds the read-only snapshot the evaluator scores against: the turn phase,
//! territory ownership and army counts, the seated players, and the pending
//! occupation left behind by a successful attack.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::action::Engagement;
use super::territory::{ContinentId, PlayerId, TerritoryId};
use super::topology::Board;
use crate::error::{AgentError, Result};

/// The stage of a player's turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    PreAssign,
    PrePlace,
    Place,
    TurnInCards,
    Attack,
    Occupy,
    Fortify,
}

impl Phase {
    /// All phases in turn order.
    pub const ALL: [Phase; 7] = [
        Phase::PreAssign,
        Phase::PrePlace,
        Phase::Place,
        Phase::TurnInCards,
        Phase::Attack,
        Phase::Occupy,
        Phase::Fortify,
    ];

    /// Returns the wire tag for this phase.
    pub const fn tag(self) -> &'static str {
        match self {
            Phase::PreAssign => "PreAssign",
            Phase::PrePlace => "PrePlace",
            Phase::Place => "Place",
            Phase::TurnInCards => "TurnInCards",
            Phase::Attack => "Attack",
            Phase::Occupy => "Occupy",
            Phase::Fortify => "Fortify",
        }
    }
}

impl FromStr for Phase {
    type Err = AgentError;

    fn from_str(s: &str) -> Result<Phase> {
        Phase::ALL
            .iter()
            .copied()
            .find(|p| p.tag() == s)
            .ok_or_else(|| AgentError::UnknownPhase(s.to_string()))
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Complete game snapshot at a decision point.
///
/// Ownership and army counts are indexed by `TerritoryId`. The board is shared
/// so successor states produced by combat simulation stay cheap to clone.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub board: Arc<Board>,
    pub phase: Phase,
    /// Owner of each territory, or `None` while unclaimed.
    pub owners: Vec<Option<PlayerId>>,
    pub armies: Vec<u32>,
    pub current_player: PlayerId,
    pub players: Vec<PlayerId>,
    /// The attack whose conquest is awaiting an Occupy decision.
    pub occupying: Option<Engagement>,
}

impl GameState {
    /// Creates a state with every territory unowned and empty.
    pub fn new(board: Arc<Board>, phase: Phase, players: Vec<PlayerId>, current_player: PlayerId) -> Self {
        let count = board.territory_count();
        GameState {
            board,
            phase,
            owners: vec![None; count],
            armies: vec![0; count],
            current_player,
            players,
            occupying: None,
        }
    }

    /// Assembles a state from raw parts, checking that the per-territory
    /// vectors match the board and that the current player is seated.
    pub fn from_parts(
        board: Arc<Board>,
        phase: Phase,
        owners: Vec<Option<PlayerId>>,
        armies: Vec<u32>,
        current_player: PlayerId,
        players: Vec<PlayerId>,
        occupying: Option<Engagement>,
    ) -> Result<Self> {
        let count = board.territory_count();
        if owners.len() != count {
            return Err(AgentError::InvalidState(format!(
                "expected {} owner entries, got {}",
                count,
                owners.len()
            )));
        }
        if armies.len() != count {
            return Err(AgentError::InvalidState(format!(
                "expected {} army entries, got {}",
                count,
                armies.len()
            )));
        }
        if !players.contains(&current_player) {
            return Err(AgentError::InvalidState(format!(
                "current {} is not seated",
                current_player
            )));
        }
        if let Some(e) = occupying {
            board.territory(e.from)?;
            board.territory(e.to)?;
        }
        Ok(GameState {
            board,
            phase,
            owners,
            armies,
            current_player,
            players,
            occupying,
        })
    }

    /// Returns a copy of this state in a different phase.
    pub fn with_phase(&self, phase: Phase) -> Self {
        GameState {
            phase,
            ..self.clone()
        }
    }

    /// Sets the owner and army count of a territory.
    pub fn occupy(&mut self, territory: TerritoryId, owner: Option<PlayerId>, armies: u32) -> Result<()> {
        self.board.territory(territory)?;
        self.owners[territory] = owner;
        self.armies[territory] = armies;
        Ok(())
    }

    /// Returns the owner of a territory.
    pub fn owner(&self, territory: TerritoryId) -> Result<Option<PlayerId>> {
        self.owners
            .get(territory)
            .copied()
            .ok_or(AgentError::InvalidTerritory(territory))
    }

    /// Returns the army count on a territory.
    pub fn armies_on(&self, territory: TerritoryId) -> Result<u32> {
        self.armies
            .get(territory)
            .copied()
            .ok_or(AgentError::InvalidTerritory(territory))
    }

    /// Counts the territories owned by `player`.
    pub fn territory_count_of(&self, player: PlayerId) -> usize {
        self.owners.iter().filter(|o| **o == Some(player)).count()
    }

    /// Returns true if `player` owns every territory of `continent`.
    pub fn controls(&self, player: PlayerId, continent: ContinentId) -> bool {
        match self.board.continents().get(continent) {
            Some(c) => c.territories().all(|t| self.owners[t] == Some(player)),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::classic::*;

    fn classic_state(phase: Phase) -> GameState {
        GameState::new(
            Arc::new(Board::classic()),
            phase,
            vec![PlayerId(0), PlayerId(1)],
            PlayerId(0),
        )
    }

    #[test]
    fn phase_tag_roundtrip() {
        for p in Phase::ALL {
            assert_eq!(p.tag().parse::<Phase>().unwrap(), p);
            assert_eq!(p.to_string(), p.tag());
        }
    }

    #[test]
    fn unknown_phase_tag_is_an_error() {
        let err = "Draft".parse::<Phase>().unwrap_err();
        assert!(matches!(err, AgentError::UnknownPhase(ref t) if t == "Draft"));
        assert!("attack".parse::<Phase>().is_err());
    }

    #[test]
    fn new_state_is_unclaimed() {
        let state = classic_state(Phase::PreAssign);
        assert!(state.owners.iter().all(|o| o.is_none()));
        assert!(state.armies.iter().all(|a| *a == 0));
        assert_eq!(state.owners.len(), TERRITORY_COUNT);
    }

    #[test]
    fn occupy_and_query() {
        let mut state = classic_state(Phase::Place);
        state.occupy(BRAZIL, Some(PlayerId(1)), 4).unwrap();
        assert_eq!(state.owner(BRAZIL).unwrap(), Some(PlayerId(1)));
        assert_eq!(state.armies_on(BRAZIL).unwrap(), 4);
        assert_eq!(state.territory_count_of(PlayerId(1)), 1);
        assert!(state.occupy(99, None, 0).is_err());
        assert!(matches!(state.owner(99), Err(AgentError::InvalidTerritory(99))));
    }

    #[test]
    fn continent_control() {
        let mut state = classic_state(Phase::Place);
        for t in [VENEZUELA, BRAZIL, PERU] {
            state.occupy(t, Some(PlayerId(0)), 1).unwrap();
        }
        assert!(!state.controls(PlayerId(0), 1));
        state.occupy(ARGENTINA, Some(PlayerId(0)), 1).unwrap();
        assert!(state.controls(PlayerId(0), 1));
        assert!(!state.controls(PlayerId(1), 1));
        assert!(!state.controls(PlayerId(0), 17));
    }

    #[test]
    fn from_parts_checks_lengths_and_seat() {
        let board = Arc::new(Board::classic());
        let players = vec![PlayerId(0), PlayerId(1)];
        let ok = GameState::from_parts(
            board.clone(),
            Phase::Attack,
            vec![None; TERRITORY_COUNT],
            vec![0; TERRITORY_COUNT],
            PlayerId(1),
            players.clone(),
            None,
        );
        assert!(ok.is_ok());

        let short = GameState::from_parts(
            board.clone(),
            Phase::Attack,
            vec![None; 3],
            vec![0; TERRITORY_COUNT],
            PlayerId(1),
            players.clone(),
            None,
        );
        assert!(matches!(short, Err(AgentError::InvalidState(_))));

        let unseated = GameState::from_parts(
            board,
            Phase::Attack,
            vec![None; TERRITORY_COUNT],
            vec![0; TERRITORY_COUNT],
            PlayerId(5),
            players,
            None,
        );
        assert!(matches!(unseated, Err(AgentError::InvalidState(_))));
    }

    #[test]
    fn with_phase_keeps_ownership() {
        let mut state = classic_state(Phase::Attack);
        state.occupy(SIAM, Some(PlayerId(0)), 7).unwrap();
        let next = state.with_phase(Phase::Occupy);
        assert_eq!(next.phase, Phase::Occupy);
        assert_eq!(next.owners, state.owners);
        assert_eq!(next.armies, state.armies);
    }
}
