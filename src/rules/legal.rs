//! Legal action generation.
//!
//! Produces the actions available to the current player in each phase, in
//! ascending territory order so the enumeration is deterministic.

use crate::board::{Action, Engagement, GameState, Phase, TerritoryId, Transfer};
use crate::error::{AgentError, Result};

/// Generates every legal action for the state's current player and phase.
pub fn legal_actions(state: &GameState) -> Result<Vec<Action>> {
    let actions = match state.phase {
        Phase::PreAssign => unclaimed(state)
            .map(|to| Action::Assign { to })
            .collect(),
        Phase::PrePlace | Phase::Place => owned(state)
            .map(|to| Action::Place { to })
            .collect(),
        Phase::TurnInCards => vec![Action::TurnInCards { cards: None }],
        Phase::Attack => attack_actions(state)?,
        Phase::Occupy => occupy_actions(state)?,
        Phase::Fortify => fortify_actions(state)?,
    };
    Ok(actions)
}

fn unclaimed(state: &GameState) -> impl Iterator<Item = TerritoryId> + '_ {
    state
        .owners
        .iter()
        .enumerate()
        .filter(|(_, o)| o.is_none())
        .map(|(t, _)| t)
}

fn owned(state: &GameState) -> impl Iterator<Item = TerritoryId> + '_ {
    let me = state.current_player;
    state
        .owners
        .iter()
        .enumerate()
        .filter(move |(_, o)| **o == Some(me))
        .map(|(t, _)| t)
}

/// Stopping first, then every owned territory with an army to spare against
/// each adjacent enemy territory.
fn attack_actions(state: &GameState) -> Result<Vec<Action>> {
    let me = state.current_player;
    let mut actions = vec![Action::Attack { engagement: None }];
    for from in owned(state) {
        if state.armies[from] < 2 {
            continue;
        }
        for &to in state.board.neighbors_of(from)? {
            if matches!(state.owners[to], Some(p) if p != me) {
                actions.push(Action::Attack {
                    engagement: Some(Engagement { from, to }),
                });
            }
        }
    }
    Ok(actions)
}

/// One action per troop count the attacking territory can spare.
fn occupy_actions(state: &GameState) -> Result<Vec<Action>> {
    let Some(Engagement { from, to }) = state.occupying else {
        return Err(AgentError::InvalidState(
            "occupy phase without a pending conquest".into(),
        ));
    };
    let spare = state.armies_on(from)?.saturating_sub(1);
    Ok((1..=spare)
        .map(|troops| Action::Occupy { from, to, troops })
        .collect())
}

/// Skipping first, then moving all but one army between adjacent owned
/// territories.
fn fortify_actions(state: &GameState) -> Result<Vec<Action>> {
    let me = state.current_player;
    let mut actions = vec![Action::Fortify { transfer: None }];
    for from in owned(state) {
        let armies = state.armies[from];
        if armies < 2 {
            continue;
        }
        for &to in state.board.neighbors_of(from)? {
            if state.owners[to] == Some(me) {
                actions.push(Action::Fortify {
                    transfer: Some(Transfer {
                        from,
                        to,
                        troops: armies - 1,
                    }),
                });
            }
        }
    }
    Ok(actions)
}
