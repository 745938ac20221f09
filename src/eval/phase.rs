//! Per-phase scoring rules.
//!
//! `score_action` rejects an action that cannot occur in the state's phase,
//! then dispatches on the action variant. Placement is the only variant
//! played in two phases and is split on the phase. All rules are pure
//! functions of `(state, action)`.

use crate::board::{Action, GameState, Phase, TerritoryId, Transfer};
use crate::config::EvaluatorConfig;
use crate::error::{AgentError, Result};
use crate::eval::{combat, threat};
use crate::rules::Rules;

/// Scores one legal action for the state's current phase.
pub fn score_action<R: Rules + ?Sized>(
    config: &EvaluatorConfig,
    rules: &R,
    state: &GameState,
    action: &Action,
) -> Result<f64> {
    if !action.playable_in(state.phase) {
        return Err(AgentError::ActionOutOfPhase {
            phase: state.phase,
            action: *action,
        });
    }

    match *action {
        Action::Assign { to } => score_pre_assign(config, state, to),
        Action::Place { to } if state.phase == Phase::PrePlace => score_pre_place(config, state, to),
        Action::Place { to } => score_place(config, state, to),
        Action::TurnInCards { .. } => Ok(0.0),
        Action::Attack { .. } => combat::aggregate(config, rules, state, action),
        Action::Occupy { troops, .. } => Ok(f64::from(troops)),
        Action::Fortify { transfer } => score_fortify(config, state, transfer),
    }
}

/// Continent weight plus the border bonus for a target territory.
fn positional_base(config: &EvaluatorConfig, state: &GameState, to: TerritoryId) -> Result<f64> {
    let continent = state.board.continent_of(to)?;
    let mut score = config.continent_weight(&continent.name);
    if config.is_border(to) {
        score += config.border_bonus;
    }
    Ok(score)
}

/// Initial claim: positional base plus the denial bonus for a continent one
/// player is about to sweep.
pub fn score_pre_assign(config: &EvaluatorConfig, state: &GameState, to: TerritoryId) -> Result<f64> {
    let base = positional_base(config, state, to)?;
    let continent = state.board.continent_id_of(to)?;
    Ok(base + threat::continent_threat_bonus(config, state, continent))
}

/// Initial reinforcement: positional base only.
pub fn score_pre_place(config: &EvaluatorConfig, state: &GameState, to: TerritoryId) -> Result<f64> {
    positional_base(config, state, to)
}

/// Turn reinforcement: a fixed increment per neighbor whose owner differs
/// from the target's owner.
pub fn score_place(config: &EvaluatorConfig, state: &GameState, to: TerritoryId) -> Result<f64> {
    let owner = state.owner(to)?;
    let mut score = 0.0;
    for &n in state.board.neighbors_of(to)? {
        if state.owners[n] != owner {
            score += config.place_frontier_increment;
        }
    }
    Ok(score)
}

/// Fortification: skipping is penalised; moving onto a territory touching a
/// territory the current player does not own is rewarded.
pub fn score_fortify(config: &EvaluatorConfig, state: &GameState, transfer: Option<Transfer>) -> Result<f64> {
    let Some(transfer) = transfer else {
        return Ok(config.fortify_skip_score);
    };
    let exposed = state
        .board
        .neighbors_of(transfer.to)?
        .iter()
        .any(|&n| state.owners[n] != Some(state.current_player));
    Ok(if exposed {
        config.fortify_frontier_bonus
    } else {
        0.0
    })
}
