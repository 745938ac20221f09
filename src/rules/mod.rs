//! Game-rule collaborators consumed by the evaluator.
//!
//! The evaluator never enumerates actions, resolves combat, or values a
//! position itself; it asks a `Rules` implementation. `ClassicRules` is the
//! standard-rules implementation used by the binary and the tests.

pub mod battle;
pub mod legal;
pub mod reinforcement;

use crate::board::{Action, GameState, PlayerId};
use crate::error::Result;
use crate::eval::combat::Simulation;

pub use battle::{dice_for, round_outcomes, RoundOutcome};
pub use legal::legal_actions;
pub use reinforcement::reinforcement_estimate;

/// External game engine interface.
///
/// Implementations must be pure with respect to the input state: the same
/// state always yields the same actions, simulation, and estimate.
pub trait Rules: Send + Sync {
    /// Every action the current player may take in the current phase.
    fn legal_actions(&self, state: &GameState) -> Result<Vec<Action>>;

    /// Successors of one attack round paired with their probabilities.
    fn simulate_attack(&self, state: &GameState, action: &Action) -> Result<Simulation>;

    /// Positional value of `state` for `player`.
    fn estimate_position(&self, state: &GameState, player: PlayerId) -> f64;
}

/// Standard rules: dice combat and reinforcement-count valuation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClassicRules;

impl Rules for ClassicRules {
    fn legal_actions(&self, state: &GameState) -> Result<Vec<Action>> {
        legal::legal_actions(state)
    }

    fn simulate_attack(&self, state: &GameState, action: &Action) -> Result<Simulation> {
        battle::simulate(state, action)
    }

    fn estimate_position(&self, state: &GameState, player: PlayerId) -> f64 {
        f64::from(reinforcement::reinforcement_estimate(state, player))
    }
}
