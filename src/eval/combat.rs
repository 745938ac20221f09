//! Combat outcome aggregation.
//!
//! Reduces the successor distribution of one attack into a scalar. The
//! simulator pairs each successor with a probability; the aggregator checks
//! the pairing, asks the position estimator for each successor's value from
//! the attacker's point of view, and combines the values according to the
//! configured `CombatWeighting`.

use serde::{Deserialize, Serialize};

use crate::board::{Action, GameState};
use crate::config::EvaluatorConfig;
use crate::error::{AgentError, Result};
use crate::rules::Rules;

/// How successor values are combined into an attack score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CombatWeighting {
    /// Probability-weighted expectation: `sum(p_i * v_i)`.
    #[default]
    Weighted,
    /// Plain sum of successor values, ignoring probabilities: `sum(v_i)`.
    Unweighted,
}

/// Successor states of one simulated attack round with their probabilities.
#[derive(Debug, Clone, PartialEq)]
pub struct Simulation {
    pub successors: Vec<GameState>,
    pub probabilities: Vec<f64>,
}

impl Simulation {
    /// A deterministic outcome: the single successor occurs with certainty.
    pub fn certain(successor: GameState) -> Self {
        Simulation {
            successors: vec![successor],
            probabilities: vec![1.0],
        }
    }

    /// Checks the simulator contract: equal lengths, at least one successor,
    /// each probability in `[0, 1]`, and a total within `tolerance` of one.
    pub fn validate(&self, tolerance: f64) -> Result<()> {
        if self.successors.len() != self.probabilities.len() {
            return Err(AgentError::MalformedSimulationResult(format!(
                "{} successors but {} probabilities",
                self.successors.len(),
                self.probabilities.len()
            )));
        }
        if self.successors.is_empty() {
            return Err(AgentError::MalformedSimulationResult(
                "simulation produced no successors".into(),
            ));
        }
        let mut total = 0.0;
        for (i, &p) in self.probabilities.iter().enumerate() {
            if !p.is_finite() || !(0.0..=1.0).contains(&p) {
                return Err(AgentError::MalformedSimulationResult(format!(
                    "probability {} at index {} is outside [0, 1]",
                    p, i
                )));
            }
            total += p;
        }
        if (total - 1.0).abs() > tolerance {
            return Err(AgentError::MalformedSimulationResult(format!(
                "probabilities sum to {}",
                total
            )));
        }
        Ok(())
    }

    /// Iterates `(successor, probability)` pairs.
    pub fn outcomes(&self) -> impl Iterator<Item = (&GameState, f64)> {
        self.successors.iter().zip(self.probabilities.iter().copied())
    }
}

/// Combines `(value, probability)` pairs under a weighting policy.
pub fn combine<I>(weighting: CombatWeighting, values: I) -> f64
where
    I: IntoIterator<Item = (f64, f64)>,
{
    values
        .into_iter()
        .map(|(value, p)| match weighting {
            CombatWeighting::Weighted => value * p,
            CombatWeighting::Unweighted => value,
        })
        .sum()
}

/// Scores an attack action by simulating it and aggregating successor values.
pub fn aggregate<R: Rules + ?Sized>(
    config: &EvaluatorConfig,
    rules: &R,
    state: &GameState,
    action: &Action,
) -> Result<f64> {
    let simulation = rules.simulate_attack(state, action)?;
    simulation.validate(config.probability_tolerance)?;

    let player = state.current_player;
    let mut values = Vec::with_capacity(simulation.successors.len());
    for (successor, p) in simulation.outcomes() {
        let value = rules.estimate_position(successor, player);
        if !value.is_finite() {
            return Err(AgentError::MalformedSimulationResult(format!(
                "position estimate {} is not finite",
                value
            )));
        }
        values.push((value, p));
    }
    Ok(combine(config.combat_weighting, values))
}
