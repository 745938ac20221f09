//! Action selection.
//!
//! Scores every legal action for the current phase and returns the first
//! action holding the maximum score. Scoring reads the state and never
//! writes it, so actions can be scored on a rayon pool; results are
//! collected in input order before the reduction, which keeps the choice
//! identical to the sequential path.

use std::time::{Duration, Instant};

use rayon::prelude::*;
use rayon::ThreadPool;

use crate::board::{Action, GameState};
use crate::config::EvaluatorConfig;
use crate::error::{AgentError, Result};
use crate::eval::score_action;
use crate::rules::{ClassicRules, Rules};

/// An action paired with its desirability.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredAction {
    pub score: f64,
    pub action: Action,
}

/// Returns the first entry with the maximum score.
///
/// Later entries replace the incumbent only when strictly greater, so ties
/// resolve to input order.
pub fn select_best(scored: &[ScoredAction]) -> Result<ScoredAction> {
    let (first, rest) = scored.split_first().ok_or(AgentError::NoLegalActions)?;
    let mut best = *first;
    for candidate in rest {
        if candidate.score > best.score {
            best = *candidate;
        }
    }
    Ok(best)
}

/// The decision-making core: configuration, rules, and an optional pool.
pub struct Agent<R: Rules = ClassicRules> {
    config: EvaluatorConfig,
    rules: R,
    pool: Option<ThreadPool>,
}

impl Agent<ClassicRules> {
    /// Creates an agent playing by the standard rules.
    pub fn classic(config: EvaluatorConfig) -> Result<Self> {
        Agent::new(config, ClassicRules)
    }
}

impl<R: Rules> Agent<R> {
    /// Creates an agent. A worker pool is built when `config.workers > 1`.
    pub fn new(config: EvaluatorConfig, rules: R) -> Result<Self> {
        let pool = if config.workers > 1 {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(config.workers)
                .thread_name(|i| format!("warlord-score-{}", i))
                .build()?;
            Some(pool)
        } else {
            None
        };
        Ok(Agent {
            config,
            rules,
            pool,
        })
    }

    pub fn config(&self) -> &EvaluatorConfig {
        &self.config
    }

    pub fn rules(&self) -> &R {
        &self.rules
    }

    /// Enumerates the legal actions for `state` and picks the best one.
    pub fn choose_action(&self, state: &GameState) -> Result<Action> {
        let actions = self.rules.legal_actions(state)?;
        self.choose_among(state, &actions)
    }

    /// Picks the best of the supplied legal actions.
    pub fn choose_among(&self, state: &GameState, actions: &[Action]) -> Result<Action> {
        let scored = self.evaluate(state, actions, None)?;
        self.finish(state, scored)
    }

    /// Picks the best action scored before `budget` runs out.
    ///
    /// The first action is always scored; evaluation of the remainder stops
    /// at the first action boundary past the deadline. A budget too large to
    /// represent as an instant means no deadline.
    pub fn choose_within(&self, state: &GameState, actions: &[Action], budget: Duration) -> Result<Action> {
        let deadline = Instant::now().checked_add(budget);
        let scored = self.evaluate(state, actions, deadline)?;
        if scored.len() < actions.len() {
            log::warn!(
                "time budget of {:?} exhausted after {} of {} actions",
                budget,
                scored.len(),
                actions.len()
            );
        }
        self.finish(state, scored)
    }

    /// Scores every action, returned in input order.
    pub fn rank(&self, state: &GameState, actions: &[Action]) -> Result<Vec<ScoredAction>> {
        self.evaluate(state, actions, None)
    }

    fn finish(&self, state: &GameState, scored: Vec<ScoredAction>) -> Result<Action> {
        let best = select_best(&scored)?;
        log::info!(
            "{} {}: chose {:?} (score {:.3}) from {} actions",
            state.phase,
            state.current_player,
            best.action,
            best.score,
            scored.len()
        );
        Ok(best.action)
    }

    fn score_one(&self, state: &GameState, action: &Action) -> Result<ScoredAction> {
        let score = score_action(&self.config, &self.rules, state, action)?;
        log::debug!("{} {:?} -> {:.3}", state.phase, action, score);
        Ok(ScoredAction {
            score,
            action: *action,
        })
    }

    fn evaluate(&self, state: &GameState, actions: &[Action], deadline: Option<Instant>) -> Result<Vec<ScoredAction>> {
        if actions.is_empty() {
            return Err(AgentError::NoLegalActions);
        }
        for action in actions {
            for t in action.from_territory().into_iter().chain(action.to_territory()) {
                state.board.territory(t)?;
            }
        }
        let expired = |i: usize| i > 0 && deadline.is_some_and(|d| Instant::now() >= d);

        match &self.pool {
            Some(pool) => {
                let scored: Vec<Option<ScoredAction>> = pool.install(|| {
                    actions
                        .par_iter()
                        .enumerate()
                        .map(|(i, action)| {
                            if expired(i) {
                                return Ok(None);
                            }
                            self.score_one(state, action).map(Some)
                        })
                        .collect::<Result<Vec<_>>>()
                })?;
                Ok(scored.into_iter().flatten().collect())
            }
            None => {
                let mut scored = Vec::with_capacity(actions.len());
                for (i, action) in actions.iter().enumerate() {
                    if expired(i) {
                        break;
                    }
                    scored.push(self.score_one(state, action)?);
                }
                Ok(scored)
            }
        }
    }
}
