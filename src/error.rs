//! Error taxonomy for a single decision request.
//!
//! Every variant is fatal to the `choose_action` call that raised it. The
//! evaluator is deterministic, so the caller gains nothing by retrying with
//! the same input.

use crate::board::action::Action;
use crate::board::state::Phase;

/// Errors surfaced by the board, the evaluator, and the selector.
#[derive(Debug, thiserror::Error)]
pub enum AgentError {
    #[error("unknown phase tag: '{0}'")]
    UnknownPhase(String),

    #[error("no legal actions to choose from")]
    NoLegalActions,

    #[error("territory {0} is outside the board")]
    InvalidTerritory(usize),

    #[error("unknown territory name: '{0}'")]
    UnknownTerritory(String),

    #[error("inconsistent game state: {0}")]
    InvalidState(String),

    #[error("malformed simulation result: {0}")]
    MalformedSimulationResult(String),

    #[error("action {action:?} cannot be played in the {phase} phase")]
    ActionOutOfPhase { phase: Phase, action: Action },

    #[error("invalid board description: {0}")]
    InvalidBoard(String),

    #[error("malformed request: {0}")]
    MalformedRequest(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("failed to build worker pool: {0}")]
    WorkerPool(#[from] rayon::ThreadPoolBuildError),
}

impl AgentError {
    /// Returns a stable, machine-readable name for this error kind.
    pub const fn kind(&self) -> &'static str {
        match self {
            AgentError::UnknownPhase(_) => "UnknownPhase",
            AgentError::NoLegalActions => "NoLegalActions",
            AgentError::InvalidTerritory(_) => "InvalidTerritory",
            AgentError::UnknownTerritory(_) => "UnknownTerritory",
            AgentError::InvalidState(_) => "InvalidState",
            AgentError::MalformedSimulationResult(_) => "MalformedSimulationResult",
            AgentError::ActionOutOfPhase { .. } => "ActionOutOfPhase",
            AgentError::InvalidBoard(_) => "InvalidBoard",
            AgentError::MalformedRequest(_) => "MalformedRequest",
            AgentError::Config(_) => "Config",
            AgentError::WorkerPool(_) => "WorkerPool",
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, AgentError>;
