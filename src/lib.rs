//! Warlord decision agent library.
//!
//! Exposes the board representation, the evaluator, the reference rules,
//! action selection, and the line protocol for use by integration tests and
//! the binary entry point.

pub mod agent;
pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod protocol;
pub mod rules;

pub use agent::{Agent, ScoredAction};
pub use config::EvaluatorConfig;
pub use error::{AgentError, Result};
