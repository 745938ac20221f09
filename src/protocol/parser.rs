//! Line parser.
//!
//! Turns one raw input line into a `Command` the main loop can dispatch on.

use super::message::Request;
use crate::error::{AgentError, Result};

/// A parsed input line.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Pick an action for the described decision point.
    Decide(Box<Request>),

    /// Terminate the agent process.
    Quit,
}

/// Parses a single line of input into a `Command`.
///
/// Returns `Ok(None)` for blank lines. Anything other than `quit` must be a
/// JSON request object.
pub fn parse_command(line: &str) -> Result<Option<Command>> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    if trimmed == "quit" {
        return Ok(Some(Command::Quit));
    }
    let request: Request =
        serde_json::from_str(trimmed).map_err(|e| AgentError::MalformedRequest(e.to_string()))?;
    Ok(Some(Command::Decide(Box::new(request))))
}
