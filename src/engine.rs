//! Session state management.
//!
//! Holds the board and the agent between requests and answers each decision
//! request with a response line. A request that names its own legal actions
//! is scored over those; otherwise the rules enumerate them. A time hint
//! switches selection to the budgeted path.

use std::io::{self, Write};
use std::sync::Arc;

use crate::agent::Agent;
use crate::board::{Action, Board};
use crate::config::EvaluatorConfig;
use crate::error::Result;
use crate::protocol::{parse_command, Command, Request, Response};
use crate::rules::{ClassicRules, Rules};

/// Whether the main loop should keep reading input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Stop,
}

/// The agent and the board it plays on.
pub struct Engine {
    board: Arc<Board>,
    agent: Agent<ClassicRules>,
}

impl Engine {
    /// Creates an engine on the standard board. The configuration must name
    /// only continents and territories that exist on it.
    pub fn new(config: EvaluatorConfig) -> Result<Self> {
        let board = Board::classic();
        config.check_against(&board)?;
        Ok(Engine {
            board: Arc::new(board),
            agent: Agent::classic(config)?,
        })
    }

    pub fn board(&self) -> &Arc<Board> {
        &self.board
    }

    pub fn agent(&self) -> &Agent<ClassicRules> {
        &self.agent
    }

    /// Chooses an action for one request.
    pub fn decide(&self, request: &Request) -> Result<Action> {
        let state = request.to_state(Arc::clone(&self.board))?;
        let actions = match request.resolve_actions(&self.board)? {
            Some(actions) => actions,
            None => self.agent.rules().legal_actions(&state)?,
        };
        match request.budget() {
            Some(budget) => self.agent.choose_within(&state, &actions, budget),
            None => self.agent.choose_among(&state, &actions),
        }
    }

    /// Handles one input line, writing at most one response line.
    pub fn handle_line<W: Write>(&self, line: &str, out: &mut W) -> io::Result<Flow> {
        let response = match parse_command(line) {
            Ok(None) => return Ok(Flow::Continue),
            Ok(Some(Command::Quit)) => return Ok(Flow::Stop),
            Ok(Some(Command::Decide(request))) => Response::from(self.decide(&request)),
            Err(e) => Response::error(&e),
        };
        if let Response::Error { error, .. } = &response {
            log::warn!("request failed: {}", error);
        }
        writeln!(out, "{}", response.to_line())?;
        out.flush()?;
        Ok(Flow::Continue)
    }
}
