//! Line protocol handling.
//!
//! One JSON request per input line, one JSON response per output line. The
//! literal line `quit` ends the session.

pub mod message;
pub mod parser;

pub use message::{ActionSpec, EngagementSpec, Request, Response, TransferSpec};
pub use parser::{parse_command, Command};
