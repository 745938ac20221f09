//! Board representation and game-state types.
//!
//! Contains the static topology (territories, continents, adjacency), the
//! standard world map tables, the per-phase action types, and the game-state
//! snapshot handed to the evaluator.

pub mod action;
pub mod classic;
pub mod state;
pub mod territory;
pub mod topology;

pub use action::{Action, Engagement, Transfer};
pub use state::{GameState, Phase};
pub use territory::{Continent, ContinentId, PlayerId, Territory, TerritoryId, TerritoryRef};
pub use topology::Board;
