//! Action evaluation.
//!
//! Scores a candidate action against the current state: one rule per turn
//! phase, the continent threat analyzer consulted during initial assignment,
//! and the combat aggregator consulted during attacks.

pub mod combat;
pub mod phase;
pub mod threat;

pub use combat::{aggregate, CombatWeighting, Simulation};
pub use phase::score_action;
pub use threat::{continent_threat_bonus, ContinentThreat, ThreatThreshold};
