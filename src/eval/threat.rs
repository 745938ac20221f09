//! Continent threat analysis.
//!
//! A continent is "at risk of being swept" when every claimed territory in it
//! belongs to one player and few enough territories remain unclaimed. The
//! threshold is a tuning knob, not a rule of the game: the default compares
//! the unclaimed count to the number of seated players.

use serde::{Deserialize, Serialize};

use crate::board::{ContinentId, GameState, PlayerId};
use crate::config::EvaluatorConfig;

/// How many unclaimed territories a continent may still have and count as
/// nearly swept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ThreatThreshold {
    /// At most one unclaimed territory per seated player.
    #[default]
    PlayerCount,
    /// At most this many unclaimed territories.
    Fixed(usize),
}

impl ThreatThreshold {
    /// Resolves the threshold against a concrete state.
    pub fn limit(self, state: &GameState) -> usize {
        match self {
            ThreatThreshold::PlayerCount => state.players.len(),
            ThreatThreshold::Fixed(n) => n,
        }
    }
}

/// A single player close to completing a continent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContinentThreat {
    pub owner: PlayerId,
    pub unowned: usize,
}

/// Scans a continent for a lone owner.
///
/// The reference owner is the first claimed territory in the range. The scan
/// stops at the first territory claimed by anyone else. A continent with no
/// claimed territory has no owner and so no threat.
pub fn assess(state: &GameState, continent: ContinentId, threshold: ThreatThreshold) -> Option<ContinentThreat> {
    let c = state.board.continents().get(continent)?;
    let mut reference: Option<PlayerId> = None;
    let mut unowned = 0usize;

    for t in c.territories() {
        match (state.owners[t], reference) {
            (None, _) => unowned += 1,
            (Some(p), None) => reference = Some(p),
            (Some(p), Some(r)) if p != r => {
                log::trace!("{} contested by {} and {}", c.name, r, p);
                return None;
            }
            (Some(_), Some(_)) => {}
        }
    }

    let owner = reference?;
    if unowned > threshold.limit(state) {
        return None;
    }
    Some(ContinentThreat { owner, unowned })
}

/// Returns the claim-denial bonus for a continent: its reward amplified when
/// a single player is about to sweep it, zero otherwise.
pub fn continent_threat_bonus(config: &EvaluatorConfig, state: &GameState, continent: ContinentId) -> f64 {
    match assess(state, continent, config.threat_threshold) {
        Some(threat) => {
            let reward = state.board.continent_reward(continent).unwrap_or(0);
            log::trace!(
                "continent {} nearly swept by {} ({} unclaimed)",
                continent,
                threat.owner,
                threat.unowned
            );
            f64::from(reward) * config.threat_amplification
        }
        None => 0.0,
    }
}
