//! Reinforcement estimate used as the positional value of a state.

use crate::board::{GameState, PlayerId};

/// Minimum armies granted per turn regardless of holdings.
pub const MIN_REINFORCEMENTS: u32 = 3;

/// Armies `player` would receive at the start of a turn in `state`:
/// one per three territories (at least three) plus the reward of every
/// continent the player controls.
pub fn reinforcement_estimate(state: &GameState, player: PlayerId) -> u32 {
    let territories = state.territory_count_of(player) as u32;
    let base = (territories / 3).max(MIN_REINFORCEMENTS);
    let bonus: u32 = state
        .board
        .continents()
        .iter()
        .enumerate()
        .filter(|(cid, _)| state.controls(player, *cid))
        .map(|(_, c)| c.reward)
        .sum();
    base + bonus
}
