//! Action types for every turn phase.
//!
//! Each variant carries exactly the data its phase needs. Attack and Fortify
//! have an explicit "do nothing" form (`None` payload) so that ending the
//! phase is an ordinary, scoreable action.

use serde::{Deserialize, Serialize};

use super::state::Phase;
use super::territory::TerritoryId;

/// An attacking territory and the enemy territory it targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Engagement {
    pub from: TerritoryId,
    pub to: TerritoryId,
}

/// Armies moved between two territories owned by the same player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Transfer {
    pub from: TerritoryId,
    pub to: TerritoryId,
    pub troops: u32,
}

/// A single action offered to the agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Action {
    /// Claim an unowned territory during initial assignment.
    Assign { to: TerritoryId },

    /// Put one army on an owned territory (pre-placement or placement).
    Place { to: TerritoryId },

    /// Redeem a set of three cards, or decline with `None`.
    TurnInCards { cards: Option<[usize; 3]> },

    /// Attack an adjacent enemy territory, or stop attacking with `None`.
    Attack { engagement: Option<Engagement> },

    /// Move troops into a freshly conquered territory.
    Occupy {
        from: TerritoryId,
        to: TerritoryId,
        troops: u32,
    },

    /// Move troops between owned territories, or skip with `None`.
    Fortify { transfer: Option<Transfer> },
}

impl Action {
    /// Returns the territory this action targets, if any.
    pub const fn to_territory(&self) -> Option<TerritoryId> {
        match *self {
            Action::Assign { to } | Action::Place { to } | Action::Occupy { to, .. } => Some(to),
            Action::Attack { engagement } => match engagement {
                Some(e) => Some(e.to),
                None => None,
            },
            Action::Fortify { transfer } => match transfer {
                Some(t) => Some(t.to),
                None => None,
            },
            Action::TurnInCards { .. } => None,
        }
    }

    /// Returns the territory this action draws from, if any.
    pub const fn from_territory(&self) -> Option<TerritoryId> {
        match *self {
            Action::Occupy { from, .. } => Some(from),
            Action::Attack {
                engagement: Some(e),
            } => Some(e.from),
            Action::Fortify {
                transfer: Some(t),
            } => Some(t.from),
            _ => None,
        }
    }

    /// Returns true if this action can be offered in `phase`.
    pub const fn playable_in(&self, phase: Phase) -> bool {
        matches!(
            (phase, self),
            (Phase::PreAssign, Action::Assign { .. })
                | (Phase::PrePlace, Action::Place { .. })
                | (Phase::Place, Action::Place { .. })
                | (Phase::TurnInCards, Action::TurnInCards { .. })
                | (Phase::Attack, Action::Attack { .. })
                | (Phase::Occupy, Action::Occupy { .. })
                | (Phase::Fortify, Action::Fortify { .. })
        )
    }
}
