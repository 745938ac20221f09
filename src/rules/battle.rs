//! One-round dice battle simulation.
//!
//! The attacker rolls up to three dice (one fewer than the armies on the
//! attacking territory), the defender up to two. Dice are compared highest
//! to highest; ties go to the defender. Outcome probabilities are exact,
//! obtained by enumerating every roll.

use std::collections::BTreeMap;

use crate::board::{Action, GameState, Phase};
use crate::error::{AgentError, Result};
use crate::eval::combat::Simulation;

/// Losses suffered by each side in one round, with their probability.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundOutcome {
    pub attacker_losses: u32,
    pub defender_losses: u32,
    pub probability: f64,
}

/// Number of dice each side rolls for the given army counts.
pub fn dice_for(attacking_armies: u32, defending_armies: u32) -> (u32, u32) {
    (attacking_armies.saturating_sub(1).min(3), defending_armies.min(2))
}

/// Enumerates every roll and returns the loss distribution, ordered by
/// attacker losses ascending.
pub fn round_outcomes(attack_dice: u32, defend_dice: u32) -> Vec<RoundOutcome> {
    if attack_dice == 0 || defend_dice == 0 {
        return vec![RoundOutcome {
            attacker_losses: 0,
            defender_losses: 0,
            probability: 1.0,
        }];
    }

    let total_dice = attack_dice + defend_dice;
    let rolls = 6u32.pow(total_dice);
    let mut counts: BTreeMap<(u32, u32), u32> = BTreeMap::new();
    let mut attack = Vec::with_capacity(attack_dice as usize);
    let mut defend = Vec::with_capacity(defend_dice as usize);

    for mut code in 0..rolls {
        attack.clear();
        defend.clear();
        for i in 0..total_dice {
            let face = code % 6 + 1;
            code /= 6;
            if i < attack_dice {
                attack.push(face);
            } else {
                defend.push(face);
            }
        }
        attack.sort_unstable_by(|a, b| b.cmp(a));
        defend.sort_unstable_by(|a, b| b.cmp(a));

        let mut losses = (0, 0);
        for (a, d) in attack.iter().zip(defend.iter()) {
            if a > d {
                losses.1 += 1;
            } else {
                losses.0 += 1;
            }
        }
        *counts.entry(losses).or_insert(0) += 1;
    }

    counts
        .into_iter()
        .map(|((attacker_losses, defender_losses), n)| RoundOutcome {
            attacker_losses,
            defender_losses,
            probability: f64::from(n) / f64::from(rolls),
        })
        .collect()
}

/// Simulates one round of an attack action.
///
/// Stopping the attack, or an engagement with nothing to roll, yields the
/// unchanged state with certainty. A round that empties the defending
/// territory hands it to the attacker with no armies and moves the successor
/// to the Occupy phase with the engagement pending.
pub fn simulate(state: &GameState, action: &Action) -> Result<Simulation> {
    let Action::Attack { engagement } = *action else {
        return Err(AgentError::ActionOutOfPhase {
            phase: state.phase,
            action: *action,
        });
    };
    let Some(engagement) = engagement else {
        return Ok(Simulation::certain(state.clone()));
    };

    let attacking = state.armies_on(engagement.from)?;
    let defending = state.armies_on(engagement.to)?;
    let (attack_dice, defend_dice) = dice_for(attacking, defending);
    if attack_dice == 0 || defend_dice == 0 {
        return Ok(Simulation::certain(state.clone()));
    }

    let outcomes = round_outcomes(attack_dice, defend_dice);
    let mut successors = Vec::with_capacity(outcomes.len());
    let mut probabilities = Vec::with_capacity(outcomes.len());
    for outcome in outcomes {
        let mut next = state.clone();
        next.armies[engagement.from] = attacking - outcome.attacker_losses;
        let remaining = defending - outcome.defender_losses;
        if remaining == 0 {
            next.owners[engagement.to] = Some(state.current_player);
            next.armies[engagement.to] = 0;
            next.occupying = Some(engagement);
            next.phase = Phase::Occupy;
        } else {
            next.armies[engagement.to] = remaining;
        }
        successors.push(next);
        probabilities.push(outcome.probability);
    }

    Ok(Simulation {
        successors,
        probabilities,
    })
}
