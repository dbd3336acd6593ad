//! Turn resolution engine.
//!
//! [`Battle`] is the authoritative reducer for one encounter. Exactly
//! one action is committed per turn; the engine validates the turn
//! phase, resolves the action (direct damage or effect payload),
//! queries the outcome evaluator after every health mutation, and
//! advances the phase. An operation invoked outside its phase returns
//! `None` and mutates nothing - never an error.

use crate::action::Action;
use crate::effect;
use crate::error::SetupError;
use crate::outcome::{self, BattleOutcome, Rewards};
use crate::state::{Combatant, StatKind, TurnPhase};

// ============================================================================
// Narrative messages
// ============================================================================

pub const MSG_BASIC_ATTACK: &str = "You used basic attack!";
pub const MSG_INSUFFICIENT_POWER: &str = "You don't have enough power points!";
pub const MSG_NO_POWER_LEFT: &str = "No power points left!";
pub const MSG_VICTORY: &str = "You won the battle!";
pub const MSG_DEFEAT: &str = "You were defeated!";

// ============================================================================
// Turn report
// ============================================================================

/// Outcome of one committed action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnReport {
    /// Narrative messages for the presentation layer, in emission order.
    pub messages: Vec<String>,

    /// Damage dealt, for damage-dealing resolutions.
    pub damage: Option<u32>,

    /// Phase the engine is in after this resolution.
    pub phase_after: TurnPhase,
}

// ============================================================================
// Battle
// ============================================================================

/// One encounter between exactly two combatants.
///
/// Pure in-memory session state: created when the encounter begins,
/// dropped when the outcome is finalized, owns no storage.
#[derive(Clone, Debug)]
pub struct Battle {
    player: Combatant,
    enemy: Combatant,
    phase: TurnPhase,
    rewards: Rewards,
    outcome: Option<BattleOutcome>,
}

impl Battle {
    /// Creates a battle in [`TurnPhase::PlayerTurn`].
    ///
    /// # Errors
    ///
    /// Returns [`SetupError::DuplicateCombatant`] if both sides were
    /// built from the same record.
    pub fn new(player: Combatant, enemy: Combatant, rewards: Rewards) -> Result<Self, SetupError> {
        if player.id() == enemy.id() {
            return Err(SetupError::DuplicateCombatant(player.id().clone()));
        }
        Ok(Self {
            player,
            enemy,
            phase: TurnPhase::PlayerTurn,
            rewards,
            outcome: None,
        })
    }

    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    pub fn player(&self) -> &Combatant {
        &self.player
    }

    pub fn enemy(&self) -> &Combatant {
        &self.enemy
    }

    pub fn rewards(&self) -> Rewards {
        self.rewards
    }

    pub fn is_over(&self) -> bool {
        self.phase.is_terminal()
    }

    /// The final outcome, present once the battle is over.
    pub fn outcome(&self) -> Option<&BattleOutcome> {
        self.outcome.as_ref()
    }

    // ========================================================================
    // Player operations (valid only in PlayerTurn)
    // ========================================================================

    /// Basic attack: `damage = max(0, player.attack - enemy.defense)`
    /// against enemy health, then hand the turn to the enemy.
    ///
    /// Returns `None` outside [`TurnPhase::PlayerTurn`].
    pub fn attack(&mut self) -> Option<TurnReport> {
        if self.phase != TurnPhase::PlayerTurn {
            return None;
        }

        let damage = self.player.attack().saturating_sub(self.enemy.defense());
        self.enemy.apply_delta(StatKind::Health, -saturating_i32(damage));

        let mut messages = vec![MSG_BASIC_ATTACK.to_string()];
        self.settle(TurnPhase::EnemyTurn, &mut messages);

        Some(TurnReport {
            messages,
            damage: Some(damage),
            phase_after: self.phase,
        })
    }

    /// Uses a skill: deducts the power cost and resolves the effect
    /// payload on the acting combatant, then hands the turn to the
    /// enemy.
    ///
    /// A skill the player cannot afford is rejected in-band: the report
    /// carries [`MSG_INSUFFICIENT_POWER`], nothing is mutated and the
    /// phase stays [`TurnPhase::PlayerTurn`].
    ///
    /// Returns `None` outside [`TurnPhase::PlayerTurn`], and for
    /// actions the player does not own or cannot use (wrong class).
    pub fn use_skill(&mut self, action: &Action) -> Option<TurnReport> {
        if self.phase != TurnPhase::PlayerTurn {
            return None;
        }
        if !self.player.owns(&action.id) || action.class != self.player.class() {
            return None;
        }

        if self.player.power_points_left() < action.power_cost {
            return Some(TurnReport {
                messages: vec![MSG_INSUFFICIENT_POWER.to_string()],
                damage: None,
                phase_after: self.phase,
            });
        }

        self.player
            .apply_delta(StatKind::PowerPoints, -saturating_i32(action.power_cost));
        effect::resolve(action, &mut self.player);

        let mut messages = vec![format!("You used {}!", action.name)];
        if self.player.power_points_left() == 0 {
            messages.push(MSG_NO_POWER_LEFT.to_string());
        }
        self.settle(TurnPhase::EnemyTurn, &mut messages);

        Some(TurnReport {
            messages,
            damage: None,
            phase_after: self.phase,
        })
    }

    // ========================================================================
    // Enemy operation (valid only in EnemyTurn)
    // ========================================================================

    /// Resolves the enemy's automatic response with the same damage
    /// formula (enemy attack vs. player defense), then hands the turn
    /// back to the player.
    ///
    /// Directly callable by design: the presentation delay between the
    /// player's move and this resolution is a scheduling concern that
    /// lives outside the engine. Returns `None` outside
    /// [`TurnPhase::EnemyTurn`], so a stale deferred call against a
    /// finished battle is a defined no-op.
    pub fn resolve_enemy_turn(&mut self) -> Option<TurnReport> {
        if self.phase != TurnPhase::EnemyTurn {
            return None;
        }

        let damage = self.enemy.attack().saturating_sub(self.player.defense());
        self.player.apply_delta(StatKind::Health, -saturating_i32(damage));

        let mut messages = vec![format!("{} attacks you!", self.enemy.name())];
        self.settle(TurnPhase::PlayerTurn, &mut messages);

        Some(TurnReport {
            messages,
            damage: Some(damage),
            phase_after: self.phase,
        })
    }

    // ========================================================================
    // Outcome evaluation
    // ========================================================================

    /// Queries the outcome evaluator after a resolution. A defeated
    /// side forces [`TurnPhase::BattleOver`] regardless of whose turn
    /// would otherwise follow; otherwise advances to `next`.
    fn settle(&mut self, next: TurnPhase, messages: &mut Vec<String>) {
        if outcome::is_defeated(&self.enemy) {
            self.outcome = Some(BattleOutcome {
                winner: self.player.id().clone(),
                rewards: self.rewards,
            });
            self.phase = TurnPhase::BattleOver;
            messages.push(MSG_VICTORY.to_string());
        } else if outcome::is_defeated(&self.player) {
            self.outcome = Some(BattleOutcome {
                winner: self.enemy.id().clone(),
                rewards: Rewards::NONE,
            });
            self.phase = TurnPhase::BattleOver;
            messages.push(MSG_DEFEAT.to_string());
        } else {
            self.phase = next;
        }
    }
}

/// Converts a u32 amount into an i32 delta without wrapping.
fn saturating_i32(amount: u32) -> i32 {
    i32::try_from(amount).unwrap_or(i32::MAX)
}

#[cfg(test)]
mod tests;
