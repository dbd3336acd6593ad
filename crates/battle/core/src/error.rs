//! Error types for encounter setup.
//!
//! Note the deliberate asymmetry with the rest of the crate: turn-time
//! rule failures (insufficient power points, an action invoked outside
//! its turn phase) are ordinary rejected or no-op outcomes, never
//! errors. Only structurally unusable setup input is worth an `Err`.

use crate::state::CombatantId;

/// Errors surfaced while assembling combatants and battles.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SetupError {
    #[error("combatant {0} has zero maximum health")]
    ZeroMaxHealth(CombatantId),

    #[error("combatant {0} has level zero")]
    ZeroLevel(CombatantId),

    #[error("player and enemy share the id {0}")]
    DuplicateCombatant(CombatantId),
}
