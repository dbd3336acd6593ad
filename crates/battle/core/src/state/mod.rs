//! Combatant state types.
//!
//! This module contains the entity model for an encounter:
//! - [`Combatant`]: the main combatant structure and its single
//!   mutation primitive
//! - [`ResourceMeter`]: clamped integer resource pools
//! - [`TurnPhase`]: the turn-owner state machine states

mod combatant;
mod turn;

pub use combatant::{Combatant, CombatantId, HeroClass, ResourceMeter, StatKind};
pub use turn::TurnPhase;
