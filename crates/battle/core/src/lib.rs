//! Deterministic battle logic shared across clients.
//!
//! `battle-core` defines the canonical encounter rules (combatants,
//! actions, turn engine) and exposes pure, synchronous APIs. All stat
//! mutation flows through [`state::Combatant::apply_delta`], and all
//! turn resolution flows through [`engine::Battle`]. The crate performs
//! no I/O; data loading and scheduling live in supporting crates that
//! depend on the types re-exported here.
pub mod action;
pub mod config;
pub mod effect;
pub mod engine;
pub mod error;
pub mod outcome;
pub mod state;

pub use action::{Action, ActionCatalog, ActionId, Effect, EffectKind};
pub use config::EncounterConfig;
pub use effect::{StatChange, resolve};
pub use engine::{
    Battle, MSG_BASIC_ATTACK, MSG_DEFEAT, MSG_INSUFFICIENT_POWER, MSG_NO_POWER_LEFT, MSG_VICTORY,
    TurnReport,
};
pub use error::SetupError;
pub use outcome::{BattleOutcome, Rewards, is_defeated};
pub use state::{Combatant, CombatantId, HeroClass, ResourceMeter, StatKind, TurnPhase};
