//! Wire-shaped records and static battle content.
//!
//! This crate houses the record types the collaborator read API
//! serves (hero, ability and item collections) together with their
//! normalization into `battle-core` types, plus an embedded JSON
//! fixture set so an encounter can run without the live backend.
//!
//! Records are deliberately forgiving: missing or malformed numeric
//! fields fall back to documented defaults instead of failing the
//! encounter, and effect-payload entries with unknown kinds or absent
//! magnitudes are dropped here, before an action ever exists.
//!
//! Content is consumed by the runtime's record sources and never
//! appears in engine state.

pub mod fixture;
pub mod records;

pub use fixture::{Fixture, LoadError};
pub use records::{
    AbilityRecord, DEFAULT_ATTACK, DEFAULT_DEFENSE, DEFAULT_HEALTH, DEFAULT_LEVEL,
    DEFAULT_POWER_POINTS, HeroRecord, ItemRecord, RecordError,
};
