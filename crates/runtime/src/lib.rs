//! Session orchestration for one battle encounter.
//!
//! This crate wires the pure engine in `battle-core` to the outside
//! world: it loads a one-shot record snapshot through the
//! [`source::RecordSource`] abstraction (live collaborator backend or
//! static fixture), owns the encounter session and its inventory, and
//! schedules the enemy's delayed response as a cancellable timer.
//!
//! Modules are organized by responsibility:
//! - [`session`] hosts the encounter session and the enemy-turn timer
//! - [`source`] provides the record-source implementations
//! - [`events`] carries battle events to presentation subscribers

pub mod error;
pub mod events;
pub mod session;
pub mod source;

pub use error::{SessionError, SourceError};
pub use events::BattleEvent;
pub use session::{EncounterSession, SessionOptions};
pub use source::{FixtureRecordSource, HttpRecordSource, RecordSource};
