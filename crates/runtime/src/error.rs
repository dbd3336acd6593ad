//! Error types for record sources and session setup.

use battle_core::{CombatantId, SetupError};
use battle_content::{LoadError, RecordError};

/// Result type for session operations.
pub type Result<T> = std::result::Result<T, SessionError>;

/// Errors reaching the collaborator read API or the fixture set.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("collaborator request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error(transparent)]
    Fixture(#[from] LoadError),
}

/// Errors surfaced while starting an encounter.
///
/// Only the initial snapshot load can fail the session: there is no
/// last-known-good state yet. Everything after `begin` either
/// recovers locally or is a defined no-op.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Source(#[from] SourceError),

    #[error("hero record {0} not found in snapshot")]
    HeroNotFound(CombatantId),

    #[error(transparent)]
    Record(#[from] RecordError),

    #[error(transparent)]
    Setup(#[from] SetupError),
}
