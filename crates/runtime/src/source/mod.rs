//! Asynchronous abstraction for sourcing encounter records.
//!
//! The session reads a one-shot snapshot of the hero, ability and
//! item collections at encounter start. Implementations cover the
//! live collaborator backend and an embedded static fixture, so the
//! same session code drives both (one canonical engine, two data
//! sources).

mod fixture;
mod http;

pub use fixture::FixtureRecordSource;
pub use http::HttpRecordSource;

use async_trait::async_trait;

use battle_content::{AbilityRecord, HeroRecord, ItemRecord};

use crate::error::SourceError;

/// Trait for reading the three record collections and consuming items.
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Reads all hero records.
    async fn heroes(&self) -> Result<Vec<HeroRecord>, SourceError>;

    /// Reads all ability records.
    async fn abilities(&self) -> Result<Vec<AbilityRecord>, SourceError>;

    /// Reads all item records.
    async fn items(&self) -> Result<Vec<ItemRecord>, SourceError>;

    /// Deletes a consumed item by id.
    ///
    /// Callers treat this as fire-and-forget: a failure is logged,
    /// never retried, and never rolls back the local inventory.
    async fn delete_item(&self, id: &str) -> Result<(), SourceError>;
}
