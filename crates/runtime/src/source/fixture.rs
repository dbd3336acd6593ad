//! Static fixture record source.

use async_trait::async_trait;

use battle_content::{AbilityRecord, Fixture, HeroRecord, ItemRecord};

use crate::error::SourceError;
use crate::source::RecordSource;

/// Record source backed by the embedded fixture set.
///
/// Serves the same record shapes as the live backend, so encounters
/// run identically against either source. Item deletion only updates
/// the session's local inventory; there is no remote store to touch.
pub struct FixtureRecordSource {
    fixture: Fixture,
}

impl FixtureRecordSource {
    /// Parses the embedded fixtures.
    ///
    /// # Errors
    ///
    /// Returns an error if the embedded JSON is malformed.
    pub fn new() -> Result<Self, SourceError> {
        Ok(Self {
            fixture: Fixture::load()?,
        })
    }

    /// Wraps an already-loaded fixture set.
    pub fn with_fixture(fixture: Fixture) -> Self {
        Self { fixture }
    }
}

#[async_trait]
impl RecordSource for FixtureRecordSource {
    async fn heroes(&self) -> Result<Vec<HeroRecord>, SourceError> {
        Ok(self.fixture.heroes.clone())
    }

    async fn abilities(&self) -> Result<Vec<AbilityRecord>, SourceError> {
        Ok(self.fixture.abilities.clone())
    }

    async fn items(&self) -> Result<Vec<ItemRecord>, SourceError> {
        Ok(self.fixture.items.clone())
    }

    async fn delete_item(&self, id: &str) -> Result<(), SourceError> {
        tracing::debug!(item = id, "fixture source: item consumption is local-only");
        Ok(())
    }
}
