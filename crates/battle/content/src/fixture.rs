//! Embedded JSON fixture set.
//!
//! The fixtures mirror the collaborator's wire shape exactly, so the
//! same record types serve both the live backend and this static
//! variant through one data-source abstraction.

use serde::de::DeserializeOwned;

use crate::records::{AbilityRecord, HeroRecord, ItemRecord};

/// Errors while parsing embedded fixture data.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to parse {file}: {source}")]
    Parse {
        file: &'static str,
        source: serde_json::Error,
    },
}

/// A full static snapshot of the three collections.
#[derive(Clone, Debug)]
pub struct Fixture {
    pub heroes: Vec<HeroRecord>,
    pub abilities: Vec<AbilityRecord>,
    pub items: Vec<ItemRecord>,
}

impl Fixture {
    /// Parses the embedded JSON data files.
    pub fn load() -> Result<Self, LoadError> {
        Ok(Self {
            heroes: parse("heroes.json", include_str!("../data/heroes.json"))?,
            abilities: parse("abilities.json", include_str!("../data/abilities.json"))?,
            items: parse("items.json", include_str!("../data/items.json"))?,
        })
    }

    /// Looks up a hero record by id.
    pub fn hero(&self, id: &str) -> Option<&HeroRecord> {
        self.heroes.iter().find(|hero| hero.id == id)
    }
}

fn parse<T: DeserializeOwned>(file: &'static str, raw: &str) -> Result<Vec<T>, LoadError> {
    serde_json::from_str(raw).map_err(|source| LoadError::Parse { file, source })
}
