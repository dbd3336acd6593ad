//! Action catalog - the set of abilities combatants can use.
//!
//! An [`Action`] is a catalog-defined move with a power-point cost and
//! an effect payload. The [`ActionCatalog`] stores actions in insertion
//! order and answers the one filtering question the engine needs:
//! which actions are legal for a given combatant right now.
//!
//! Effect kinds form a closed enum rather than open string keys, so an
//! unhandled kind is a compile-time-checked impossibility instead of a
//! silently-falling-through branch. Wire payload entries with unknown
//! keys are dropped by the content loader before an [`Action`] exists.

use std::collections::HashMap;
use std::fmt;

use crate::state::{Combatant, HeroClass, StatKind};

/// Unique identifier for an action loaded from an ability record.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ActionId(pub String);

impl ActionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ActionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<&str> for ActionId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// The fixed set of stat effects an action payload may carry.
///
/// Wire payloads key entries by the camelCase names below; anything
/// else fails to parse and is dropped at load time.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString,
)]
#[strum(serialize_all = "camelCase")]
pub enum EffectKind {
    RaiseAttack,
    RaiseDefense,
    RestoreHealth,
    RestorePowerPoints,
}

impl EffectKind {
    /// The combatant stat this effect mutates.
    pub fn stat(self) -> StatKind {
        match self {
            EffectKind::RaiseAttack => StatKind::Attack,
            EffectKind::RaiseDefense => StatKind::Defense,
            EffectKind::RestoreHealth => StatKind::Health,
            EffectKind::RestorePowerPoints => StatKind::PowerPoints,
        }
    }
}

/// One (effect-kind, magnitude) entry of an action payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Effect {
    pub kind: EffectKind,
    pub magnitude: i32,
}

impl Effect {
    pub fn new(kind: EffectKind, magnitude: i32) -> Self {
        Self { kind, magnitude }
    }
}

/// A catalog-defined move with a resource cost and an effect payload.
///
/// An empty payload is legal: the action is then a pure
/// resource-cost move.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Action {
    pub id: ActionId,
    pub name: String,
    /// Only combatants of this class may use the action.
    pub class: HeroClass,
    pub power_cost: u32,
    pub effects: Vec<Effect>,
}

/// Insertion-ordered action store with id lookup.
#[derive(Clone, Debug, Default)]
pub struct ActionCatalog {
    actions: Vec<Action>,
    index: HashMap<ActionId, usize>,
}

impl ActionCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a catalog preserving the order of `actions`.
    pub fn from_actions(actions: impl IntoIterator<Item = Action>) -> Self {
        let mut catalog = Self::new();
        for action in actions {
            catalog.insert(action);
        }
        catalog
    }

    /// Inserts an action. A duplicate id replaces the earlier entry in
    /// place, keeping the original insertion position.
    pub fn insert(&mut self, action: Action) {
        match self.index.get(&action.id) {
            Some(&slot) => self.actions[slot] = action,
            None => {
                self.index.insert(action.id.clone(), self.actions.len());
                self.actions.push(action);
            }
        }
    }

    pub fn get(&self, id: &ActionId) -> Option<&Action> {
        self.index.get(id).map(|&slot| &self.actions[slot])
    }

    pub fn iter(&self) -> impl Iterator<Item = &Action> {
        self.actions.iter()
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Actions legal for `combatant`: owned by it AND matching its
    /// class, in catalog insertion order (stable, never re-sorted).
    pub fn actions_for(&self, combatant: &Combatant) -> Vec<&Action> {
        self.actions
            .iter()
            .filter(|action| combatant.owns(&action.id) && action.class == combatant.class())
            .collect()
    }
}
