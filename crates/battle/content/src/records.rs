//! Record types matching the collaborator's JSON collections.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use battle_core::{
    Action, ActionId, Combatant, CombatantId, Effect, EffectKind, HeroClass, ResourceMeter,
    SetupError,
};

// ============================================================================
// Documented defaults for malformed records
// ============================================================================

/// Fallback power pool when a hero record carries no usable pool.
pub const DEFAULT_POWER_POINTS: u32 = 8;
pub const DEFAULT_LEVEL: u32 = 1;
pub const DEFAULT_HEALTH: u32 = 100;
pub const DEFAULT_ATTACK: u32 = 10;
pub const DEFAULT_DEFENSE: u32 = 5;

/// Errors for records that defaulting cannot repair.
#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    #[error("hero record has an empty id")]
    EmptyHeroId,

    #[error("ability record has an empty id")]
    EmptyAbilityId,

    #[error(transparent)]
    Setup(#[from] SetupError),
}

// ============================================================================
// Hero records
// ============================================================================

/// One document of the `hero` collection.
///
/// Every numeric field is optional on the wire; normalization
/// substitutes the documented defaults above.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroRecord {
    pub id: String,
    pub name: String,
    #[serde(rename = "type", default)]
    pub class: String,
    #[serde(default)]
    pub abilities: Vec<String>,
    #[serde(default)]
    pub level: Option<u32>,
    #[serde(default)]
    pub health: Option<u32>,
    #[serde(default)]
    pub attack: Option<u32>,
    #[serde(default)]
    pub defense: Option<u32>,
    #[serde(default)]
    pub power_points: Option<u32>,
    #[serde(default)]
    pub power_points_left: Option<u32>,
}

impl HeroRecord {
    /// Normalizes this record into a combatant at full health.
    ///
    /// An unknown class string falls back to [`HeroClass::Warrior`];
    /// a missing or zero level falls back to [`DEFAULT_LEVEL`]; a
    /// missing pool falls back to a full [`DEFAULT_POWER_POINTS`]
    /// pool.
    ///
    /// # Errors
    ///
    /// Returns an error for an empty id, or for an explicit zero
    /// maximum health (no default can repair a hero that starts
    /// defeated).
    pub fn into_combatant(self) -> Result<Combatant, RecordError> {
        if self.id.is_empty() {
            return Err(RecordError::EmptyHeroId);
        }

        let class: HeroClass = self.class.parse().unwrap_or_default();
        let level = self.level.filter(|&l| l > 0).unwrap_or(DEFAULT_LEVEL);
        let max_health = self.health.unwrap_or(DEFAULT_HEALTH);
        let power_max = self.power_points.unwrap_or(DEFAULT_POWER_POINTS);
        let power_left = self.power_points_left.unwrap_or(power_max);

        let combatant = Combatant::new(
            CombatantId::new(self.id),
            self.name,
            level,
            class,
            ResourceMeter::full(max_health),
            self.attack.unwrap_or(DEFAULT_ATTACK),
            self.defense.unwrap_or(DEFAULT_DEFENSE),
            ResourceMeter::new(power_left, power_max),
            self.abilities.into_iter().map(ActionId::new),
        )?;
        Ok(combatant)
    }
}

// ============================================================================
// Ability records
// ============================================================================

/// One document of the `ability` collection.
///
/// The effect payload arrives as a string-keyed map; keys that are not
/// a known [`EffectKind`] and entries whose magnitude is absent are
/// dropped during normalization, never applied. A `BTreeMap` keeps the
/// surviving payload order deterministic.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AbilityRecord {
    pub id: String,
    pub name: String,
    #[serde(rename = "type", default)]
    pub class: String,
    #[serde(default)]
    pub power_cost: Option<u32>,
    #[serde(default)]
    pub effects: BTreeMap<String, Option<i64>>,
}

impl AbilityRecord {
    /// Normalizes this record into a catalog action.
    ///
    /// An action whose whole payload is dropped is still legal: it
    /// becomes a pure resource-cost action.
    ///
    /// # Errors
    ///
    /// Returns an error only for an empty id.
    pub fn into_action(self) -> Result<Action, RecordError> {
        if self.id.is_empty() {
            return Err(RecordError::EmptyAbilityId);
        }

        let effects = self
            .effects
            .into_iter()
            .filter_map(|(key, magnitude)| {
                let kind: EffectKind = key.parse().ok()?;
                let magnitude = i32::try_from(magnitude?).ok()?;
                Some(Effect::new(kind, magnitude))
            })
            .collect();

        Ok(Action {
            id: ActionId::new(self.id),
            name: self.name,
            class: self.class.parse().unwrap_or_default(),
            power_cost: self.power_cost.unwrap_or(0),
            effects,
        })
    }
}

// ============================================================================
// Item records
// ============================================================================

/// One document of the `item` collection.
///
/// Items are inventory entries consumed through the collaborator's
/// delete endpoint; they carry no stat effects in this scope.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemRecord {
    pub id: String,
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub effects: String,
    #[serde(default)]
    pub droprate: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use battle_core::StatKind;

    #[test]
    fn hero_with_missing_numerics_gets_defaults() {
        let record: HeroRecord = serde_json::from_str(
            r#"{ "id": "h1", "name": "Aldric", "type": "warrior", "abilities": ["war-cry"] }"#,
        )
        .unwrap();

        let hero = record.into_combatant().unwrap();
        assert_eq!(hero.level(), DEFAULT_LEVEL);
        assert_eq!(hero.health(), DEFAULT_HEALTH);
        assert_eq!(hero.attack(), DEFAULT_ATTACK);
        assert_eq!(hero.defense(), DEFAULT_DEFENSE);
        assert_eq!(hero.max_power_points(), DEFAULT_POWER_POINTS);
        assert_eq!(hero.power_points_left(), DEFAULT_POWER_POINTS);
        assert!(hero.owns(&ActionId::from("war-cry")));
    }

    #[test]
    fn unknown_hero_class_falls_back_to_warrior() {
        let record: HeroRecord =
            serde_json::from_str(r#"{ "id": "h2", "name": "X", "type": "necromancer" }"#).unwrap();
        assert_eq!(record.into_combatant().unwrap().class(), HeroClass::Warrior);
    }

    #[test]
    fn hero_pool_remainder_defaults_to_its_maximum() {
        let record: HeroRecord = serde_json::from_str(
            r#"{ "id": "h3", "name": "X", "powerPoints": 6 }"#,
        )
        .unwrap();
        let hero = record.into_combatant().unwrap();
        assert_eq!(hero.power_points_left(), 6);
    }

    #[test]
    fn hero_with_empty_id_is_rejected() {
        let record: HeroRecord =
            serde_json::from_str(r#"{ "id": "", "name": "Nobody" }"#).unwrap();
        assert!(matches!(
            record.into_combatant(),
            Err(RecordError::EmptyHeroId)
        ));
    }

    #[test]
    fn explicit_zero_health_is_not_repaired() {
        let record: HeroRecord =
            serde_json::from_str(r#"{ "id": "h4", "name": "Hollow", "health": 0 }"#).unwrap();
        assert!(matches!(
            record.into_combatant(),
            Err(RecordError::Setup(SetupError::ZeroMaxHealth(_)))
        ));
    }

    #[test]
    fn ability_payload_drops_unknown_and_null_entries() {
        let record: AbilityRecord = serde_json::from_str(
            r#"{
                "id": "a1",
                "name": "Ember Veil",
                "type": "mage",
                "powerCost": 2,
                "effects": {
                    "raiseDefense": 2,
                    "emberShroud": 6,
                    "raiseAttack": null
                }
            }"#,
        )
        .unwrap();

        let action = record.into_action().unwrap();
        assert_eq!(action.effects.len(), 1);
        assert_eq!(action.effects[0].kind.stat(), StatKind::Defense);
        assert_eq!(action.effects[0].magnitude, 2);
    }

    #[test]
    fn ability_with_fully_dropped_payload_is_pure_cost() {
        let record: AbilityRecord = serde_json::from_str(
            r#"{ "id": "a2", "name": "Focus", "powerCost": 1,
                 "effects": { "meditate": 3 } }"#,
        )
        .unwrap();

        let action = record.into_action().unwrap();
        assert!(action.effects.is_empty());
        assert_eq!(action.power_cost, 1);
    }
}
