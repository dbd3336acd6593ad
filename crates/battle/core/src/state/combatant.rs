use std::collections::HashSet;
use std::fmt;

use crate::action::ActionId;
use crate::error::SetupError;

/// Unique identifier for a combatant loaded from a hero record.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CombatantId(pub String);

impl CombatantId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CombatantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<&str> for CombatantId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for CombatantId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Entity-type affinity shared by combatants and actions.
///
/// An action is usable only by combatants whose class matches its own.
/// Wire records carry the class as a lowercase string.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::EnumString,
)]
#[strum(serialize_all = "lowercase")]
pub enum HeroClass {
    #[default]
    Warrior,
    Mage,
    Rogue,
}

/// Integer resource pool clamped to `[0, maximum]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct ResourceMeter {
    current: u32,
    maximum: u32,
}

impl ResourceMeter {
    /// Creates a meter, clamping `current` into `[0, maximum]`.
    pub fn new(current: u32, maximum: u32) -> Self {
        Self {
            current: current.min(maximum),
            maximum,
        }
    }

    /// Creates a full meter.
    pub fn full(maximum: u32) -> Self {
        Self::new(maximum, maximum)
    }

    pub fn current(&self) -> u32 {
        self.current
    }

    pub fn maximum(&self) -> u32 {
        self.maximum
    }

    pub fn is_empty(&self) -> bool {
        self.current == 0
    }

    /// Adds `delta` and clamps back into `[0, maximum]`.
    fn apply(&mut self, delta: i32) {
        let next = i64::from(self.current) + i64::from(delta);
        self.current = next.clamp(0, i64::from(self.maximum)) as u32;
    }
}

/// Identifies a mutable combatant stat for [`Combatant::apply_delta`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StatKind {
    Health,
    Attack,
    Defense,
    PowerPoints,
}

/// A battle participant (player or enemy) and its stat pools.
///
/// # Invariants
///
/// - `health.current <= health.maximum` and `power.current <=
///   power.maximum` hold after every mutation.
/// - Attack and defense never go negative; they have no ceiling.
/// - All fields are private: [`Combatant::apply_delta`] is the only
///   mutation primitive, so the clamping above cannot be bypassed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Combatant {
    id: CombatantId,
    name: String,
    level: u32,
    class: HeroClass,
    health: ResourceMeter,
    attack: u32,
    defense: u32,
    power: ResourceMeter,
    /// Actions this combatant owns (references into the catalog).
    abilities: HashSet<ActionId>,
}

impl Combatant {
    /// Creates a combatant, validating the structural invariants that
    /// record defaulting cannot repair.
    ///
    /// # Errors
    ///
    /// Returns [`SetupError::ZeroMaxHealth`] if `health.maximum == 0`
    /// and [`SetupError::ZeroLevel`] if `level == 0`.
    pub fn new(
        id: CombatantId,
        name: impl Into<String>,
        level: u32,
        class: HeroClass,
        health: ResourceMeter,
        attack: u32,
        defense: u32,
        power: ResourceMeter,
        abilities: impl IntoIterator<Item = ActionId>,
    ) -> Result<Self, SetupError> {
        if health.maximum() == 0 {
            return Err(SetupError::ZeroMaxHealth(id));
        }
        if level == 0 {
            return Err(SetupError::ZeroLevel(id));
        }
        Ok(Self {
            id,
            name: name.into(),
            level,
            class,
            health,
            attack,
            defense,
            power,
            abilities: abilities.into_iter().collect(),
        })
    }

    pub fn id(&self) -> &CombatantId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn class(&self) -> HeroClass {
        self.class
    }

    pub fn health(&self) -> u32 {
        self.health.current()
    }

    pub fn max_health(&self) -> u32 {
        self.health.maximum()
    }

    pub fn attack(&self) -> u32 {
        self.attack
    }

    pub fn defense(&self) -> u32 {
        self.defense
    }

    pub fn power_points_left(&self) -> u32 {
        self.power.current()
    }

    pub fn max_power_points(&self) -> u32 {
        self.power.maximum()
    }

    /// Health as a percentage of maximum, for presentation observers.
    pub fn percent_health(&self) -> u32 {
        // Widen before scaling: `current * 100` overflows u32 for
        // large wire-supplied health pools.
        (u64::from(self.health.current()) * 100 / u64::from(self.health.maximum())) as u32
    }

    /// Whether this combatant owns the given action.
    pub fn owns(&self, action: &ActionId) -> bool {
        self.abilities.contains(action)
    }

    /// Adds `delta` to the named stat, then clamps it back into range:
    /// health to `[0, max_health]`, power points to
    /// `[0, max_power_points]`, attack and defense to `>= 0`.
    pub fn apply_delta(&mut self, stat: StatKind, delta: i32) {
        match stat {
            StatKind::Health => self.health.apply(delta),
            StatKind::PowerPoints => self.power.apply(delta),
            StatKind::Attack => self.attack = Self::apply_floor(self.attack, delta),
            StatKind::Defense => self.defense = Self::apply_floor(self.defense, delta),
        }
    }

    fn apply_floor(current: u32, delta: i32) -> u32 {
        (i64::from(current) + i64::from(delta)).clamp(0, i64::from(u32::MAX)) as u32
    }
}
