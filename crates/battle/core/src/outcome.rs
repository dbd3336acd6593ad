//! Terminal-condition detection and reward payout.

use crate::state::{Combatant, CombatantId};

/// Reward payout for defeating the opposing combatant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rewards {
    pub experience: u32,
    pub currency: u32,
}

impl Rewards {
    pub const NONE: Self = Self {
        experience: 0,
        currency: 0,
    };

    pub fn new(experience: u32, currency: u32) -> Self {
        Self {
            experience,
            currency,
        }
    }
}

/// Final result of an encounter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BattleOutcome {
    pub winner: CombatantId,
    /// The configured payout when the player won, [`Rewards::NONE`]
    /// otherwise.
    pub rewards: Rewards,
}

/// A combatant is defeated once its health reaches zero.
pub fn is_defeated(combatant: &Combatant) -> bool {
    combatant.health() == 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{HeroClass, ResourceMeter, StatKind};

    #[test]
    fn defeated_only_at_exactly_zero_health() {
        let mut c = Combatant::new(
            CombatantId::new("e1"),
            "Enemy",
            8,
            HeroClass::Warrior,
            ResourceMeter::new(1, 15),
            6,
            1,
            ResourceMeter::full(0),
            [],
        )
        .unwrap();
        assert!(!is_defeated(&c));

        c.apply_delta(StatKind::Health, -1);
        assert!(is_defeated(&c));
    }

    #[test]
    fn default_rewards_are_empty() {
        assert_eq!(Rewards::default(), Rewards::NONE);
    }
}
