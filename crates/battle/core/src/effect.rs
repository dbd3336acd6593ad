//! Effect resolution - applying an action's payload to a combatant.
//!
//! Resolution is purely a function of (action, target): it knows
//! nothing about turn order or resource costs, which the engine
//! enforces before invoking it. The target is a parameter rather than
//! an implicit "self" so that opponent-targeted payloads are a drop-in
//! extension; today's catalog only carries self-buffs.

use crate::action::Action;
use crate::state::{Combatant, StatKind};

/// One stat mutation performed during resolution, for narration and
/// logging.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatChange {
    pub stat: StatKind,
    pub delta: i32,
}

/// Applies every (effect-kind, magnitude) pair of `action` to `target`
/// through [`Combatant::apply_delta`], and reports what was applied.
pub fn resolve(action: &Action, target: &mut Combatant) -> Vec<StatChange> {
    action
        .effects
        .iter()
        .map(|effect| {
            let stat = effect.kind.stat();
            target.apply_delta(stat, effect.magnitude);
            StatChange {
                stat,
                delta: effect.magnitude,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::{ActionId, Effect, EffectKind};
    use crate::state::{CombatantId, HeroClass, ResourceMeter};

    fn target() -> Combatant {
        Combatant::new(
            CombatantId::new("hero"),
            "Hero",
            8,
            HeroClass::Mage,
            ResourceMeter::new(40, 100),
            10,
            5,
            ResourceMeter::full(8),
            [],
        )
        .unwrap()
    }

    fn buff(effects: Vec<Effect>) -> Action {
        Action {
            id: ActionId::from("buff"),
            name: "Buff".to_string(),
            class: HeroClass::Mage,
            power_cost: 0,
            effects,
        }
    }

    #[test]
    fn applies_every_payload_entry() {
        let mut hero = target();
        let action = buff(vec![
            Effect::new(EffectKind::RaiseAttack, 4),
            Effect::new(EffectKind::RaiseDefense, 2),
            Effect::new(EffectKind::RestoreHealth, 25),
        ]);

        let changes = resolve(&action, &mut hero);

        assert_eq!(hero.attack(), 14);
        assert_eq!(hero.defense(), 7);
        assert_eq!(hero.health(), 65);
        assert_eq!(changes.len(), 3);
        assert_eq!(
            changes[0],
            StatChange {
                stat: StatKind::Attack,
                delta: 4
            }
        );
    }

    #[test]
    fn restored_health_clamps_at_maximum() {
        let mut hero = target();
        let action = buff(vec![Effect::new(EffectKind::RestoreHealth, 999)]);

        resolve(&action, &mut hero);
        assert_eq!(hero.health(), 100);
    }

    #[test]
    fn empty_payload_resolves_to_nothing() {
        let mut hero = target();
        let before = hero.clone();

        let changes = resolve(&buff(vec![]), &mut hero);
        assert!(changes.is_empty());
        assert_eq!(hero, before);
    }
}
