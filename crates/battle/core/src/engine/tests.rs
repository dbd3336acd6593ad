use super::*;
use crate::action::{ActionId, Effect, EffectKind};
use crate::state::{CombatantId, HeroClass, ResourceMeter};

fn combatant(id: &str, health: u32, attack: u32, defense: u32, power: u32) -> Combatant {
    Combatant::new(
        CombatantId::new(id),
        id.to_string(),
        8,
        HeroClass::Warrior,
        ResourceMeter::full(health),
        attack,
        defense,
        ResourceMeter::full(power),
        [ActionId::from("war-cry"), ActionId::from("brace")],
    )
    .unwrap()
}

fn skill(id: &str, power_cost: u32, effects: Vec<Effect>) -> Action {
    Action {
        id: ActionId::from(id),
        name: id.to_string(),
        class: HeroClass::Warrior,
        power_cost,
        effects,
    }
}

fn battle(player: Combatant, enemy: Combatant) -> Battle {
    Battle::new(player, enemy, Rewards::NONE).unwrap()
}

#[test]
fn attack_applies_damage_formula() {
    let mut b = battle(
        combatant("p", 20, 10, 2, 3),
        combatant("e", 50, 6, 4, 0),
    );

    let report = b.attack().unwrap();
    assert_eq!(report.damage, Some(6));
    assert_eq!(b.enemy().health(), 44);
    assert_eq!(report.messages[0], MSG_BASIC_ATTACK);
}

#[test]
fn attack_damage_floors_at_zero() {
    let mut b = battle(
        combatant("p", 20, 3, 2, 3),
        combatant("e", 50, 6, 5, 0),
    );

    let report = b.attack().unwrap();
    assert_eq!(report.damage, Some(0));
    assert_eq!(b.enemy().health(), 50);
}

#[test]
fn attack_transitions_player_to_enemy_turn() {
    let mut b = battle(
        combatant("p", 20, 10, 2, 3),
        combatant("e", 50, 6, 1, 0),
    );

    let report = b.attack().unwrap();
    assert_eq!(report.phase_after, TurnPhase::EnemyTurn);
    assert_eq!(b.phase(), TurnPhase::EnemyTurn);
}

#[test]
fn enemy_resolution_transitions_back_to_player_turn() {
    let mut b = battle(
        combatant("p", 20, 10, 2, 3),
        combatant("e", 50, 6, 1, 0),
    );
    b.attack().unwrap();

    let report = b.resolve_enemy_turn().unwrap();
    assert_eq!(report.damage, Some(4));
    assert_eq!(b.player().health(), 16);
    assert_eq!(b.phase(), TurnPhase::PlayerTurn);
}

#[test]
fn operations_outside_their_phase_are_noops() {
    let mut b = battle(
        combatant("p", 20, 10, 2, 3),
        combatant("e", 50, 6, 1, 0),
    );

    // Enemy resolution during the player's turn.
    assert!(b.resolve_enemy_turn().is_none());
    assert_eq!(b.player().health(), 20);

    b.attack().unwrap();

    // Player operations during the enemy's turn.
    assert!(b.attack().is_none());
    assert!(b.use_skill(&skill("war-cry", 0, vec![])).is_none());
    assert_eq!(b.phase(), TurnPhase::EnemyTurn);
}

#[test]
fn unaffordable_skill_is_rejected_without_mutation() {
    let mut b = battle(
        combatant("p", 20, 10, 2, 3),
        combatant("e", 50, 6, 1, 0),
    );
    let costly = skill("war-cry", 5, vec![Effect::new(EffectKind::RaiseAttack, 4)]);

    let report = b.use_skill(&costly).unwrap();
    assert_eq!(report.messages, vec![MSG_INSUFFICIENT_POWER.to_string()]);
    assert_eq!(b.player().power_points_left(), 3);
    assert_eq!(b.player().attack(), 10);
    assert_eq!(b.phase(), TurnPhase::PlayerTurn);
}

#[test]
fn exact_cost_skill_drains_pool_and_warns() {
    let mut b = battle(
        combatant("p", 20, 10, 2, 3),
        combatant("e", 50, 6, 1, 0),
    );
    let drain = skill("war-cry", 3, vec![Effect::new(EffectKind::RaiseDefense, 2)]);

    let report = b.use_skill(&drain).unwrap();
    assert_eq!(b.player().power_points_left(), 0);
    assert_eq!(b.player().defense(), 4);
    assert_eq!(report.messages[0], "You used war-cry!");
    assert_eq!(report.messages[1], MSG_NO_POWER_LEFT);
    assert_eq!(b.phase(), TurnPhase::EnemyTurn);
}

#[test]
fn skill_for_unowned_action_is_a_noop() {
    let mut b = battle(
        combatant("p", 20, 10, 2, 3),
        combatant("e", 50, 6, 1, 0),
    );

    assert!(b.use_skill(&skill("forbidden", 0, vec![])).is_none());
    assert_eq!(b.phase(), TurnPhase::PlayerTurn);
}

#[test]
fn skill_for_wrong_class_is_a_noop() {
    let mut b = battle(
        combatant("p", 20, 10, 2, 3),
        combatant("e", 50, 6, 1, 0),
    );
    let mut foreign = skill("war-cry", 0, vec![]);
    foreign.class = HeroClass::Mage;

    assert!(b.use_skill(&foreign).is_none());
}

#[test]
fn lethal_attack_forces_battle_over() {
    let mut b = Battle::new(
        combatant("p", 20, 10, 2, 3),
        combatant("e", 6, 6, 1, 0),
        Rewards::new(120, 35),
    )
    .unwrap();

    let report = b.attack().unwrap();
    assert_eq!(report.phase_after, TurnPhase::BattleOver);
    assert!(b.is_over());
    assert!(report.messages.contains(&MSG_VICTORY.to_string()));

    let outcome = b.outcome().unwrap();
    assert_eq!(outcome.winner, CombatantId::new("p"));
    assert_eq!(outcome.rewards, Rewards::new(120, 35));
}

#[test]
fn lethal_enemy_resolution_forces_battle_over() {
    let mut b = Battle::new(
        combatant("p", 4, 10, 2, 3),
        combatant("e", 50, 6, 1, 0),
        Rewards::new(120, 35),
    )
    .unwrap();
    b.attack().unwrap();

    let report = b.resolve_enemy_turn().unwrap();
    assert_eq!(report.phase_after, TurnPhase::BattleOver);
    assert!(report.messages.contains(&MSG_DEFEAT.to_string()));

    // Defeat pays nothing regardless of the configured payout.
    let outcome = b.outcome().unwrap();
    assert_eq!(outcome.winner, CombatantId::new("e"));
    assert_eq!(outcome.rewards, Rewards::NONE);
}

#[test]
fn battle_over_is_terminal_for_every_operation() {
    let mut b = battle(
        combatant("p", 20, 10, 2, 3),
        combatant("e", 6, 6, 1, 0),
    );
    b.attack().unwrap();
    assert!(b.is_over());

    let player_before = b.player().clone();
    let enemy_before = b.enemy().clone();

    assert!(b.attack().is_none());
    assert!(b.use_skill(&skill("war-cry", 0, vec![])).is_none());
    assert!(b.resolve_enemy_turn().is_none());

    assert_eq!(b.player(), &player_before);
    assert_eq!(b.enemy(), &enemy_before);
    assert_eq!(b.phase(), TurnPhase::BattleOver);
}

#[test]
fn full_encounter_scenario() {
    // Player 20hp/10atk/2def/3pp vs enemy 15hp/6atk/1def.
    let mut b = Battle::new(
        combatant("p", 20, 10, 2, 3),
        combatant("e", 15, 6, 1, 0),
        Rewards::new(200, 50),
    )
    .unwrap();

    let first = b.attack().unwrap();
    assert_eq!(first.damage, Some(9));
    assert_eq!(b.enemy().health(), 6);

    let response = b.resolve_enemy_turn().unwrap();
    assert_eq!(response.damage, Some(4));
    assert_eq!(b.player().health(), 16);

    let second = b.attack().unwrap();
    assert_eq!(second.damage, Some(9));
    assert_eq!(b.enemy().health(), 0);
    assert_eq!(b.phase(), TurnPhase::BattleOver);

    assert!(outcome::is_defeated(b.enemy()));
    assert_eq!(b.outcome().unwrap().rewards, Rewards::new(200, 50));
}

#[test]
fn identical_ids_are_rejected_at_setup() {
    let err = Battle::new(
        combatant("same", 20, 10, 2, 3),
        combatant("same", 15, 6, 1, 0),
        Rewards::NONE,
    )
    .unwrap_err();
    assert_eq!(err, SetupError::DuplicateCombatant(CombatantId::new("same")));
}
