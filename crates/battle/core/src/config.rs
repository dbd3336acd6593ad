//! Encounter configuration.

use crate::outcome::Rewards;
use crate::state::CombatantId;

/// Names which loaded hero records fight as "player" and "opponent",
/// and the payout for defeating the opponent.
///
/// Passed explicitly at encounter creation; nothing in the engine or
/// session hard-codes combatant identifiers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncounterConfig {
    pub player_id: CombatantId,
    pub enemy_id: CombatantId,
    pub rewards: Rewards,
}

impl EncounterConfig {
    /// Creates a configuration with no payout.
    pub fn new(player_id: impl Into<CombatantId>, enemy_id: impl Into<CombatantId>) -> Self {
        Self {
            player_id: player_id.into(),
            enemy_id: enemy_id.into(),
            rewards: Rewards::NONE,
        }
    }

    pub fn with_rewards(mut self, rewards: Rewards) -> Self {
        self.rewards = rewards;
        self
    }
}
