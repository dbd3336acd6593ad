use std::fmt;

/// Turn-owner state for one encounter.
///
/// The machine starts in [`TurnPhase::PlayerTurn`] and alternates with
/// [`TurnPhase::EnemyTurn`] until a combatant falls, at which point it
/// enters the terminal [`TurnPhase::BattleOver`] and accepts no further
/// transitions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TurnPhase {
    #[default]
    PlayerTurn,
    EnemyTurn,
    BattleOver,
}

impl TurnPhase {
    /// Returns true once the terminal state has been reached.
    pub fn is_terminal(self) -> bool {
        self == TurnPhase::BattleOver
    }
}

impl fmt::Display for TurnPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TurnPhase::PlayerTurn => "player turn",
            TurnPhase::EnemyTurn => "enemy turn",
            TurnPhase::BattleOver => "battle over",
        };
        f.write_str(label)
    }
}
