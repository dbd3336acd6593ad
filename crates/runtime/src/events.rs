//! Battle events for presentation subscribers.

use tokio::sync::broadcast;

use battle_core::{BattleOutcome, TurnPhase, TurnReport};

/// Events broadcast while an encounter runs.
///
/// Delivery is best-effort: subscribers may lag or be absent, and the
/// session never blocks on them.
#[derive(Clone, Debug)]
pub enum BattleEvent {
    /// One narrative message, in emission order.
    Narration(String),

    /// A turn resolved; carries the damage dealt (if any) and the
    /// phase the engine is now in.
    TurnResolved {
        phase: TurnPhase,
        damage: Option<u32>,
    },

    /// The encounter reached its terminal state.
    BattleEnded { outcome: BattleOutcome },

    /// An item was consumed from the inventory.
    ItemConsumed { id: String },
}

/// Publishes the events for one turn report.
pub(crate) fn publish_report(tx: &broadcast::Sender<BattleEvent>, report: &TurnReport) {
    for message in &report.messages {
        publish(tx, BattleEvent::Narration(message.clone()));
    }
    publish(
        tx,
        BattleEvent::TurnResolved {
            phase: report.phase_after,
            damage: report.damage,
        },
    );
}

/// Best-effort send; an absent audience is normal, not an error.
pub(crate) fn publish(tx: &broadcast::Sender<BattleEvent>, event: BattleEvent) {
    if tx.send(event).is_err() {
        tracing::trace!("no battle event subscribers");
    }
}
