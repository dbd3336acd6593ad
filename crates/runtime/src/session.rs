//! Encounter session and the deferred enemy-turn timer.
//!
//! [`EncounterSession`] owns one [`Battle`] from snapshot load to
//! terminal outcome. Player operations resolve synchronously through
//! the engine; the enemy's response is scheduled as a cancellable
//! timer that fires after a fixed presentation delay. Only one timer
//! is ever pending, it is invalidated the moment the battle ends, and
//! a stale fire against a finished battle is a defined no-op.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::sync::broadcast;
use tokio::task::AbortHandle;
use tracing::{debug, info, warn};

use battle_core::{
    Action, ActionCatalog, ActionId, Battle, BattleOutcome, Combatant, CombatantId,
    EncounterConfig, TurnPhase, TurnReport,
};
use battle_content::{HeroRecord, ItemRecord};

use crate::error::{Result, SessionError};
use crate::events::{self, BattleEvent};
use crate::source::RecordSource;

/// Tunables for one session.
#[derive(Clone, Debug)]
pub struct SessionOptions {
    /// Presentation delay between the player's action and the enemy's
    /// automatic response.
    pub enemy_delay: Duration,

    /// Capacity of the battle event channel.
    pub event_capacity: usize,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            enemy_delay: Duration::from_secs(2),
            event_capacity: 64,
        }
    }
}

/// Cancellable handle for the pending deferred enemy turn.
struct EnemyTurnTimer {
    handle: AbortHandle,
}

impl EnemyTurnTimer {
    fn cancel(self) {
        self.handle.abort();
    }
}

/// State shared with the timer task.
struct Shared {
    battle: Mutex<Battle>,
    events: broadcast::Sender<BattleEvent>,
    pending_enemy_turn: Mutex<Option<EnemyTurnTimer>>,
}

impl Shared {
    /// Resolves the enemy turn and publishes its events. `None` when
    /// the battle is not waiting on the enemy (including after
    /// `BattleOver` - the stale-timer case).
    fn resolve_enemy_turn(&self) -> Option<TurnReport> {
        let (report, ended) = {
            let mut battle = lock(&self.battle);
            let report = battle.resolve_enemy_turn()?;
            (report, battle.outcome().cloned())
        };

        events::publish_report(&self.events, &report);
        if let Some(outcome) = ended {
            events::publish(&self.events, BattleEvent::BattleEnded { outcome });
        }
        Some(report)
    }

    fn cancel_enemy_timer(&self) {
        if let Some(timer) = lock(&self.pending_enemy_turn).take() {
            timer.cancel();
        }
    }
}

/// One battle encounter from snapshot load to terminal outcome.
pub struct EncounterSession {
    shared: Arc<Shared>,
    catalog: ActionCatalog,
    items: Mutex<Vec<ItemRecord>>,
    source: Arc<dyn RecordSource>,
    options: SessionOptions,
}

impl EncounterSession {
    /// Loads a one-shot snapshot from `source` and starts the battle
    /// named by `config`.
    ///
    /// Hero and ability reads must succeed (there is no
    /// last-known-good state before the first load); a failed item
    /// read only costs the inventory and is logged. Ability records
    /// that cannot be normalized are skipped, not fatal.
    pub async fn begin(
        source: Arc<dyn RecordSource>,
        config: EncounterConfig,
        options: SessionOptions,
    ) -> Result<Self> {
        let heroes = source.heroes().await?;

        let player = hero_combatant(&heroes, &config.player_id)?;
        let enemy = hero_combatant(&heroes, &config.enemy_id)?;

        let mut catalog = ActionCatalog::new();
        for record in source.abilities().await? {
            let id = record.id.clone();
            match record.into_action() {
                Ok(action) => catalog.insert(action),
                Err(error) => warn!(%error, ability = id, "skipping unusable ability record"),
            }
        }

        let items = match source.items().await {
            Ok(items) => items,
            Err(error) => {
                warn!(%error, "item read failed; starting with an empty inventory");
                Vec::new()
            }
        };

        info!(
            player = %player.id(),
            enemy = %enemy.id(),
            actions = catalog.len(),
            items = items.len(),
            "encounter begins"
        );

        let battle = Battle::new(player, enemy, config.rewards)?;
        let (events, _) = broadcast::channel(options.event_capacity);

        Ok(Self {
            shared: Arc::new(Shared {
                battle: Mutex::new(battle),
                events,
                pending_enemy_turn: Mutex::new(None),
            }),
            catalog,
            items: Mutex::new(items),
            source,
            options,
        })
    }

    /// Subscribes to the battle event channel.
    pub fn subscribe(&self) -> broadcast::Receiver<BattleEvent> {
        self.shared.events.subscribe()
    }

    // ========================================================================
    // Player operations
    // ========================================================================

    /// Commits a basic attack. `None` outside the player's turn.
    pub fn player_attack(&self) -> Option<TurnReport> {
        let report = lock(&self.shared.battle).attack()?;
        self.after_player_action(&report);
        Some(report)
    }

    /// Commits a skill by catalog id. `None` outside the player's
    /// turn, or for an id that is unknown, un-owned or wrong-class.
    pub fn player_skill(&self, id: &ActionId) -> Option<TurnReport> {
        let action = self.catalog.get(id)?.clone();
        let report = lock(&self.shared.battle).use_skill(&action)?;
        self.after_player_action(&report);
        Some(report)
    }

    /// The actions currently legal for the player, in catalog order.
    pub fn available_skills(&self) -> Vec<Action> {
        let battle = lock(&self.shared.battle);
        self.catalog
            .actions_for(battle.player())
            .into_iter()
            .cloned()
            .collect()
    }

    /// Consumes an item: removes it from the local inventory
    /// immediately and issues the collaborator delete without waiting
    /// for it. A delete failure is logged and never rolls the local
    /// removal back. Returns false for an unknown item id.
    pub fn use_item(&self, id: &str) -> bool {
        let removed = {
            let mut items = lock(&self.items);
            items
                .iter()
                .position(|item| item.id == id)
                .map(|idx| items.remove(idx))
        };
        let Some(item) = removed else {
            debug!(item = id, "ignoring unknown item");
            return false;
        };

        events::publish(
            &self.shared.events,
            BattleEvent::ItemConsumed {
                id: item.id.clone(),
            },
        );

        let source = Arc::clone(&self.source);
        tokio::spawn(async move {
            if let Err(error) = source.delete_item(&item.id).await {
                warn!(%error, item = %item.id, "item delete failed; inventory stays updated");
            }
        });
        true
    }

    /// Remaining inventory, in record order.
    pub fn items(&self) -> Vec<ItemRecord> {
        lock(&self.items).clone()
    }

    // ========================================================================
    // Enemy turn
    // ========================================================================

    /// Resolves the enemy turn immediately, superseding any pending
    /// timer. `None` when the battle is not waiting on the enemy.
    pub fn resolve_enemy_turn_now(&self) -> Option<TurnReport> {
        self.shared.cancel_enemy_timer();
        self.shared.resolve_enemy_turn()
    }

    fn after_player_action(&self, report: &TurnReport) {
        events::publish_report(&self.shared.events, report);

        match report.phase_after {
            TurnPhase::EnemyTurn => self.schedule_enemy_turn(),
            TurnPhase::BattleOver => self.finish(),
            // Rejected action: the turn is still the player's and
            // nothing gets scheduled.
            TurnPhase::PlayerTurn => {}
        }
    }

    /// Schedules the deferred enemy response. Only one timer is ever
    /// pending: a fresh schedule supersedes the previous one.
    fn schedule_enemy_turn(&self) {
        self.shared.cancel_enemy_timer();

        let shared = Arc::clone(&self.shared);
        let delay = self.options.enemy_delay;
        let task = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if shared.resolve_enemy_turn().is_none() {
                debug!("deferred enemy turn fired after battle end; ignored");
            }
        });

        lock(&self.shared.pending_enemy_turn).replace(EnemyTurnTimer {
            handle: task.abort_handle(),
        });
    }

    fn finish(&self) {
        self.shared.cancel_enemy_timer();
        if let Some(outcome) = lock(&self.shared.battle).outcome().cloned() {
            events::publish(&self.shared.events, BattleEvent::BattleEnded { outcome });
        }
    }

    // ========================================================================
    // State accessors
    // ========================================================================

    pub fn phase(&self) -> TurnPhase {
        lock(&self.shared.battle).phase()
    }

    pub fn player(&self) -> Combatant {
        lock(&self.shared.battle).player().clone()
    }

    pub fn enemy(&self) -> Combatant {
        lock(&self.shared.battle).enemy().clone()
    }

    pub fn is_over(&self) -> bool {
        lock(&self.shared.battle).is_over()
    }

    pub fn outcome(&self) -> Option<BattleOutcome> {
        lock(&self.shared.battle).outcome().cloned()
    }
}

impl Drop for EncounterSession {
    /// Tearing the session down with a deferred enemy turn pending
    /// must not fire it against freed state.
    fn drop(&mut self) {
        self.shared.cancel_enemy_timer();
    }
}

fn hero_combatant(heroes: &[HeroRecord], id: &CombatantId) -> Result<Combatant> {
    let record = heroes
        .iter()
        .find(|hero| hero.id == id.as_str())
        .cloned()
        .ok_or_else(|| SessionError::HeroNotFound(id.clone()))?;
    Ok(record.into_combatant()?)
}

/// Locks a mutex, recovering the guard if a holder panicked.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
