//! Scripted fixture encounter, printed to stdout.
//!
//! Runs Aldric against DeltaNight from the embedded fixtures and lets
//! the enemy respond through the deferred timer, the same way a UI
//! frontend would drive a session.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;

use battle_core::{EncounterConfig, Rewards, TurnPhase};
use battle_runtime::{BattleEvent, EncounterSession, FixtureRecordSource, SessionOptions};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("battle_runtime=debug".parse()?),
        )
        .init();

    let source = Arc::new(FixtureRecordSource::new()?);
    let config = EncounterConfig::new("hero-aldric", "hero-deltanight")
        .with_rewards(Rewards::new(200, 50));
    let options = SessionOptions {
        enemy_delay: Duration::from_millis(500),
        ..SessionOptions::default()
    };

    let session = EncounterSession::begin(source, config, options).await?;
    let mut events = session.subscribe();

    let printer = tokio::spawn(async move {
        while let Ok(event) = events.recv().await {
            match event {
                BattleEvent::Narration(message) => println!("  {message}"),
                BattleEvent::TurnResolved { phase, damage } => {
                    if let Some(damage) = damage {
                        println!("  ({damage} damage, now: {phase})");
                    }
                }
                BattleEvent::BattleEnded { outcome } => {
                    println!(
                        "== winner {} | +{} xp, +{} gold ==",
                        outcome.winner, outcome.rewards.experience, outcome.rewards.currency
                    );
                }
                BattleEvent::ItemConsumed { id } => println!("  (consumed {id})"),
            }
        }
    });

    let skills = session.available_skills();
    println!(
        "{} vs {} | skills: {:?}",
        session.player().name(),
        session.enemy().name(),
        skills.iter().map(|s| s.name.clone()).collect::<Vec<_>>()
    );

    // Open with a buff, then trade blows until one side falls.
    if let Some(first) = skills.first() {
        session.player_skill(&first.id);
    }
    while !session.is_over() {
        if session.phase() == TurnPhase::PlayerTurn {
            session.player_attack();
        }
        tokio::time::sleep(Duration::from_millis(100)).await;
    }

    drop(session);
    printer.await?;
    Ok(())
}
