//! Demo binary: random vs random over one session
//!
//! Config comes from the environment (ARENA_MAX_PLIES, ARENA_BOARD_SIZE,
//! ARENA_API_KEY). Set ARENA_HISTORY_PATH to dump the artifact history as
//! JSON after the game.

use chess_arena::{GameConfig, GameOrchestrator, GameSession, RandomProposer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "chess_arena=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = GameConfig::from_env();
    if config.api_key.is_none() {
        tracing::warn!(
            "No API key configured. Set ARENA_API_KEY before wiring model-backed agents."
        );
    }
    tracing::info!(
        max_half_moves = config.max_half_moves,
        board_size = config.board_size,
        "starting game"
    );

    let mut session = GameSession::new(config);
    let mut orchestrator = GameOrchestrator::new(
        Box::new(RandomProposer::new("Agent_White")),
        Box::new(RandomProposer::new("Agent_Black")),
    );
    let report = orchestrator.run(&mut session);

    for line in &report.transcript {
        println!("{line}");
    }
    println!("{}", report.summary());

    if let Ok(path) = std::env::var("ARENA_HISTORY_PATH") {
        let json = serde_json::to_string_pretty(session.history())?;
        std::fs::write(&path, json)?;
        tracing::info!(
            path = %path,
            artifacts = session.history().len(),
            "move history written"
        );
    }

    Ok(())
}
