use std::sync::Arc;

use scrabble_backend::config::GameConfig;
use scrabble_backend::domain::WordList;
use scrabble_backend::services::RoomRegistry;
use tracing::info;

mod telemetry;

#[tokio::main]
async fn main() {
    telemetry::init_tracing();

    let config = match GameConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    let Some(path) = config.dictionary_path.clone() else {
        eprintln!("❌ SCRABBLE_DICTIONARY must point to a word list");
        std::process::exit(1);
    };
    let words = match WordList::load(&path) {
        Ok(words) if !words.is_empty() => words,
        Ok(_) => {
            eprintln!("❌ Dictionary {} is empty", path.display());
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("❌ Failed to load dictionary: {e}");
            std::process::exit(1);
        }
    };

    let registry = Arc::new(RoomRegistry::new(Arc::new(words), config));
    let clock = Arc::clone(&registry).spawn_turn_clock();
    info!(
        tick_ms = registry.config().tick_interval.as_millis() as u64,
        turn_secs = registry.config().turn_policy.turn_duration.as_secs(),
        "Scrabble backend ready"
    );

    if let Err(e) = tokio::signal::ctrl_c().await {
        eprintln!("❌ Failed to listen for shutdown signal: {e}");
    }
    clock.abort();
    info!(rooms = registry.room_count(), "Shutting down");
}
