//! Registry and room builders for integration tests.

use std::sync::Arc;
use std::time::{Duration, Instant};

use backend_test_support::words::FIXTURE_WORDS;
use scrabble_backend::config::{GameConfig, TurnPolicy};
use scrabble_backend::domain::{Command, CommandPlaceWord, Letter, Lexicon, RoomId, WordList};
use scrabble_backend::services::RoomRegistry;

pub const TEST_SEED: u64 = 20_240_601;

pub fn fixture_lexicon() -> Arc<dyn Lexicon> {
    Arc::new(WordList::from_words(FIXTURE_WORDS))
}

/// Lexicon that accepts every word, for scenarios driven by random racks.
pub fn permissive_lexicon() -> Arc<dyn Lexicon> {
    Arc::new(|_: &str| true)
}

pub fn seeded_config() -> GameConfig {
    GameConfig {
        rng_seed: Some(TEST_SEED),
        ..GameConfig::default()
    }
}

pub fn fast_config(turn: Duration, tick: Duration) -> GameConfig {
    GameConfig {
        turn_policy: TurnPolicy {
            turn_duration: turn,
            block_penalty: Duration::from_millis(10),
        },
        tick_interval: tick,
        ..seeded_config()
    }
}

/// Registry with one started room seating `names`.
pub fn started_room(
    lexicon: Arc<dyn Lexicon>,
    config: GameConfig,
    names: &[&str],
) -> (Arc<RoomRegistry>, RoomId, Instant) {
    let registry = Arc::new(RoomRegistry::new(lexicon, config));
    let now = Instant::now();
    let mut room_id = 0;
    for (i, name) in names.iter().enumerate() {
        room_id = registry
            .join(name, &format!("socket-{i}"), names.len(), now)
            .expect("join");
    }
    (registry, room_id, now)
}

pub fn active_name(registry: &RoomRegistry, room_id: RoomId) -> String {
    let room = registry.room(room_id).expect("room");
    let game = room.lock();
    game.active_player().expect("active player").name().to_string()
}

/// Single-tile placement at `at` using the first tile on `name`'s rack.
/// Jokers are typed uppercase, so they stand for an `E`.
pub fn first_tile_command(
    registry: &RoomRegistry,
    room_id: RoomId,
    name: &str,
    at: (char, u8),
) -> (Command, Letter) {
    let room = registry.room(room_id).expect("room");
    let game = room.lock();
    let tile = game.player(name).expect("player").rack()[0];
    let typed = match tile {
        Letter::Regular(ch) => ch.to_ascii_lowercase().to_string(),
        Letter::Joker(_) => "E".to_string(),
    };
    let cmd = CommandPlaceWord::new(at.0, at.1, 'h', &typed).expect("command");
    (Command::PlaceWord(cmd), tile)
}
