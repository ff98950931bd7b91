//! RNG construction and seed derivation for deterministic games.
//!
//! Every room owns its RNG. With a configured base seed each room derives its
//! own seed from it, so replaying a server run with the same seed and the same
//! command sequence reproduces every draw.

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Randomness source owned by a game.
pub type GameRng = Box<dyn RngCore + Send>;

/// Derive the seed for one room from the server's base seed.
///
/// Same base and room always give the same seed; different rooms differ.
pub fn derive_room_seed(base_seed: u64, room_id: u64) -> u64 {
    base_seed
        .wrapping_add(room_id.wrapping_mul(1_000_003))
        .wrapping_add(1)
}

/// Seeded RNG when `seed` is set, OS-seeded otherwise.
pub fn game_rng(seed: Option<u64>) -> GameRng {
    match seed {
        Some(seed) => Box::new(ChaCha8Rng::seed_from_u64(seed)),
        None => Box::new(ChaCha8Rng::from_os_rng()),
    }
}
