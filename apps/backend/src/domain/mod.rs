//! Domain layer: pure game rules, no I/O.

pub mod board;
pub mod commands;
pub mod letters;
pub mod lexicon;
pub mod outcome;
pub mod player;
pub mod rules;
pub mod seed_derivation;
pub mod snapshot;
pub mod stash;
pub mod timer;

#[cfg(test)]
mod test_gens;
#[cfg(test)]
mod test_prelude;
#[cfg(test)]
mod tests_board;
#[cfg(test)]
mod tests_props_board;
#[cfg(test)]
mod tests_rules;
#[cfg(test)]
mod tests_scoring;

// Re-exports for ergonomics
pub use board::{Board, BoardTile, BonusKind, Word, BOARD_SIZE};
pub use commands::{
    Command, CommandChangeLetter, CommandPlaceWord, CommandType, Orientation, Position,
};
pub use letters::{Letter, JOKER_SYMBOL};
pub use lexicon::{Lexicon, WordList};
pub use outcome::CommandOutcome;
pub use player::{Player, RoomId, RACK_SIZE};
pub use rules::RulesEngine;
pub use seed_derivation::{derive_room_seed, game_rng, GameRng};
pub use snapshot::{PlayerInfo, TurnInfo};
pub use stash::LetterStash;
pub use timer::TurnTimer;
