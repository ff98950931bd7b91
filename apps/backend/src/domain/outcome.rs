//! Closed set of results a player command can produce.

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CommandOutcome {
    Success,
    /// Not this player's turn, or the game has not started.
    Wait,
    /// The player is serving a penalty for an invalid placement.
    Block,
    OutOfBounds,
    IncorrectOverlapping,
    PreexistingWord,
    CentralTile,
    AdjacentTile,
    InvalidWords,
    InsufficientRackLetters,
    StashEmpty,
    StashInsufficientLetters,
    GameOver,
    NoPendingPlacement,
    /// A placement by this player is awaiting confirmation.
    PlacementPending,
    NotInGame,
}

impl CommandOutcome {
    /// Stable machine-readable code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            CommandOutcome::Success => "SUCCESS",
            CommandOutcome::Wait => "WAIT",
            CommandOutcome::Block => "BLOCK",
            CommandOutcome::OutOfBounds => "OUT_OF_BOUNDS",
            CommandOutcome::IncorrectOverlapping => "INCORRECT_OVERLAPPING",
            CommandOutcome::PreexistingWord => "PREEXISTING_WORD",
            CommandOutcome::CentralTile => "CENTRAL_TILE",
            CommandOutcome::AdjacentTile => "ADJACENT_TILE",
            CommandOutcome::InvalidWords => "INVALID_WORDS",
            CommandOutcome::InsufficientRackLetters => "INSUFFICIENT_RACK_LETTERS",
            CommandOutcome::StashEmpty => "STASH_EMPTY",
            CommandOutcome::StashInsufficientLetters => "STASH_INSUFFICIENT_LETTERS",
            CommandOutcome::GameOver => "GAME_OVER",
            CommandOutcome::NoPendingPlacement => "NO_PENDING_PLACEMENT",
            CommandOutcome::PlacementPending => "PLACEMENT_PENDING",
            CommandOutcome::NotInGame => "NOT_IN_GAME",
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, CommandOutcome::Success)
    }
}

impl Display for CommandOutcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}
