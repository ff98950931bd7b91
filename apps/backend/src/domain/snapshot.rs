//! Read-only views broadcast to room members.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerInfo {
    pub name: String,
    pub score: i32,
    pub rack_letters_count: usize,
    pub has_quit_after_game_end: bool,
}

/// Turn state as shown to every seat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TurnInfo {
    pub minutes_left: u64,
    pub seconds_left: u64,
    /// `None` before the game starts.
    pub active_player_name: Option<String>,
    pub players: Vec<PlayerInfo>,
    pub letters_in_stash_count: usize,
    pub game_over: bool,
}
