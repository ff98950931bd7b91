//! Turn orchestrator for one room.
//!
//! A `GameMaster` owns the room's board, stash, players, timer and RNG. All
//! mutation goes through `&mut self`, so the room layer's per-room lock is the
//! only synchronization it needs.
//!
//! Placement is two-phase: [`GameMaster::try_place`] writes the word and
//! parks the game in [`TurnPhase::Validating`]; nothing else happens in the
//! room until the placement is confirmed or reverted.

mod orchestration;
mod player_actions;


use std::sync::Arc;
use std::time::Instant;

use rand::seq::SliceRandom;
use tracing::info;

use crate::config::TurnPolicy;
use crate::domain::{
    Board, CommandPlaceWord, GameRng, LetterStash, Lexicon, Player, PlayerInfo, RoomId,
    RulesEngine, TurnInfo, TurnTimer, RACK_SIZE,
};
use crate::errors::domain::{ConflictKind, DomainError, ValidationKind};

/// Bonus for playing every tile left on the rack in one placement.
pub const FULL_RACK_BONUS: u32 = 50;

/// A placement written to the board and waiting for confirm or revert.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingPlacement {
    ticket: u64,
    seat: usize,
    command: CommandPlaceWord,
    consumed: usize,
    words_valid: bool,
    points: u32,
    /// Set when the placement formed invalid words and the player was blocked.
    blocked_at: Option<Instant>,
}

impl PendingPlacement {
    pub fn command(&self) -> &CommandPlaceWord {
        &self.command
    }

    pub fn words_valid(&self) -> bool {
        self.words_valid
    }

    pub fn points(&self) -> u32 {
        self.points
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TurnPhase {
    /// Seating players; no turns yet.
    Lobby,
    AwaitingCommand,
    Validating(PendingPlacement),
    GameOver,
}

/// Proof of a pending placement. Consumed by `confirm` or `revert`.
#[derive(Debug, PartialEq, Eq)]
#[must_use = "a pending placement must be confirmed or reverted"]
pub struct PlacementHandle {
    ticket: u64,
    words_valid: bool,
    points: u32,
}

impl PlacementHandle {
    pub fn words_valid(&self) -> bool {
        self.words_valid
    }

    /// Score the placement will earn, before the full-rack bonus.
    pub fn points(&self) -> u32 {
        self.points
    }
}

/// Result of a confirmed placement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacementSummary {
    pub player: String,
    pub points: u32,
    pub full_rack_bonus: bool,
    pub letters_drawn: usize,
    pub game_over: bool,
}

/// Something the turn clock did on its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickEvent {
    PlacementReverted { player: String, snapshot: String },
    TurnForfeited { player: String },
}

pub struct GameMaster {
    room_id: RoomId,
    players: Vec<Player>,
    active: usize,
    phase: TurnPhase,
    rules: RulesEngine,
    stash: LetterStash,
    timer: TurnTimer,
    policy: TurnPolicy,
    rng: GameRng,
    is_first_turn: bool,
    next_ticket: u64,
    turns_played: u64,
}

impl GameMaster {
    pub fn new(
        room_id: RoomId,
        lexicon: Arc<dyn Lexicon>,
        policy: TurnPolicy,
        rng: GameRng,
        now: Instant,
    ) -> Self {
        Self {
            room_id,
            players: Vec::new(),
            active: 0,
            phase: TurnPhase::Lobby,
            rules: RulesEngine::new(lexicon),
            stash: LetterStash::new(),
            timer: TurnTimer::new(policy.turn_duration, now),
            policy,
            rng,
            is_first_turn: true,
            next_ticket: 1,
            turns_played: 0,
        }
    }

    pub fn room_id(&self) -> RoomId {
        self.room_id
    }

    pub fn phase(&self) -> &TurnPhase {
        &self.phase
    }

    pub fn is_started(&self) -> bool {
        !matches!(self.phase, TurnPhase::Lobby)
    }

    pub fn is_game_over(&self) -> bool {
        matches!(self.phase, TurnPhase::GameOver)
    }

    pub fn is_first_turn(&self) -> bool {
        self.is_first_turn
    }

    pub fn turns_played(&self) -> u64 {
        self.turns_played
    }

    pub fn board(&self) -> &Board {
        self.rules.board()
    }

    pub fn stash_amount(&self) -> usize {
        self.stash.amount_left()
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, name: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.name() == name)
    }

    /// Player whose turn it is, once the game has started.
    pub fn active_player(&self) -> Option<&Player> {
        match self.phase {
            TurnPhase::Lobby | TurnPhase::GameOver => None,
            _ => self.players.get(self.active),
        }
    }

    /// Active player, or once the game is over the player who moved last.
    fn last_active_player(&self) -> Option<&Player> {
        match self.phase {
            TurnPhase::Lobby => None,
            _ => self.players.get(self.active),
        }
    }

    /// Players still in the game.
    pub fn remaining_players(&self) -> usize {
        self.players.iter().filter(|p| !p.has_quit()).count()
    }

    pub(crate) fn seat_of(&self, name: &str) -> Option<usize> {
        self.players.iter().position(|p| p.name() == name)
    }

    /// Seat a player before the game starts.
    pub fn add_player(&mut self, player: Player) -> Result<(), DomainError> {
        if self.is_started() {
            return Err(DomainError::conflict(
                ConflictKind::GameStarted,
                format!("Room {} already started", self.room_id),
            ));
        }
        if self.seat_of(player.name()).is_some() {
            return Err(DomainError::conflict(
                ConflictKind::NameTaken,
                format!("{} is already seated", player.name()),
            ));
        }
        self.players.push(player);
        Ok(())
    }

    /// Shuffle the seating order, reset every player and deal a full rack
    /// each. Does nothing once the game has started.
    pub fn start_game(&mut self, now: Instant) -> Result<(), DomainError> {
        if self.is_started() {
            return Ok(());
        }
        if self.players.is_empty() {
            return Err(DomainError::validation(
                ValidationKind::InvalidPlayerCount,
                "Cannot start a game without players",
            ));
        }

        self.stash = LetterStash::new();
        self.players.shuffle(&mut *self.rng);
        for player in &mut self.players {
            player.reset();
            let letters = self.stash.pick_letters(RACK_SIZE, &mut *self.rng)?;
            player.add_letters(letters);
        }

        self.active = 0;
        self.is_first_turn = true;
        self.timer.reset(now);
        self.phase = TurnPhase::AwaitingCommand;

        info!(
            room_id = self.room_id,
            players = self.players.len(),
            first = self.players[0].name(),
            "Game started"
        );
        Ok(())
    }

    /// Snapshot for every seat.
    pub fn turn_info(&self, now: Instant) -> TurnInfo {
        let (minutes_left, seconds_left) = match self.phase {
            TurnPhase::GameOver => (0, 0),
            _ => (self.timer.minutes_left(now), self.timer.seconds_left(now)),
        };
        TurnInfo {
            minutes_left,
            seconds_left,
            active_player_name: self.last_active_player().map(|p| p.name().to_string()),
            players: self
                .players
                .iter()
                .map(|p| PlayerInfo {
                    name: p.name().to_string(),
                    score: p.score(),
                    rack_letters_count: p.rack().len(),
                    has_quit_after_game_end: p.has_quit(),
                })
                .collect(),
            letters_in_stash_count: self.stash.amount_left(),
            game_over: self.is_game_over(),
        }
    }
}
