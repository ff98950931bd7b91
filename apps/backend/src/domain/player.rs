//! Per-seat player state: rack, score and turn flags.

use crate::domain::letters::{total_points, Letter};
use crate::errors::domain::{DomainError, ValidationKind};

/// Tiles a rack holds between turns.
pub const RACK_SIZE: usize = 7;

pub type RoomId = u64;

#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    name: String,
    socket_id: String,
    room_id: RoomId,
    score: i32,
    rack: Vec<Letter>,
    blocked: bool,
    has_quit: bool,
}

impl Player {
    pub fn new(name: impl Into<String>, socket_id: impl Into<String>, room_id: RoomId) -> Self {
        Self {
            name: name.into(),
            socket_id: socket_id.into(),
            room_id,
            score: 0,
            rack: Vec::with_capacity(RACK_SIZE),
            blocked: false,
            has_quit: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn socket_id(&self) -> &str {
        &self.socket_id
    }

    pub fn room_id(&self) -> RoomId {
        self.room_id
    }

    pub fn score(&self) -> i32 {
        self.score
    }

    pub fn add_points(&mut self, points: i32) {
        self.score += points;
    }

    pub fn subtract_points(&mut self, points: i32) {
        self.score -= points;
    }

    pub fn rack(&self) -> &[Letter] {
        &self.rack
    }

    pub fn is_rack_empty(&self) -> bool {
        self.rack.is_empty()
    }

    /// Point value of the tiles still on the rack.
    pub fn rack_points(&self) -> u32 {
        total_points(&self.rack)
    }

    pub fn add_letters(&mut self, letters: impl IntoIterator<Item = Letter>) {
        self.rack.extend(letters.into_iter().map(Letter::unbound));
        debug_assert!(self.rack.len() <= RACK_SIZE, "rack overflow");
    }

    /// Whether every requested tile is on the rack, counting duplicates.
    pub fn has_letters(&self, wanted: &[Letter]) -> bool {
        let mut available: Vec<Option<Letter>> = self.rack.iter().copied().map(Some).collect();
        wanted.iter().all(|w| {
            match available
                .iter_mut()
                .find(|slot| slot.is_some_and(|l| l.satisfies(w)))
            {
                Some(slot) => {
                    *slot = None;
                    true
                }
                None => false,
            }
        })
    }

    /// Remove the requested tiles, all or nothing. Returns the removed tiles
    /// in request order.
    pub fn remove_letters(&mut self, wanted: &[Letter]) -> Result<Vec<Letter>, DomainError> {
        if !self.has_letters(wanted) {
            let wanted_str: String = wanted.iter().map(|l| l.to_string()).collect();
            return Err(DomainError::validation(
                ValidationKind::LetterNotInRack,
                format!("{} does not hold {wanted_str}", self.name),
            ));
        }
        let mut removed = Vec::with_capacity(wanted.len());
        for w in wanted {
            if let Some(idx) = self.rack.iter().position(|l| l.satisfies(w)) {
                removed.push(self.rack.remove(idx));
            }
        }
        Ok(removed)
    }

    /// Empty the rack, returning its tiles.
    pub fn take_rack(&mut self) -> Vec<Letter> {
        std::mem::take(&mut self.rack)
    }

    pub fn is_blocked(&self) -> bool {
        self.blocked
    }

    pub fn set_blocked(&mut self, blocked: bool) {
        self.blocked = blocked;
    }

    pub fn has_quit(&self) -> bool {
        self.has_quit
    }

    pub fn mark_quit(&mut self) {
        self.has_quit = true;
    }

    /// Clear score, rack and flags before a game starts.
    pub fn reset(&mut self) {
        self.score = 0;
        self.rack.clear();
        self.blocked = false;
        self.has_quit = false;
    }
}
