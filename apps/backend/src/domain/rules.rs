//! Placement legality on top of the board and a lexicon.

use std::fmt;
use std::sync::Arc;

use crate::domain::board::Board;
use crate::domain::commands::CommandPlaceWord;
use crate::domain::lexicon::Lexicon;
use crate::domain::outcome::CommandOutcome;

/// Board plus dictionary for one game.
#[derive(Clone)]
pub struct RulesEngine {
    board: Board,
    lexicon: Arc<dyn Lexicon>,
}

impl fmt::Debug for RulesEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RulesEngine")
            .field("board", &self.board)
            .finish_non_exhaustive()
    }
}

impl RulesEngine {
    pub fn new(lexicon: Arc<dyn Lexicon>) -> Self {
        Self {
            board: Board::new(),
            lexicon,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn lexicon(&self) -> &dyn Lexicon {
        self.lexicon.as_ref()
    }

    /// Structural checks for a placement, in order. The first failure wins.
    ///
    /// The opening placement must cover the centre square; every later one
    /// must touch an existing tile. Dictionary checks happen after placing.
    pub fn can_place_word(
        &self,
        cmd: &CommandPlaceWord,
        is_first_turn: bool,
    ) -> Result<(), CommandOutcome> {
        if !self.board.is_word_in_bounds(cmd) {
            return Err(CommandOutcome::OutOfBounds);
        }
        if !self.board.is_word_correctly_overlapping(cmd) {
            return Err(CommandOutcome::IncorrectOverlapping);
        }
        if !self.board.is_new_word(cmd) {
            return Err(CommandOutcome::PreexistingWord);
        }
        if is_first_turn {
            if !self.board.is_word_overlapping_central_tile(cmd) {
                return Err(CommandOutcome::CentralTile);
            }
        } else if !self.board.is_word_adjacent_to_another(cmd) {
            return Err(CommandOutcome::AdjacentTile);
        }
        Ok(())
    }

    pub fn are_all_words_valid(&self) -> bool {
        self.board.are_all_words_valid(self.lexicon.as_ref())
    }

    pub fn invalid_words(&self) -> Vec<String> {
        self.board.invalid_words(self.lexicon.as_ref())
    }

    /// Score the pending placement, then consume the premium squares it used.
    pub fn score_and_consume(&mut self) -> u32 {
        let points = self.board.count_all_new_words_points();
        self.board.deactivate_used_tiles_bonus();
        points
    }
}
