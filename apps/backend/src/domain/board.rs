//! The 15×15 board: premium squares, placement primitives, word extraction
//! and scoring.
//!
//! Tiles written by the current, not-yet-confirmed placement are *pending*
//! (`can_remove_letter`). Only pending tiles can be taken back; once a
//! placement is confirmed its tiles are permanent.

use serde::{Deserialize, Serialize};

use crate::domain::commands::{CommandPlaceWord, Orientation, Position};
use crate::domain::letters::Letter;
use crate::domain::lexicon::Lexicon;
use crate::domain::player::Player;
use crate::errors::domain::{DomainError, ValidationKind};

pub const BOARD_SIZE: usize = 15;

/// Premium square layout, one string per row.
/// `T` triple word, `D` double word, `t` triple letter, `d` double letter.
const LAYOUT: [&str; BOARD_SIZE] = [
    "T..d...T...d..T",
    ".D...t...t...D.",
    "..D...d.d...D..",
    "d..D...d...D..d",
    "....D.....D....",
    ".t...t...t...t.",
    "..d...d.d...d..",
    "T..d...D...d..T",
    "..d...d.d...d..",
    ".t...t...t...t.",
    "....D.....D....",
    "d..D...d...D..d",
    "..D...d.d...D..",
    ".D...t...t...D.",
    "T..d...T...d..T",
];

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum BonusKind {
    Basic,
    DoubleLetter,
    TripleLetter,
    DoubleWord,
    TripleWord,
}

impl BonusKind {
    fn from_layout(ch: char) -> Self {
        match ch {
            'T' => BonusKind::TripleWord,
            'D' => BonusKind::DoubleWord,
            't' => BonusKind::TripleLetter,
            'd' => BonusKind::DoubleLetter,
            _ => BonusKind::Basic,
        }
    }

    pub fn letter_multiplier(self) -> u32 {
        match self {
            BonusKind::DoubleLetter => 2,
            BonusKind::TripleLetter => 3,
            _ => 1,
        }
    }

    pub fn word_multiplier(self) -> u32 {
        match self {
            BonusKind::DoubleWord => 2,
            BonusKind::TripleWord => 3,
            _ => 1,
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct BoardTile {
    position: Position,
    bonus: BonusKind,
    occupant: Option<Letter>,
    can_remove_letter: bool,
    bonus_consumed: bool,
}

impl BoardTile {
    fn new(position: Position, bonus: BonusKind) -> Self {
        Self {
            position,
            bonus,
            occupant: None,
            can_remove_letter: false,
            bonus_consumed: false,
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn bonus(&self) -> BonusKind {
        self.bonus
    }

    pub fn letter(&self) -> Option<Letter> {
        self.occupant
    }

    pub fn is_empty(&self) -> bool {
        self.occupant.is_none()
    }

    pub fn can_remove_letter(&self) -> bool {
        self.can_remove_letter
    }

    pub fn is_bonus_consumed(&self) -> bool {
        self.bonus_consumed
    }

    fn matches(&self, typed: char) -> bool {
        self.occupant
            .and_then(|l| l.effective_char())
            .is_some_and(|c| c.eq_ignore_ascii_case(&typed))
    }
}

/// A maximal run of at least two occupied squares.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Word {
    pub orientation: Orientation,
    pub positions: Vec<Position>,
    /// Lowercase reading of the run.
    pub text: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    tiles: [[BoardTile; BOARD_SIZE]; BOARD_SIZE],
    /// Orientation of the pending placement, if any.
    pending_orientation: Option<Orientation>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Empty board with the standard premium layout.
    pub fn new() -> Self {
        let tiles = std::array::from_fn(|row| {
            std::array::from_fn(|column| {
                let bonus = LAYOUT[row]
                    .chars()
                    .nth(column)
                    .map(BonusKind::from_layout)
                    .unwrap_or(BonusKind::Basic);
                BoardTile::new(Position::new(row, column), bonus)
            })
        });
        Self {
            tiles,
            pending_orientation: None,
        }
    }

    pub fn tile(&self, pos: Position) -> Option<&BoardTile> {
        self.tiles.get(pos.row)?.get(pos.column)
    }

    fn tile_mut(&mut self, pos: Position) -> Option<&mut BoardTile> {
        self.tiles.get_mut(pos.row)?.get_mut(pos.column)
    }

    fn is_occupied(&self, pos: Position) -> bool {
        self.tile(pos).is_some_and(|t| !t.is_empty())
    }

    pub fn rows(&self) -> impl Iterator<Item = &[BoardTile; BOARD_SIZE]> {
        self.tiles.iter()
    }

    /// Squares written by the placement that has not been confirmed yet.
    pub fn pending_positions(&self) -> Vec<Position> {
        self.tiles
            .iter()
            .flatten()
            .filter(|t| t.can_remove_letter)
            .map(|t| t.position)
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.iter().flatten().all(BoardTile::is_empty)
    }

    // ---------------------------------------------------------------------
    // Placement checks
    // ---------------------------------------------------------------------

    /// The whole span fits on the board.
    pub fn is_word_in_bounds(&self, cmd: &CommandPlaceWord) -> bool {
        cmd.start().in_bounds() && cmd.end().in_bounds()
    }

    /// Every occupied square under the span holds the typed letter.
    pub fn is_word_correctly_overlapping(&self, cmd: &CommandPlaceWord) -> bool {
        cmd.span().all(|(pos, ch)| match self.tile(pos) {
            Some(tile) => tile.is_empty() || tile.matches(ch),
            None => false,
        })
    }

    /// At least one square of the span is empty, i.e. the command adds a tile.
    pub fn is_new_word(&self, cmd: &CommandPlaceWord) -> bool {
        cmd.span()
            .any(|(pos, _)| self.tile(pos).is_some_and(BoardTile::is_empty))
    }

    pub fn is_word_overlapping_central_tile(&self, cmd: &CommandPlaceWord) -> bool {
        cmd.span().any(|(pos, _)| pos == Position::CENTER)
    }

    /// Some square that would receive a new tile touches an occupied square.
    pub fn is_word_adjacent_to_another(&self, cmd: &CommandPlaceWord) -> bool {
        cmd.span()
            .filter(|(pos, _)| self.tile(*pos).is_some_and(BoardTile::is_empty))
            .any(|(pos, _)| pos.neighbours().any(|n| self.is_occupied(n)))
    }

    /// Tiles the player must supply, in placement order. Squares already
    /// holding a letter cost nothing.
    pub fn find_letters_to_remove(&self, cmd: &CommandPlaceWord) -> Vec<Letter> {
        cmd.span()
            .filter(|(pos, _)| self.tile(*pos).is_some_and(BoardTile::is_empty))
            .map(|(_, ch)| letter_for_typed(ch))
            .collect()
    }

    // ---------------------------------------------------------------------
    // Mutation
    // ---------------------------------------------------------------------

    /// Write the command's new tiles. Any tiles still pending from an earlier
    /// placement are frozen first. Returns the squares that received a tile.
    pub fn place_word(&mut self, cmd: &CommandPlaceWord) -> Result<Vec<Position>, DomainError> {
        if !self.is_word_in_bounds(cmd) {
            return Err(DomainError::validation(
                ValidationKind::OutOfBounds,
                format!("{cmd} does not fit on the board"),
            ));
        }
        if !self.is_word_correctly_overlapping(cmd) {
            return Err(DomainError::validation(
                ValidationKind::IncorrectOverlap,
                format!("{cmd} conflicts with letters on the board"),
            ));
        }

        self.confirm_placement();

        let mut placed = Vec::new();
        for (pos, ch) in cmd.span() {
            let Some(tile) = self.tile_mut(pos) else {
                continue;
            };
            if tile.occupant.is_some() {
                continue;
            }
            tile.occupant = Some(letter_for_typed(ch));
            tile.can_remove_letter = true;
            placed.push(pos);
        }

        if !placed.is_empty() {
            self.pending_orientation = Some(cmd.orientation());
        }
        Ok(placed)
    }

    /// Take back the pending tiles under the span and return them to the
    /// player's rack (jokers unbound). Confirmed tiles stay put.
    ///
    /// Returns the command word with every cleared square shown as `-`.
    pub fn remove_word(&mut self, cmd: &CommandPlaceWord, player: &mut Player) -> String {
        let mut snapshot = String::with_capacity(cmd.len());
        let mut returned = Vec::new();

        for (pos, ch) in cmd.span() {
            match self.tile_mut(pos) {
                Some(tile) if tile.can_remove_letter => {
                    if let Some(letter) = tile.occupant.take() {
                        returned.push(letter.unbound());
                    }
                    tile.can_remove_letter = false;
                    snapshot.push('-');
                }
                _ => snapshot.push(ch),
            }
        }

        player.add_letters(returned);
        if self.pending_positions().is_empty() {
            self.pending_orientation = None;
        }
        snapshot
    }

    /// Make the pending tiles permanent.
    pub fn confirm_placement(&mut self) {
        for tile in self.tiles.iter_mut().flatten() {
            tile.can_remove_letter = false;
        }
        self.pending_orientation = None;
    }

    // ---------------------------------------------------------------------
    // Words and scoring
    // ---------------------------------------------------------------------

    /// Every maximal run of two or more letters, rows first, then columns.
    pub fn words(&self) -> Vec<Word> {
        let mut words = Vec::new();
        for orientation in [Orientation::Horizontal, Orientation::Vertical] {
            for line in 0..BOARD_SIZE {
                let mut run = Vec::new();
                for offset in 0..BOARD_SIZE {
                    let pos = match orientation {
                        Orientation::Horizontal => Position::new(line, offset),
                        Orientation::Vertical => Position::new(offset, line),
                    };
                    if self.is_occupied(pos) {
                        run.push(pos);
                    } else {
                        words.extend(self.word_from_run(std::mem::take(&mut run), orientation));
                    }
                }
                words.extend(self.word_from_run(run, orientation));
            }
        }
        words
    }

    pub fn are_all_words_valid(&self, lexicon: &dyn Lexicon) -> bool {
        self.words()
            .iter()
            .all(|w| lexicon.is_valid_word(&w.text))
    }

    /// Words on the board the lexicon rejects.
    pub fn invalid_words(&self, lexicon: &dyn Lexicon) -> Vec<String> {
        self.words()
            .into_iter()
            .filter(|w| !lexicon.is_valid_word(&w.text))
            .map(|w| w.text)
            .collect()
    }

    /// Words completed by the pending placement: the run along the placement's
    /// orientation, plus each perpendicular run through a new tile.
    pub fn new_words(&self) -> Vec<Word> {
        let pending = self.pending_positions();
        let Some(&first) = pending.first() else {
            return Vec::new();
        };
        let main = self.pending_orientation.unwrap_or(Orientation::Horizontal);

        let mut words: Vec<Word> = self.word_through(first, main).into_iter().collect();
        for pos in &pending {
            words.extend(self.word_through(*pos, main.perpendicular()));
        }
        words
    }

    /// Score of the pending placement. Unconsumed premium squares apply to
    /// every new word that crosses them; nothing is consumed here.
    pub fn count_all_new_words_points(&self) -> u32 {
        self.new_words().iter().map(|w| self.score_word(w)).sum()
    }

    /// Consume the premium squares touched by the pending placement's words.
    pub fn deactivate_used_tiles_bonus(&mut self) {
        let mut used: Vec<Position> = self
            .new_words()
            .into_iter()
            .flat_map(|w| w.positions)
            .collect();
        used.extend(self.pending_positions());
        for pos in used {
            if let Some(tile) = self.tile_mut(pos) {
                tile.bonus_consumed = true;
            }
        }
    }

    fn score_word(&self, word: &Word) -> u32 {
        let mut letters = 0;
        let mut multiplier = 1;
        for tile in word.positions.iter().filter_map(|p| self.tile(*p)) {
            let value = tile.occupant.map(|l| l.points()).unwrap_or(0);
            if tile.bonus_consumed {
                letters += value;
            } else {
                letters += value * tile.bonus.letter_multiplier();
                multiplier *= tile.bonus.word_multiplier();
            }
        }
        letters * multiplier
    }

    /// The maximal run through `pos` along `orientation`, if two letters or longer.
    fn word_through(&self, pos: Position, orientation: Orientation) -> Option<Word> {
        if !self.is_occupied(pos) {
            return None;
        }
        let mut start = pos;
        while let Some(prev) = start.step(orientation, false) {
            if !self.is_occupied(prev) {
                break;
            }
            start = prev;
        }
        let mut run = vec![start];
        let mut cursor = start;
        while let Some(next) = cursor.step(orientation, true) {
            if !self.is_occupied(next) {
                break;
            }
            run.push(next);
            cursor = next;
        }
        self.word_from_run(run, orientation)
    }

    fn word_from_run(&self, positions: Vec<Position>, orientation: Orientation) -> Option<Word> {
        if positions.len() < 2 {
            return None;
        }
        let text = positions
            .iter()
            .filter_map(|p| self.tile(*p)?.occupant?.effective_char())
            .map(|c| c.to_ascii_lowercase())
            .collect();
        Some(Word {
            orientation,
            positions,
            text,
        })
    }
}

/// Tile for a character typed on an empty square: uppercase means a joker
/// standing for that letter, lowercase a regular tile.
fn letter_for_typed(ch: char) -> Letter {
    if ch.is_ascii_uppercase() {
        Letter::joker().bind(ch)
    } else {
        Letter::Regular(ch.to_ascii_uppercase())
    }
}
