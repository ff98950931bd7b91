//! Player actions as validated value objects.
//!
//! Raw chat syntax (`!placer h8h mot`) is parsed elsewhere; by the time a
//! command reaches this crate it has a well-formed shape, and the constructors
//! here only re-check the invariants the rules engine relies on.

use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::domain::board::BOARD_SIZE;
use crate::domain::letters::Letter;
use crate::domain::player::RACK_SIZE;
use crate::errors::domain::{DomainError, ValidationKind};

/// Board coordinate, 0-based. Spans may run past the board edge, so the
/// coordinates are not bounds-checked here.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Position {
    pub row: usize,
    pub column: usize,
}

impl Position {
    /// The centre square (h8).
    pub const CENTER: Position = Position { row: 7, column: 7 };

    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    pub fn in_bounds(&self) -> bool {
        self.row < BOARD_SIZE && self.column < BOARD_SIZE
    }

    /// Neighbour one step along `orientation` (forward when `forward`).
    pub fn step(&self, orientation: Orientation, forward: bool) -> Option<Position> {
        let (row, column) = match (orientation, forward) {
            (Orientation::Horizontal, true) => (Some(self.row), self.column.checked_add(1)),
            (Orientation::Horizontal, false) => (Some(self.row), self.column.checked_sub(1)),
            (Orientation::Vertical, true) => (self.row.checked_add(1), Some(self.column)),
            (Orientation::Vertical, false) => (self.row.checked_sub(1), Some(self.column)),
        };
        let pos = Position::new(row?, column?);
        pos.in_bounds().then_some(pos)
    }

    /// The four orthogonal neighbours that lie on the board.
    pub fn neighbours(&self) -> impl Iterator<Item = Position> + '_ {
        [Orientation::Horizontal, Orientation::Vertical]
            .into_iter()
            .flat_map(move |o| [self.step(o, false), self.step(o, true)])
            .flatten()
    }
}

impl Display for Position {
    /// Board notation: row letter then 1-based column (`h8`).
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let row = (b'a' + self.row as u8) as char;
        write!(f, "{row}{}", self.column + 1)
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Orientation {
    /// Word runs along a row (increasing column).
    Horizontal,
    /// Word runs down a column (increasing row).
    Vertical,
}

impl Orientation {
    pub fn from_char(ch: char) -> Result<Self, DomainError> {
        match ch.to_ascii_lowercase() {
            'h' => Ok(Orientation::Horizontal),
            'v' => Ok(Orientation::Vertical),
            _ => Err(DomainError::validation(
                ValidationKind::InvalidOrientation,
                format!("Orientation must be 'h' or 'v', got {ch:?}"),
            )),
        }
    }

    pub fn perpendicular(self) -> Self {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Orientation::Horizontal => 'h',
            Orientation::Vertical => 'v',
        }
    }
}

/// `!placer`: write `word` starting at `start` along `orientation`.
///
/// In `word`, a lowercase character on an empty square takes a regular tile
/// from the rack; an uppercase character on an empty square takes a joker
/// and binds it to that letter. Characters landing on occupied squares must
/// match the letter already there, case-insensitively.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct CommandPlaceWord {
    start: Position,
    orientation: Orientation,
    word: String,
}

impl CommandPlaceWord {
    /// Build from board notation: row `'a'..='o'`, column `1..=15`, `'h'|'v'`.
    pub fn new(
        start_row: char,
        start_column: u8,
        orientation: char,
        word: &str,
    ) -> Result<Self, DomainError> {
        let row_ch = start_row.to_ascii_lowercase();
        if !('a'..='o').contains(&row_ch) {
            return Err(DomainError::validation(
                ValidationKind::InvalidPosition,
                format!("Row must be between 'a' and 'o', got {start_row:?}"),
            ));
        }
        if !(1..=BOARD_SIZE as u8).contains(&start_column) {
            return Err(DomainError::validation(
                ValidationKind::InvalidPosition,
                format!("Column must be between 1 and 15, got {start_column}"),
            ));
        }
        let orientation = Orientation::from_char(orientation)?;

        let len = word.chars().count();
        if !(1..=BOARD_SIZE).contains(&len) {
            return Err(DomainError::validation(
                ValidationKind::InvalidWord,
                format!("Word must have 1 to 15 letters, got {len}"),
            ));
        }
        if !word.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(DomainError::validation(
                ValidationKind::InvalidWord,
                format!("Word must only contain letters: {word:?}"),
            ));
        }

        Ok(Self {
            start: Position::new((row_ch as u8 - b'a') as usize, start_column as usize - 1),
            orientation,
            word: word.to_string(),
        })
    }

    pub fn start(&self) -> Position {
        self.start
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn len(&self) -> usize {
        self.word.len()
    }

    pub fn is_empty(&self) -> bool {
        self.word.is_empty()
    }

    /// Positions covered by the word, paired with the typed character.
    /// Positions may lie off the board.
    pub fn span(&self) -> impl Iterator<Item = (Position, char)> + '_ {
        self.word.chars().enumerate().map(move |(i, ch)| {
            let pos = match self.orientation {
                Orientation::Horizontal => Position::new(self.start.row, self.start.column + i),
                Orientation::Vertical => Position::new(self.start.row + i, self.start.column),
            };
            (pos, ch)
        })
    }

    /// Last position of the span.
    pub fn end(&self) -> Position {
        let last = self.word.len().saturating_sub(1);
        match self.orientation {
            Orientation::Horizontal => Position::new(self.start.row, self.start.column + last),
            Orientation::Vertical => Position::new(self.start.row + last, self.start.column),
        }
    }
}

impl Display for CommandPlaceWord {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}{} {}", self.start, self.orientation.as_char(), self.word)
    }
}

/// `!changer`: swap the listed rack tiles for fresh draws.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct CommandChangeLetter {
    letters: Vec<Letter>,
}

impl CommandChangeLetter {
    /// Parse rack symbols: letters, or `*` for a joker. 1 to 7 symbols.
    pub fn new(symbols: &str) -> Result<Self, DomainError> {
        let letters = symbols
            .chars()
            .map(Letter::from_rack_symbol)
            .collect::<Result<Vec<_>, _>>()?;
        if letters.is_empty() || letters.len() > RACK_SIZE {
            return Err(DomainError::validation(
                ValidationKind::InvalidWord,
                format!("Exchange must name 1 to {RACK_SIZE} letters, got {}", letters.len()),
            ));
        }
        Ok(Self { letters })
    }

    pub fn letters(&self) -> &[Letter] {
        &self.letters
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum CommandType {
    Placer,
    Changer,
    Passer,
    Aide,
}

/// A player action bound for the turn orchestrator.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Command {
    PlaceWord(CommandPlaceWord),
    ChangeLetter(CommandChangeLetter),
    Pass,
    Help,
}

impl Command {
    pub fn command_type(&self) -> CommandType {
        match self {
            Command::PlaceWord(_) => CommandType::Placer,
            Command::ChangeLetter(_) => CommandType::Changer,
            Command::Pass => CommandType::Passer,
            Command::Help => CommandType::Aide,
        }
    }
}
