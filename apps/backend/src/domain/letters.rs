//! Letter tiles: regular letters and jokers, their point values and the bag
//! distribution.

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};

use crate::errors::domain::{DomainError, ValidationKind};

/// Symbol used on the rack and in change commands for a joker.
pub const JOKER_SYMBOL: char = '*';

/// A single tile.
///
/// Regular letters are stored uppercase. A joker carries the letter it stands
/// for once it is placed; on the rack (and back in the stash) it is unbound.
/// Jokers never score, whatever they are bound to.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Letter {
    Regular(char),
    Joker(Option<char>),
}

impl Letter {
    /// Regular tile for an ASCII letter (either case).
    pub fn regular(ch: char) -> Result<Self, DomainError> {
        if !ch.is_ascii_alphabetic() {
            return Err(DomainError::validation(
                ValidationKind::InvalidLetter,
                format!("Not a letter: {ch:?}"),
            ));
        }
        Ok(Letter::Regular(ch.to_ascii_uppercase()))
    }

    /// Unbound joker.
    pub const fn joker() -> Self {
        Letter::Joker(None)
    }

    /// Parse a rack symbol: a letter or `*` for a joker.
    pub fn from_rack_symbol(ch: char) -> Result<Self, DomainError> {
        if ch == JOKER_SYMBOL {
            Ok(Letter::joker())
        } else {
            Letter::regular(ch)
        }
    }

    /// Joker bound to `ch`. Regular letters are returned unchanged.
    pub fn bind(self, ch: char) -> Self {
        match self {
            Letter::Joker(_) => Letter::Joker(Some(ch.to_ascii_uppercase())),
            regular => regular,
        }
    }

    /// The tile as it goes back to a rack or the stash (jokers lose their binding).
    pub fn unbound(self) -> Self {
        match self {
            Letter::Joker(_) => Letter::joker(),
            regular => regular,
        }
    }

    /// Character the tile reads as on the board (uppercase).
    pub fn effective_char(&self) -> Option<char> {
        match *self {
            Letter::Regular(ch) => Some(ch),
            Letter::Joker(bound) => bound,
        }
    }

    pub fn is_joker(&self) -> bool {
        matches!(self, Letter::Joker(_))
    }

    /// Point value. Jokers are worth nothing.
    pub fn points(&self) -> u32 {
        match *self {
            Letter::Regular(ch) => letter_value(ch),
            Letter::Joker(_) => 0,
        }
    }

    /// Whether this rack tile satisfies a requirement (a regular letter or any joker).
    pub fn satisfies(&self, wanted: &Letter) -> bool {
        match (self, wanted) {
            (Letter::Joker(_), Letter::Joker(_)) => true,
            (Letter::Regular(a), Letter::Regular(b)) => a == b,
            _ => false,
        }
    }
}

impl Display for Letter {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Letter::Regular(ch) => write!(f, "{ch}"),
            Letter::Joker(None) => write!(f, "{JOKER_SYMBOL}"),
            Letter::Joker(Some(ch)) => write!(f, "{}", ch.to_ascii_lowercase()),
        }
    }
}

/// Point value of a regular letter (French tile values).
pub fn letter_value(ch: char) -> u32 {
    match ch.to_ascii_uppercase() {
        'A' | 'E' | 'I' | 'L' | 'N' | 'O' | 'R' | 'S' | 'T' | 'U' => 1,
        'D' | 'G' | 'M' => 2,
        'B' | 'C' | 'P' => 3,
        'F' | 'H' | 'V' => 4,
        'J' | 'Q' => 8,
        'K' | 'W' | 'X' | 'Y' | 'Z' => 10,
        _ => 0,
    }
}

/// Initial bag contents: (tile, count). 102 tiles including two jokers.
pub const DISTRIBUTION: [(Letter, u8); 27] = [
    (Letter::Regular('A'), 9),
    (Letter::Regular('B'), 2),
    (Letter::Regular('C'), 2),
    (Letter::Regular('D'), 3),
    (Letter::Regular('E'), 15),
    (Letter::Regular('F'), 2),
    (Letter::Regular('G'), 2),
    (Letter::Regular('H'), 2),
    (Letter::Regular('I'), 8),
    (Letter::Regular('J'), 1),
    (Letter::Regular('K'), 1),
    (Letter::Regular('L'), 5),
    (Letter::Regular('M'), 3),
    (Letter::Regular('N'), 6),
    (Letter::Regular('O'), 6),
    (Letter::Regular('P'), 2),
    (Letter::Regular('Q'), 1),
    (Letter::Regular('R'), 6),
    (Letter::Regular('S'), 6),
    (Letter::Regular('T'), 6),
    (Letter::Regular('U'), 6),
    (Letter::Regular('V'), 2),
    (Letter::Regular('W'), 1),
    (Letter::Regular('X'), 1),
    (Letter::Regular('Y'), 1),
    (Letter::Regular('Z'), 1),
    (Letter::Joker(None), 2),
];

/// Full bag in distribution order.
pub fn full_bag() -> Vec<Letter> {
    let total: usize = DISTRIBUTION.iter().map(|(_, n)| *n as usize).sum();
    let mut bag = Vec::with_capacity(total);
    for (letter, count) in DISTRIBUTION {
        for _ in 0..count {
            bag.push(letter);
        }
    }
    bag
}

/// Total point value of a set of tiles.
pub fn total_points(letters: &[Letter]) -> u32 {
    letters.iter().map(Letter::points).sum()
}
