// Proptest generators for domain types.

use proptest::prelude::*;

use crate::domain::{CommandPlaceWord, Orientation, Position, BOARD_SIZE, RACK_SIZE};

pub fn orientation() -> impl Strategy<Value = Orientation> {
    prop_oneof![Just(Orientation::Horizontal), Just(Orientation::Vertical)]
}

/// Any on-board square.
pub fn position() -> impl Strategy<Value = Position> {
    (0..BOARD_SIZE, 0..BOARD_SIZE).prop_map(|(row, column)| Position::new(row, column))
}

/// Lowercase word of 1 to 15 letters.
pub fn lowercase_word() -> impl Strategy<Value = String> {
    "[a-z]{1,15}"
}

/// Placement command that may or may not fit on the board.
pub fn place_command() -> impl Strategy<Value = CommandPlaceWord> {
    (position(), orientation(), lowercase_word()).prop_map(|(start, orientation, word)| {
        let row = (b'a' + start.row as u8) as char;
        let col = start.column as u8 + 1;
        CommandPlaceWord::new(row, col, orientation.as_char(), &word)
            .expect("generated command is well formed")
    })
}

/// Placement command that fits on the board and needs at most a full rack.
pub fn fitting_place_command() -> impl Strategy<Value = CommandPlaceWord> {
    (orientation(), 1usize..=RACK_SIZE).prop_flat_map(|(orientation, len)| {
        let max_start = BOARD_SIZE - len;
        (
            0..BOARD_SIZE,
            0..=max_start,
            proptest::string::string_regex(&format!("[a-z]{{{len}}}"))
                .expect("valid regex"),
        )
            .prop_map(move |(fixed, along, word)| {
                let (row, column) = match orientation {
                    Orientation::Horizontal => (fixed, along),
                    Orientation::Vertical => (along, fixed),
                };
                CommandPlaceWord::new(
                    (b'a' + row as u8) as char,
                    column as u8 + 1,
                    orientation.as_char(),
                    &word,
                )
                .expect("generated command is well formed")
            })
    })
}
