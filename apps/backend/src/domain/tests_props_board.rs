//! Property tests for board placement (pure domain).
//!
//! Properties tested:
//! - Bounds checks agree with the span staying on the board
//! - Placing then removing a word restores the board and the rack
//! - The letters a placement costs are exactly the squares it fills

use proptest::prelude::*;

use crate::domain::{test_gens, test_prelude, Board, Player};

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    #[test]
    fn prop_in_bounds_matches_span(cmd in test_gens::place_command()) {
        let board = Board::new();
        let all_on_board = cmd.span().all(|(p, _)| p.in_bounds());
        prop_assert_eq!(board.is_word_in_bounds(&cmd), all_on_board);
    }

    #[test]
    fn prop_place_then_remove_restores_board(cmd in test_gens::fitting_place_command()) {
        let mut board = Board::new();
        let before = board.clone();
        let mut player = Player::new("ana", "s1", 1);

        let cost = board.find_letters_to_remove(&cmd);
        let placed = board.place_word(&cmd).unwrap();
        prop_assert_eq!(placed.len(), cost.len());
        prop_assert_eq!(board.pending_positions(), placed);

        let snapshot = board.remove_word(&cmd, &mut player);
        prop_assert_eq!(snapshot, "-".repeat(cmd.len()));
        prop_assert_eq!(player.rack(), cost.as_slice());
        prop_assert_eq!(board, before);
    }

    #[test]
    fn prop_placed_word_is_not_new_again(cmd in test_gens::fitting_place_command()) {
        let mut board = Board::new();
        board.place_word(&cmd).unwrap();
        board.confirm_placement();
        prop_assert!(!board.is_new_word(&cmd));
        prop_assert!(board.is_word_correctly_overlapping(&cmd));
        prop_assert!(board.find_letters_to_remove(&cmd).is_empty());
    }
}
