use crate::domain::{Board, BonusKind, CommandPlaceWord, Position};

fn cmd(row: char, col: u8, orientation: char, word: &str) -> CommandPlaceWord {
    CommandPlaceWord::new(row, col, orientation, word).unwrap()
}

/// Score the pending placement, consume its bonuses and freeze it.
fn play(board: &mut Board, cmd: &CommandPlaceWord) -> u32 {
    board.place_word(cmd).unwrap();
    let points = board.count_all_new_words_points();
    board.deactivate_used_tiles_bonus();
    board.confirm_placement();
    points
}

#[test]
fn scoring_sequence_with_joker_and_shared_bonus() {
    let mut board = Board::new();

    // Joker L on a double letter scores nothing.
    assert_eq!(play(&mut board, &cmd('d', 8, 'h', "Lame")), 4);

    // sapin (s on a double word, n on a double letter) and the extended
    // lames both use the unconsumed double word at d12.
    assert_eq!(play(&mut board, &cmd('d', 12, 'v', "sapin")), 26);

    // Only i12 is new; every bonus on the run is already consumed.
    assert_eq!(play(&mut board, &cmd('d', 12, 'v', "sapins")), 8);
}

#[test]
fn counting_points_does_not_consume_bonuses() {
    let mut board = Board::new();
    board.place_word(&cmd('h', 8, 'h', "mot")).unwrap();
    assert_eq!(board.count_all_new_words_points(), 8);
    assert_eq!(board.count_all_new_words_points(), 8);
    assert!(!board.tile(Position::CENTER).unwrap().is_bonus_consumed());

    board.deactivate_used_tiles_bonus();
    assert!(board.tile(Position::CENTER).unwrap().is_bonus_consumed());
    assert_eq!(board.count_all_new_words_points(), 4);
}

#[test]
fn triple_word_corner() {
    let mut board = Board::new();
    // a1 triple word, a4 double letter: z on a1 (10), o, o, d on a4 (2*2).
    assert_eq!(
        board.tile(Position::new(0, 0)).unwrap().bonus(),
        BonusKind::TripleWord
    );
    assert_eq!(play(&mut board, &cmd('a', 1, 'h', "zood")), (10 + 1 + 1 + 4) * 3);
}

#[test]
fn no_pending_placement_scores_zero() {
    let mut board = Board::new();
    play(&mut board, &cmd('h', 8, 'h', "mot"));
    assert!(board.new_words().is_empty());
    assert_eq!(board.count_all_new_words_points(), 0);
}
