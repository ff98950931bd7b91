//! Board placement primitives: bounds, overlap, adjacency, removal, words.

use crate::domain::{
    Board, BonusKind, CommandPlaceWord, Letter, Orientation, Player, Position, WordList,
};

/// Parse `"h8h"`-style coordinates into a command.
fn cmd(at: &str, word: &str) -> CommandPlaceWord {
    let row = at.chars().next().unwrap();
    let orientation = at.chars().last().unwrap();
    let column: u8 = at[1..at.len() - 1].parse().unwrap();
    CommandPlaceWord::new(row, column, orientation, word).unwrap()
}

fn place(board: &mut Board, at: &str, word: &str) {
    board.place_word(&cmd(at, word)).unwrap();
    board.confirm_placement();
}

#[test]
fn premium_layout_is_symmetric() {
    let board = Board::new();
    assert_eq!(board.tile(Position::new(0, 0)).unwrap().bonus(), BonusKind::TripleWord);
    assert_eq!(board.tile(Position::CENTER).unwrap().bonus(), BonusKind::DoubleWord);
    assert_eq!(board.tile(Position::new(1, 5)).unwrap().bonus(), BonusKind::TripleLetter);
    assert_eq!(board.tile(Position::new(0, 3)).unwrap().bonus(), BonusKind::DoubleLetter);
    for row in 0..15 {
        for column in 0..15 {
            let a = board.tile(Position::new(row, column)).unwrap().bonus();
            let b = board.tile(Position::new(14 - row, column)).unwrap().bonus();
            let c = board.tile(Position::new(column, row)).unwrap().bonus();
            assert_eq!(a, b, "vertical mirror at {row},{column}");
            assert_eq!(a, c, "diagonal mirror at {row},{column}");
        }
    }
}

#[test]
fn words_must_fit_on_the_board() {
    let board = Board::new();
    assert!(!board.is_word_in_bounds(&cmd("a13h", "TEST")));
    assert!(!board.is_word_in_bounds(&cmd("n1v", "TEST")));
    assert!(board.is_word_in_bounds(&cmd("a1h", "TRIDIMENSIONNEL")));
    assert!(board.is_word_in_bounds(&cmd("a1v", "TRIDIMENSIONNEL")));
}

#[test]
fn place_then_remove_returns_only_pending_tiles() {
    let mut board = Board::new();
    let mut player = Player::new("ana", "s1", 1);

    place(&mut board, "a1h", "Bac");
    let second = cmd("a1h", "bacsL");
    let placed = board.place_word(&second).unwrap();
    assert_eq!(placed, vec![Position::new(0, 3), Position::new(0, 4)]);

    let snapshot = board.remove_word(&second, &mut player);
    assert_eq!(snapshot, "bac--");
    assert_eq!(player.rack(), &[Letter::Regular('S'), Letter::joker()]);
    assert!(board.tile(Position::new(0, 3)).unwrap().is_empty());
    assert_eq!(
        board.tile(Position::new(0, 0)).unwrap().letter(),
        Some(Letter::joker().bind('B'))
    );
    assert!(board.pending_positions().is_empty());
}

#[test]
fn place_word_rejects_bad_spans() {
    let mut board = Board::new();
    assert!(board.place_word(&cmd("a13h", "TEST")).is_err());
    place(&mut board, "a1h", "bac");
    assert!(board.place_word(&cmd("a1h", "tomate")).is_err());
    assert!(board.tile(Position::new(0, 3)).unwrap().is_empty());
}

#[test]
fn place_word_freezes_earlier_pending_tiles() {
    let mut board = Board::new();
    let mut player = Player::new("ana", "s1", 1);
    board.place_word(&cmd("h8h", "mot")).unwrap();
    board.place_word(&cmd("h8v", "mur")).unwrap();

    board.remove_word(&cmd("h8h", "mot"), &mut player);
    assert!(player.is_rack_empty());
    assert!(!board.tile(Position::new(7, 9)).unwrap().is_empty());
}

#[test]
fn letters_to_remove_skip_occupied_squares() {
    let mut board = Board::new();

    let bac = cmd("a1v", "Bac");
    assert_eq!(
        board.find_letters_to_remove(&bac),
        vec![Letter::joker().bind('B'), Letter::Regular('A'), Letter::Regular('C')]
    );
    place(&mut board, "a1v", "Bac");

    let chat = cmd("c1h", "chat");
    assert_eq!(
        board.find_letters_to_remove(&chat),
        vec![Letter::Regular('H'), Letter::Regular('A'), Letter::Regular('T')]
    );
    place(&mut board, "c1h", "chat");

    let tennis = cmd("c4v", "tennis");
    assert_eq!(
        board.find_letters_to_remove(&tennis),
        ['E', 'N', 'N', 'I', 'S'].map(Letter::Regular).to_vec()
    );
    place(&mut board, "c4v", "tennis");

    assert!(!board.is_word_correctly_overlapping(&cmd("a1h", "tomate")));
    assert_eq!(
        board.find_letters_to_remove(&cmd("c1h", "chatte")),
        vec![Letter::Regular('T'), Letter::Regular('E')]
    );
}

#[test]
fn overlap_ignores_case_of_typed_letter() {
    let mut board = Board::new();
    place(&mut board, "h8h", "Mot");
    assert!(board.is_word_correctly_overlapping(&cmd("h8h", "mots")));
    assert!(board.is_word_correctly_overlapping(&cmd("h8h", "MOTS")));
}

#[test]
fn new_word_needs_an_empty_square() {
    let mut board = Board::new();
    assert!(board.is_new_word(&cmd("a1v", "boNjour")));
    place(&mut board, "a1v", "boNjour");
    assert!(!board.is_new_word(&cmd("a1v", "bonjour")));
    assert!(board.is_new_word(&cmd("a1v", "BOnjourS")));
}

#[test]
fn central_square_detection() {
    let board = Board::new();
    for (at, word) in [
        ("h1h", "abcdefghijklmno"),
        ("a8v", "abcdefghijklmno"),
        ("h8h", "a"),
        ("h8v", "a"),
        ("h1h", "abcdefgh"),
        ("h8h", "abcdefgh"),
        ("a8v", "abcdefgh"),
        ("h8v", "abcdefgh"),
    ] {
        assert!(board.is_word_overlapping_central_tile(&cmd(at, word)), "{at} {word}");
    }
    for (at, word) in [("a1v", "Bac"), ("a1h", "abcdefgh"), ("a1v", "abcdefgh")] {
        assert!(!board.is_word_overlapping_central_tile(&cmd(at, word)), "{at} {word}");
    }
}

#[test]
fn adjacency_after_first_word() {
    let mut board = Board::new();
    place(&mut board, "a1h", "Bac");
    assert!(!board.is_word_adjacent_to_another(&cmd("a5h", "bac")));
    assert!(!board.is_word_adjacent_to_another(&cmd("c1h", "bac")));
    assert!(board.is_word_adjacent_to_another(&cmd("a1h", "bacs")));
    assert!(board.is_word_adjacent_to_another(&cmd("a4v", "bac")));
}

#[test]
fn adjacency_is_orthogonal_only() {
    let mut board = Board::new();
    place(&mut board, "h8h", "a");
    for (at, word) in [("g7v", "d"), ("g9h", "d"), ("i7h", "d"), ("i9v", "d"), ("h8h", "c")] {
        assert!(!board.is_word_adjacent_to_another(&cmd(at, word)), "{at} {word}");
    }
    for (at, word) in [("g8v", "b"), ("i8h", "b"), ("h7h", "b"), ("h9v", "b")] {
        assert!(board.is_word_adjacent_to_another(&cmd(at, word)), "{at} {word}");
    }
}

#[test]
fn horizontal_words_are_validated() {
    let lexicon = WordList::from_words(["bac", "bacs", "con", "cons", "sons"]);
    let mut board = Board::new();
    let mut player = Player::new("ana", "s1", 1);

    place(&mut board, "a1h", "Bac");
    assert!(board.are_all_words_valid(&lexicon));

    let bacz = cmd("a1h", "Bacz");
    board.place_word(&bacz).unwrap();
    assert!(!board.are_all_words_valid(&lexicon));
    assert_eq!(board.invalid_words(&lexicon), vec!["bacz".to_string()]);
    board.remove_word(&bacz, &mut player);

    for (at, word) in [("a1h", "bacs"), ("o1h", "Bac"), ("a12h", "con"), ("a15v", "sons")] {
        place(&mut board, at, word);
        assert!(board.are_all_words_valid(&lexicon), "after {at} {word}");
    }
}

#[test]
fn vertical_words_read_top_down() {
    let mut board = Board::new();
    place(&mut board, "a1v", "bac");
    place(&mut board, "d1h", "son");

    let words: Vec<String> = board.words().into_iter().map(|w| w.text).collect();
    assert_eq!(words, vec!["son".to_string(), "bacs".to_string()]);

    assert!(board.are_all_words_valid(&WordList::from_words(["bacs", "son"])));
    assert!(!board.are_all_words_valid(&WordList::from_words(["bac", "son"])));
}

#[test]
fn single_letters_are_not_words() {
    let mut board = Board::new();
    place(&mut board, "h8h", "a");
    assert!(board.words().is_empty());
    assert!(board.are_all_words_valid(&WordList::default()));
}

#[test]
fn new_words_include_perpendicular_runs() {
    let mut board = Board::new();
    place(&mut board, "h8h", "mot");
    board.place_word(&cmd("g10v", "pts")).unwrap();

    let words = board.new_words();
    let texts: Vec<&str> = words.iter().map(|w| w.text.as_str()).collect();
    assert_eq!(texts, vec!["pts"]);
    assert_eq!(words[0].orientation, Orientation::Vertical);
}
