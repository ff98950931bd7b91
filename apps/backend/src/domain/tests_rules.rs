//! Ordered placement checks of the rules engine.

use std::sync::Arc;

use crate::domain::{CommandOutcome, CommandPlaceWord, RulesEngine, WordList};

fn engine() -> RulesEngine {
    RulesEngine::new(Arc::new(WordList::from_words(["mot", "mots", "bac", "ma"])))
}

fn cmd(at: (char, u8, char), word: &str) -> CommandPlaceWord {
    CommandPlaceWord::new(at.0, at.1, at.2, word).unwrap()
}

fn commit(engine: &mut RulesEngine, c: &CommandPlaceWord) {
    engine.board_mut().place_word(c).unwrap();
    engine.board_mut().confirm_placement();
}

#[test]
fn first_word_must_cover_centre() {
    let e = engine();
    assert_eq!(
        e.can_place_word(&cmd(('a', 1, 'h'), "bac"), true),
        Err(CommandOutcome::CentralTile)
    );
    assert_eq!(e.can_place_word(&cmd(('h', 7, 'h'), "mot"), true), Ok(()));
}

#[test]
fn later_words_must_touch_existing_tiles() {
    let mut e = engine();
    commit(&mut e, &cmd(('h', 8, 'h'), "mot"));
    assert_eq!(
        e.can_place_word(&cmd(('a', 1, 'h'), "bac"), false),
        Err(CommandOutcome::AdjacentTile)
    );
    assert_eq!(e.can_place_word(&cmd(('h', 8, 'h'), "mots"), false), Ok(()));
}

#[test]
fn checks_run_in_order() {
    let mut e = engine();
    commit(&mut e, &cmd(('h', 8, 'h'), "mot"));

    // Out of bounds beats everything else.
    assert_eq!(
        e.can_place_word(&cmd(('h', 13, 'h'), "motte"), false),
        Err(CommandOutcome::OutOfBounds)
    );
    assert_eq!(
        e.can_place_word(&cmd(('h', 8, 'h'), "bac"), false),
        Err(CommandOutcome::IncorrectOverlapping)
    );
    assert_eq!(
        e.can_place_word(&cmd(('h', 8, 'h'), "mot"), false),
        Err(CommandOutcome::PreexistingWord)
    );
    // Preexisting is reported even on the opening turn.
    assert_eq!(
        e.can_place_word(&cmd(('h', 8, 'h'), "mo"), true),
        Err(CommandOutcome::PreexistingWord)
    );
}

#[test]
fn dictionary_checks_every_word() {
    let mut e = engine();
    commit(&mut e, &cmd(('h', 8, 'h'), "mot"));
    assert!(e.are_all_words_valid());

    e.board_mut().place_word(&cmd(('h', 8, 'v'), "mx")).unwrap();
    assert!(!e.are_all_words_valid());
    assert_eq!(e.invalid_words(), vec!["mx".to_string()]);
}

#[test]
fn score_and_consume_reports_points_once() {
    let mut e = engine();
    e.board_mut().place_word(&cmd(('h', 8, 'h'), "mot")).unwrap();
    assert_eq!(e.score_and_consume(), 8);
    assert_eq!(e.board().count_all_new_words_points(), 4);
}
