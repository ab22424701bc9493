//! Session integration tests: word lists on disk feeding a full game.

use std::io::Write;

use word_scramble::{
    FixedPicker, RejectionReason, WordList, WordScramble, WordScrambleBuilder, WordSet,
};

fn write_list(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

// =============================================================================
// Loading
// =============================================================================

#[test]
fn test_titles_come_from_file() {
    let file = write_list("silkworm\n\nagitated\n");
    let words = WordList::load(file.path()).unwrap();

    let game = WordScrambleBuilder::new().words(words).build(3).unwrap();
    let title = game.title().unwrap();

    assert!(["silkworm", "agitated"].contains(&title));
}

#[test]
fn test_missing_file_falls_back() {
    let dir = tempfile::tempdir().unwrap();
    let words = WordList::load_or_fallback(dir.path().join("start.txt"), "silkworm");

    let game = WordScrambleBuilder::new().words(words).build(3).unwrap();
    assert_eq!(game.title(), Some("silkworm"));
}

#[test]
fn test_empty_file_falls_back() {
    let file = write_list("\n\n\n");
    let words = WordList::load_or_fallback(file.path(), "silkworm");

    assert!(words.is_fallback());
    assert_eq!(words.words(), &["silkworm".to_string()]);
}

// =============================================================================
// Play
// =============================================================================

#[test]
fn test_play_round_with_separate_dictionary() {
    let start = write_list("silkworm\n");
    let dictionary = write_list("milk\nsilk\nworm\nworms\nlow\n");

    let words = WordList::load(start.path()).unwrap();
    let dictionary = WordList::load(dictionary.path()).unwrap().to_word_set();

    let mut game = WordScramble::new(words, dictionary, FixedPicker::first(), Default::default());
    assert_eq!(game.new_round().unwrap(), "silkworm");

    assert!(game.submit("Milk").unwrap().is_accepted());
    assert!(game.submit("worms").unwrap().is_accepted());
    assert_eq!(game.submit("milk").unwrap().reason(), Some(RejectionReason::NotOriginal));
    assert_eq!(game.submit("silks").unwrap().reason(), Some(RejectionReason::NotPossible));
    assert_eq!(game.submit("ow").unwrap().reason(), Some(RejectionReason::TooShort));
    assert_eq!(game.submit("SilkWorm").unwrap().reason(), Some(RejectionReason::EqualsTitle));
    assert_eq!(game.submit("slim").unwrap().reason(), Some(RejectionReason::NotReal));

    assert_eq!(game.used_words().collect::<Vec<_>>(), vec!["worms", "milk"]);
}

#[test]
fn test_session_before_first_round() {
    let mut game = WordScramble::new(
        WordList::from_lines("cat"),
        WordSet::from_lines("act"),
        FixedPicker::first(),
        Default::default(),
    );

    assert!(game.title().is_none());
    assert!(game.submit("act").is_err());

    game.new_round().unwrap();
    assert!(game.submit("act").unwrap().is_accepted());
}
