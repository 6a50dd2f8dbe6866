//! Clue word checks.
//!
//! A clue must be a single well-formed word that does not give away a board
//! word outright. Checks run in order and stop at the first failure:
//!
//! 1. not empty after trimming
//! 2. only letters, hyphens, apostrophes
//! 3. at least 2 characters
//! 4. not a board word (case-insensitive)
//! 5. does not contain, and is not contained in, any board word of 3+ characters
//! 6. does not "rhyme" with a board word
//!
//! The rhyme test is a crude suffix match, not phonetics: two words rhyme if
//! they are identical or both have 4+ characters and share their last 3.
//! Words like "blue" and "through" do not rhyme here; "tower" and "power" do.
//! It is part of the game's rule surface and is kept as is.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Minimum length for clue and board words.
pub const MIN_WORD_LENGTH: usize = 2;

/// Board words shorter than this are ignored by the containment check.
pub const MIN_CONTAINED_LENGTH: usize = 3;

/// Length of the shared suffix that counts as a rhyme.
pub const RHYME_SUFFIX_LENGTH: usize = 3;

/// Both words must be at least this long to rhyme by suffix.
pub const MIN_RHYME_LENGTH: usize = 4;

/// Why a clue word was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum ClueRejection {
    #[display("Clue cannot be empty")]
    Empty,
    #[display("Clue must contain only letters, hyphens, or apostrophes")]
    InvalidCharacters,
    #[display("Clue must be at least 2 characters long")]
    TooShort,
    #[display("Clue cannot be a word that appears on the board")]
    MatchesBoardWord,
    #[display("Clue cannot contain a word that appears on the board")]
    ContainsBoardWord,
    #[display("Clue cannot rhyme with words on the board")]
    RhymesWithBoardWord,
}

fn is_word_char(c: char) -> bool {
    c.is_alphabetic() || c == '-' || c == '\''
}

/// Letters, hyphens and apostrophes only, with at least one letter.
fn has_valid_characters(word: &str) -> bool {
    word.chars().all(is_word_char) && word.chars().any(char::is_alphabetic)
}

/// Check whether a word may appear on a board.
///
/// Same format rules as clues: letters plus hyphen/apostrophe, at least two
/// characters after trimming, not purely numeric.
#[must_use]
pub fn is_valid_game_word(word: &str) -> bool {
    let word = word.trim();
    !word.is_empty() && has_valid_characters(word) && word.chars().count() >= MIN_WORD_LENGTH
}

/// Trim and lowercase for comparisons.
#[must_use]
pub fn normalize(word: &str) -> String {
    word.trim().to_lowercase()
}

/// Simple suffix rhyme. Expects normalized input.
#[must_use]
pub fn words_rhyme(a: &str, b: &str) -> bool {
    if a == b {
        return true;
    }

    a.chars().count() >= MIN_RHYME_LENGTH
        && b.chars().count() >= MIN_RHYME_LENGTH
        && a.chars()
            .rev()
            .take(RHYME_SUFFIX_LENGTH)
            .eq(b.chars().rev().take(RHYME_SUFFIX_LENGTH))
}

/// Either word contains the other. Expects normalized input.
fn contains_either_way(clue: &str, board_word: &str) -> bool {
    board_word.chars().count() >= MIN_CONTAINED_LENGTH
        && (clue.contains(board_word) || board_word.contains(clue))
}

/// Validate a clue word against every word on the board.
///
/// `board_words` should include revealed words: a clue must avoid all of them.
#[instrument(skip(board_words), fields(board_words = board_words.len()))]
pub fn validate_clue_word<S: AsRef<str>>(clue: &str, board_words: &[S]) -> Result<(), ClueRejection> {
    let trimmed = clue.trim();
    if trimmed.is_empty() {
        return Err(ClueRejection::Empty);
    }
    if !has_valid_characters(trimmed) {
        return Err(ClueRejection::InvalidCharacters);
    }
    if trimmed.chars().count() < MIN_WORD_LENGTH {
        return Err(ClueRejection::TooShort);
    }

    let clue = normalize(trimmed);
    let board: Vec<String> = board_words.iter().map(|w| normalize(w.as_ref())).collect();

    if board.iter().any(|w| *w == clue) {
        return Err(ClueRejection::MatchesBoardWord);
    }
    if board.iter().any(|w| contains_either_way(&clue, w)) {
        return Err(ClueRejection::ContainsBoardWord);
    }
    if board.iter().any(|w| words_rhyme(&clue, w)) {
        return Err(ClueRejection::RhymesWithBoardWord);
    }

    Ok(())
}

/// Human-readable list of the clue rules, for help screens.
#[must_use]
pub fn validation_rules() -> &'static [&'static str] {
    &[
        "Clue must be a single word (letters, hyphens, apostrophes only)",
        "Clue must be at least 2 characters long",
        "Clue cannot be a word that appears on the board",
        "Clue cannot contain any board words",
        "Clue cannot rhyme with board words",
    ]
}
