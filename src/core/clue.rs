//! The active clue of a turn.

use serde::{Deserialize, Serialize};

use super::color::TeamColor;
use crate::error::GameError;

/// A one-word clue plus a number, bound to the team that gave it.
///
/// `guesses_remaining` starts at `number + 1` unless overridden and never
/// drops below zero.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clue {
    word: String,
    number: u32,
    team: TeamColor,
    guesses_remaining: u32,
}

impl Clue {
    /// Create a clue from already-validated data.
    ///
    /// Panics if `number` is zero or `word` is blank. Use [`Clue::try_new`]
    /// for unvalidated input. The allowance saturates at `u32::MAX`.
    #[must_use]
    pub fn new(word: impl Into<String>, number: u32, team: TeamColor) -> Self {
        let word = word.into();
        assert!(number >= 1, "Clue number must be at least 1");
        assert!(!word.trim().is_empty(), "Clue word cannot be empty");

        Self {
            word,
            number,
            team,
            guesses_remaining: number.saturating_add(1),
        }
    }

    /// Create a clue, rejecting a zero number, a number with no room for the
    /// bonus guess, or a blank word.
    pub fn try_new(word: impl Into<String>, number: u32, team: TeamColor) -> Result<Self, GameError> {
        let word = word.into();
        if number < 1 || number.checked_add(1).is_none() {
            return Err(GameError::InvalidClueNumber);
        }
        if word.trim().is_empty() {
            return Err(GameError::EmptyClueWord);
        }
        Ok(Self::new(word, number, team))
    }

    /// Override the guess allowance.
    #[must_use]
    pub fn with_guesses(mut self, guesses: u32) -> Self {
        self.guesses_remaining = guesses;
        self
    }

    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    #[must_use]
    pub fn number(&self) -> u32 {
        self.number
    }

    #[must_use]
    pub fn team(&self) -> TeamColor {
        self.team
    }

    #[must_use]
    pub fn guesses_remaining(&self) -> u32 {
        self.guesses_remaining
    }

    /// Spend one guess and return how many are left.
    pub fn use_guess(&mut self) -> u32 {
        self.guesses_remaining = self.guesses_remaining.saturating_sub(1);
        self.guesses_remaining
    }

    #[must_use]
    pub fn has_guesses_left(&self) -> bool {
        self.guesses_remaining > 0
    }

    /// Default allowance: one bonus guess beyond the clue number.
    #[must_use]
    pub fn max_guesses_allowed(&self) -> u32 {
        self.number.saturating_add(1)
    }
}
