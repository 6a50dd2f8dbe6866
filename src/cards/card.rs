//! Board cards and grid positions.

use serde::{Deserialize, Serialize};

use crate::core::color::{CardColor, TeamColor};
use crate::core::config::BOARD_SIZE;
use crate::error::GameError;

/// A (row, column) cell on the 5x5 grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    /// Create a position, rejecting cells outside the grid.
    pub fn new(row: usize, col: usize) -> Result<Self, GameError> {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return Err(GameError::OutOfBounds { row, col });
        }
        Ok(Self { row, col })
    }

    /// Position of the `index`-th card in row-major order.
    ///
    /// `index` must be below 25.
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        Self {
            row: index / BOARD_SIZE,
            col: index % BOARD_SIZE,
        }
    }

    /// Row-major index of this position.
    #[must_use]
    pub const fn index(self) -> usize {
        self.row * BOARD_SIZE + self.col
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A word card with its hidden color.
///
/// `revealed` only ever goes from false to true.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    word: String,
    color: CardColor,
    revealed: bool,
    position: Position,
}

impl Card {
    /// Create an unrevealed card.
    pub fn new(word: impl Into<String>, color: CardColor, position: Position) -> Self {
        Self {
            word: word.into(),
            color,
            revealed: false,
            position,
        }
    }

    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    #[must_use]
    pub fn color(&self) -> CardColor {
        self.color
    }

    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    /// Color visible to players without the key.
    #[must_use]
    pub fn visible_color(&self) -> Option<CardColor> {
        self.revealed.then_some(self.color)
    }

    /// Mark the card revealed and return its color.
    ///
    /// Revealing twice is allowed here and returns the same color.
    pub fn reveal(&mut self) -> CardColor {
        self.revealed = true;
        self.color
    }

    #[must_use]
    pub fn is_team_card(&self, team: TeamColor) -> bool {
        self.color == team.card_color()
    }

    /// Revealing this card will not end the game in a loss.
    #[must_use]
    pub fn is_safe_to_reveal(&self) -> bool {
        self.color != CardColor::Failure
    }
}
