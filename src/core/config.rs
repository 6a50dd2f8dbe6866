//! Game configuration types.
//!
//! - `BoardConfig`: the color template applied to the 5x5 board
//! - `GameConfig`: the template plus rule limits
//!
//! Both are serde types, so a host can load them from whatever format it
//! already uses.

use serde::{Deserialize, Serialize};

use super::color::{CardColor, TeamColor};
use crate::error::GameError;

/// Side length of the square board.
pub const BOARD_SIZE: usize = 5;

/// Number of cards on a full board.
pub const CARD_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// Color template for board generation.
///
/// The starting team gets one more word than the second team to offset
/// the advantage of moving first.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Words for the team that gives the first clue.
    pub starting_team_words: usize,

    /// Words for the other team.
    pub second_team_words: usize,

    /// Words that belong to nobody.
    pub neutral_words: usize,

    /// Instant-loss words.
    pub failure_words: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            starting_team_words: 9,
            second_team_words: 8,
            neutral_words: 7,
            failure_words: 1,
        }
    }
}

impl BoardConfig {
    /// Create the standard 9/8/7/1 template.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the starting team's word count.
    #[must_use]
    pub fn with_starting_team_words(mut self, count: usize) -> Self {
        self.starting_team_words = count;
        self
    }

    /// Set the second team's word count.
    #[must_use]
    pub fn with_second_team_words(mut self, count: usize) -> Self {
        self.second_team_words = count;
        self
    }

    /// Set the neutral word count.
    #[must_use]
    pub fn with_neutral_words(mut self, count: usize) -> Self {
        self.neutral_words = count;
        self
    }

    /// Set the failure word count.
    #[must_use]
    pub fn with_failure_words(mut self, count: usize) -> Self {
        self.failure_words = count;
        self
    }

    /// Total cards the template describes.
    #[must_use]
    pub fn total(&self) -> usize {
        self.starting_team_words + self.second_team_words + self.neutral_words + self.failure_words
    }

    /// Check that the template exactly fills the board.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.total() != CARD_COUNT {
            return Err(GameError::InvalidBoardConfig {
                total: self.total(),
                expected: CARD_COUNT,
            });
        }
        Ok(())
    }

    /// Words assigned to `team` when `starting` moves first.
    #[must_use]
    pub fn words_for(&self, team: TeamColor, starting: TeamColor) -> usize {
        if team == starting {
            self.starting_team_words
        } else {
            self.second_team_words
        }
    }

    /// Unshuffled list of colors, one per card.
    #[must_use]
    pub fn color_template(&self, starting: TeamColor) -> Vec<CardColor> {
        let mut colors = Vec::with_capacity(self.total());
        colors.extend(std::iter::repeat(starting.card_color()).take(self.starting_team_words));
        colors.extend(std::iter::repeat(starting.other().card_color()).take(self.second_team_words));
        colors.extend(std::iter::repeat(CardColor::Neutral).take(self.neutral_words));
        colors.extend(std::iter::repeat(CardColor::Failure).take(self.failure_words));
        colors
    }
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Color template for the board.
    pub board: BoardConfig,

    /// Largest number a clue may carry, before the remaining-words cap.
    pub max_clue_number: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board: BoardConfig::default(),
            max_clue_number: CARD_COUNT as u32,
        }
    }
}

impl GameConfig {
    /// Create the standard configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the board template.
    #[must_use]
    pub fn with_board(mut self, board: BoardConfig) -> Self {
        self.board = board;
        self
    }

    /// Set the maximum clue number.
    #[must_use]
    pub fn with_max_clue_number(mut self, max: u32) -> Self {
        self.max_clue_number = max;
        self
    }
}
