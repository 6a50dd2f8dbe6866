//! Players, roles, and teams.
//!
//! Each team has exactly one color, any number of players, and a counter of
//! its words still hidden on the board. A team is playable when it has a
//! signal-giver and at least one guesser.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use strum::{Display, EnumString};

use super::color::TeamColor;
use crate::error::GameError;

/// What a player may do on their team's turn.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(ascii_case_insensitive)]
pub enum Role {
    /// Sees the key and gives one-word clues.
    #[strum(to_string = "signal_giver", serialize = "chief", serialize = "signal-giver")]
    SignalGiver,
    /// Guesses words from clues.
    #[strum(to_string = "guesser", serialize = "detective")]
    Guesser,
}

impl Role {
    /// Parse user input such as `"Guesser"` or `"chief"`.
    pub fn parse(input: &str) -> Result<Self, GameError> {
        input
            .trim()
            .parse()
            .map_err(|_| GameError::InvalidRole(input.trim().to_string()))
    }
}

/// A named participant. Immutable once created.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Player {
    name: String,
    role: Role,
}

impl Player {
    /// Create a player.
    pub fn new(name: impl Into<String>, role: Role) -> Self {
        Self {
            name: name.into(),
            role,
        }
    }

    /// Create a signal-giver.
    pub fn signal_giver(name: impl Into<String>) -> Self {
        Self::new(name, Role::SignalGiver)
    }

    /// Create a guesser.
    pub fn guesser(name: impl Into<String>) -> Self {
        Self::new(name, Role::Guesser)
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn role(&self) -> Role {
        self.role
    }

    #[must_use]
    pub fn can_give_clues(&self) -> bool {
        self.role == Role::SignalGiver
    }

    #[must_use]
    pub fn can_make_guesses(&self) -> bool {
        self.role == Role::Guesser
    }
}

/// One of the two competing teams.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    color: TeamColor,
    players: SmallVec<[Player; 4]>,
    words_remaining: u32,
    total_words: u32,
}

impl Team {
    /// Create an empty team with no words assigned.
    #[must_use]
    pub fn new(color: TeamColor) -> Self {
        Self {
            color,
            players: SmallVec::new(),
            words_remaining: 0,
            total_words: 0,
        }
    }

    /// Add a player (builder form).
    #[must_use]
    pub fn with_player(mut self, player: Player) -> Self {
        self.add_player(player);
        self
    }

    /// Append a player. Names need not be unique.
    pub fn add_player(&mut self, player: Player) {
        self.players.push(player);
    }

    #[must_use]
    pub fn color(&self) -> TeamColor {
        self.color
    }

    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// The first signal-giver on the roster.
    #[must_use]
    pub fn signal_giver(&self) -> Option<&Player> {
        self.players.iter().find(|p| p.can_give_clues())
    }

    /// All guessers, in roster order.
    pub fn guessers(&self) -> impl Iterator<Item = &Player> {
        self.players.iter().filter(|p| p.can_make_guesses())
    }

    #[must_use]
    pub fn has_signal_giver(&self) -> bool {
        self.signal_giver().is_some()
    }

    #[must_use]
    pub fn has_guessers(&self) -> bool {
        self.guessers().next().is_some()
    }

    /// Has both a signal-giver and at least one guesser.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.has_signal_giver() && self.has_guessers()
    }

    /// Like [`Team::is_complete`], but says which role is missing.
    pub fn validate(&self) -> Result<(), GameError> {
        if !self.has_signal_giver() {
            return Err(GameError::MissingSignalGiver(self.color));
        }
        if !self.has_guessers() {
            return Err(GameError::MissingGuessers(self.color));
        }
        Ok(())
    }

    /// Assign the team's word count for a new game.
    pub fn set_word_count(&mut self, total: u32) {
        self.total_words = total;
        self.words_remaining = total;
    }

    /// Record one of this team's words being revealed. Floors at zero.
    pub fn word_found(&mut self) {
        self.words_remaining = self.words_remaining.saturating_sub(1);
    }

    #[must_use]
    pub fn words_remaining(&self) -> u32 {
        self.words_remaining
    }

    #[must_use]
    pub fn total_words(&self) -> u32 {
        self.total_words
    }

    /// All of the team's words have been found.
    #[must_use]
    pub fn has_won(&self) -> bool {
        self.words_remaining == 0
    }
}
