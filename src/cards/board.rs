//! The 5x5 board.
//!
//! ## Layout
//!
//! Cards are stored once, in row-major order, so the grid view, the flat
//! card list and the key never diverge. `get(row, col)` indexes the same
//! storage a `cards()` iteration walks.
//!
//! ## Key
//!
//! The key is the list of true colors in grid order. It is captured at
//! generation and does not change when cards are revealed; it is the
//! signal-giver's privileged view.
//!
//! ## Lifecycle
//!
//! A board is either empty or holds exactly 25 cards. `generate` replaces
//! all contents at once; after that only individual `revealed` flags change.

use rustc_hash::FxHashMap;
use tracing::{debug, instrument};

use super::card::{Card, Position};
use crate::core::color::{CardColor, TeamColor};
use crate::core::config::{BoardConfig, CARD_COUNT};
use crate::core::rng::GameRng;
use crate::error::GameError;
use crate::words::supply::WordSupply;
use crate::words::validator::normalize;

/// The game board.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Board {
    /// Cards in row-major order.
    cards: Vec<Card>,

    /// True colors in row-major order.
    key: Vec<CardColor>,

    /// Lowercased word -> card index.
    index: FxHashMap<String, usize>,
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Generate a fresh board.
    ///
    /// Draws `config.total()` words from `supply`, shuffles the color
    /// template and pairs them up in row-major order. On error the board is
    /// left untouched.
    #[instrument(skip(self, supply, config, rng), fields(seed = rng.seed()))]
    pub fn generate(
        &mut self,
        starting: TeamColor,
        supply: &dyn WordSupply,
        config: &BoardConfig,
        rng: &mut GameRng,
    ) -> Result<(), GameError> {
        config.validate()?;

        let words = supply.sample(config.total(), rng)?;
        let mut colors = config.color_template(starting);
        rng.shuffle(&mut colors);

        *self = Self::from_layout(words, colors, config)?;
        debug!(%starting, "Board generated");
        Ok(())
    }

    /// Build a board from a fixed layout.
    ///
    /// `words` and `colors` must both hold 25 entries, words must be distinct
    /// (case-insensitive) and the color counts must match `config`'s template
    /// for one of the two starting teams.
    pub fn from_layout<S: Into<String>>(
        words: Vec<S>,
        colors: Vec<CardColor>,
        config: &BoardConfig,
    ) -> Result<Self, GameError> {
        let words: Vec<String> = words.into_iter().map(Into::into).collect();
        if words.len() != CARD_COUNT || colors.len() != CARD_COUNT {
            return Err(GameError::LayoutSize {
                words: words.len(),
                colors: colors.len(),
            });
        }

        config.validate()?;
        let counts = color_counts(&colors);
        let fits = TeamColor::ALL
            .into_iter()
            .any(|starting| color_counts(&config.color_template(starting)) == counts);
        if !fits {
            return Err(GameError::TemplateMismatch);
        }

        let mut index = FxHashMap::default();
        for (i, word) in words.iter().enumerate() {
            if index.insert(normalize(word), i).is_some() {
                return Err(GameError::DuplicateWord(word.clone()));
            }
        }

        let cards = words
            .into_iter()
            .zip(colors.iter().copied())
            .enumerate()
            .map(|(i, (word, color))| Card::new(word, color, Position::from_index(i)))
            .collect();

        Ok(Self {
            cards,
            key: colors,
            index,
        })
    }

    /// All cells are populated.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cards.len() == CARD_COUNT
    }

    /// No board has been generated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards in row-major order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// True colors in row-major order, regardless of reveal state.
    #[must_use]
    pub fn key(&self) -> &[CardColor] {
        &self.key
    }

    // === Lookup ===

    /// Card at a grid cell.
    pub fn get(&self, row: usize, col: usize) -> Result<&Card, GameError> {
        let pos = Position::new(row, col)?;
        self.cards
            .get(pos.index())
            .ok_or(GameError::OutOfBounds { row, col })
    }

    /// Card with the given word, compared case-insensitively.
    pub fn get_by_word(&self, word: &str) -> Result<&Card, GameError> {
        let idx = self.find(word)?;
        Ok(&self.cards[idx])
    }

    fn find(&self, word: &str) -> Result<usize, GameError> {
        self.index
            .get(&normalize(word))
            .copied()
            .ok_or_else(|| GameError::WordNotFound(word.to_string()))
    }

    // === Reveal ===

    /// Reveal the card at a cell and return its color.
    pub fn reveal(&mut self, row: usize, col: usize) -> Result<CardColor, GameError> {
        let pos = Position::new(row, col)?;
        let card = self
            .cards
            .get_mut(pos.index())
            .ok_or(GameError::OutOfBounds { row, col })?;
        Ok(card.reveal())
    }

    /// Reveal the card with the given word and return its color.
    pub fn reveal_by_word(&mut self, word: &str) -> Result<CardColor, GameError> {
        let idx = self.find(word)?;
        Ok(self.cards[idx].reveal())
    }

    // === Queries ===

    /// Every board word, revealed or not.
    #[must_use]
    pub fn words(&self) -> Vec<&str> {
        self.cards.iter().map(Card::word).collect()
    }

    #[must_use]
    pub fn unrevealed_words(&self) -> Vec<&str> {
        self.cards
            .iter()
            .filter(|c| !c.is_revealed())
            .map(Card::word)
            .collect()
    }

    /// Words carrying the given color.
    #[must_use]
    pub fn team_words(&self, color: CardColor) -> Vec<&str> {
        self.cards
            .iter()
            .filter(|c| c.color() == color)
            .map(Card::word)
            .collect()
    }

    #[must_use]
    pub fn unrevealed_team_words(&self, color: CardColor) -> Vec<&str> {
        self.cards
            .iter()
            .filter(|c| c.color() == color && !c.is_revealed())
            .map(Card::word)
            .collect()
    }

    /// Number of hidden cards with the given color.
    #[must_use]
    pub fn count_remaining(&self, color: CardColor) -> usize {
        self.cards
            .iter()
            .filter(|c| c.color() == color && !c.is_revealed())
            .count()
    }

    /// Unknown words count as not revealed.
    #[must_use]
    pub fn is_word_revealed(&self, word: &str) -> bool {
        self.get_by_word(word).is_ok_and(Card::is_revealed)
    }

    /// Any failure card has been revealed.
    #[must_use]
    pub fn failure_revealed(&self) -> bool {
        self.cards
            .iter()
            .any(|c| c.color() == CardColor::Failure && c.is_revealed())
    }
}

/// Cards per color, indexed by `CardColor` discriminant.
fn color_counts(colors: &[CardColor]) -> [usize; 4] {
    let mut counts = [0; 4];
    for &color in colors {
        counts[color as usize] += 1;
    }
    counts
}
