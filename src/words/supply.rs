//! Word supply: where board words come from.
//!
//! The board only needs "give me N distinct words". `WordSupply` is that
//! seam; `WordList` is the stock implementation backed by a de-duplicated,
//! validated list loaded from a newline-delimited file, a string, or the
//! bundled default list.

use once_cell::sync::Lazy;
use rustc_hash::FxHashSet;
use std::path::Path;
use tracing::{debug, instrument, warn};

use super::validator::{is_valid_game_word, normalize};
use crate::core::rng::GameRng;
use crate::error::GameError;

/// Source of candidate board words.
pub trait WordSupply {
    /// Number of distinct words available.
    fn available(&self) -> usize;

    /// Draw `count` distinct words at random.
    ///
    /// Fails with `InsufficientWords` if fewer than `count` exist.
    fn sample(&self, count: usize, rng: &mut GameRng) -> Result<Vec<String>, GameError>;
}

static BUILTIN: Lazy<WordList> = Lazy::new(|| WordList::from_text(include_str!("../../data/words.txt")));

/// A de-duplicated pool of valid words.
///
/// Invalid entries (digits, punctuation, single letters, blanks) are dropped.
/// Duplicates are compared case-insensitively; the first spelling wins.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    /// Build from any iterator of words.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = FxHashSet::default();
        let mut kept = Vec::new();
        let mut dropped = 0usize;

        for word in words {
            let word = word.as_ref().trim();
            if word.is_empty() {
                continue;
            }
            if !is_valid_game_word(word) {
                dropped += 1;
                continue;
            }
            if seen.insert(normalize(word)) {
                kept.push(word.to_string());
            }
        }

        if dropped > 0 {
            debug!(dropped, "Skipped invalid words");
        }

        Self { words: kept }
    }

    /// Build from newline-delimited text.
    pub fn from_text(text: &str) -> Self {
        Self::from_words(text.lines())
    }

    /// Load a newline-delimited word file.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, GameError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            warn!(error = %e, "Could not read word list");
            GameError::WordListIo {
                path: path.display().to_string(),
                message: e.to_string(),
            }
        })?;

        let list = Self::from_text(&text);
        debug!(words = list.len(), "Loaded word list");
        Ok(list)
    }

    /// The bundled default word list.
    #[must_use]
    pub fn builtin() -> Self {
        BUILTIN.clone()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Case-insensitive membership.
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        let needle = normalize(word);
        self.words.iter().any(|w| normalize(w) == needle)
    }
}

impl WordSupply for WordList {
    fn available(&self) -> usize {
        self.words.len()
    }

    fn sample(&self, count: usize, rng: &mut GameRng) -> Result<Vec<String>, GameError> {
        if count > self.words.len() {
            return Err(GameError::InsufficientWords {
                needed: count,
                available: self.words.len(),
            });
        }

        Ok(rng.sample(&self.words, count).into_iter().cloned().collect())
    }
}
