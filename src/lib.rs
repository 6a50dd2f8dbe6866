//! # word-detective
//!
//! Rule engine for a two-team word-guessing party game.
//!
//! Each team has a signal-giver who can see the hidden colors of 25 words on
//! a 5x5 board and gives one-word clues with a number. The team's guessers
//! try to find their own words while avoiding the other team's words and the
//! single failure word.
//!
//! ## Design Principles
//!
//! 1. **Stateless rules**: `Rules` holds configuration only. It checks and
//!    resolves actions against a `GameState` passed in by the caller.
//!
//! 2. **One outcome**: a guess resolves to a single `TurnOutcome`
//!    (`Continue`, `TurnEnds`, `TeamWins`). Turn switching and game end are
//!    both derived from it.
//!
//! 3. **Injected randomness**: team choice, word sampling and color shuffle
//!    all draw from a seeded `GameRng`, so a seed reproduces a game.
//!
//! ## Modules
//!
//! - `core`: colors, teams, clues, state, events, RNG, configuration
//! - `cards`: cards, positions, the board
//! - `words`: word supply and clue validation
//! - `rules`: legality checks and guess resolution
//! - `controller`: action orchestration and display projections
//! - `error`: `GameError` and its classification
//!
//! ## Example
//!
//! ```
//! use word_detective::{GameConfig, GameController, Player, TeamColor, Viewer, WordList};
//!
//! let mut game = GameController::new(WordList::builtin(), GameConfig::default(), 42);
//! game.setup_teams(
//!     vec![Player::signal_giver("Ada"), Player::guesser("Ben")],
//!     vec![Player::signal_giver("Cat"), Player::guesser("Dan")],
//! )
//! .unwrap();
//!
//! let starting = game.start_game(Some("red")).unwrap();
//! assert_eq!(starting, TeamColor::Red);
//!
//! let view = game.board_view(Viewer::Guesser);
//! assert_eq!(view.cells.len(), 25);
//! assert!(view.cells.iter().all(|cell| cell.color.is_none()));
//! ```

pub mod cards;
pub mod controller;
pub mod core;
pub mod error;
pub mod rules;
pub mod words;

// Re-export commonly used types
pub use crate::core::{
    BoardConfig, CardColor, Clue, EventRecord, GameConfig, GameEvent, GameRng, GameRngState,
    GameState, Phase, Player, Role, Team, TeamColor, TeamMap, TurnType, BOARD_SIZE, CARD_COUNT,
};

pub use crate::cards::{Board, Card, Position};

pub use crate::words::{ClueRejection, WordList, WordSupply};

pub use crate::rules::{GuessResult, Rules, TurnOutcome};

pub use crate::controller::{
    BoardView, CardView, ClueView, GameController, KeyEntry, PlayerView, TeamSummary, Viewer,
};

pub use crate::error::{ErrorKind, GameError};
