//! Error types for the rule engine.
//!
//! Every failure the engine can report is a `GameError`. Variants fall into
//! four kinds (see [`ErrorKind`]):
//!
//! - **Setup**: missing roles, unassigned teams. User-correctable.
//! - **Input**: malformed clues, unknown or revealed guesses, out-of-range
//!   numbers. Always recoverable and never mutate game state.
//! - **Resource**: the word supply cannot fill a board. Fatal to game start only.
//! - **Invariant**: lookups by a key no validated path should produce.
//!
//! The `Display` text of each variant is the human-readable reason shown to
//! players.

use crate::core::color::TeamColor;
use crate::words::validator::ClueRejection;

/// Classification of a [`GameError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Team or board setup is incomplete.
    Setup,
    /// A player-supplied action was rejected.
    Input,
    /// The word supply could not provide what was asked.
    Resource,
    /// A caller broke a contract (invalid position, unknown card).
    Invariant,
}

/// Any error produced by the engine.
#[derive(Clone, Debug, PartialEq, Eq, derive_more::Display)]
pub enum GameError {
    // === Setup ===
    /// One or both teams have not been attached to the game.
    #[display("Both teams must be set up")]
    TeamsNotAssigned,

    /// A team has no signal-giver.
    #[display("{_0} team must have a signal-giver")]
    MissingSignalGiver(TeamColor),

    /// A team has no guessers.
    #[display("{_0} team must have at least one guesser")]
    MissingGuessers(TeamColor),

    /// The board has not been generated.
    #[display("Board has not been generated")]
    BoardNotGenerated,

    /// A fixed layout does not hold one word and one color per cell.
    #[display("Board layout needs 25 words and 25 colors, got {words} and {colors}")]
    LayoutSize { words: usize, colors: usize },

    /// A fixed layout repeats a word.
    #[display("Word '{_0}' appears more than once on the board")]
    DuplicateWord(String),

    /// A fixed layout's colors do not follow the board template.
    #[display("Board colors do not match the template for either starting team")]
    TemplateMismatch,

    // === Input ===
    /// A color that is not a team color was used where a team was required.
    #[display("Team color must be 'red' or 'blue', got '{_0}'")]
    InvalidTeamColor(String),

    /// An unknown player role.
    #[display("Unknown role '{_0}'")]
    InvalidRole(String),

    /// The game has already ended.
    #[display("Game is over")]
    GameIsOver,

    /// The game has not been started yet.
    #[display("Game has not started")]
    GameNotStarted,

    /// `start_game` was called on a game already in progress.
    #[display("Game has already started")]
    GameAlreadyStarted,

    /// A clue was offered outside the clue-giving phase.
    #[display("Not clue-giving phase")]
    NotCluePhase,

    /// A guess was offered outside the guessing phase.
    #[display("Not guessing phase")]
    NotGuessPhase,

    /// No clue is active.
    #[display("No active clue")]
    NoActiveClue,

    /// The active clue has no guesses left.
    #[display("No guesses remaining for current clue")]
    NoGuessesLeft,

    /// Clue number below 1 or above the configured maximum.
    #[display("Clue number must be between 1 and {max}, got {number}")]
    ClueNumberOutOfRange { number: u32, max: u32 },

    /// Clue number larger than the team's remaining words.
    #[display("Clue number cannot exceed {max} (remaining team words)")]
    ClueExceedsRemaining { number: u32, max: u32 },

    /// The clue word was rejected by the clue validator.
    #[display("{_0}")]
    InvalidClue(ClueRejection),

    /// Empty guess.
    #[display("Guess cannot be empty")]
    EmptyGuess,

    /// The guessed word is not on the board.
    #[display("Word '{_0}' is not on the board")]
    WordNotOnBoard(String),

    /// The guessed word has already been revealed.
    #[display("Word '{_0}' has already been revealed")]
    AlreadyRevealed(String),

    // === Resource ===
    /// The word supply has fewer unique valid words than requested.
    #[display("Not enough valid words: need {needed}, found {available}")]
    InsufficientWords { needed: usize, available: usize },

    /// The word list file could not be read.
    #[display("Error reading word list '{path}': {message}")]
    WordListIo { path: String, message: String },

    /// The color template does not fill the grid.
    #[display("Board template covers {total} cards, expected {expected}")]
    InvalidBoardConfig { total: usize, expected: usize },

    // === Invariant ===
    /// A position outside the 5x5 grid.
    #[display("Position ({row}, {col}) must be within board bounds (0-4)")]
    OutOfBounds { row: usize, col: usize },

    /// A card lookup by word found nothing.
    #[display("Word '{_0}' not found on board")]
    WordNotFound(String),

    /// A clue constructed with a zero number, or one too large to add the
    /// bonus guess to.
    #[display("Clue number must be at least 1 and below {}", u32::MAX)]
    InvalidClueNumber,

    /// A clue constructed with an empty word.
    #[display("Clue word cannot be empty")]
    EmptyClueWord,
}

impl std::error::Error for GameError {}

impl GameError {
    /// Classify this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        use GameError::*;

        match self {
            TeamsNotAssigned
            | MissingSignalGiver(_)
            | MissingGuessers(_)
            | BoardNotGenerated
            | LayoutSize { .. }
            | DuplicateWord(_)
            | TemplateMismatch => ErrorKind::Setup,
            InvalidTeamColor(_)
            | InvalidRole(_)
            | GameIsOver
            | GameNotStarted
            | GameAlreadyStarted
            | NotCluePhase
            | NotGuessPhase
            | NoActiveClue
            | NoGuessesLeft
            | ClueNumberOutOfRange { .. }
            | ClueExceedsRemaining { .. }
            | InvalidClue(_)
            | EmptyGuess
            | WordNotOnBoard(_)
            | AlreadyRevealed(_) => ErrorKind::Input,
            InsufficientWords { .. } | WordListIo { .. } | InvalidBoardConfig { .. } => {
                ErrorKind::Resource
            }
            OutOfBounds { .. } | WordNotFound(_) | InvalidClueNumber | EmptyClueWord => {
                ErrorKind::Invariant
            }
        }
    }

    /// True for errors the player can fix by retrying with different input.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        matches!(self.kind(), ErrorKind::Setup | ErrorKind::Input)
    }
}
