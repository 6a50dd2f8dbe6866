//! Words: where board words come from and which clue words are allowed.

pub mod supply;
pub mod validator;

pub use supply::{WordList, WordSupply};
pub use validator::{is_valid_game_word, validate_clue_word, validation_rules, ClueRejection};
