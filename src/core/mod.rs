//! Core game types: colors, teams, clues, state, RNG, configuration.
//!
//! Everything here is plain data plus the lifecycle edges of a game. Rule
//! decisions live in `rules`; board layout lives in `cards`.

pub mod clue;
pub mod color;
pub mod config;
pub mod event;
pub mod rng;
pub mod state;
pub mod team;

pub use clue::Clue;
pub use color::{CardColor, TeamColor, TeamMap};
pub use config::{BoardConfig, GameConfig, BOARD_SIZE, CARD_COUNT};
pub use event::{EventRecord, GameEvent};
pub use rng::{GameRng, GameRngState};
pub use state::{GameState, Phase, TurnType};
pub use team::{Player, Role, Team};
