//! Board cards and the 5x5 board.
//!
//! ## Key Types
//!
//! - `Position`: a grid cell, validated against the board size
//! - `Card`: a word, its hidden color, and whether it has been revealed
//! - `Board`: 25 cards in row-major order plus the signal-giver's key

pub mod board;
pub mod card;

pub use board::Board;
pub use card::{Card, Position};
