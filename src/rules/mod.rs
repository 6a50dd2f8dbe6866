//! Rules engine.
//!
//! `Rules` answers "is this legal?" and "what happens next?" for a
//! `GameState`. It holds no game data of its own; the controller owns the
//! state and applies the outcomes `Rules` reports.

pub mod engine;

pub use engine::{GuessResult, Rules, TurnOutcome};
