//! Turn history: what happened, in order.
//!
//! Every state transition the engine performs appends one `EventRecord`.
//! History is append-only and carries the turn number and a per-turn
//! sequence number, so a display can replay or summarize a game.

use serde::{Deserialize, Serialize};

use super::color::{CardColor, TeamColor};

/// A single game event.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameEvent {
    /// The game left setup with this team to give the first clue.
    GameStarted { starting_team: TeamColor },
    /// A signal-giver gave a clue.
    ClueGiven {
        team: TeamColor,
        word: String,
        number: u32,
    },
    /// A guesser revealed a card.
    Guessed {
        team: TeamColor,
        word: String,
        color: CardColor,
    },
    /// The team's turn ended and play passed to the other team.
    TurnEnded { team: TeamColor },
    /// The game ended.
    GameEnded { winner: TeamColor },
}

/// A recorded event with its position in the game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    /// What happened.
    pub event: GameEvent,

    /// Turn number when it happened (starts at 1).
    pub turn: u32,

    /// Sequence number within the turn.
    pub sequence: u32,
}

impl EventRecord {
    /// Create a new event record.
    #[must_use]
    pub fn new(event: GameEvent, turn: u32, sequence: u32) -> Self {
        Self {
            event,
            turn,
            sequence,
        }
    }
}
