//! Read-only projections of a game for display.
//!
//! There is one board. The guesser view and the signal-giver view are two
//! functions over it; they differ only in which colors they expose. A
//! guesser never sees the color of a hidden card.

use serde::Serialize;
use strum::Display;

use crate::cards::card::{Card, Position};
use crate::core::clue::Clue;
use crate::core::color::{CardColor, TeamColor, TeamMap};
use crate::core::config::BOARD_SIZE;
use crate::core::state::{GameState, Phase, TurnType};
use crate::core::team::{Player, Role, Team};

/// Who is looking at the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "snake_case")]
pub enum Viewer {
    /// Sees colors of revealed cards only.
    Guesser,
    /// Sees every color.
    SignalGiver,
}

impl From<Role> for Viewer {
    fn from(role: Role) -> Self {
        match role {
            Role::SignalGiver => Viewer::SignalGiver,
            Role::Guesser => Viewer::Guesser,
        }
    }
}

/// One board cell as a viewer sees it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CardView {
    pub word: String,
    pub revealed: bool,
    /// `None` when the viewer may not see it.
    pub color: Option<CardColor>,
    pub position: Position,
}

impl CardView {
    fn new(card: &Card, viewer: Viewer) -> Self {
        let color = match viewer {
            Viewer::SignalGiver => Some(card.color()),
            Viewer::Guesser => card.visible_color(),
        };

        Self {
            word: card.word().to_string(),
            revealed: card.is_revealed(),
            color,
            position: card.position(),
        }
    }
}

/// The active clue as shown to players.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ClueView {
    pub word: String,
    pub number: u32,
    pub guesses_remaining: u32,
}

impl From<&Clue> for ClueView {
    fn from(clue: &Clue) -> Self {
        Self {
            word: clue.word().to_string(),
            number: clue.number(),
            guesses_remaining: clue.guesses_remaining(),
        }
    }
}

/// Board plus turn status.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BoardView {
    /// Cells in row-major order; empty before the board exists.
    pub cells: Vec<CardView>,
    pub current_team: TeamColor,
    pub turn_type: TurnType,
    pub phase: Phase,
    pub current_clue: Option<ClueView>,
    pub words_remaining: TeamMap<u32>,
    pub game_over: bool,
    pub winner: Option<TeamColor>,
}

impl BoardView {
    /// Cells grouped into rows of five.
    pub fn rows(&self) -> impl Iterator<Item = &[CardView]> {
        self.cells.chunks(BOARD_SIZE)
    }
}

/// A player as listed in team info.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PlayerView {
    pub name: String,
    pub role: Role,
}

impl From<&Player> for PlayerView {
    fn from(player: &Player) -> Self {
        Self {
            name: player.name().to_string(),
            role: player.role(),
        }
    }
}

/// Roster and progress of one team.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TeamSummary {
    pub color: TeamColor,
    pub players: Vec<PlayerView>,
    pub words_remaining: u32,
    pub total_words: u32,
}

impl From<&Team> for TeamSummary {
    fn from(team: &Team) -> Self {
        Self {
            color: team.color(),
            players: team.players().iter().map(PlayerView::from).collect(),
            words_remaining: team.words_remaining(),
            total_words: team.total_words(),
        }
    }
}

/// One entry of the signal-giver's key.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct KeyEntry {
    pub word: String,
    pub color: CardColor,
    pub revealed: bool,
    pub position: Position,
}

/// Project the board for `viewer`.
#[must_use]
pub fn board_view(state: &GameState, viewer: Viewer) -> BoardView {
    BoardView {
        cells: state
            .board()
            .cards()
            .iter()
            .map(|card| CardView::new(card, viewer))
            .collect(),
        current_team: state.current_team_color(),
        turn_type: state.turn_type(),
        phase: state.phase(),
        current_clue: state.current_clue().map(ClueView::from),
        words_remaining: TeamMap::new(|color| state.team(color).map_or(0, Team::words_remaining)),
        game_over: state.is_game_over(),
        winner: state.winner(),
    }
}

/// Summaries of the attached teams, red first.
#[must_use]
pub fn team_summaries(state: &GameState) -> Vec<TeamSummary> {
    TeamColor::ALL
        .into_iter()
        .filter_map(|color| state.team(color).map(TeamSummary::from))
        .collect()
}

/// Every card's true color, regardless of reveal state.
#[must_use]
pub fn key_view(state: &GameState) -> Vec<KeyEntry> {
    state
        .board()
        .cards()
        .iter()
        .zip(state.board().key())
        .map(|(card, &color)| KeyEntry {
            word: card.word().to_string(),
            color,
            revealed: card.is_revealed(),
            position: card.position(),
        })
        .collect()
}
