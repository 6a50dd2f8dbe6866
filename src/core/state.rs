//! Game state: everything one game owns.
//!
//! ## Lifecycle
//!
//! ```text
//! new() -> set_team(red), set_team(blue) -> attach_board() -> start_game()
//!       -> ClueGiving <-> Guessing ... -> end_game(winner) -> GameOver
//! ```
//!
//! `GameState` owns the board, both teams and the active clue. The rules
//! engine drives the `ClueGiving`/`Guessing` alternation; this type only
//! enforces the lifecycle edges (`start_game` gate, single `end_game`).
//!
//! ## History
//!
//! Every transition appends an `EventRecord` to an `im::Vector`, so cloning a
//! state for a display snapshot stays cheap.

use im::Vector;
use serde::{Deserialize, Serialize};
use strum::Display;
use tracing::{debug, info, warn};

use super::clue::Clue;
use super::color::{TeamColor, TeamMap};
use super::event::{EventRecord, GameEvent};
use super::team::Team;
use crate::cards::board::Board;
use crate::error::GameError;

/// Coarse game phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Phase {
    Setup,
    ClueGiving,
    Guessing,
    GameOver,
}

/// Whose move it is within the current team's turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum TurnType {
    /// The signal-giver owes a clue.
    SignalTurn,
    /// The guessers are working through a clue.
    GuessTurn,
}

/// The mutable aggregate of a single game.
#[derive(Clone, Debug)]
pub struct GameState {
    // === Contents ===
    board: Board,
    teams: TeamMap<Option<Team>>,
    current_clue: Option<Clue>,

    // === Progression ===
    current_team_color: TeamColor,
    starting_team_color: TeamColor,
    phase: Phase,
    turn_type: TurnType,

    /// Turn number (starts at 1, bumps on every team switch).
    turn_number: u32,

    /// Event sequence within the turn.
    sequence: u32,

    // === Termination ===
    game_over: bool,
    winner: Option<TeamColor>,

    history: Vector<EventRecord>,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            board: Board::new(),
            teams: TeamMap::default(),
            current_clue: None,
            current_team_color: TeamColor::Red,
            starting_team_color: TeamColor::Red,
            phase: Phase::Setup,
            turn_type: TurnType::SignalTurn,
            turn_number: 1,
            sequence: 0,
            game_over: false,
            winner: None,
            history: Vector::new(),
        }
    }
}

impl GameState {
    /// Create an empty state in `Setup`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // === Setup ===

    /// Attach a team in the slot matching its color, replacing any previous one.
    pub fn set_team(&mut self, team: Team) -> Result<(), GameError> {
        self.ensure_setup()?;
        let color = team.color();
        self.teams[color] = Some(team);
        Ok(())
    }

    /// Attach a generated board and the team that will move first.
    ///
    /// Each team's word count is set from the number of its cards on the
    /// board, so teams must be attached first.
    pub fn attach_board(&mut self, board: Board, starting: TeamColor) -> Result<(), GameError> {
        self.ensure_setup()?;
        if !board.is_complete() {
            return Err(GameError::BoardNotGenerated);
        }
        if !self.teams_assigned() {
            return Err(GameError::TeamsNotAssigned);
        }

        for color in TeamColor::ALL {
            let count = board.team_words(color.card_color()).len() as u32;
            if let Some(team) = self.teams[color].as_mut() {
                team.set_word_count(count);
            }
        }

        self.board = board;
        self.starting_team_color = starting;
        self.current_team_color = starting;
        Ok(())
    }

    /// Leave `Setup` and hand the first clue to the starting team.
    pub fn start_game(&mut self) -> Result<(), GameError> {
        self.ensure_setup()?;

        for color in TeamColor::ALL {
            self.teams[color]
                .as_ref()
                .ok_or(GameError::TeamsNotAssigned)?
                .validate()?;
        }
        if !self.board.is_complete() {
            return Err(GameError::BoardNotGenerated);
        }

        self.phase = Phase::ClueGiving;
        self.turn_type = TurnType::SignalTurn;
        self.current_team_color = self.starting_team_color;
        self.record(GameEvent::GameStarted {
            starting_team: self.starting_team_color,
        });

        info!(starting = %self.starting_team_color, "Game started");
        Ok(())
    }

    fn ensure_setup(&self) -> Result<(), GameError> {
        if self.phase == Phase::Setup {
            Ok(())
        } else {
            Err(GameError::GameAlreadyStarted)
        }
    }

    // === Transitions ===

    /// Pass play to the other team: new turn, clue-giving, no clue.
    ///
    /// Ignored once the game is over.
    pub fn switch_teams(&mut self) {
        if self.game_over {
            warn!("switch_teams called after game over");
            return;
        }

        let ending = self.current_team_color;
        self.record(GameEvent::TurnEnded { team: ending });

        self.current_team_color = ending.other();
        self.current_clue = None;
        self.turn_type = TurnType::SignalTurn;
        self.phase = Phase::ClueGiving;
        self.turn_number += 1;
        self.sequence = 0;

        debug!(team = %self.current_team_color, turn = self.turn_number, "Turn switched");
    }

    /// Finish the game. Only the first call has any effect.
    pub fn end_game(&mut self, winner: TeamColor) {
        if self.game_over {
            warn!(%winner, "end_game called twice");
            return;
        }

        self.game_over = true;
        self.winner = Some(winner);
        self.phase = Phase::GameOver;
        self.current_clue = None;
        self.record(GameEvent::GameEnded { winner });

        info!(%winner, turns = self.turn_number, "Game over");
    }

    /// Install a freshly given clue and move to guessing.
    pub(crate) fn begin_guessing(&mut self, clue: Clue) {
        self.record(GameEvent::ClueGiven {
            team: clue.team(),
            word: clue.word().to_string(),
            number: clue.number(),
        });
        self.current_clue = Some(clue);
        self.turn_type = TurnType::GuessTurn;
        self.phase = Phase::Guessing;
    }

    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub(crate) fn clue_mut(&mut self) -> Option<&mut Clue> {
        self.current_clue.as_mut()
    }

    pub(crate) fn record(&mut self, event: GameEvent) {
        let record = EventRecord::new(event, self.turn_number, self.sequence);
        self.sequence += 1;
        self.history.push_back(record);
    }

    // === Queries ===

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn team(&self, color: TeamColor) -> Option<&Team> {
        self.teams[color].as_ref()
    }

    /// Mutable team access, for scripted setups.
    pub fn team_mut(&mut self, color: TeamColor) -> Option<&mut Team> {
        self.teams[color].as_mut()
    }

    #[must_use]
    pub fn teams_assigned(&self) -> bool {
        self.teams.iter().all(|(_, team)| team.is_some())
    }

    #[must_use]
    pub fn current_team(&self) -> Option<&Team> {
        self.team(self.current_team_color)
    }

    #[must_use]
    pub fn opposing_team(&self) -> Option<&Team> {
        self.team(self.current_team_color.other())
    }

    #[must_use]
    pub fn current_team_color(&self) -> TeamColor {
        self.current_team_color
    }

    #[must_use]
    pub fn starting_team_color(&self) -> TeamColor {
        self.starting_team_color
    }

    #[must_use]
    pub fn current_clue(&self) -> Option<&Clue> {
        self.current_clue.as_ref()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn turn_type(&self) -> TurnType {
        self.turn_type
    }

    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    #[must_use]
    pub fn winner(&self) -> Option<TeamColor> {
        self.winner
    }

    /// Every recorded event, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<EventRecord> {
        &self.history
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::color::CardColor;
    use crate::core::config::BoardConfig;
    use crate::core::team::Player;

    fn team(color: TeamColor) -> Team {
        Team::new(color)
            .with_player(Player::signal_giver("giver"))
            .with_player(Player::guesser("guesser"))
    }

    fn board(starting: TeamColor) -> Board {
        let words: Vec<String> = (0..25).map(|i| format!("card{i:02}")).collect();
        let config = BoardConfig::default();
        Board::from_layout(words, config.color_template(starting), &config).unwrap()
    }

    fn ready_state(starting: TeamColor) -> GameState {
        let mut state = GameState::new();
        state.set_team(team(TeamColor::Red)).unwrap();
        state.set_team(team(TeamColor::Blue)).unwrap();
        state.attach_board(board(starting), starting).unwrap();
        state
    }

    #[test]
    fn test_new_state() {
        let state = GameState::new();
        assert_eq!(state.phase(), Phase::Setup);
        assert_eq!(state.turn_type(), TurnType::SignalTurn);
        assert_eq!(state.turn_number(), 1);
        assert!(!state.teams_assigned());
        assert!(state.board().is_empty());
        assert!(state.history().is_empty());
    }

    #[test]
    fn test_attach_board_sets_word_counts() {
        let state = ready_state(TeamColor::Blue);

        assert_eq!(state.team(TeamColor::Blue).unwrap().words_remaining(), 9);
        assert_eq!(state.team(TeamColor::Red).unwrap().words_remaining(), 8);
        assert_eq!(state.team(TeamColor::Red).unwrap().total_words(), 8);
        assert_eq!(state.current_team_color(), TeamColor::Blue);
    }

    #[test]
    fn test_attach_board_requires_teams() {
        let mut state = GameState::new();
        assert_eq!(
            state.attach_board(board(TeamColor::Red), TeamColor::Red),
            Err(GameError::TeamsNotAssigned)
        );
        assert_eq!(
            state.attach_board(Board::new(), TeamColor::Red),
            Err(GameError::BoardNotGenerated)
        );
    }

    #[test]
    fn test_start_game() {
        let mut state = ready_state(TeamColor::Red);
        state.start_game().unwrap();

        assert_eq!(state.phase(), Phase::ClueGiving);
        assert_eq!(state.current_team_color(), TeamColor::Red);
        assert_eq!(
            state.history()[0].event,
            GameEvent::GameStarted { starting_team: TeamColor::Red }
        );
        assert_eq!(state.start_game(), Err(GameError::GameAlreadyStarted));
        assert_eq!(state.set_team(team(TeamColor::Red)), Err(GameError::GameAlreadyStarted));
    }

    #[test]
    fn test_start_game_checks_setup() {
        let mut state = GameState::new();
        assert_eq!(state.start_game(), Err(GameError::TeamsNotAssigned));

        state.set_team(team(TeamColor::Red)).unwrap();
        state
            .set_team(Team::new(TeamColor::Blue).with_player(Player::guesser("solo")))
            .unwrap();
        assert_eq!(
            state.start_game(),
            Err(GameError::MissingSignalGiver(TeamColor::Blue))
        );

        state.set_team(team(TeamColor::Blue)).unwrap();
        assert_eq!(state.start_game(), Err(GameError::BoardNotGenerated));
        assert_eq!(state.phase(), Phase::Setup);
    }

    #[test]
    fn test_switch_teams() {
        let mut state = ready_state(TeamColor::Red);
        state.start_game().unwrap();
        state.begin_guessing(Clue::new("ocean", 2, TeamColor::Red));
        assert_eq!(state.phase(), Phase::Guessing);

        state.switch_teams();

        assert_eq!(state.current_team_color(), TeamColor::Blue);
        assert_eq!(state.turn_type(), TurnType::SignalTurn);
        assert_eq!(state.phase(), Phase::ClueGiving);
        assert!(state.current_clue().is_none());
        assert_eq!(state.turn_number(), 2);

        let last = state.history().back().unwrap();
        assert_eq!(last.event, GameEvent::TurnEnded { team: TeamColor::Red });
        assert_eq!(last.turn, 1);
    }

    #[test]
    fn test_end_game_once() {
        let mut state = ready_state(TeamColor::Red);
        state.start_game().unwrap();

        state.end_game(TeamColor::Blue);
        assert!(state.is_game_over());
        assert_eq!(state.winner(), Some(TeamColor::Blue));
        assert_eq!(state.phase(), Phase::GameOver);

        let events = state.history().len();
        state.end_game(TeamColor::Red);
        state.switch_teams();

        assert_eq!(state.winner(), Some(TeamColor::Blue));
        assert_eq!(state.current_team_color(), TeamColor::Red);
        assert_eq!(state.history().len(), events);
    }

    #[test]
    fn test_sequence_resets_per_turn() {
        let mut state = ready_state(TeamColor::Red);
        state.start_game().unwrap();
        state.record(GameEvent::Guessed {
            team: TeamColor::Red,
            word: "card00".into(),
            color: CardColor::Red,
        });
        state.switch_teams();
        state.begin_guessing(Clue::new("river", 1, TeamColor::Blue));

        let history: Vec<_> = state.history().iter().map(|r| (r.turn, r.sequence)).collect();
        assert_eq!(history, vec![(1, 0), (1, 1), (1, 2), (2, 0)]);
    }

    #[test]
    fn test_phase_display() {
        assert_eq!(Phase::ClueGiving.to_string(), "clue_giving");
        assert_eq!(TurnType::GuessTurn.to_string(), "guess_turn");
    }
}
