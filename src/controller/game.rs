//! Game controller: turns player actions into rule calls.
//!
//! Every action follows the same shape: ask `Rules` whether it is legal,
//! apply it, then report. Rejected actions leave the game unchanged and
//! return the `GameError` whose text the display shows.

use im::Vector;
use tracing::{info, instrument, warn};

use super::view::{self, BoardView, KeyEntry, TeamSummary, Viewer};
use crate::cards::board::Board;
use crate::core::clue::Clue;
use crate::core::color::TeamColor;
use crate::core::config::GameConfig;
use crate::core::event::EventRecord;
use crate::core::rng::{GameRng, GameRngState};
use crate::core::state::{GameState, Phase};
use crate::core::team::{Player, Team};
use crate::error::GameError;
use crate::rules::engine::{GuessResult, Rules, TurnOutcome};
use crate::words::supply::{WordList, WordSupply};

/// Runs one game at a time over a word supply.
///
/// Generic over the supply so tests and embedders can plug in fixed word
/// pools; defaults to [`WordList`].
pub struct GameController<S = WordList> {
    supply: S,
    rules: Rules,
    rng: GameRng,
    state: GameState,
}

impl<S: WordSupply> GameController<S> {
    /// Create a controller with a deterministic seed.
    pub fn new(supply: S, config: GameConfig, seed: u64) -> Self {
        Self {
            supply,
            rules: Rules::new(config),
            rng: GameRng::new(seed),
            state: GameState::new(),
        }
    }

    /// Create a controller seeded from system entropy.
    pub fn from_entropy(supply: S, config: GameConfig) -> Self {
        let rng = GameRng::from_entropy();
        Self::new(supply, config, rng.seed())
    }

    // === Actions ===

    /// Assign both rosters. Either both teams are accepted or neither is.
    #[instrument(skip_all, fields(red = red.len(), blue = blue.len()))]
    pub fn setup_teams(&mut self, red: Vec<Player>, blue: Vec<Player>) -> Result<(), GameError> {
        if self.state.phase() != Phase::Setup {
            return Err(GameError::GameAlreadyStarted);
        }

        let build = |color, players: Vec<Player>| {
            players
                .into_iter()
                .fold(Team::new(color), |team, player| team.with_player(player))
        };
        let red = build(TeamColor::Red, red);
        let blue = build(TeamColor::Blue, blue);

        self.rules.is_valid_team_setup(&red)?;
        self.rules.is_valid_team_setup(&blue)?;

        self.state.set_team(red)?;
        self.state.set_team(blue)?;
        Ok(())
    }

    /// Generate the board and start play.
    ///
    /// `starting` is `"red"` or `"blue"` (any case); `None` picks at random.
    /// Nothing changes if the word supply cannot fill the board.
    #[instrument(skip(self))]
    pub fn start_game(&mut self, starting: Option<&str>) -> Result<TeamColor, GameError> {
        if self.state.phase() != Phase::Setup {
            return Err(GameError::GameAlreadyStarted);
        }
        self.rules.can_start_game(&self.state)?;

        let starting = match starting {
            Some(input) => TeamColor::parse(input)?,
            None if self.rng.gen_bool(0.5) => TeamColor::Red,
            None => TeamColor::Blue,
        };

        let mut board = Board::new();
        board.generate(starting, &self.supply, &self.rules.config().board, &mut self.rng)?;

        self.state.attach_board(board, starting)?;
        self.state.start_game()?;
        Ok(starting)
    }

    /// Give a clue for the current team.
    pub fn give_clue(&mut self, word: &str, number: u32) -> Result<Clue, GameError> {
        self.rules.give_clue(word, number, &mut self.state)
    }

    /// Guess a word for the current team and apply the outcome.
    #[instrument(skip(self))]
    pub fn make_guess(&mut self, word: &str) -> Result<GuessResult, GameError> {
        let result = self.rules.process_guess(word, &mut self.state)?;
        match result.outcome {
            TurnOutcome::TeamWins(winner) => self.state.end_game(winner),
            TurnOutcome::TurnEnds => self.state.switch_teams(),
            TurnOutcome::Continue => {}
        }

        if !self.state.is_game_over() {
            if let Some(winner) = self.rules.check_game_end_conditions(&self.state) {
                warn!(%winner, "End condition found outside guess resolution");
                self.state.end_game(winner);
            }
        }

        Ok(result)
    }

    /// Pass the turn to the other team.
    pub fn end_turn(&mut self) -> Result<(), GameError> {
        self.rules.end_turn(&mut self.state)
    }

    /// Throw the current game away and return to setup.
    ///
    /// Rosters are cleared. The word supply and the random stream carry on,
    /// so the next board differs from the last.
    pub fn reset_game(&mut self) {
        self.state = GameState::new();
        info!("Game reset");
    }

    // === Projections ===

    /// The board as `viewer` may see it.
    #[must_use]
    pub fn board_view(&self, viewer: Viewer) -> BoardView {
        view::board_view(&self.state, viewer)
    }

    #[must_use]
    pub fn team_summaries(&self) -> Vec<TeamSummary> {
        view::team_summaries(&self.state)
    }

    /// The full key. For the signal-giver's eyes only.
    #[must_use]
    pub fn key_view(&self) -> Vec<KeyEntry> {
        view::key_view(&self.state)
    }

    #[must_use]
    pub fn history(&self) -> &Vector<EventRecord> {
        self.state.history()
    }

    // === Accessors ===

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        self.rules.config()
    }

    #[must_use]
    pub fn supply(&self) -> &S {
        &self.supply
    }

    /// Position of the random stream, for reproducing the next board.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    /// Resume the random stream from a checkpoint.
    pub fn restore_rng(&mut self, state: &GameRngState) {
        self.rng = GameRng::from_state(state);
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.state.is_game_over()
    }

    #[must_use]
    pub fn winner(&self) -> Option<TeamColor> {
        self.state.winner()
    }
}
