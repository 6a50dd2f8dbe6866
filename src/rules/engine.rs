//! The rules engine: legality checks and guess resolution.
//!
//! `Rules` holds only its configuration. Every method takes the `GameState`
//! it acts on, so one engine can serve any number of games.
//!
//! ## Turn flow
//!
//! ```text
//! ClueGiving(team) --give_clue--> Guessing(team) --process_guess--+
//!        ^                                                         |
//!        +------------- switch_teams (TurnEnds) <-----------------+
//!                                   end_game (TeamWins) ----> GameOver
//! ```
//!
//! Checks return `Result<(), GameError>` whose `Display` text is the reason
//! to show the player. Mutating methods run the matching check first and
//! leave the state untouched when it fails.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::core::clue::Clue;
use crate::core::color::{CardColor, TeamColor};
use crate::core::config::GameConfig;
use crate::core::event::GameEvent;
use crate::core::state::{GameState, Phase, TurnType};
use crate::core::team::Team;
use crate::error::GameError;
use crate::words::validator::validate_clue_word;

/// What happens after a card is revealed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TurnOutcome {
    /// The same team keeps guessing.
    Continue,
    /// Play passes to the other team.
    TurnEnds,
    /// The game is decided.
    TeamWins(TeamColor),
}

impl TurnOutcome {
    #[must_use]
    pub fn is_continue(self) -> bool {
        self == TurnOutcome::Continue
    }

    #[must_use]
    pub fn winner(self) -> Option<TeamColor> {
        match self {
            TurnOutcome::TeamWins(team) => Some(team),
            TurnOutcome::Continue | TurnOutcome::TurnEnds => None,
        }
    }
}

/// Result of resolving one guess.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessResult {
    /// The card's word as printed on the board.
    pub word: String,

    /// The revealed color.
    pub color: CardColor,

    pub outcome: TurnOutcome,

    /// Guesses left on the active clue after this one.
    pub guesses_remaining: u32,
}

impl GuessResult {
    /// The team may keep guessing.
    #[must_use]
    pub fn should_continue(&self) -> bool {
        self.outcome.is_continue()
    }

    #[must_use]
    pub fn winner(&self) -> Option<TeamColor> {
        self.outcome.winner()
    }
}

/// Stateless rules service.
#[derive(Clone, Debug, Default)]
pub struct Rules {
    config: GameConfig,
}

impl Rules {
    /// Create an engine for the given configuration.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    fn ensure_in_play(state: &GameState) -> Result<(), GameError> {
        if state.is_game_over() {
            return Err(GameError::GameIsOver);
        }
        if state.phase() == Phase::Setup {
            return Err(GameError::GameNotStarted);
        }
        Ok(())
    }

    // === Clues ===

    /// Whether the current team's signal-giver may give a clue now.
    pub fn can_give_clue(&self, state: &GameState) -> Result<(), GameError> {
        Self::ensure_in_play(state)?;
        if state.turn_type() != TurnType::SignalTurn {
            return Err(GameError::NotCluePhase);
        }

        let team = state.current_team().ok_or(GameError::TeamsNotAssigned)?;
        if !team.has_signal_giver() {
            return Err(GameError::MissingSignalGiver(team.color()));
        }
        Ok(())
    }

    /// Check a clue word and number.
    ///
    /// The word is checked against every board word, revealed or not.
    pub fn validate_clue(&self, word: &str, number: u32, state: &GameState) -> Result<(), GameError> {
        let max = self.config.max_clue_number;
        if number < 1 || number > max {
            return Err(GameError::ClueNumberOutOfRange { number, max });
        }

        validate_clue_word(word, &state.board().words()).map_err(GameError::InvalidClue)
    }

    /// Largest clue number the team may give: its remaining words, at least 1.
    #[must_use]
    pub fn max_clue_number(&self, team: &Team) -> u32 {
        team.words_remaining().max(1)
    }

    /// Give a clue for the current team and move to guessing.
    #[instrument(skip(self, state), fields(team = %state.current_team_color()))]
    pub fn give_clue(&self, word: &str, number: u32, state: &mut GameState) -> Result<Clue, GameError> {
        self.can_give_clue(state)?;
        self.validate_clue(word, number, state)?;

        let team = state.current_team().ok_or(GameError::TeamsNotAssigned)?;
        let max = self.max_clue_number(team);
        if number > max {
            return Err(GameError::ClueExceedsRemaining { number, max });
        }

        let clue = Clue::try_new(word.trim(), number, team.color())?;
        state.begin_guessing(clue.clone());

        debug!(guesses = clue.guesses_remaining(), "Clue given");
        Ok(clue)
    }

    // === Guesses ===

    /// Whether the current team's guessers may guess now.
    pub fn can_make_guess(&self, state: &GameState) -> Result<(), GameError> {
        Self::ensure_in_play(state)?;
        if state.turn_type() != TurnType::GuessTurn {
            return Err(GameError::NotGuessPhase);
        }

        let clue = state.current_clue().ok_or(GameError::NoActiveClue)?;
        if !clue.has_guesses_left() {
            return Err(GameError::NoGuessesLeft);
        }

        let team = state.current_team().ok_or(GameError::TeamsNotAssigned)?;
        if !team.has_guessers() {
            return Err(GameError::MissingGuessers(team.color()));
        }
        Ok(())
    }

    /// Check that a guess names a hidden board word.
    pub fn validate_guess(&self, word: &str, state: &GameState) -> Result<(), GameError> {
        let word = word.trim();
        if word.is_empty() {
            return Err(GameError::EmptyGuess);
        }

        let card = state
            .board()
            .get_by_word(word)
            .map_err(|_| GameError::WordNotOnBoard(word.to_string()))?;
        if card.is_revealed() {
            return Err(GameError::AlreadyRevealed(card.word().to_string()));
        }
        Ok(())
    }

    /// Reveal a guessed card and decide what happens next.
    ///
    /// Spends one guess from the active clue and credits the owning team if
    /// the card is a team card. Does not switch teams or end the game; the
    /// caller applies the returned outcome.
    ///
    /// Runs [`Rules::can_make_guess`] and [`Rules::validate_guess`] first, so
    /// a card is revealed and credited at most once.
    #[instrument(skip(self, state), fields(team = %state.current_team_color()))]
    pub fn process_guess(&self, word: &str, state: &mut GameState) -> Result<GuessResult, GameError> {
        self.can_make_guess(state)?;
        self.validate_guess(word, state)?;

        let card = state.board().get_by_word(word.trim())?;
        let word = card.word().to_string();

        let color = state.board_mut().reveal_by_word(&word)?;
        let guesses_remaining = state.clue_mut().map_or(0, Clue::use_guess);
        if let Some(owner) = color.team() {
            if let Some(team) = state.team_mut(owner) {
                team.word_found();
            }
        }

        let team = state.current_team_color();
        state.record(GameEvent::Guessed {
            team,
            word: word.clone(),
            color,
        });

        let outcome = self.outcome_after_reveal(color, state);
        debug!(%word, %color, ?outcome, guesses_remaining, "Card revealed");

        Ok(GuessResult {
            word,
            color,
            outcome,
            guesses_remaining,
        })
    }

    /// Decide the turn outcome for a card of `color` that has just been
    /// revealed and credited.
    ///
    /// - failure: the other team wins
    /// - a team card that empties its team's count: that team wins
    /// - the current team's card with guesses left: continue
    /// - anything else: the turn ends
    #[must_use]
    pub fn outcome_after_reveal(&self, color: CardColor, state: &GameState) -> TurnOutcome {
        let current = state.current_team_color();

        if color == CardColor::Failure {
            return TurnOutcome::TeamWins(current.other());
        }

        match color.team() {
            Some(owner) if state.team(owner).is_some_and(Team::has_won) => TurnOutcome::TeamWins(owner),
            Some(owner)
                if owner == current && state.current_clue().is_some_and(Clue::has_guesses_left) =>
            {
                TurnOutcome::Continue
            }
            _ => TurnOutcome::TurnEnds,
        }
    }

    /// The turn is over after revealing `color`.
    #[must_use]
    pub fn should_end_turn(&self, color: CardColor, state: &GameState) -> bool {
        !self.outcome_after_reveal(color, state).is_continue()
    }

    // === Turn and game end ===

    /// Hand play to the other team.
    pub fn switch_teams(&self, state: &mut GameState) {
        state.switch_teams();
    }

    /// Voluntarily end the current team's turn.
    pub fn end_turn(&self, state: &mut GameState) -> Result<(), GameError> {
        Self::ensure_in_play(state)?;
        state.switch_teams();
        Ok(())
    }

    /// Winner implied by the board, independent of how it was reached.
    ///
    /// A team with no words left wins; otherwise a revealed failure card
    /// hands the win to the team not currently playing. Always `None` before
    /// the game starts.
    #[must_use]
    pub fn check_game_end_conditions(&self, state: &GameState) -> Option<TeamColor> {
        if state.phase() == Phase::Setup {
            return None;
        }

        let emptied = TeamColor::ALL
            .into_iter()
            .find(|&color| state.team(color).is_some_and(Team::has_won));
        if emptied.is_some() {
            return emptied;
        }

        state
            .board()
            .failure_revealed()
            .then(|| state.current_team_color().other())
    }

    // === Setup ===

    /// A team needs a signal-giver and at least one guesser.
    pub fn is_valid_team_setup(&self, team: &Team) -> Result<(), GameError> {
        team.validate()
    }

    /// Both teams are attached and valid.
    pub fn can_start_game(&self, state: &GameState) -> Result<(), GameError> {
        for color in TeamColor::ALL {
            let team = state.team(color).ok_or(GameError::TeamsNotAssigned)?;
            self.is_valid_team_setup(team)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::board::Board;
    use crate::core::config::BoardConfig;
    use crate::core::team::Player;

    // Red starts: card00-card08 red, card09-card16 blue,
    // card17-card23 neutral, card24 failure.
    fn started_state() -> GameState {
        let words: Vec<String> = (0..25).map(|i| format!("card{i:02}")).collect();
        let config = BoardConfig::default();
        let board = Board::from_layout(words, config.color_template(TeamColor::Red), &config).unwrap();

        let mut state = GameState::new();
        for color in TeamColor::ALL {
            state
                .set_team(
                    Team::new(color)
                        .with_player(Player::signal_giver("giver"))
                        .with_player(Player::guesser("guesser")),
                )
                .unwrap();
        }
        state.attach_board(board, TeamColor::Red).unwrap();
        state.start_game().unwrap();
        state
    }

    #[test]
    fn test_can_give_clue() {
        let rules = Rules::default();
        assert_eq!(rules.can_give_clue(&GameState::new()), Err(GameError::GameNotStarted));

        let mut state = started_state();
        assert_eq!(rules.can_give_clue(&state), Ok(()));

        rules.give_clue("ocean", 2, &mut state).unwrap();
        assert_eq!(rules.can_give_clue(&state), Err(GameError::NotCluePhase));
    }

    #[test]
    fn test_validate_clue_number_range() {
        let rules = Rules::new(GameConfig::default().with_max_clue_number(4));
        let state = started_state();

        assert_eq!(
            rules.validate_clue("ocean", 0, &state),
            Err(GameError::ClueNumberOutOfRange { number: 0, max: 4 })
        );
        assert_eq!(
            rules.validate_clue("ocean", 5, &state),
            Err(GameError::ClueNumberOutOfRange { number: 5, max: 4 })
        );
        assert_eq!(rules.validate_clue("ocean", 4, &state), Ok(()));
    }

    #[test]
    fn test_validate_clue_word() {
        let rules = Rules::default();
        let state = started_state();
        assert_eq!(
            rules.validate_clue("Card", 1, &state),
            Err(GameError::InvalidClue(crate::words::ClueRejection::ContainsBoardWord))
        );
    }

    #[test]
    fn test_give_clue() {
        let rules = Rules::default();
        let mut state = started_state();

        let clue = rules.give_clue("  ocean ", 2, &mut state).unwrap();

        assert_eq!(clue.word(), "ocean");
        assert_eq!(clue.team(), TeamColor::Red);
        assert_eq!(clue.guesses_remaining(), 3);
        assert_eq!(state.turn_type(), TurnType::GuessTurn);
        assert_eq!(state.phase(), Phase::Guessing);
        assert_eq!(state.current_clue(), Some(&clue));
    }

    #[test]
    fn test_give_clue_capped_by_remaining_words() {
        let rules = Rules::default();
        let mut state = started_state();
        state.team_mut(TeamColor::Red).unwrap().set_word_count(2);

        assert_eq!(
            rules.give_clue("ocean", 3, &mut state),
            Err(GameError::ClueExceedsRemaining { number: 3, max: 2 })
        );
        assert_eq!(state.phase(), Phase::ClueGiving);
        assert!(state.current_clue().is_none());
    }

    #[test]
    fn test_max_clue_number_floor() {
        let rules = Rules::default();
        let mut team = Team::new(TeamColor::Red);
        assert_eq!(rules.max_clue_number(&team), 1);
        team.set_word_count(6);
        assert_eq!(rules.max_clue_number(&team), 6);
    }

    #[test]
    fn test_can_make_guess() {
        let rules = Rules::default();
        let mut state = started_state();
        assert_eq!(rules.can_make_guess(&state), Err(GameError::NotGuessPhase));

        rules.give_clue("ocean", 1, &mut state).unwrap();
        assert_eq!(rules.can_make_guess(&state), Ok(()));

        state.clue_mut().unwrap().use_guess();
        state.clue_mut().unwrap().use_guess();
        assert_eq!(rules.can_make_guess(&state), Err(GameError::NoGuessesLeft));
    }

    #[test]
    fn test_validate_guess() {
        let rules = Rules::default();
        let mut state = started_state();
        rules.give_clue("ocean", 2, &mut state).unwrap();

        assert_eq!(rules.validate_guess("  ", &state), Err(GameError::EmptyGuess));
        assert_eq!(
            rules.validate_guess("pumpkin", &state),
            Err(GameError::WordNotOnBoard("pumpkin".into()))
        );
        assert_eq!(rules.validate_guess("CARD00", &state), Ok(()));

        rules.process_guess("card00", &mut state).unwrap();
        assert_eq!(
            rules.validate_guess("Card00", &state),
            Err(GameError::AlreadyRevealed("card00".into()))
        );
    }

    #[test]
    fn test_process_guess_own_card_continues() {
        let rules = Rules::default();
        let mut state = started_state();
        rules.give_clue("ocean", 2, &mut state).unwrap();

        let result = rules.process_guess("CARD01", &mut state).unwrap();

        assert_eq!(result.word, "card01");
        assert_eq!(result.color, CardColor::Red);
        assert_eq!(result.outcome, TurnOutcome::Continue);
        assert_eq!(result.guesses_remaining, 2);
        assert_eq!(state.team(TeamColor::Red).unwrap().words_remaining(), 8);
    }

    #[test]
    fn test_process_guess_neutral_ends_turn() {
        let rules = Rules::default();
        let mut state = started_state();
        rules.give_clue("ocean", 2, &mut state).unwrap();

        let result = rules.process_guess("card20", &mut state).unwrap();
        assert_eq!(result.color, CardColor::Neutral);
        assert_eq!(result.outcome, TurnOutcome::TurnEnds);
    }

    #[test]
    fn test_process_guess_opponent_card_credits_opponent() {
        let rules = Rules::default();
        let mut state = started_state();
        rules.give_clue("ocean", 2, &mut state).unwrap();

        let result = rules.process_guess("card10", &mut state).unwrap();
        assert_eq!(result.color, CardColor::Blue);
        assert_eq!(result.outcome, TurnOutcome::TurnEnds);
        assert_eq!(state.team(TeamColor::Blue).unwrap().words_remaining(), 7);
    }

    #[test]
    fn test_process_guess_last_guess_ends_turn() {
        let rules = Rules::default();
        let mut state = started_state();
        rules.give_clue("ocean", 1, &mut state).unwrap();

        assert!(rules.process_guess("card00", &mut state).unwrap().should_continue());
        let result = rules.process_guess("card01", &mut state).unwrap();
        assert_eq!(result.guesses_remaining, 0);
        assert_eq!(result.outcome, TurnOutcome::TurnEnds);
    }

    #[test]
    fn test_process_guess_failure() {
        let rules = Rules::default();
        let mut state = started_state();
        rules.give_clue("ocean", 2, &mut state).unwrap();

        let result = rules.process_guess("card24", &mut state).unwrap();
        assert_eq!(result.color, CardColor::Failure);
        assert_eq!(result.winner(), Some(TeamColor::Blue));
    }

    #[test]
    fn test_process_guess_opponent_last_word_wins_for_opponent() {
        let rules = Rules::default();
        let mut state = started_state();
        state.team_mut(TeamColor::Blue).unwrap().set_word_count(1);
        rules.give_clue("ocean", 2, &mut state).unwrap();

        let result = rules.process_guess("card12", &mut state).unwrap();
        assert_eq!(result.outcome, TurnOutcome::TeamWins(TeamColor::Blue));
    }

    #[test]
    fn test_process_guess_unknown_word_changes_nothing() {
        let rules = Rules::default();
        let mut state = started_state();
        rules.give_clue("ocean", 2, &mut state).unwrap();
        let before = state.history().len();

        assert_eq!(
            rules.process_guess("pumpkin", &mut state),
            Err(GameError::WordNotOnBoard("pumpkin".into()))
        );
        assert_eq!(state.current_clue().unwrap().guesses_remaining(), 3);
        assert_eq!(state.history().len(), before);
    }

    #[test]
    fn test_process_guess_same_card_credits_once() {
        let rules = Rules::default();
        let mut state = started_state();
        rules.give_clue("ocean", 3, &mut state).unwrap();

        rules.process_guess("card00", &mut state).unwrap();
        for _ in 0..3 {
            assert_eq!(
                rules.process_guess("CARD00", &mut state),
                Err(GameError::AlreadyRevealed("card00".into()))
            );
        }

        assert_eq!(state.team(TeamColor::Red).unwrap().words_remaining(), 8);
        assert_eq!(state.current_clue().unwrap().guesses_remaining(), 3);
    }

    #[test]
    fn test_process_guess_stops_when_guesses_run_out() {
        let rules = Rules::default();
        let mut state = started_state();
        rules.give_clue("ocean", 1, &mut state).unwrap();

        rules.process_guess("card00", &mut state).unwrap();
        rules.process_guess("card01", &mut state).unwrap();
        let before = state.history().len();

        assert_eq!(
            rules.process_guess("card02", &mut state),
            Err(GameError::NoGuessesLeft)
        );
        assert!(!state.board().is_word_revealed("card02"));
        assert_eq!(state.team(TeamColor::Red).unwrap().words_remaining(), 7);
        assert_eq!(state.history().len(), before);
    }

    #[test]
    fn test_process_guess_outside_guess_turn() {
        let rules = Rules::default();
        let mut state = started_state();
        assert_eq!(
            rules.process_guess("card00", &mut state),
            Err(GameError::NotGuessPhase)
        );
        assert!(!state.board().is_word_revealed("card00"));
    }

    #[test]
    fn test_should_end_turn_matches_outcome() {
        let rules = Rules::default();
        let mut state = started_state();
        rules.give_clue("ocean", 2, &mut state).unwrap();

        assert!(!rules.should_end_turn(CardColor::Red, &state));
        assert!(rules.should_end_turn(CardColor::Blue, &state));
        assert!(rules.should_end_turn(CardColor::Neutral, &state));
        assert!(rules.should_end_turn(CardColor::Failure, &state));
    }

    #[test]
    fn test_end_turn() {
        let rules = Rules::default();
        let mut state = started_state();

        rules.end_turn(&mut state).unwrap();
        assert_eq!(state.current_team_color(), TeamColor::Blue);

        state.end_game(TeamColor::Red);
        assert_eq!(rules.end_turn(&mut state), Err(GameError::GameIsOver));
    }

    #[test]
    fn test_check_game_end_conditions() {
        let rules = Rules::default();
        assert_eq!(rules.check_game_end_conditions(&GameState::new()), None);

        let mut state = started_state();
        assert_eq!(rules.check_game_end_conditions(&state), None);

        state.board_mut().reveal_by_word("card24").unwrap();
        assert_eq!(rules.check_game_end_conditions(&state), Some(TeamColor::Blue));
        assert_eq!(rules.check_game_end_conditions(&state), Some(TeamColor::Blue));

        let mut state = started_state();
        state.team_mut(TeamColor::Blue).unwrap().set_word_count(0);
        assert_eq!(rules.check_game_end_conditions(&state), Some(TeamColor::Blue));
    }

    #[test]
    fn test_can_start_game() {
        let rules = Rules::default();
        let mut state = GameState::new();
        assert_eq!(rules.can_start_game(&state), Err(GameError::TeamsNotAssigned));

        state.set_team(Team::new(TeamColor::Red).with_player(Player::signal_giver("a"))).unwrap();
        state.set_team(Team::new(TeamColor::Blue)).unwrap();
        assert_eq!(
            rules.can_start_game(&state),
            Err(GameError::MissingGuessers(TeamColor::Red))
        );
    }

    #[test]
    fn test_outcome_serde() {
        let json = serde_json::to_string(&TurnOutcome::TeamWins(TeamColor::Red)).unwrap();
        assert_eq!(json, r#"{"team_wins":"red"}"#);
    }
}
