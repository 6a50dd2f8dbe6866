//! Property tests for board generation, reveals, clues and the validator.

use proptest::prelude::*;

use word_detective::words::validator::{validate_clue_word, words_rhyme};
use word_detective::{
    Board, BoardConfig, CardColor, Clue, ClueRejection, GameConfig, GameController, GameRng,
    Player, TeamColor, TurnOutcome, WordList,
};

fn team_color() -> impl Strategy<Value = TeamColor> {
    prop_oneof![Just(TeamColor::Red), Just(TeamColor::Blue)]
}

fn generated(starting: TeamColor, seed: u64) -> Board {
    let mut board = Board::new();
    board
        .generate(starting, &WordList::builtin(), &BoardConfig::default(), &mut GameRng::new(seed))
        .unwrap();
    board
}

proptest! {
    // === Board ===

    #[test]
    fn test_color_counts_hold_for_any_seed(seed in any::<u64>(), starting in team_color()) {
        let board = generated(starting, seed);
        let count = |c: CardColor| board.key().iter().filter(|&&k| k == c).count();

        prop_assert_eq!(board.cards().len(), 25);
        prop_assert_eq!(count(starting.card_color()), 9);
        prop_assert_eq!(count(starting.other().card_color()), 8);
        prop_assert_eq!(count(CardColor::Neutral), 7);
        prop_assert_eq!(count(CardColor::Failure), 1);
    }

    #[test]
    fn test_reveal_is_monotonic_and_stable(
        seed in any::<u64>(),
        cells in prop::collection::vec((0usize..5, 0usize..5), 1..40),
    ) {
        let mut board = generated(TeamColor::Red, seed);
        let key = board.key().to_vec();

        for (row, col) in cells {
            let color = board.reveal(row, col).unwrap();
            let again = board.reveal(row, col).unwrap();

            prop_assert_eq!(color, again);
            prop_assert_eq!(color, key[row * 5 + col]);
            prop_assert!(board.get(row, col).unwrap().is_revealed());
        }
        prop_assert_eq!(board.key(), key.as_slice());
    }

    #[test]
    fn test_out_of_bounds_always_rejected(row in 5usize..100, col in 0usize..100) {
        let board = generated(TeamColor::Blue, 1);
        prop_assert!(board.get(row, col).is_err());
        prop_assert!(board.get(col % 5, row).is_err());
    }

    // === Clue ===

    #[test]
    fn test_clue_guesses_floor_at_zero(number in 1u32..30, uses in 0usize..60) {
        let mut clue = Clue::new("ocean", number, TeamColor::Red);
        prop_assert_eq!(clue.guesses_remaining(), number + 1);

        for _ in 0..uses {
            clue.use_guess();
        }
        let expected = (number + 1).saturating_sub(uses as u32);
        prop_assert_eq!(clue.guesses_remaining(), expected);
        prop_assert_eq!(clue.has_guesses_left(), expected > 0);
    }

    #[test]
    fn test_zero_clue_number_rejected(word in "[a-z]{2,10}") {
        prop_assert!(Clue::try_new(word, 0, TeamColor::Blue).is_err());
    }

    // === Validator ===

    #[test]
    fn test_exact_board_word_rejected_any_case(word in "[a-z]{2,12}", upper in any::<bool>()) {
        let clue = if upper { word.to_uppercase() } else { word.clone() };
        prop_assert_eq!(
            validate_clue_word(&clue, &[word]),
            Err(ClueRejection::MatchesBoardWord)
        );
    }

    #[test]
    fn test_digits_rejected(prefix in "[a-z]{1,6}", digit in 0u8..10, suffix in "[a-z]{0,6}") {
        let clue = format!("{prefix}{digit}{suffix}");
        prop_assert_eq!(
            validate_clue_word(&clue, &["board"]),
            Err(ClueRejection::InvalidCharacters)
        );
    }

    #[test]
    fn test_containing_board_word_rejected(
        board_word in "[a-z]{3,8}",
        prefix in "[a-z]{1,4}",
        suffix in "[a-z]{0,4}",
    ) {
        let clue = format!("{prefix}{board_word}{suffix}");
        prop_assert_eq!(
            validate_clue_word(&clue, &[board_word]),
            Err(ClueRejection::ContainsBoardWord)
        );
    }

    #[test]
    fn test_shared_suffix_rhymes(stem_a in "[a-m]{1,5}", stem_b in "[n-z]{1,5}", tail in "[a-z]{3}") {
        let a = format!("{stem_a}{tail}");
        let b = format!("{stem_b}{tail}");
        prop_assert!(words_rhyme(&a, &b));
    }

    // === Guess resolution ===

    #[test]
    fn test_failure_always_loses(seed in any::<u64>(), starting in team_color(), pass_first in any::<bool>()) {
        let mut game = GameController::new(WordList::builtin(), GameConfig::default(), seed);
        game.setup_teams(
            vec![Player::signal_giver("a"), Player::guesser("b")],
            vec![Player::signal_giver("c"), Player::guesser("d")],
        ).unwrap();
        game.start_game(Some(starting.to_string().as_str())).unwrap();

        if pass_first {
            game.end_turn().unwrap();
        }
        let guessing_team = game.state().current_team_color();

        game.give_clue("ocean", 1).unwrap();
        let failure = game
            .key_view()
            .into_iter()
            .find(|k| k.color == CardColor::Failure)
            .map(|k| k.word)
            .unwrap();
        let result = game.make_guess(&failure).unwrap();

        prop_assert_eq!(result.outcome, TurnOutcome::TeamWins(guessing_team.other()));
        prop_assert_eq!(game.winner(), Some(guessing_team.other()));
    }
}
