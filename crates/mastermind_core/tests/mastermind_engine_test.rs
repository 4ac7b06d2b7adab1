//! Tests for the round/game state machine.

use mastermind_core::{
    Code, Entropy, GameConfig, GameEngine, Hint, KeyEvent, Keymap, Message, Outcome, RandEntropy,
    SessionState, Transition,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Entropy that always draws the same value, reduced into range.
///
/// With the standard shuffle over ten digits a constant 0 yields the
/// secret `1234`; with duplicates allowed a constant 7 yields `7777`.
struct Constant(usize);

impl Entropy for Constant {
    fn random_below(&mut self, n: usize) -> usize {
        self.0 % n
    }
}

fn fixed_engine() -> GameEngine<Constant> {
    GameEngine::new(GameConfig::default(), Constant(0)).expect("valid config")
}

fn press(engine: &mut GameEngine<impl Entropy>, keys: &str) -> Vec<Transition> {
    let keymap = Keymap::default();
    keys.chars()
        .map(|key| engine.handle(keymap.decode(key, 10)))
        .collect()
}

fn last_evaluation(transitions: &[Transition]) -> (String, Outcome) {
    match transitions.last() {
        Some(Transition::Evaluated(evaluation)) => {
            (evaluation.hints.to_string(), evaluation.outcome)
        }
        other => panic!("Expected an evaluation, got {:?}", other),
    }
}

#[test]
fn test_fixed_secret_is_1234() {
    let engine = fixed_engine();
    assert_eq!(engine.session().secret().to_string(), "1234");
}

#[test]
fn test_evaluation_exactness() {
    let mut engine = fixed_engine();
    let transitions = press(&mut engine, "1243");
    let (hints, outcome) = last_evaluation(&transitions);
    assert_eq!(hints, "++??");
    assert_eq!(outcome, Outcome::Continue);

    let snapshot = engine.snapshot();
    assert_eq!(*snapshot.state(), SessionState::RoundOver);
    assert_eq!(*snapshot.message(), Some(Message::NextTry));
    let hints = snapshot.hints().as_ref().expect("hints after evaluation");
    assert_eq!(
        hints.as_slice(),
        &[Hint::Correct, Hint::Correct, Hint::Misplaced, Hint::Misplaced]
    );
}

#[test]
fn test_all_wrong() {
    let mut engine = fixed_engine();
    let (hints, _) = last_evaluation(&press(&mut engine, "5678"));
    assert_eq!(hints, "....");
}

#[test]
fn test_win_with_duplicate_secret() {
    let config = GameConfig::default().with_allow_duplicates(true);
    let mut engine = GameEngine::new(config, Constant(7)).expect("valid config");
    assert_eq!(engine.session().secret().to_string(), "7777");

    let (hints, outcome) = last_evaluation(&press(&mut engine, "7777"));
    assert_eq!(hints, "++++");
    assert_eq!(outcome, Outcome::Won);

    let snapshot = engine.snapshot();
    assert_eq!(*snapshot.state(), SessionState::GameOver);
    assert_eq!(*snapshot.message(), Some(Message::Win));
    assert_eq!(snapshot.revealed().map(|c| c.to_string()), Some("7777".to_string()));
}

#[test]
fn test_loss_boundary() {
    let mut engine = fixed_engine();

    for round in 1..=11 {
        let (_, outcome) = last_evaluation(&press(&mut engine, "5678"));
        assert_eq!(outcome, Outcome::Continue, "round {}", round);
        assert_eq!(*engine.snapshot().state(), SessionState::RoundOver);
        press(&mut engine, "#");
    }

    let (_, outcome) = last_evaluation(&press(&mut engine, "5678"));
    assert_eq!(outcome, Outcome::Lost);

    let snapshot = engine.snapshot();
    assert_eq!(*snapshot.state(), SessionState::GameOver);
    assert_eq!(*snapshot.try_count(), 12);
    assert_eq!(*snapshot.message(), Some(Message::Lose));
    assert_eq!(snapshot.revealed().map(|c| c.to_string()), Some("1234".to_string()));
}

#[test]
fn test_solved_on_final_try_wins() {
    let mut engine = fixed_engine();
    for _ in 1..=11 {
        press(&mut engine, "5678#");
    }
    let (_, outcome) = last_evaluation(&press(&mut engine, "1234"));
    assert_eq!(outcome, Outcome::Won);
    assert_eq!(*engine.snapshot().try_count(), 12);
}

#[test]
fn test_digit_in_game_over_has_no_effect() {
    let mut engine = fixed_engine();
    press(&mut engine, "1234");
    assert_eq!(*engine.snapshot().state(), SessionState::GameOver);

    let before = engine.snapshot();
    assert_eq!(press(&mut engine, "5"), vec![Transition::Ignored]);
    assert_eq!(engine.snapshot(), before);
}

#[test]
fn test_new_game_resets_session() {
    let mut engine = GameEngine::new(
        GameConfig::default(),
        RandEntropy::new(StdRng::seed_from_u64(11)),
    )
    .expect("valid config");

    let mut secrets = Vec::new();
    for _ in 0..8 {
        press(&mut engine, "01");
        press(&mut engine, "23");
        assert_eq!(press(&mut engine, "*"), vec![Transition::GameStarted]);

        let snapshot = engine.snapshot();
        assert_eq!(*snapshot.state(), SessionState::AwaitingInput);
        assert_eq!(*snapshot.try_count(), 0);
        assert!(snapshot.guess().is_empty());
        assert!(snapshot.hints().is_none());
        assert!(snapshot.message().is_none());
        assert!(engine.session().secret().is_distinct());
        secrets.push(engine.session().secret().to_string());
    }

    secrets.sort();
    secrets.dedup();
    assert!(secrets.len() > 1, "new games should draw fresh secrets");
}

#[test]
fn test_new_round_in_game_over_starts_new_game() {
    let mut engine = fixed_engine();
    press(&mut engine, "1234");
    assert_eq!(*engine.snapshot().state(), SessionState::GameOver);

    assert_eq!(press(&mut engine, "#"), vec![Transition::GameStarted]);
    let snapshot = engine.snapshot();
    assert_eq!(*snapshot.state(), SessionState::AwaitingInput);
    assert_eq!(*snapshot.try_count(), 0);
    assert!(snapshot.revealed().is_none());
}

#[test]
fn test_new_round_keeps_secret_and_tries() {
    let mut engine = fixed_engine();
    press(&mut engine, "5678");
    press(&mut engine, "90");
    // Digits after the evaluation were ignored.
    assert_eq!(engine.snapshot().guess().to_string(), "5678");

    assert_eq!(press(&mut engine, "#"), vec![Transition::RoundStarted]);
    let snapshot = engine.snapshot();
    assert_eq!(*snapshot.state(), SessionState::AwaitingInput);
    assert_eq!(*snapshot.try_count(), 1);
    assert!(snapshot.guess().is_empty());
    assert!(snapshot.hints().is_none());
    assert_eq!(engine.session().secret().to_string(), "1234");
}

#[test]
fn test_new_round_clears_partial_guess() {
    let mut engine = fixed_engine();
    press(&mut engine, "12");
    assert_eq!(engine.snapshot().guess().to_string(), "12");
    press(&mut engine, "#");
    assert!(engine.snapshot().guess().is_empty());
    assert_eq!(*engine.snapshot().try_count(), 0);
}

#[test]
fn test_unknown_keys_leave_snapshot_unchanged() {
    let mut engine = fixed_engine();

    // Awaiting input, part-way through a guess.
    press(&mut engine, "12");
    let before = engine.snapshot();
    for key in ['A', 'B', 'C', 'D', 'x'] {
        assert_eq!(engine.handle(KeyEvent::Other(key)), Transition::Ignored);
    }
    assert_eq!(engine.snapshot(), before);

    // Round over.
    press(&mut engine, "56");
    let before = engine.snapshot();
    assert_eq!(engine.handle(KeyEvent::Other('A')), Transition::Ignored);
    assert_eq!(engine.snapshot(), before);
}

#[test]
fn test_submit_guess_matches_key_path() {
    let mut engine = fixed_engine();
    let evaluation = engine
        .submit_guess(Code::parse("1243").unwrap())
        .expect("accepted while awaiting input");
    assert_eq!(evaluation.hints.to_string(), "++??");
    assert_eq!(*engine.snapshot().try_count(), 1);

    // Not accepted again until a new round.
    assert!(engine.submit_guess(Code::parse("1234").unwrap()).is_none());
    assert_eq!(*engine.snapshot().try_count(), 1);
}

#[test]
fn test_snapshot_serializes_codes_as_strings() {
    let mut engine = fixed_engine();
    press(&mut engine, "1243");
    let json = serde_json::to_value(engine.snapshot()).expect("serializable");
    assert_eq!(json["state"], "ROUND_OVER");
    assert_eq!(json["guess"], "1243");
    assert_eq!(json["hints"], "++??");
    assert_eq!(json["message"], "NEXT-TRY");
    assert!(json["revealed"].is_null());
}
