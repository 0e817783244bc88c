//! End-to-end scenarios for the timed round engine and the game presets

use std::time::Duration;

use mhapa::config::{AppConfig, GameTuning};
use mhapa::content::{ContentTable, BREATHING_PHASES, EMOTIONS, MEMORY_EMOJIS, QUIZ_QUESTIONS};
use mhapa::engine::{ActiveGame, Evaluation, FailReason, Phase, Session, SessionConfig};
use mhapa::games::{GameKind, MEMORY_MAX_SEQUENCE};

fn answer(session: &Session) -> usize {
    let snapshot = session.snapshot();
    let item = snapshot.content[snapshot.input_progress];
    session.table().expected(item).unwrap()
}

fn three_rounds() -> SessionConfig {
    SessionConfig::new()
        .with_round_count(3)
        .with_time_budget(30)
        .with_seed(Some(7))
}

#[test]
fn test_start_shows_first_round() {
    let mut session = Session::new(&EMOTIONS);
    session.start(three_rounds()).unwrap();

    assert_eq!(session.phase(), Phase::Showing);
    assert_eq!(session.current_round().unwrap().index, 1);
    assert_eq!(session.snapshot().round_total, 3);
}

#[test]
fn test_all_correct_completes_with_summed_score() {
    let mut session = Session::new(&EMOTIONS);
    session.start(three_rounds()).unwrap();

    let mut awarded = 0;
    for _ in 0..3 {
        session.begin_input();
        match session.submit_input(answer(&session)) {
            Some(Evaluation::RoundCleared { awarded: a })
            | Some(Evaluation::SessionComplete { awarded: a }) => awarded += a,
            other => panic!("unexpected evaluation {:?}", other),
        }
    }

    assert_eq!(session.phase(), Phase::Complete);
    assert_eq!(session.score(), awarded);
    assert_eq!(session.rounds_cleared(), 3);
}

#[test]
fn test_thirty_idle_ticks_fail_the_session() {
    let mut session = Session::new(&EMOTIONS);
    session.start(three_rounds()).unwrap();
    session.begin_input();

    for _ in 0..30 {
        session.tick(1);
    }

    assert_eq!(session.phase(), Phase::Failed);
    assert_eq!(session.time_remaining(), 0);
    assert_eq!(
        session.last_evaluation(),
        Some(Evaluation::SessionFailed(FailReason::TimeExpired))
    );
}

#[test]
fn test_zero_settings_are_rejected() {
    for config in [
        three_rounds().with_round_count(0),
        three_rounds().with_time_budget(0),
        three_rounds().with_difficulty(mhapa::engine::Difficulty::Fixed(0), 1),
    ] {
        let mut session = Session::new(&EMOTIONS);
        assert!(session.start(config).is_err());
        assert_eq!(session.phase(), Phase::Idle);
    }
}

#[test]
fn test_memory_sequence_never_exceeds_cap() {
    let config = AppConfig::default()
        .with_seed(Some(21))
        .with_memory(GameTuning::new(12, 20));
    let mut session = Session::new(&MEMORY_EMOJIS);
    session
        .start(GameKind::MemorySequence.session_config(&config).unwrap())
        .unwrap();

    let mut round = 0;
    while session.phase() != Phase::Complete {
        round += 1;
        let len = session.current_round().unwrap().len();
        assert_eq!(len, round.min(MEMORY_MAX_SEQUENCE));

        session.begin_input();
        for _ in 0..len {
            session.submit_input(answer(&session));
        }
    }
    assert_eq!(round, 12);
}

#[test]
fn test_default_breathing_completes_after_twelve_phases() {
    let config = GameKind::Breathing
        .session_config(&AppConfig::default())
        .unwrap();
    let mut session = Session::new(&BREATHING_PHASES);
    session.start(config).unwrap();

    let mut ticks = 0;
    while !session.phase().is_terminal() {
        session.tick(1);
        ticks += 1;
        assert!(ticks <= 48);
    }
    assert_eq!(ticks, 48);
    assert_eq!(session.phase(), Phase::Complete);
    assert_eq!(session.score(), 12);
}

#[test]
fn test_quiz_moves_on_after_wrong_answer() {
    let config = GameKind::StressQuiz
        .session_config(&AppConfig::default())
        .unwrap();
    let mut session = Session::new(&QUIZ_QUESTIONS);
    session.start(config).unwrap();

    session.begin_input();
    let wrong = (QUIZ_QUESTIONS[0].correct_index + 1) % QUIZ_QUESTIONS[0].options.len();
    assert_eq!(session.submit_input(wrong), Some(Evaluation::RoundMissed));
    assert_eq!(session.current_round().unwrap().index, 2);

    for _ in 0..2 {
        session.begin_input();
        session.submit_input(answer(&session));
    }
    assert_eq!(session.phase(), Phase::Complete);
    assert_eq!(session.score(), 2);
    assert_eq!(session.mistakes(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_abort_cancels_the_clock() {
    let mut game = ActiveGame::launch(
        &EMOTIONS,
        three_rounds(),
        Duration::from_secs(1),
    )
    .unwrap();
    game.begin_input();

    tokio::time::sleep(Duration::from_secs(3)).await;
    game.pump();
    let remaining = game.snapshot().time_remaining;
    assert!(remaining < 30);

    game.abort();
    assert_eq!(game.phase(), Phase::Idle);
    assert!(!game.is_timer_running());

    tokio::time::sleep(Duration::from_secs(10)).await;
    assert!(game.pump().is_empty());
    assert_eq!(game.phase(), Phase::Idle);
}

#[tokio::test(start_paused = true)]
async fn test_clock_expires_an_unanswered_round() {
    let mut game = ActiveGame::launch(
        &EMOTIONS,
        three_rounds().with_time_budget(5),
        Duration::from_secs(1),
    )
    .unwrap();
    game.begin_input();

    let mut evaluations = Vec::new();
    for _ in 0..10 {
        tokio::time::sleep(Duration::from_secs(1)).await;
        evaluations.extend(game.pump());
        if game.phase().is_terminal() {
            break;
        }
    }

    assert_eq!(game.phase(), Phase::Failed);
    assert_eq!(
        evaluations,
        vec![Evaluation::SessionFailed(FailReason::TimeExpired)]
    );
    assert!(!game.is_timer_running());
}
