//! Score history, profile and configuration files against a temp directory

use mhapa::config::{AppConfig, GameTuning, ProfileStore, ProfileUpdate, ScoreHistory};
use mhapa::content::{QuestGroup, EMOTIONS};
use mhapa::engine::{Session, SessionConfig};
use mhapa::games::{DayPlan, GameKind};
use mhapa::models::{GameRecord, Outcome};
use mhapa::MAX_SCORE_HISTORY;
use tempfile::TempDir;

#[test]
fn test_finished_session_lands_in_history() {
    let dir = TempDir::new().unwrap();
    let history = ScoreHistory::with_path(dir.path().join("scores.json"));

    let mut session = Session::new(&EMOTIONS);
    session
        .start(SessionConfig::new().with_round_count(2).with_seed(Some(1)))
        .unwrap();
    session.begin_input();
    session.tick(30);

    let record = GameRecord::from_snapshot(
        GameKind::EmotionMatch,
        Some(QuestGroup::EmotionExplorer),
        &session.snapshot(),
    );
    assert_eq!(record.outcome, Outcome::Failed);
    history.append_record(record).unwrap();

    let records = history.load_records().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].game, GameKind::EmotionMatch);
    assert_eq!(records[0].quest_group, Some(QuestGroup::EmotionExplorer));
    assert_eq!(records[0].rounds_total, 2);
    assert_eq!(history.completed_count(&[GameKind::EmotionMatch]).unwrap(), 0);
}

#[test]
fn test_planner_result_is_recorded_like_a_session() {
    let dir = TempDir::new().unwrap();
    let history = ScoreHistory::with_path(dir.path().join("scores.json"));

    let mut plan = DayPlan::new();
    plan.add(0).unwrap();
    plan.add(1).unwrap();
    let summary = plan.finish().unwrap();

    let record = GameRecord::new(
        GameKind::TimePlanner,
        Some(QuestGroup::TimeTactician),
        summary.total(),
        summary.activities as u32,
        summary.activities as u32,
        Outcome::Complete,
    );
    history.append_record(record).unwrap();

    assert_eq!(history.completed_count(&[GameKind::TimePlanner]).unwrap(), 1);
    assert_eq!(
        history.best_score(GameKind::TimePlanner).unwrap(),
        Some(summary.total())
    );
}

#[test]
fn test_history_rotates_oldest_records() {
    let dir = TempDir::new().unwrap();
    let history = ScoreHistory::with_path(dir.path().join("scores.json"));

    for score in 0..(MAX_SCORE_HISTORY as u32 + 5) {
        let record = GameRecord::new(GameKind::StressQuiz, None, score, 3, 3, Outcome::Complete);
        history.append_record(record).unwrap();
    }

    let records = history.load_records().unwrap();
    assert_eq!(records.len(), MAX_SCORE_HISTORY);
    assert_eq!(records[0].score, 5);
    assert_eq!(history.recent_records(1).unwrap()[0].score, MAX_SCORE_HISTORY as u32 + 4);
}

#[test]
fn test_profile_lifecycle() {
    let dir = TempDir::new().unwrap();
    let store = ProfileStore::with_path(dir.path().join("profile.json"));
    assert!(store.load().unwrap().is_none());

    store
        .update(ProfileUpdate::new().with_name("Robin").with_email("robin@example.com"))
        .unwrap();
    let profile = store
        .update(ProfileUpdate::new().with_quest_group(QuestGroup::MindfulSage))
        .unwrap();
    assert_eq!(profile.name, "Robin");
    assert_eq!(profile.quest_group, Some(QuestGroup::MindfulSage));

    assert_eq!(store.load().unwrap(), Some(profile));

    store.clear().unwrap();
    assert!(store.load().unwrap().is_none());
    assert!(!store.path().exists());
}

#[test]
fn test_config_file_overrides_game_tuning() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("mhapa.toml");

    let config = AppConfig::default()
        .with_quiz(GameTuning::new(2, 45))
        .with_seed(Some(9));
    config.save_to(&path).unwrap();

    let loaded = AppConfig::load_from(&path).unwrap();
    let quiz = GameKind::StressQuiz.session_config(&loaded).unwrap();
    assert_eq!(quiz.round_count, 2);
    assert_eq!(quiz.time_budget_secs, 45);
    assert_eq!(quiz.seed, Some(9));
}

#[test]
fn test_invalid_config_file_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("mhapa.toml");
    std::fs::write(&path, "ui_tick_ms = 5\n").unwrap();

    let err = AppConfig::load_from(&path).unwrap_err();
    assert!(matches!(err, mhapa::MhapaError::Config(_)));
    assert!(mhapa::error::user_friendly_message(&err).contains("Configuration error"));
}
