//! Game catalogue
//!
//! Maps each game to its content table and session configuration. The day
//! planner and the chatbot are not round-based and live in their own
//! modules.

use serde::{Deserialize, Serialize};

use crate::config::AppConfig;
use crate::content::{
    ContentTable, BREATHING_PHASES, EMOTIONS, EXERCISES, MEMORY_EMOJIS, QUIZ_QUESTIONS,
};
use crate::engine::{
    Difficulty, DrawMode, ExpiryRule, ScoringRule, SessionConfig, Strictness,
};

pub mod chat;
pub mod planner;

pub use chat::{ChatBot, ChatMessage, Sender};
pub use planner::{DayPlan, PlanSummary};

/// Longest sequence the memory game asks for
pub const MEMORY_MAX_SEQUENCE: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameKind {
    EmotionMatch,
    MemorySequence,
    Breathing,
    MindfulMoments,
    StressQuiz,
    TimePlanner,
}

impl GameKind {
    pub fn all() -> [Self; 6] {
        [
            Self::EmotionMatch,
            Self::MemorySequence,
            Self::Breathing,
            Self::MindfulMoments,
            Self::StressQuiz,
            Self::TimePlanner,
        ]
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::EmotionMatch => "Happy Face Hunt",
            Self::MemorySequence => "Memoji Match",
            Self::Breathing => "Daily Breathing",
            Self::MindfulMoments => "Mindful Moments",
            Self::StressQuiz => "Stress Awareness Quiz",
            Self::TimePlanner => "Time Treasures",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::EmotionMatch => "😊",
            Self::MemorySequence => "🧠",
            Self::Breathing => "🌬️",
            Self::MindfulMoments => "🧘",
            Self::StressQuiz => "❓",
            Self::TimePlanner => "⏰",
        }
    }

    /// One-line instructions shown above the game
    pub fn instructions(&self) -> &'static str {
        match self {
            Self::EmotionMatch => "Find the feeling that matches the face!",
            Self::MemorySequence => "Watch the emojis, then repeat them in order.",
            Self::Breathing => "Follow the 4-4-4-4 rhythm.",
            Self::MindfulMoments => "Pick an exercise and stay with it until the timer ends.",
            Self::StressQuiz => "Choose the best answer.",
            Self::TimePlanner => "Plan a balanced 4-hour block of wellbeing activities.",
        }
    }

    /// Runs on the round state machine
    pub fn is_round_based(&self) -> bool {
        !matches!(self, Self::TimePlanner)
    }

    /// Content the session draws from
    pub fn table(&self) -> Option<&'static dyn ContentTable> {
        match self {
            Self::EmotionMatch => Some(&EMOTIONS),
            Self::MemorySequence => Some(&MEMORY_EMOJIS),
            Self::Breathing => Some(&BREATHING_PHASES),
            Self::MindfulMoments => Some(&EXERCISES),
            Self::StressQuiz => Some(&QUIZ_QUESTIONS),
            Self::TimePlanner => None,
        }
    }

    /// Session configuration for this game. Mindful Moments uses the first
    /// exercise; see [`mindfulness_config`] to pick another.
    pub fn session_config(&self, config: &AppConfig) -> Option<SessionConfig> {
        let session = match self {
            Self::EmotionMatch => SessionConfig::new()
                .with_round_count(config.emotion.rounds)
                .with_time_budget(config.emotion.time_budget_secs)
                .with_draw(DrawMode::Random)
                .with_strictness(Strictness::Lenient { max_mistakes: None }),
            Self::MemorySequence => SessionConfig::new()
                .with_round_count(config.memory.rounds)
                .with_time_budget(config.memory.time_budget_secs)
                .with_difficulty(Difficulty::Linear { base: 1, step: 1 }, MEMORY_MAX_SEQUENCE)
                .with_draw(DrawMode::Growing)
                .with_scoring(ScoringRule::PerItem(1))
                .with_strictness(Strictness::Strict)
                .with_reveal(1),
            Self::Breathing => SessionConfig::timed_exercise(
                config.breathing_cycles.saturating_mul(BREATHING_PHASES.len() as u32),
                BREATHING_PHASES[0].duration_secs,
            ),
            Self::MindfulMoments => mindfulness_config(0),
            Self::StressQuiz => SessionConfig::new()
                .with_round_count(config.quiz.rounds)
                .with_time_budget(config.quiz.time_budget_secs)
                .with_draw(DrawMode::Sequential)
                .with_strictness(Strictness::MoveOn)
                .with_expiry(ExpiryRule::Fail),
            Self::TimePlanner => return None,
        };
        Some(session.with_seed(config.seed))
    }
}

impl std::fmt::Display for GameKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title())
    }
}

/// One round lasting the chosen exercise's full duration
pub fn mindfulness_config(exercise: usize) -> SessionConfig {
    let duration = EXERCISES
        .get(exercise)
        .map_or(EXERCISES[0].duration_secs, |e| e.duration_secs);
    SessionConfig::timed_exercise(1, duration).with_draw(DrawMode::Pinned(exercise))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Session;

    #[test]
    fn test_every_round_game_has_valid_config() {
        let config = AppConfig::default();
        for kind in GameKind::all() {
            match (kind.table(), kind.session_config(&config)) {
                (Some(table), Some(session)) => {
                    assert!(kind.is_round_based());
                    session.validate(table.len()).unwrap();
                }
                (None, None) => assert_eq!(kind, GameKind::TimePlanner),
                _ => panic!("{:?} has a table without a config or the reverse", kind),
            }
        }
    }

    #[test]
    fn test_breathing_rounds_follow_cycles() {
        let config = AppConfig::default().with_breathing_cycles(2);
        let session = GameKind::Breathing.session_config(&config).unwrap();
        assert_eq!(session.round_count, 8);
        assert_eq!(session.time_budget_secs, 4);
        assert_eq!(session.expiry, ExpiryRule::Advance);
    }

    #[test]
    fn test_mindfulness_pins_exercise() {
        let config = mindfulness_config(1);
        assert_eq!(config.draw, DrawMode::Pinned(1));
        assert_eq!(config.time_budget_secs, 300);
        assert_eq!(config.round_count, 1);

        let mut session = Session::new(&EXERCISES);
        session.start(config).unwrap();
        assert_eq!(session.current_round().unwrap().content, vec![1]);
    }

    #[test]
    fn test_seed_is_forwarded() {
        let config = AppConfig::default().with_seed(Some(5));
        let session = GameKind::EmotionMatch.session_config(&config).unwrap();
        assert_eq!(session.seed, Some(5));
        assert_eq!(session.round_count, 10);
        assert_eq!(session.time_budget_secs, 15);
    }
}
