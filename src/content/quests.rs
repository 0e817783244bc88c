//! Quest groups and their dashboard content

use serde::{Deserialize, Serialize};

use crate::games::GameKind;

/// The audience track chosen at start
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuestGroup {
    #[serde(rename = "child")]
    EmotionExplorer,
    #[serde(rename = "teen")]
    MindMaster,
    #[serde(rename = "young-adult")]
    TimeTactician,
    #[serde(rename = "adult")]
    MindfulSage,
    #[serde(rename = "quiz")]
    QuizCove,
}

impl QuestGroup {
    pub fn all() -> [Self; 5] {
        [
            Self::EmotionExplorer,
            Self::MindMaster,
            Self::TimeTactician,
            Self::MindfulSage,
            Self::QuizCove,
        ]
    }

    pub fn id(&self) -> &'static str {
        match self {
            Self::EmotionExplorer => "child",
            Self::MindMaster => "teen",
            Self::TimeTactician => "young-adult",
            Self::MindfulSage => "adult",
            Self::QuizCove => "quiz",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::EmotionExplorer => "Emotion Explorer",
            Self::MindMaster => "Mind Master",
            Self::TimeTactician => "Time Tactician",
            Self::MindfulSage => "Mindful Sage",
            Self::QuizCove => "Quiz Cove",
        }
    }

    /// Short blurb shown on the selection screen
    pub fn focus(&self) -> &'static str {
        match self {
            Self::EmotionExplorer => "Fun games & emotion learning",
            Self::MindMaster => "Stress management & social skills",
            Self::TimeTactician => "Life transitions & relationships",
            Self::MindfulSage => "Work-life balance & mindfulness",
            Self::QuizCove => "Multiple choice quizzes & self-assessments",
        }
    }

    pub fn default_game(&self) -> GameKind {
        match self {
            Self::EmotionExplorer => GameKind::EmotionMatch,
            Self::MindMaster => GameKind::MemorySequence,
            Self::TimeTactician => GameKind::TimePlanner,
            Self::MindfulSage => GameKind::MindfulMoments,
            Self::QuizCove => GameKind::StressQuiz,
        }
    }

    pub fn content(&self) -> &'static QuestContent {
        match self {
            Self::EmotionExplorer => &EMOTION_EXPLORER,
            Self::MindMaster => &MIND_MASTER,
            Self::TimeTactician => &TIME_TACTICIAN,
            Self::MindfulSage => &MINDFUL_SAGE,
            Self::QuizCove => &QUIZ_COVE,
        }
    }
}

impl std::fmt::Display for QuestGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityKind {
    Game(GameKind),
    /// Opens the group's lesson shelf
    Lessons,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuestActivity {
    pub name: &'static str,
    pub icon: &'static str,
    pub kind: ActivityKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuestContent {
    pub title: &'static str,
    pub description: &'static str,
    pub activities: &'static [QuestActivity],
    pub achievements: &'static [&'static str],
}

static EMOTION_EXPLORER: QuestContent = QuestContent {
    title: "Emotion Island",
    description: "Learn about feelings and make friends!",
    activities: &[
        QuestActivity {
            name: "Happy Face Hunt",
            icon: "😊",
            kind: ActivityKind::Game(GameKind::EmotionMatch),
        },
        QuestActivity {
            name: "Kindness Quest",
            icon: "❤️",
            kind: ActivityKind::Lessons,
        },
    ],
    achievements: &["First Smile", "Emotion Expert", "Helper Hero"],
};

static MIND_MASTER: QuestContent = QuestContent {
    title: "Resilience Archipelago",
    description: "Navigate life's waves with confidence",
    activities: &[
        QuestActivity {
            name: "Memoji Match",
            icon: "🧠",
            kind: ActivityKind::Game(GameKind::MemorySequence),
        },
        QuestActivity {
            name: "Friendship Bridge",
            icon: "🌉",
            kind: ActivityKind::Lessons,
        },
    ],
    achievements: &["Stress Warrior", "Choice Champion", "Social Navigator"],
};

static TIME_TACTICIAN: QuestContent = QuestContent {
    title: "Growth Peninsula",
    description: "Building your future, one step at a time",
    activities: &[
        QuestActivity {
            name: "Time Treasures",
            icon: "⏰",
            kind: ActivityKind::Game(GameKind::TimePlanner),
        },
        QuestActivity {
            name: "Independence Island",
            icon: "🗽",
            kind: ActivityKind::Lessons,
        },
    ],
    achievements: &["Time Master", "Goal Crusher", "Independence Hero"],
};

static MINDFUL_SAGE: QuestContent = QuestContent {
    title: "Mindful Sanctuary",
    description: "Find balance in life's complexity",
    activities: &[
        QuestActivity {
            name: "Mindful Moments",
            icon: "🧠",
            kind: ActivityKind::Game(GameKind::MindfulMoments),
        },
        QuestActivity {
            name: "Wisdom Waves",
            icon: "🌊",
            kind: ActivityKind::Lessons,
        },
    ],
    achievements: &["Zen Master", "Balance Keeper", "Wisdom Guardian"],
};

static QUIZ_COVE: QuestContent = QuestContent {
    title: "Quiz Cove",
    description: "Test your knowledge on psychological health!",
    activities: &[QuestActivity {
        name: "Stress Awareness Quiz",
        icon: "❓",
        kind: ActivityKind::Game(GameKind::StressQuiz),
    }],
    achievements: &["Quiz Novice", "Psych Health Pro", "Mind Master"],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_game_is_listed_on_dashboard() {
        for group in QuestGroup::all() {
            let game = group.default_game();
            assert!(group
                .content()
                .activities
                .iter()
                .any(|a| a.kind == ActivityKind::Game(game)));
        }
    }

    #[test]
    fn test_serde_uses_short_ids() {
        let json = serde_json::to_string(&QuestGroup::TimeTactician).unwrap();
        assert_eq!(json, "\"young-adult\"");
        let group: QuestGroup = serde_json::from_str("\"quiz\"").unwrap();
        assert_eq!(group, QuestGroup::QuizCove);
    }
}
