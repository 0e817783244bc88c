//! Stress awareness quiz

use super::ContentItem;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizQuestion {
    pub question: &'static str,
    pub options: &'static [&'static str],
    pub correct_index: usize,
}

impl ContentItem for QuizQuestion {
    fn label(&self) -> &str {
        self.question
    }

    fn expected(&self, _index: usize) -> usize {
        self.correct_index
    }
}

pub static QUIZ_QUESTIONS: [QuizQuestion; 3] = [
    QuizQuestion {
        question: "Which of the following is a common symptom of stress?",
        options: &[
            "Increased energy and alertness",
            "Difficulty sleeping",
            "Improved concentration",
            "Feeling relaxed",
        ],
        correct_index: 1,
    },
    QuizQuestion {
        question: "What is a healthy way to manage stress?",
        options: &[
            "Ignoring your feelings",
            "Regular exercise",
            "Overworking yourself",
            "Avoiding social contact",
        ],
        correct_index: 1,
    },
    QuizQuestion {
        question: "Which breathing technique can help reduce anxiety?",
        options: &[
            "Rapid shallow breathing",
            "Holding your breath",
            "4-4-4-4 breathing (inhale-hold-exhale-hold)",
            "Breathing only through your mouth",
        ],
        correct_index: 2,
    },
];
