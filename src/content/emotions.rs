//! Emotions shown in the matching game

use super::ContentItem;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Emotion {
    pub emoji: &'static str,
    pub name: &'static str,
}

impl ContentItem for Emotion {
    fn label(&self) -> &str {
        self.name
    }
}

pub static EMOTIONS: [Emotion; 6] = [
    Emotion { emoji: "😊", name: "Happy" },
    Emotion { emoji: "😢", name: "Sad" },
    Emotion { emoji: "😠", name: "Angry" },
    Emotion { emoji: "😰", name: "Scared" },
    Emotion { emoji: "😴", name: "Tired" },
    Emotion { emoji: "🤔", name: "Confused" },
];
