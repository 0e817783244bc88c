//! Static content tables
//!
//! Read-only reference data drawn from to populate rounds and render the
//! dashboard: emotions, emojis, breathing phases, exercises, quiz questions,
//! planner activities, chat options, lessons and local services.

pub mod activities;
pub mod breathing;
pub mod chat;
pub mod emotions;
pub mod lessons;
pub mod memory;
pub mod mindfulness;
pub mod quests;
pub mod quiz;
pub mod services;

pub use activities::{Activity, ActivityCategory, Priority, ACTIVITIES};
pub use breathing::{BreathPhase, BREATHING_CYCLES, BREATHING_PHASES};
pub use chat::{ChatOption, CHAT_GREETING, CHAT_OPTIONS};
pub use emotions::{Emotion, EMOTIONS};
pub use lessons::{find_lesson, lessons_for, Lesson};
pub use memory::{MemoryEmoji, MEMORY_EMOJIS};
pub use mindfulness::{Exercise, EXERCISES};
pub use quests::{ActivityKind, QuestActivity, QuestContent, QuestGroup};
pub use quiz::{QuizQuestion, QUIZ_QUESTIONS};
pub use services::{LocalService, LOCAL_SERVICES};

/// A single record in a content table
pub trait ContentItem: Sync {
    /// Display label
    fn label(&self) -> &str;

    /// Points awarded when the item is matched under weighted scoring
    fn weight(&self) -> u32 {
        1
    }

    /// The input that matches this item when it sits at `index` in its table.
    /// Most tables are answered by picking the item itself.
    fn expected(&self, index: usize) -> usize {
        index
    }
}

/// Object-safe view over a static content table, used by the round engine
pub trait ContentTable: Sync {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn label(&self, index: usize) -> Option<&str>;
    fn weight(&self, index: usize) -> u32;
    fn expected(&self, index: usize) -> Option<usize>;
}

impl<T: ContentItem, const N: usize> ContentTable for [T; N] {
    fn len(&self) -> usize {
        N
    }

    fn label(&self, index: usize) -> Option<&str> {
        self.get(index).map(ContentItem::label)
    }

    fn weight(&self, index: usize) -> u32 {
        self.get(index).map(ContentItem::weight).unwrap_or(0)
    }

    fn expected(&self, index: usize) -> Option<usize> {
        self.get(index).map(|item| item.expected(index))
    }
}
