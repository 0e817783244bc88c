//! Guided mindfulness exercises

use super::ContentItem;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Exercise {
    pub name: &'static str,
    pub description: &'static str,
    pub duration_secs: u32,
    pub icon: &'static str,
}

impl ContentItem for Exercise {
    fn label(&self) -> &str {
        self.name
    }
}

pub static EXERCISES: [Exercise; 4] = [
    Exercise {
        name: "5-4-3-2-1 Grounding",
        description: "Notice 5 things you see, 4 you can touch, 3 you hear, 2 you smell, 1 you taste",
        duration_secs: 180,
        icon: "👁️",
    },
    Exercise {
        name: "Body Scan",
        description: "Slowly focus on each part of your body from head to toe",
        duration_secs: 300,
        icon: "🧘",
    },
    Exercise {
        name: "Loving Kindness",
        description: "Send kind thoughts to yourself, loved ones, and even difficult people",
        duration_secs: 240,
        icon: "💝",
    },
    Exercise {
        name: "Mindful Walking",
        description: "Focus on each step, the feeling of your feet touching the ground",
        duration_secs: 200,
        icon: "🚶",
    },
];
