//! 4-4-4-4 box breathing phases

use super::ContentItem;

/// Number of full inhale-hold-exhale-hold cycles in one exercise
pub const BREATHING_CYCLES: u32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BreathPhase {
    pub name: &'static str,
    pub prompt: &'static str,
    pub duration_secs: u32,
}

impl ContentItem for BreathPhase {
    fn label(&self) -> &str {
        self.name
    }
}

pub static BREATHING_PHASES: [BreathPhase; 4] = [
    BreathPhase { name: "Breathe In", prompt: "Breathe in...", duration_secs: 4 },
    BreathPhase { name: "Hold", prompt: "Hold...", duration_secs: 4 },
    BreathPhase { name: "Breathe Out", prompt: "Breathe out...", duration_secs: 4 },
    BreathPhase { name: "Hold", prompt: "Hold...", duration_secs: 4 },
];
