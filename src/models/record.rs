//! Score history records
//!
//! One record per finished, failed or abandoned game, serialized into the
//! score history file.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::content::QuestGroup;
use crate::engine::{Phase, SessionSnapshot};
use crate::games::GameKind;

/// How a game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Complete,
    Failed,
    /// Left before reaching a terminal phase
    Abandoned,
}

impl Outcome {
    /// Outcome implied by the phase a session was left in
    pub fn from_phase(phase: Phase) -> Self {
        match phase {
            Phase::Complete => Outcome::Complete,
            Phase::Failed => Outcome::Failed,
            _ => Outcome::Abandoned,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Outcome::Complete => "Complete",
            Outcome::Failed => "Failed",
            Outcome::Abandoned => "Abandoned",
        }
    }
}

/// A single entry in the score history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    /// When the game ended
    pub timestamp: DateTime<Utc>,
    pub game: GameKind,
    /// Track the player was on, if one was chosen
    pub quest_group: Option<QuestGroup>,
    pub score: u32,
    pub rounds_completed: u32,
    pub rounds_total: u32,
    pub outcome: Outcome,
}

impl GameRecord {
    /// Create a record stamped with the current time
    pub fn new(
        game: GameKind,
        quest_group: Option<QuestGroup>,
        score: u32,
        rounds_completed: u32,
        rounds_total: u32,
        outcome: Outcome,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            game,
            quest_group,
            score,
            rounds_completed,
            rounds_total,
            outcome,
        }
    }

    /// Record a round-based session from its final snapshot
    pub fn from_snapshot(
        game: GameKind,
        quest_group: Option<QuestGroup>,
        snapshot: &SessionSnapshot,
    ) -> Self {
        Self::new(
            game,
            quest_group,
            snapshot.score,
            snapshot.rounds_cleared,
            snapshot.round_total,
            Outcome::from_phase(snapshot.phase),
        )
    }

    pub fn is_complete(&self) -> bool {
        self.outcome == Outcome::Complete
    }

    /// Get a human-readable summary of the record
    pub fn summary(&self) -> String {
        format!(
            "{} - {} - {} pts - {}/{} rounds - {}",
            self.timestamp.format("%Y-%m-%d %H:%M UTC"),
            self.game.title(),
            self.score,
            self.rounds_completed,
            self.rounds_total,
            self.outcome.description()
        )
    }
}
