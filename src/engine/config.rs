//! Session configuration
//!
//! Everything that distinguishes one round-based game from another: how many
//! rounds, how long each may take, how content is drawn and how answers are
//! scored and penalised.

use serde::{Deserialize, Serialize};
use crate::{MhapaError, Result};

/// Number of items a round holds, as a function of the round index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    /// Same number of items every round
    Fixed(usize),
    /// `base + step * (round - 1)` items
    Linear { base: usize, step: usize },
}

impl Difficulty {
    /// Items for a 1-based round index, clamped to `1..=max`
    pub fn items_for(&self, round: u32, max: usize) -> usize {
        let raw = match *self {
            Difficulty::Fixed(n) => n,
            Difficulty::Linear { base, step } => {
                let grown = step.saturating_mul(round.saturating_sub(1) as usize);
                base.saturating_add(grown)
            }
        };
        raw.clamp(1, max.max(1))
    }

    fn is_zero(&self) -> bool {
        match *self {
            Difficulty::Fixed(n) => n == 0,
            Difficulty::Linear { base, .. } => base == 0,
        }
    }
}

/// How round content is selected from the content table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DrawMode {
    /// Uniform random items, never repeating the previous round's content
    Random,
    /// Table order, wrapping around at the end
    Sequential,
    /// Previous content plus new random items; at the clamp the oldest item
    /// is dropped before a new one is appended
    Growing,
    /// Always the same table entry
    Pinned(usize),
}

impl DrawMode {
    /// Fixed draws are reproducible without a seed
    pub fn is_fixed(&self) -> bool {
        matches!(self, DrawMode::Sequential | DrawMode::Pinned(_))
    }
}

/// Points awarded when a round is cleared
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoringRule {
    Flat(u32),
    PerItem(u32),
    /// Sum of the round items' weights
    Weighted,
}

/// Cost of a wrong input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PenaltyRule {
    None,
    /// Deducted from the score, saturating at 0
    Points(u32),
    /// Deducted from the round's remaining time, saturating at 0
    Seconds(u32),
}

/// What a wrong input does to the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Strictness {
    /// Any mistake fails the session
    Strict,
    /// The round restarts; once mistakes exceed the limit the session fails.
    /// `None` allows unlimited retries.
    Lenient { max_mistakes: Option<u32> },
    /// The round is forfeited and play moves on
    MoveOn,
}

/// What happens when the round budget runs out while awaiting input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExpiryRule {
    Fail,
    /// The round completes with its points awarded. Sessions using this rule
    /// are timed exercises and accept no input.
    Advance,
}

/// Configuration for one session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Rounds to play
    pub round_count: u32,
    /// Seconds allowed per round once input opens
    pub time_budget_secs: u32,
    pub difficulty: Difficulty,
    /// Upper clamp on items per round
    pub max_difficulty: usize,
    pub draw: DrawMode,
    pub scoring: ScoringRule,
    pub penalty: PenaltyRule,
    pub strictness: Strictness,
    pub expiry: ExpiryRule,
    /// Ticks each item stays on screen during the reveal
    pub reveal_ticks_per_item: u32,
    /// Seed for reproducible draws
    pub seed: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            round_count: 3,
            time_budget_secs: 30,
            difficulty: Difficulty::Fixed(1),
            max_difficulty: 1,
            draw: DrawMode::Random,
            scoring: ScoringRule::Flat(1),
            penalty: PenaltyRule::None,
            strictness: Strictness::Strict,
            expiry: ExpiryRule::Fail,
            reveal_ticks_per_item: 0,
            seed: None,
        }
    }
}

impl SessionConfig {
    /// Create a configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Countdown exercise: each round simply runs its time out
    pub fn timed_exercise(round_count: u32, time_budget_secs: u32) -> Self {
        Self {
            round_count,
            time_budget_secs,
            draw: DrawMode::Sequential,
            expiry: ExpiryRule::Advance,
            ..Self::default()
        }
    }

    /// Validate the configuration against the table it will draw from
    pub fn validate(&self, table_len: usize) -> Result<()> {
        if table_len == 0 {
            return Err(MhapaError::Config("Content table is empty".to_string()));
        }

        if self.round_count == 0 {
            return Err(MhapaError::Config(
                "Round count must be greater than 0".to_string()
            ));
        }

        if self.time_budget_secs == 0 {
            return Err(MhapaError::Config(
                "Time budget must be greater than 0".to_string()
            ));
        }

        if self.difficulty.is_zero() || self.max_difficulty == 0 {
            return Err(MhapaError::Config(
                "Difficulty must be at least 1 item per round".to_string()
            ));
        }

        if let DrawMode::Pinned(index) = self.draw {
            if index >= table_len {
                return Err(MhapaError::Config(format!(
                    "Pinned item {} is outside a table of {} entries",
                    index, table_len
                )));
            }
        }

        if self.expiry == ExpiryRule::Advance && self.reveal_ticks_per_item > 0 {
            return Err(MhapaError::Config(
                "Timed exercises cannot have a reveal phase".to_string()
            ));
        }

        Ok(())
    }

    /// Total ticks spent revealing a round of `items` items
    pub fn reveal_ticks(&self, items: usize) -> u32 {
        self.reveal_ticks_per_item.saturating_mul(items as u32)
    }

    pub fn with_round_count(mut self, count: u32) -> Self {
        self.round_count = count;
        self
    }

    pub fn with_time_budget(mut self, secs: u32) -> Self {
        self.time_budget_secs = secs;
        self
    }

    /// Set the difficulty progression and its clamp
    pub fn with_difficulty(mut self, difficulty: Difficulty, max: usize) -> Self {
        self.difficulty = difficulty;
        self.max_difficulty = max;
        self
    }

    pub fn with_draw(mut self, draw: DrawMode) -> Self {
        self.draw = draw;
        self
    }

    pub fn with_scoring(mut self, scoring: ScoringRule) -> Self {
        self.scoring = scoring;
        self
    }

    pub fn with_penalty(mut self, penalty: PenaltyRule) -> Self {
        self.penalty = penalty;
        self
    }

    pub fn with_strictness(mut self, strictness: Strictness) -> Self {
        self.strictness = strictness;
        self
    }

    pub fn with_expiry(mut self, expiry: ExpiryRule) -> Self {
        self.expiry = expiry;
        self
    }

    pub fn with_reveal(mut self, ticks_per_item: u32) -> Self {
        self.reveal_ticks_per_item = ticks_per_item;
        self
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }
}
