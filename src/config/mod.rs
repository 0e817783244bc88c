//! Configuration management module
//!
//! Handles loading, saving, and validation of the application configuration,
//! plus local persistence of the user profile and score history.

use std::fs;
use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};
use crate::{MhapaError, Result, APP_NAME, CONFIG_FILE};

pub mod persistence;
pub mod profile;

pub use persistence::ScoreHistory;
pub use profile::{ProfileStore, ProfileUpdate, UserProfile};

/// Round count and time budget for one round-based game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameTuning {
    /// Rounds per session
    pub rounds: u32,
    /// Seconds per round once input opens
    pub time_budget_secs: u32,
}

impl GameTuning {
    pub const fn new(rounds: u32, time_budget_secs: u32) -> Self {
        Self { rounds, time_budget_secs }
    }

    fn validate(&self, name: &str) -> Result<()> {
        if self.rounds == 0 {
            return Err(MhapaError::Config(
                format!("{} rounds must be greater than 0", name)
            ));
        }

        const MAX_ROUNDS: u32 = 100;
        if self.rounds > MAX_ROUNDS {
            return Err(MhapaError::Config(
                format!("Too many {} rounds: {} (max: {})", name, self.rounds, MAX_ROUNDS)
            ));
        }

        if self.time_budget_secs == 0 {
            return Err(MhapaError::Config(
                format!("{} time budget must be greater than 0", name)
            ));
        }

        const MAX_BUDGET_SECS: u32 = 600;
        if self.time_budget_secs > MAX_BUDGET_SECS {
            return Err(MhapaError::Config(
                format!("{} time budget too long: {}s (max: {}s)",
                    name, self.time_budget_secs, MAX_BUDGET_SECS)
            ));
        }

        Ok(())
    }
}

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Keyboard poll interval for the UI loop, in milliseconds
    pub ui_tick_ms: u64,
    /// Session clock period in milliseconds (nominally one second)
    pub timer_period_ms: u64,
    /// Full box-breathing cycles per exercise
    pub breathing_cycles: u32,
    /// Fixed seed for reproducible rounds; random when unset
    pub seed: Option<u64>,
    pub emotion: GameTuning,
    pub memory: GameTuning,
    pub quiz: GameTuning,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            ui_tick_ms: 250,
            timer_period_ms: 1000,
            breathing_cycles: crate::content::BREATHING_CYCLES,
            seed: None,
            emotion: GameTuning::new(10, 15),
            memory: GameTuning::new(8, 20),
            quiz: GameTuning::new(3, 30),
        }
    }
}

impl AppConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the configuration parameters
    pub fn validate(&self) -> Result<()> {
        const MIN_UI_TICK_MS: u64 = 16;
        const MAX_UI_TICK_MS: u64 = 1000;
        if self.ui_tick_ms < MIN_UI_TICK_MS || self.ui_tick_ms > MAX_UI_TICK_MS {
            return Err(MhapaError::Config(
                format!("UI tick must be between {} and {} ms", MIN_UI_TICK_MS, MAX_UI_TICK_MS)
            ));
        }

        if self.timer_period_ms < self.ui_tick_ms {
            return Err(MhapaError::Config(
                "Timer period must not be shorter than the UI tick".to_string()
            ));
        }

        self.emotion.validate("Emotion game")?;
        self.memory.validate("Memory game")?;
        self.quiz.validate("Quiz")?;

        if self.breathing_cycles == 0 {
            return Err(MhapaError::Config(
                "Breathing cycles must be greater than 0".to_string()
            ));
        }

        const MAX_BREATHING_CYCLES: u32 = 20;
        if self.breathing_cycles > MAX_BREATHING_CYCLES {
            return Err(MhapaError::Config(
                format!("Too many breathing cycles: {} (max: {})",
                    self.breathing_cycles, MAX_BREATHING_CYCLES)
            ));
        }

        Ok(())
    }

    /// Set the UI poll interval
    pub fn with_ui_tick_ms(mut self, ms: u64) -> Self {
        self.ui_tick_ms = ms;
        self
    }

    /// Set the session clock period
    pub fn with_timer_period_ms(mut self, ms: u64) -> Self {
        self.timer_period_ms = ms;
        self
    }

    pub fn with_emotion(mut self, tuning: GameTuning) -> Self {
        self.emotion = tuning;
        self
    }

    pub fn with_memory(mut self, tuning: GameTuning) -> Self {
        self.memory = tuning;
        self
    }

    pub fn with_quiz(mut self, tuning: GameTuning) -> Self {
        self.quiz = tuning;
        self
    }

    pub fn with_breathing_cycles(mut self, cycles: u32) -> Self {
        self.breathing_cycles = cycles;
        self
    }

    /// Set the RNG seed
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Load configuration from the standard config file location
    /// Returns default configuration if file doesn't exist
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Load configuration from an explicit path
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(config_path)
            .map_err(|e| MhapaError::Config(
                format!("Failed to read config file {}: {}", config_path.display(), e)
            ))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| MhapaError::Config(
                format!("Failed to parse config file {}: {}", config_path.display(), e)
            ))?;

        config.validate()?;

        Ok(config)
    }

    /// Save configuration to the standard config file location
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    /// Save configuration to an explicit path
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| MhapaError::Config(
                    format!("Failed to create config directory {}: {}", parent.display(), e)
                ))?;
        }

        let content = toml::to_string_pretty(self)?;

        fs::write(config_path, content)
            .map_err(|e| MhapaError::Config(
                format!("Failed to write config file {}: {}", config_path.display(), e)
            ))?;

        Ok(())
    }

    /// Get the standard configuration file path
    /// Uses $CONFIG_HOME/mhapa/mhapa.toml
    pub fn config_file_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| MhapaError::Config(
                "Unable to determine config directory".to_string()
            ))?;

        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }

    /// Directory holding profile, history and logs
    /// Uses $DATA_HOME/mhapa
    pub fn data_dir() -> Result<PathBuf> {
        let data_dir = dirs::data_dir()
            .ok_or_else(|| MhapaError::Config(
                "Unable to determine data directory".to_string()
            ))?;

        Ok(data_dir.join(APP_NAME))
    }
}
