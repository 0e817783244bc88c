//! MHapa - mental-wellness quests in the terminal
//!
//! A TUI application presenting quest groups, a dashboard, round-based
//! mini-games, a breathing timer, a canned-response chatbot and a quiz,
//! all driven by one timed round state machine.

// Public re-exports
pub mod app;
pub mod config;
pub mod content;
pub mod engine;
pub mod games;
pub mod models;
pub mod util;

// Common error types
#[derive(Debug, thiserror::Error)]
pub enum MhapaError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Configuration validation or parsing error
    #[error("Configuration error: {0}")]
    Config(String),
    /// Profile or score history could not be read or written
    #[error("Persistence error: {0}")]
    Persistence(String),
    /// TUI rendering or interaction error
    #[error("TUI error: {0}")]
    Tui(String),
    /// Operation requires a session that is not available
    #[error("Invalid session: {0}")]
    InvalidSession(String),
}

impl From<serde_json::Error> for MhapaError {
    fn from(err: serde_json::Error) -> Self {
        MhapaError::Persistence(format!("JSON serialization error: {}", err))
    }
}

impl From<toml::de::Error> for MhapaError {
    fn from(err: toml::de::Error) -> Self {
        MhapaError::Config(format!("TOML parsing error: {}", err))
    }
}

impl From<toml::ser::Error> for MhapaError {
    fn from(err: toml::ser::Error) -> Self {
        MhapaError::Config(format!("TOML serialization error: {}", err))
    }
}

/// Result type alias for MHapa operations
pub type Result<T> = std::result::Result<T, MhapaError>;

/// Error handling utilities
pub mod error {
    use super::MhapaError;

    /// Convert error to a short message suitable for a status line
    pub fn user_friendly_message(error: &MhapaError) -> String {
        match error {
            MhapaError::Io(err) if err.kind() == std::io::ErrorKind::PermissionDenied => {
                "Permission denied. Check access to your data directory.".to_string()
            }
            MhapaError::Config(msg) => {
                format!("Configuration error: {}. Check your settings.", msg)
            }
            MhapaError::Persistence(_) => {
                "Could not save your progress. Check disk space and permissions.".to_string()
            }
            MhapaError::InvalidSession(_) => "No game is running right now.".to_string(),
            _ => error.to_string(),
        }
    }
}

// Common types and constants
pub const APP_NAME: &str = "mhapa";
pub const CONFIG_FILE: &str = "mhapa.toml";
pub const PROFILE_FILE: &str = "profile.json";
pub const SCORES_FILE: &str = "scores.json";
pub const LOG_DIR: &str = "logs";
pub const LOG_FILE: &str = "mhapa.log";
pub const MAX_SCORE_HISTORY: usize = 100;
