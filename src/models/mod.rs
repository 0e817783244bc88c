//! Data models module
//!
//! Contains the records kept in the score history.

pub mod record;

// Re-export commonly used types
pub use record::{GameRecord, Outcome};
