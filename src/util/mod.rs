//! Utility functions module
//!
//! Contains helpers for formatting countdowns and planner durations.

pub mod time;

// Re-export commonly used functions
pub use time::{format_clock, format_minutes};
