//! Timed round state machine
//!
//! One generic session type drives every round-based game: it owns the
//! round, phase, timer and score state, advances on a fixed tick or on
//! user input, and reports each evaluation back to the shell. Game
//! variants differ only in the [`SessionConfig`] they start with.

pub mod config;
pub mod driver;
pub mod phase;
pub mod round;
pub mod session;
pub mod timer;

pub use config::{Difficulty, DrawMode, ExpiryRule, PenaltyRule, ScoringRule, SessionConfig, Strictness};
pub use driver::ActiveGame;
pub use phase::{Evaluation, FailReason, Phase};
pub use round::Round;
pub use session::{Session, SessionSnapshot};
pub use timer::{SessionTimer, Tick};
