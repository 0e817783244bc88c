//! Session phases and round evaluations

use serde::{Deserialize, Serialize};

/// Phase of a game session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Not started, or aborted
    Idle,
    /// Round content is being revealed; input is not accepted yet
    Showing,
    /// Waiting for the player while the round budget counts down
    AwaitingInput,
    /// Transient, only held while an input or expiry is being judged
    Evaluating,
    /// Every round played
    Complete,
    /// Time ran out or a mistake ended the session
    Failed,
}

impl Phase {
    /// Complete and Failed cannot be left; a new session is needed
    pub fn is_terminal(&self) -> bool {
        matches!(self, Phase::Complete | Phase::Failed)
    }

    /// A round is current
    pub fn is_live(&self) -> bool {
        matches!(self, Phase::Showing | Phase::AwaitingInput | Phase::Evaluating)
    }

    pub fn description(&self) -> &'static str {
        match self {
            Phase::Idle => "Ready",
            Phase::Showing => "Watch closely",
            Phase::AwaitingInput => "Your turn",
            Phase::Evaluating => "Checking",
            Phase::Complete => "Complete",
            Phase::Failed => "Game over",
        }
    }
}

/// Why a session ended in [`Phase::Failed`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FailReason {
    TimeExpired,
    WrongAnswer,
    MistakesExhausted,
}

impl FailReason {
    pub fn description(&self) -> &'static str {
        match self {
            FailReason::TimeExpired => "Time's up!",
            FailReason::WrongAnswer => "That wasn't it.",
            FailReason::MistakesExhausted => "Out of tries.",
        }
    }
}

/// Outcome of judging one input or one expiry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Evaluation {
    /// Correct item inside a sequence round; more items remain
    Progress { matched: usize, of: usize },
    /// Round answered (or timed through) and the next one has begun
    RoundCleared { awarded: u32 },
    /// Round forfeited without points; the next one has begun
    RoundMissed,
    /// Wrong input, the round starts over
    Retry { mistakes: u32 },
    /// Last round finished
    SessionComplete { awarded: u32 },
    SessionFailed(FailReason),
}

impl Evaluation {
    pub fn ends_session(&self) -> bool {
        matches!(self, Evaluation::SessionComplete { .. } | Evaluation::SessionFailed(_))
    }

    /// Feedback line for the game screen
    pub fn message(&self) -> String {
        match self {
            Evaluation::Progress { matched, of } => format!("Good! {}/{}", matched, of),
            Evaluation::RoundCleared { awarded } => format!("Correct! +{}", awarded),
            Evaluation::RoundMissed => "Not quite. On to the next one.".to_string(),
            Evaluation::Retry { mistakes } => {
                format!("Try again! ({} mistake{})", mistakes, if *mistakes == 1 { "" } else { "s" })
            }
            Evaluation::SessionComplete { awarded } => format!("All done! +{}", awarded),
            Evaluation::SessionFailed(reason) => reason.description().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_phases() {
        assert!(Phase::Complete.is_terminal());
        assert!(Phase::Failed.is_terminal());
        assert!(!Phase::Idle.is_terminal());
        assert!(!Phase::Showing.is_terminal());
        assert!(!Phase::Idle.is_live());
        assert!(Phase::AwaitingInput.is_live());
    }

    #[test]
    fn test_evaluation_messages() {
        assert_eq!(Evaluation::Retry { mistakes: 1 }.message(), "Try again! (1 mistake)");
        assert_eq!(Evaluation::Retry { mistakes: 2 }.message(), "Try again! (2 mistakes)");
        assert!(Evaluation::SessionFailed(FailReason::TimeExpired).ends_session());
        assert!(!Evaluation::RoundMissed.ends_session());
    }
}
