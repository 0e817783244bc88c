//! Game session state machine
//!
//! `Idle -> Showing -> AwaitingInput -> Evaluating -> {Showing | Complete | Failed}`.
//! Invalid transitions are ignored with a debug log; failures are terminal
//! phases, never errors. The only error `start` returns is a configuration
//! error, raised before any state changes.

use rand::{rngs::SmallRng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::config::{ExpiryRule, PenaltyRule, ScoringRule, SessionConfig, Strictness};
use super::phase::{Evaluation, FailReason, Phase};
use super::round::{self, Round};
use crate::content::ContentTable;
use crate::Result;

/// Read-only copy of a session's state for rendering
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub phase: Phase,
    pub score: u32,
    /// 1-based; 0 when no round is current
    pub round_index: u32,
    pub round_total: u32,
    pub content: Vec<usize>,
    /// Items of a sequence round matched so far
    pub input_progress: usize,
    /// Items shown so far during the reveal
    pub revealed: usize,
    pub time_remaining: u32,
    pub time_budget: u32,
    pub mistakes: u32,
    pub rounds_cleared: u32,
    pub last_evaluation: Option<Evaluation>,
}

impl SessionSnapshot {
    /// Fraction of the round budget left, 0.0 to 1.0
    pub fn time_ratio(&self) -> f64 {
        if self.time_budget == 0 {
            0.0
        } else {
            self.time_remaining as f64 / self.time_budget as f64
        }
    }

    /// The item currently on display during the reveal
    pub fn revealing(&self) -> Option<usize> {
        if self.phase != Phase::Showing || self.revealed == 0 {
            return None;
        }
        self.content.get(self.revealed - 1).copied()
    }
}

/// One play-through of a round-based game
pub struct Session {
    table: &'static dyn ContentTable,
    config: SessionConfig,
    phase: Phase,
    score: u32,
    current_round: Option<Round>,
    time_remaining: u32,
    reveal_elapsed: u32,
    input_cursor: usize,
    mistakes: u32,
    rounds_cleared: u32,
    last_evaluation: Option<Evaluation>,
    rng: SmallRng,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("table_len", &self.table.len())
            .field("phase", &self.phase)
            .field("score", &self.score)
            .field("current_round", &self.current_round)
            .field("time_remaining", &self.time_remaining)
            .finish()
    }
}

impl Session {
    /// Create an idle session over a content table
    pub fn new(table: &'static dyn ContentTable) -> Self {
        Self {
            table,
            config: SessionConfig::default(),
            phase: Phase::Idle,
            score: 0,
            current_round: None,
            time_remaining: 0,
            reveal_elapsed: 0,
            input_cursor: 0,
            mistakes: 0,
            rounds_cleared: 0,
            last_evaluation: None,
            rng: SmallRng::from_entropy(),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn current_round(&self) -> Option<&Round> {
        self.current_round.as_ref()
    }

    pub fn time_remaining(&self) -> u32 {
        self.time_remaining
    }

    pub fn mistakes(&self) -> u32 {
        self.mistakes
    }

    pub fn rounds_cleared(&self) -> u32 {
        self.rounds_cleared
    }

    pub fn last_evaluation(&self) -> Option<Evaluation> {
        self.last_evaluation
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn table(&self) -> &'static dyn ContentTable {
        self.table
    }

    /// Validate `config` and, if idle, begin round 1.
    ///
    /// Configuration errors are reported whatever the phase; a valid start
    /// outside `Idle` is ignored.
    pub fn start(&mut self, config: SessionConfig) -> Result<()> {
        config.validate(self.table.len())?;

        if self.phase != Phase::Idle {
            debug!("start ignored in phase {:?}", self.phase);
            return Ok(());
        }

        self.rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };
        self.config = config;
        self.score = 0;
        self.mistakes = 0;
        self.rounds_cleared = 0;
        self.last_evaluation = None;
        self.current_round = None;

        info!(
            rounds = self.config.round_count,
            budget = self.config.time_budget_secs,
            "Session started"
        );
        self.begin_round(1);
        Ok(())
    }

    /// Advance the clock by `elapsed` seconds.
    ///
    /// Reveal ticks move the reveal cursor without touching the round
    /// budget; seconds left over once the reveal ends count against it.
    pub fn tick(&mut self, elapsed: u32) -> Option<Evaluation> {
        match self.phase {
            Phase::Showing => {
                let total = self.reveal_total();
                let pending = total.saturating_sub(self.reveal_elapsed);
                if elapsed < pending {
                    self.reveal_elapsed += elapsed;
                    return None;
                }
                self.open_input();
                self.consume(elapsed - pending)
            }
            Phase::AwaitingInput => self.consume(elapsed),
            phase => {
                debug!("tick ignored in phase {:?}", phase);
                None
            }
        }
    }

    /// Skip the rest of the reveal and open input
    pub fn begin_input(&mut self) {
        if self.phase != Phase::Showing {
            debug!("begin_input ignored in phase {:?}", self.phase);
            return;
        }
        self.open_input();
    }

    /// Judge one input against the current round
    pub fn submit_input(&mut self, candidate: usize) -> Option<Evaluation> {
        if self.phase != Phase::AwaitingInput || self.config.expiry == ExpiryRule::Advance {
            debug!("input {} ignored in phase {:?}", candidate, self.phase);
            return None;
        }

        let (item, len) = match &self.current_round {
            Some(round) => (round.content.get(self.input_cursor).copied(), round.len()),
            None => return None,
        };
        let expected = item.and_then(|item| self.table.expected(item));

        self.phase = Phase::Evaluating;
        let evaluation = if expected == Some(candidate) {
            self.input_cursor += 1;
            if self.input_cursor < len {
                self.phase = Phase::AwaitingInput;
                Evaluation::Progress { matched: self.input_cursor, of: len }
            } else {
                self.clear_round()
            }
        } else {
            self.mismatch()
        };

        Some(self.record(evaluation))
    }

    /// Abandon the session without awarding the current round
    pub fn abort(&mut self) {
        if self.phase.is_terminal() || self.phase == Phase::Idle {
            debug!("abort ignored in phase {:?}", self.phase);
            return;
        }

        info!(score = self.score, "Session aborted");
        self.phase = Phase::Idle;
        self.current_round = None;
        self.time_remaining = 0;
        self.reveal_elapsed = 0;
        self.input_cursor = 0;
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let (round_index, content, time_budget) = match &self.current_round {
            Some(round) => (round.index, round.content.clone(), round.time_budget_secs),
            None => (0, Vec::new(), self.config.time_budget_secs),
        };

        SessionSnapshot {
            phase: self.phase,
            score: self.score,
            round_index,
            round_total: self.config.round_count,
            revealed: self.revealed(content.len()),
            content,
            input_progress: self.input_cursor,
            time_remaining: self.time_remaining,
            time_budget,
            mistakes: self.mistakes,
            rounds_cleared: self.rounds_cleared,
            last_evaluation: self.last_evaluation,
        }
    }

    fn revealed(&self, items: usize) -> usize {
        match self.phase {
            Phase::Showing if self.config.reveal_ticks_per_item > 0 => {
                let shown = (self.reveal_elapsed / self.config.reveal_ticks_per_item) as usize + 1;
                shown.min(items)
            }
            Phase::Idle => 0,
            _ => items,
        }
    }

    fn reveal_total(&self) -> u32 {
        let items = self.current_round.as_ref().map_or(0, Round::len);
        self.config.reveal_ticks(items)
    }

    fn begin_round(&mut self, index: u32) {
        let previous = self.current_round.take().map(|round| round.content);
        let items = self.config.difficulty.items_for(index, self.config.max_difficulty);
        let content = round::draw(
            self.config.draw,
            self.table.len(),
            items,
            index,
            previous.as_deref(),
            &mut self.rng,
        );

        debug!(index, ?content, "Round drawn");
        self.current_round = Some(Round {
            index,
            content,
            time_budget_secs: self.config.time_budget_secs,
        });
        self.time_remaining = self.config.time_budget_secs;
        self.reveal_elapsed = 0;
        self.input_cursor = 0;
        self.phase = Phase::Showing;
    }

    fn open_input(&mut self) {
        self.reveal_elapsed = self.reveal_total();
        self.time_remaining = self.config.time_budget_secs;
        self.input_cursor = 0;
        self.phase = Phase::AwaitingInput;
    }

    fn consume(&mut self, elapsed: u32) -> Option<Evaluation> {
        if elapsed == 0 {
            return None;
        }
        self.time_remaining = self.time_remaining.saturating_sub(elapsed);
        if self.time_remaining > 0 {
            return None;
        }

        self.phase = Phase::Evaluating;
        let evaluation = match self.config.expiry {
            ExpiryRule::Fail => self.fail(FailReason::TimeExpired),
            ExpiryRule::Advance => self.clear_round(),
        };
        Some(self.record(evaluation))
    }

    fn mismatch(&mut self) -> Evaluation {
        self.mistakes += 1;
        match self.config.penalty {
            PenaltyRule::None => {}
            PenaltyRule::Points(points) => self.score = self.score.saturating_sub(points),
            PenaltyRule::Seconds(secs) => {
                self.time_remaining = self.time_remaining.saturating_sub(secs)
            }
        }

        match self.config.strictness {
            Strictness::Strict => self.fail(FailReason::WrongAnswer),
            Strictness::MoveOn => self.advance(Evaluation::RoundMissed, 0),
            Strictness::Lenient { max_mistakes } => {
                if max_mistakes.map_or(false, |max| self.mistakes > max) {
                    self.fail(FailReason::MistakesExhausted)
                } else if self.time_remaining == 0 {
                    self.fail(FailReason::TimeExpired)
                } else {
                    self.input_cursor = 0;
                    self.phase = Phase::AwaitingInput;
                    Evaluation::Retry { mistakes: self.mistakes }
                }
            }
        }
    }

    fn clear_round(&mut self) -> Evaluation {
        let awarded = self.round_award();
        self.score = self.score.saturating_add(awarded);
        self.rounds_cleared += 1;
        self.advance(Evaluation::RoundCleared { awarded }, awarded)
    }

    fn round_award(&self) -> u32 {
        let Some(round) = &self.current_round else {
            return 0;
        };
        match self.config.scoring {
            ScoringRule::Flat(points) => points,
            ScoringRule::PerItem(points) => points.saturating_mul(round.len() as u32),
            ScoringRule::Weighted => round
                .content
                .iter()
                .map(|&item| self.table.weight(item))
                .fold(0u32, u32::saturating_add),
        }
    }

    /// Move to the next round, or complete the session after the last one
    fn advance(&mut self, evaluation: Evaluation, awarded: u32) -> Evaluation {
        let index = self.current_round.as_ref().map_or(0, |round| round.index);
        if index >= self.config.round_count {
            self.phase = Phase::Complete;
            self.time_remaining = 0;
            info!(score = self.score, cleared = self.rounds_cleared, "Session complete");
            Evaluation::SessionComplete { awarded }
        } else {
            self.begin_round(index + 1);
            evaluation
        }
    }

    fn fail(&mut self, reason: FailReason) -> Evaluation {
        self.phase = Phase::Failed;
        info!(score = self.score, ?reason, "Session failed");
        Evaluation::SessionFailed(reason)
    }

    fn record(&mut self, evaluation: Evaluation) -> Evaluation {
        self.last_evaluation = Some(evaluation);
        evaluation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{ACTIVITIES, BREATHING_PHASES, EMOTIONS, MEMORY_EMOJIS, QUIZ_QUESTIONS};
    use crate::engine::config::{Difficulty, DrawMode};

    fn answer(session: &Session) -> usize {
        let snapshot = session.snapshot();
        let item = snapshot.content[snapshot.input_progress];
        session.table().expected(item).unwrap()
    }

    fn wrong(session: &Session) -> usize {
        (answer(session) + 1) % session.table().len()
    }

    fn emotion_config() -> SessionConfig {
        SessionConfig::new()
            .with_round_count(3)
            .with_time_budget(30)
            .with_seed(Some(11))
    }

    #[test]
    fn test_start_enters_showing_round_one() {
        let mut session = Session::new(&EMOTIONS);
        assert_eq!(session.phase(), Phase::Idle);

        session.start(emotion_config()).unwrap();
        assert_eq!(session.phase(), Phase::Showing);
        assert_eq!(session.current_round().unwrap().index, 1);
        assert_eq!(session.score(), 0);
        assert_eq!(session.time_remaining(), 30);
    }

    #[test]
    fn test_invalid_config_keeps_idle() {
        let mut session = Session::new(&EMOTIONS);
        let result = session.start(emotion_config().with_round_count(0));
        assert!(matches!(result, Err(crate::MhapaError::Config(_))));
        assert_eq!(session.phase(), Phase::Idle);
        assert!(session.current_round().is_none());
    }

    #[test]
    fn test_start_ignored_when_running() {
        let mut session = Session::new(&EMOTIONS);
        session.start(emotion_config()).unwrap();
        session.begin_input();
        session.tick(5);

        session.start(emotion_config().with_round_count(9)).unwrap();
        assert_eq!(session.phase(), Phase::AwaitingInput);
        assert_eq!(session.time_remaining(), 25);
        assert_eq!(session.config().round_count, 3);
    }

    #[test]
    fn test_correct_answers_complete_session() {
        let mut session = Session::new(&EMOTIONS);
        session.start(emotion_config()).unwrap();

        for round in 1..=3 {
            session.begin_input();
            let evaluation = session.submit_input(answer(&session)).unwrap();
            if round < 3 {
                assert_eq!(evaluation, Evaluation::RoundCleared { awarded: 1 });
                assert_eq!(session.phase(), Phase::Showing);
                assert_eq!(session.current_round().unwrap().index, round + 1);
            } else {
                assert_eq!(evaluation, Evaluation::SessionComplete { awarded: 1 });
            }
        }

        assert_eq!(session.phase(), Phase::Complete);
        assert_eq!(session.score(), 3);
    }

    #[test]
    fn test_expiry_fails_exactly_once() {
        let mut session = Session::new(&EMOTIONS);
        session.start(emotion_config()).unwrap();
        session.begin_input();

        let mut failures = 0;
        for _ in 0..30 {
            if let Some(Evaluation::SessionFailed(FailReason::TimeExpired)) = session.tick(1) {
                failures += 1;
            }
        }
        assert_eq!(failures, 1);
        assert_eq!(session.phase(), Phase::Failed);
        assert_eq!(session.time_remaining(), 0);

        assert!(session.tick(1).is_none());
        assert_eq!(session.time_remaining(), 0);
    }

    #[test]
    fn test_large_tick_saturates() {
        let mut session = Session::new(&EMOTIONS);
        session.start(emotion_config()).unwrap();
        session.begin_input();
        let evaluation = session.tick(500);
        assert_eq!(evaluation, Some(Evaluation::SessionFailed(FailReason::TimeExpired)));
        assert_eq!(session.time_remaining(), 0);
    }

    #[test]
    fn test_input_ignored_outside_awaiting() {
        let mut session = Session::new(&EMOTIONS);
        assert!(session.submit_input(0).is_none());

        session.start(emotion_config()).unwrap();
        assert_eq!(session.phase(), Phase::Showing);
        assert!(session.submit_input(0).is_none());
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn test_abort_returns_to_idle() {
        let mut session = Session::new(&EMOTIONS);
        session.start(emotion_config()).unwrap();
        session.begin_input();
        session.abort();
        assert_eq!(session.phase(), Phase::Idle);
        assert!(session.current_round().is_none());
        assert!(session.tick(1).is_none());
        assert_eq!(session.phase(), Phase::Idle);
    }

    #[test]
    fn test_abort_from_showing_and_mid_reveal() {
        let mut session = Session::new(&EMOTIONS);
        session.start(emotion_config()).unwrap();
        assert_eq!(session.phase(), Phase::Showing);
        session.abort();
        assert_eq!(session.phase(), Phase::Idle);
        assert!(session.current_round().is_none());

        let mut session = Session::new(&MEMORY_EMOJIS);
        let config = SessionConfig::new()
            .with_round_count(2)
            .with_time_budget(20)
            .with_difficulty(Difficulty::Fixed(3), 8)
            .with_draw(DrawMode::Growing)
            .with_reveal(1)
            .with_seed(Some(5));
        session.start(config).unwrap();
        session.tick(1);
        assert_eq!(session.phase(), Phase::Showing);
        assert_eq!(session.snapshot().revealed, 2);

        session.abort();
        assert_eq!(session.phase(), Phase::Idle);
        assert!(session.current_round().is_none());
        assert!(session.tick(5).is_none());
        assert!(session.submit_input(0).is_none());
    }

    #[test]
    fn test_abort_ignored_when_terminal() {
        let mut session = Session::new(&EMOTIONS);
        session.start(emotion_config().with_round_count(1)).unwrap();
        session.begin_input();
        session.submit_input(answer(&session));
        assert_eq!(session.phase(), Phase::Complete);
        session.abort();
        assert_eq!(session.phase(), Phase::Complete);
    }

    #[test]
    fn test_lenient_retry_and_exhaustion() {
        let mut session = Session::new(&EMOTIONS);
        let config = emotion_config()
            .with_strictness(Strictness::Lenient { max_mistakes: Some(1) })
            .with_penalty(PenaltyRule::Points(2));
        session.start(config).unwrap();
        session.begin_input();

        let first = session.submit_input(wrong(&session)).unwrap();
        assert_eq!(first, Evaluation::Retry { mistakes: 1 });
        assert_eq!(session.phase(), Phase::AwaitingInput);
        assert_eq!(session.score(), 0);

        let second = session.submit_input(wrong(&session)).unwrap();
        assert_eq!(second, Evaluation::SessionFailed(FailReason::MistakesExhausted));
        assert_eq!(session.phase(), Phase::Failed);
    }

    #[test]
    fn test_point_penalty_saturates_at_zero() {
        let mut session = Session::new(&EMOTIONS);
        let config = emotion_config()
            .with_scoring(ScoringRule::Flat(3))
            .with_strictness(Strictness::Lenient { max_mistakes: None })
            .with_penalty(PenaltyRule::Points(5));
        session.start(config).unwrap();
        session.begin_input();
        session.submit_input(answer(&session));
        assert_eq!(session.score(), 3);

        session.begin_input();
        session.submit_input(wrong(&session));
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn test_time_penalty_can_expire_round() {
        let mut session = Session::new(&EMOTIONS);
        let config = emotion_config()
            .with_time_budget(5)
            .with_strictness(Strictness::Lenient { max_mistakes: None })
            .with_penalty(PenaltyRule::Seconds(3));
        session.start(config).unwrap();
        session.begin_input();

        assert_eq!(
            session.submit_input(wrong(&session)),
            Some(Evaluation::Retry { mistakes: 1 })
        );
        assert_eq!(session.time_remaining(), 2);
        assert_eq!(
            session.submit_input(wrong(&session)),
            Some(Evaluation::SessionFailed(FailReason::TimeExpired))
        );
        assert_eq!(session.time_remaining(), 0);
    }

    #[test]
    fn test_strict_mismatch_fails() {
        let mut session = Session::new(&EMOTIONS);
        session.start(emotion_config()).unwrap();
        session.begin_input();
        let evaluation = session.submit_input(wrong(&session)).unwrap();
        assert_eq!(evaluation, Evaluation::SessionFailed(FailReason::WrongAnswer));
        assert_eq!(session.last_evaluation(), Some(evaluation));
    }

    #[test]
    fn test_move_on_forfeits_round() {
        let mut session = Session::new(&QUIZ_QUESTIONS);
        let config = SessionConfig::new()
            .with_round_count(3)
            .with_draw(DrawMode::Sequential)
            .with_strictness(Strictness::MoveOn);
        session.start(config).unwrap();

        session.begin_input();
        assert_eq!(session.submit_input(0), Some(Evaluation::RoundMissed));
        session.begin_input();
        assert_eq!(session.submit_input(1), Some(Evaluation::RoundCleared { awarded: 1 }));
        session.begin_input();
        assert_eq!(session.submit_input(2), Some(Evaluation::SessionComplete { awarded: 1 }));

        assert_eq!(session.score(), 2);
        assert_eq!(session.mistakes(), 1);
        assert_eq!(session.rounds_cleared(), 2);
    }

    #[test]
    fn test_memory_sequence_reveal_and_input() {
        let mut session = Session::new(&MEMORY_EMOJIS);
        let config = SessionConfig::new()
            .with_round_count(3)
            .with_time_budget(20)
            .with_difficulty(Difficulty::Linear { base: 1, step: 1 }, 8)
            .with_draw(DrawMode::Growing)
            .with_scoring(ScoringRule::PerItem(1))
            .with_reveal(1)
            .with_seed(Some(3));
        session.start(config).unwrap();

        // Round 1: one item, revealed for one tick
        assert_eq!(session.snapshot().revealed, 1);
        session.tick(1);
        assert_eq!(session.phase(), Phase::AwaitingInput);
        assert_eq!(session.time_remaining(), 20);
        session.submit_input(answer(&session));

        // Round 2: two items; reveal does not consume the budget
        let round = session.current_round().unwrap().clone();
        assert_eq!(round.len(), 2);
        session.tick(1);
        assert_eq!(session.phase(), Phase::Showing);
        assert_eq!(session.snapshot().revealing(), Some(round.content[1]));
        session.tick(1);
        assert_eq!(session.phase(), Phase::AwaitingInput);
        assert_eq!(session.time_remaining(), 20);

        let progress = session.submit_input(answer(&session)).unwrap();
        assert_eq!(progress, Evaluation::Progress { matched: 1, of: 2 });
        let cleared = session.submit_input(answer(&session)).unwrap();
        assert_eq!(cleared, Evaluation::RoundCleared { awarded: 2 });
        assert_eq!(session.score(), 3);
    }

    #[test]
    fn test_weighted_scoring_awards_priority_points() {
        let mut session = Session::new(&ACTIVITIES);
        let config = SessionConfig::new()
            .with_round_count(3)
            .with_time_budget(30)
            .with_difficulty(Difficulty::Fixed(2), 2)
            .with_scoring(ScoringRule::Weighted)
            .with_seed(Some(21));
        session.start(config).unwrap();

        let mut expected_total = 0;
        for _ in 0..3 {
            let round = session.current_round().unwrap().clone();
            let expected: u32 = round
                .content
                .iter()
                .map(|&item| ACTIVITIES[item].priority.points())
                .sum();
            expected_total += expected;

            session.begin_input();
            session.submit_input(answer(&session));
            let evaluation = session.submit_input(answer(&session)).unwrap();
            match evaluation {
                Evaluation::RoundCleared { awarded } | Evaluation::SessionComplete { awarded } => {
                    assert_eq!(awarded, expected)
                }
                other => panic!("unexpected evaluation {:?}", other),
            }
        }

        assert_eq!(session.phase(), Phase::Complete);
        assert_eq!(session.score(), expected_total);
    }

    #[test]
    fn test_breathing_advances_on_expiry() {
        let mut session = Session::new(&BREATHING_PHASES);
        session.start(SessionConfig::timed_exercise(12, 4)).unwrap();

        for _ in 0..47 {
            session.tick(1);
            assert!(!session.phase().is_terminal());
        }
        assert_eq!(session.tick(1), Some(Evaluation::SessionComplete { awarded: 1 }));
        assert_eq!(session.phase(), Phase::Complete);
        assert_eq!(session.score(), 12);
    }

    #[test]
    fn test_timed_exercise_rejects_input() {
        let mut session = Session::new(&BREATHING_PHASES);
        session.start(SessionConfig::timed_exercise(1, 4)).unwrap();
        session.tick(1);
        assert_eq!(session.phase(), Phase::AwaitingInput);
        assert!(session.submit_input(0).is_none());
    }

    #[test]
    fn test_random_rounds_never_repeat() {
        let mut session = Session::new(&EMOTIONS);
        let config = SessionConfig::new()
            .with_round_count(200)
            .with_strictness(Strictness::Lenient { max_mistakes: None });
        session.start(config).unwrap();

        let mut previous = session.current_round().unwrap().content.clone();
        while session.phase() != Phase::Complete {
            session.begin_input();
            session.submit_input(answer(&session));
            if let Some(round) = session.current_round() {
                if session.phase() == Phase::Showing {
                    assert_ne!(round.content, previous);
                    previous = round.content.clone();
                }
            }
        }
        assert_eq!(session.score(), 200);
    }

    #[test]
    fn test_seeded_sessions_are_reproducible() {
        let mut a = Session::new(&EMOTIONS);
        let mut b = Session::new(&EMOTIONS);
        a.start(emotion_config().with_seed(Some(99))).unwrap();
        b.start(emotion_config().with_seed(Some(99))).unwrap();
        assert_eq!(a.snapshot().content, b.snapshot().content);
    }
}
