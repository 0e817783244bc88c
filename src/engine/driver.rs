//! Session plus its clock, as held by the shell

use std::time::Duration;
use tracing::debug;

use super::config::SessionConfig;
use super::phase::{Evaluation, Phase};
use super::session::{Session, SessionSnapshot};
use super::timer::SessionTimer;
use crate::content::ContentTable;
use crate::Result;

/// A running game: the session and the only timer feeding it.
///
/// The timer is stopped as soon as the session reaches a terminal phase,
/// on abort, and when the game is dropped.
#[derive(Debug)]
pub struct ActiveGame {
    session: Session,
    timer: Option<SessionTimer>,
}

impl ActiveGame {
    /// Start a session and its clock. A configuration error leaves nothing
    /// running.
    pub fn launch(
        table: &'static dyn ContentTable,
        config: SessionConfig,
        period: Duration,
    ) -> Result<Self> {
        let mut session = Session::new(table);
        session.start(config)?;
        Ok(Self {
            session,
            timer: Some(SessionTimer::start(period)),
        })
    }

    /// Feed every pending tick into the session
    pub fn pump(&mut self) -> Vec<Evaluation> {
        let ticks = self.timer.as_mut().map_or(0, SessionTimer::drain);
        let mut evaluations = Vec::new();
        for _ in 0..ticks {
            if let Some(evaluation) = self.session.tick(1) {
                evaluations.push(evaluation);
            }
            if self.session.phase().is_terminal() {
                break;
            }
        }
        self.stop_if_finished();
        evaluations
    }

    pub fn submit(&mut self, candidate: usize) -> Option<Evaluation> {
        let evaluation = self.session.submit_input(candidate);
        self.stop_if_finished();
        evaluation
    }

    pub fn begin_input(&mut self) {
        self.session.begin_input();
    }

    /// Stop the clock, then return the session to idle
    pub fn abort(&mut self) {
        self.stop_timer();
        self.session.abort();
    }

    pub fn phase(&self) -> Phase {
        self.session.phase()
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        self.session.snapshot()
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn is_timer_running(&self) -> bool {
        self.timer.as_ref().map_or(false, SessionTimer::is_running)
    }

    fn stop_if_finished(&mut self) {
        if self.session.phase().is_terminal() {
            self.stop_timer();
        }
    }

    fn stop_timer(&mut self) {
        if let Some(mut timer) = self.timer.take() {
            timer.stop();
            debug!("Session timer released");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{BREATHING_PHASES, EMOTIONS};

    #[tokio::test(start_paused = true)]
    async fn test_launch_starts_timer() {
        let game = ActiveGame::launch(&EMOTIONS, SessionConfig::new(), Duration::from_secs(1)).unwrap();
        assert_eq!(game.phase(), Phase::Showing);
        assert!(game.is_timer_running());
    }

    #[tokio::test(start_paused = true)]
    async fn test_launch_rejects_bad_config() {
        let result = ActiveGame::launch(
            &EMOTIONS,
            SessionConfig::new().with_time_budget(0),
            Duration::from_secs(1),
        );
        assert!(result.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_abort_stops_timer() {
        let mut game = ActiveGame::launch(&EMOTIONS, SessionConfig::new(), Duration::from_secs(1)).unwrap();
        game.begin_input();
        game.abort();
        assert_eq!(game.phase(), Phase::Idle);
        assert!(!game.is_timer_running());

        tokio::time::sleep(Duration::from_secs(5)).await;
        assert!(game.pump().is_empty());
        assert_eq!(game.phase(), Phase::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn test_pump_drives_breathing_to_completion() {
        let mut game = ActiveGame::launch(
            &BREATHING_PHASES,
            SessionConfig::timed_exercise(2, 4),
            Duration::from_secs(1),
        )
        .unwrap();

        let mut evaluations = Vec::new();
        for _ in 0..20 {
            tokio::time::sleep(Duration::from_secs(1)).await;
            evaluations.extend(game.pump());
            if game.phase().is_terminal() {
                break;
            }
        }

        assert_eq!(game.phase(), Phase::Complete);
        assert_eq!(game.session().score(), 2);
        assert_eq!(evaluations.last(), Some(&Evaluation::SessionComplete { awarded: 1 }));
        assert!(!game.is_timer_running());
    }
}
