//! Cancellable session timer
//!
//! A single tokio interval task per active session. Ticks are delivered
//! through a channel whose receiver the timer owns, so once the timer is
//! stopped or dropped no further tick can be observed.

use std::time::Duration;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::debug;

/// Capacity of the tick channel; a UI that stalls longer than this many
/// periods loses the extra ticks
const TICK_BUFFER: usize = 64;

/// One period of the session clock
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick {
    /// 1-based sequence number since the timer started
    pub seq: u64,
}

/// RAII handle to the session clock; dropping it cancels the task
#[derive(Debug)]
pub struct SessionTimer {
    period: Duration,
    tick_rx: Option<mpsc::Receiver<Tick>>,
    cancel_tx: Option<oneshot::Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl SessionTimer {
    /// Spawn the clock task. The first tick fires one full period after start.
    /// Must be called from within a tokio runtime.
    pub fn start(period: Duration) -> Self {
        let (tick_tx, tick_rx) = mpsc::channel(TICK_BUFFER);
        let (cancel_tx, mut cancel_rx) = oneshot::channel::<()>();

        let handle = tokio::spawn(async move {
            let mut interval = time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            let mut seq = 0u64;

            loop {
                tokio::select! {
                    _ = &mut cancel_rx => break,
                    _ = interval.tick() => {
                        seq += 1;
                        if tick_tx.try_send(Tick { seq }).is_err() && tick_tx.is_closed() {
                            break;
                        }
                    }
                }
            }
            debug!(ticks = seq, "Session timer stopped");
        });

        Self {
            period,
            tick_rx: Some(tick_rx),
            cancel_tx: Some(cancel_tx),
            handle: Some(handle),
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Take every tick delivered so far without waiting
    pub fn drain(&mut self) -> u32 {
        let Some(rx) = self.tick_rx.as_mut() else {
            return 0;
        };
        let mut count = 0;
        while rx.try_recv().is_ok() {
            count += 1;
        }
        count
    }

    /// Wait for the next tick; `None` once stopped
    pub async fn next_tick(&mut self) -> Option<Tick> {
        self.tick_rx.as_mut()?.recv().await
    }

    /// Stop the clock. No tick is observable after this returns.
    pub fn stop(&mut self) {
        if let Some(cancel_tx) = self.cancel_tx.take() {
            let _ = cancel_tx.send(()); // Task may already have exited
        }
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
        if let Some(mut rx) = self.tick_rx.take() {
            rx.close();
        }
    }

    pub fn is_running(&self) -> bool {
        self.handle.as_ref().map_or(false, |handle| !handle.is_finished())
    }
}

impl Drop for SessionTimer {
    fn drop(&mut self) {
        self.stop();
    }
}
