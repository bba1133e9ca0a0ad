//! Tokio-backed debounce timers.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;
use tracing::debug;

use super::traits::{DebounceToken, Scheduler};

/// Scheduler that sleeps on the tokio runtime and reports fired tokens over a channel.
///
/// Each scheduled token gets its own task; cancelling aborts that task, so a cancelled
/// token is never delivered. Must be used from within a tokio runtime.
pub struct TokioScheduler {
    fired_tx: UnboundedSender<DebounceToken>,
    pending: Mutex<HashMap<DebounceToken, JoinHandle<()>>>,
}

impl TokioScheduler {
    /// Create a scheduler and the receiver its fired tokens arrive on.
    pub fn new() -> (Self, UnboundedReceiver<DebounceToken>) {
        let (fired_tx, fired_rx) = mpsc::unbounded_channel();
        let scheduler = Self {
            fired_tx,
            pending: Mutex::new(HashMap::new()),
        };
        (scheduler, fired_rx)
    }

    /// Number of timers that have neither fired nor been cancelled.
    pub fn pending_count(&self) -> usize {
        self.pending()
            .values()
            .filter(|handle| !handle.is_finished())
            .count()
    }

    fn pending(&self) -> MutexGuard<'_, HashMap<DebounceToken, JoinHandle<()>>> {
        self.pending.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Scheduler for TokioScheduler {
    fn schedule(&self, delay: Duration, token: DebounceToken) {
        let fired_tx = self.fired_tx.clone();
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // Receiver gone means the host shut down; nothing left to wake.
            let _ = fired_tx.send(token);
        });

        let mut pending = self.pending();
        pending.retain(|_, handle| !handle.is_finished());
        pending.insert(token, handle);
        debug!(%token, delay_ms = delay.as_millis() as u64, "Debounce scheduled");
    }

    fn cancel(&self, token: DebounceToken) {
        if let Some(handle) = self.pending().remove(&token) {
            handle.abort();
            debug!(%token, "Debounce cancelled");
        }
    }
}

impl Drop for TokioScheduler {
    fn drop(&mut self) {
        for (_, handle) in self.pending().drain() {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn fires_after_delay() {
        let (scheduler, mut fired) = TokioScheduler::new();
        scheduler.schedule(Duration::from_millis(300), DebounceToken(1));

        assert!(fired.try_recv().is_err());
        assert_eq!(fired.recv().await, Some(DebounceToken(1)));
    }

    #[tokio::test(start_paused = true)]
    async fn cancelled_token_never_fires() {
        let (scheduler, mut fired) = TokioScheduler::new();
        scheduler.schedule(Duration::from_millis(300), DebounceToken(1));
        scheduler.cancel(DebounceToken(1));
        scheduler.schedule(Duration::from_millis(300), DebounceToken(2));

        assert_eq!(fired.recv().await, Some(DebounceToken(2)));
        tokio::time::sleep(Duration::from_secs(1)).await;
        assert!(fired.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_unknown_token_is_noop() {
        let (scheduler, _fired) = TokioScheduler::new();
        scheduler.cancel(DebounceToken(42));
        assert_eq!(scheduler.pending_count(), 0);
    }
}
