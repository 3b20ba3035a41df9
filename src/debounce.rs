use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;

/// Trailing-edge rate limiter around a zero-argument action.
///
/// Each `trigger` cancels any pending scheduled run and schedules a new one
/// `delay` after the call, so a burst of triggers collapses to a single run
/// once the burst quiesces. Cancellation is unconditional and idempotent;
/// dropping the debouncer cancels any pending run.
///
/// Must be triggered from within a tokio runtime context.
pub struct Debouncer {
    delay: Duration,
    action: Arc<dyn Fn() + Send + Sync>,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl Debouncer {
    pub fn new<F>(delay: Duration, action: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        Self {
            delay,
            action: Arc::new(action),
            pending: Mutex::new(None),
        }
    }

    /// Schedules the action to run `delay` from now, replacing any pending
    /// schedule.
    pub fn trigger(&self) {
        let mut pending = self.pending.lock();
        if let Some(handle) = pending.take() {
            handle.abort();
        }
        let action = Arc::clone(&self.action);
        let delay = self.delay;
        *pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            action();
        }));
    }

    /// Cancels any pending run. No-op when nothing is pending.
    pub fn cancel(&self) {
        if let Some(handle) = self.pending.lock().take() {
            handle.abort();
        }
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl std::fmt::Debug for Debouncer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Debouncer")
            .field("delay", &self.delay)
            .field("pending", &self.pending.lock().is_some())
            .finish()
    }
}
