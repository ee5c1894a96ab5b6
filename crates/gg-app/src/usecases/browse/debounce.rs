use std::future::Future;
use std::sync::Mutex;

use tokio::task::AbortHandle;
use tokio::time::{sleep, Duration};
use tracing::debug;

/// Single-slot debounce timer.
///
/// Every [`SearchDebouncer::schedule`] replaces the pending job and restarts the
/// quiet window, so at most one job fires per window: the last one.
/// Cancelling (or dropping the debouncer) stops a pending job. A job that
/// already fired runs to completion on its own task.
pub struct SearchDebouncer {
    quiet: Duration,
    slot: Mutex<Option<AbortHandle>>,
}

impl SearchDebouncer {
    pub fn new(quiet: Duration) -> Self {
        Self {
            quiet,
            slot: Mutex::new(None),
        }
    }

    pub fn quiet(&self) -> Duration {
        self.quiet
    }

    /// Must be called from within a tokio runtime.
    pub fn schedule<F>(&self, job: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let quiet = self.quiet;
        let handle = tokio::spawn(async move {
            sleep(quiet).await;
            tokio::spawn(job);
        });

        let mut slot = self.slot.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(previous) = slot.replace(handle.abort_handle()) {
            previous.abort();
            debug!(quiet_ms = quiet.as_millis() as u64, "debounce window restarted");
        }
    }

    pub fn cancel(&self) {
        let mut slot = self.slot.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(pending) = slot.take() {
            pending.abort();
            debug!("pending debounce cancelled");
        }
    }

    pub fn is_pending(&self) -> bool {
        let slot = self.slot.lock().unwrap_or_else(|e| e.into_inner());
        slot.as_ref().is_some_and(|handle| !handle.is_finished())
    }
}

impl Drop for SearchDebouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
