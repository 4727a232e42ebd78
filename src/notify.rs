//! Transient status notification timer.
//!
//! A single-slot scheduled task: arming a new flash cancels any pending
//! one first, so at most one callback is ever in flight. The original tool
//! kept this as a global mutable timeout handle; here the slot is owned and
//! the cancel-then-schedule step is explicit.

use std::sync::mpsc;
use std::thread;
use std::time::Duration;

/// How long a copy-success status stays visible.
pub const FLASH_DURATION: Duration = Duration::from_millis(2000);

/// Single-slot cancellable status timer.
#[derive(Debug, Default)]
pub struct Flash {
    pending: Option<(mpsc::Sender<()>, thread::JoinHandle<()>)>,
}

impl Flash {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm the timer: `on_expire` runs after `delay` unless the slot is
    /// re-armed or cancelled first. Any pending task is cancelled before
    /// the new one is scheduled.
    pub fn schedule<F>(&mut self, delay: Duration, on_expire: F)
    where
        F: FnOnce() + Send + 'static,
    {
        self.cancel();

        let (cancel_tx, cancel_rx) = mpsc::channel();
        let handle = thread::spawn(move || {
            if matches!(
                cancel_rx.recv_timeout(delay),
                Err(mpsc::RecvTimeoutError::Timeout)
            ) {
                on_expire();
            }
        });
        self.pending = Some((cancel_tx, handle));
    }

    /// Cancel the pending task, if any. After this returns the callback
    /// either already ran (the timer had expired) or never will.
    pub fn cancel(&mut self) {
        if let Some((cancel_tx, handle)) = self.pending.take() {
            // Send fails harmlessly when the timer already expired.
            let _ = cancel_tx.send(());
            let _ = handle.join();
        }
    }
}

impl Drop for Flash {
    fn drop(&mut self) {
        self.cancel();
    }
}
