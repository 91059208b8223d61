//! Cancellable one-shot timers that deliver an event over a channel.

use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;

/// A scheduled delivery of one event.
#[derive(Debug)]
pub struct TimerHandle(JoinHandle<()>);

impl TimerHandle {
    /// Sends `event` on `events` once `delay` has elapsed.
    ///
    /// Must be called from within a tokio runtime.
    pub fn schedule<E>(delay: Duration, events: UnboundedSender<E>, event: E) -> Self
    where
        E: Send + 'static,
    {
        Self(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if events.send(event).is_err() {
                tracing::trace!("timer fired after receiver closed");
            }
        }))
    }

    /// Stops the timer. Does nothing if it has already fired.
    pub fn cancel(&self) {
        self.0.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.0.is_finished()
    }
}

/// Holds at most one live [`TimerHandle`]; scheduling a new one cancels the old.
#[derive(Debug, Default)]
pub struct Debouncer {
    pending: Option<TimerHandle>,
}

impl Debouncer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancels any pending timer and schedules `event` after `delay`.
    pub fn schedule<E>(&mut self, delay: Duration, events: UnboundedSender<E>, event: E)
    where
        E: Send + 'static,
    {
        self.cancel();
        self.pending = Some(TimerHandle::schedule(delay, events, event));
    }

    /// Cancels the pending timer, if any.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.cancel();
        }
    }

    /// Returns `true` while a scheduled timer has yet to fire.
    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|h| !h.is_finished())
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
