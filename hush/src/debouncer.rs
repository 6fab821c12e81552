// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Trailing-edge debounce.
//!
//! A [`Debouncer`] wraps an action and a delay. Every [`call`](Debouncer::call)
//! withdraws the invocation armed by the previous call (if it has not fired
//! yet) and arms a new one carrying the latest argument. The action therefore
//! runs once per burst, `delay` after the last call of the burst, with that
//! call's argument.
//!
//! - Calls separated by at least `delay` each fire on their own
//! - A zero delay fires on the scheduler's next turn, never inside `call`
//! - Dropping the last clone of a debouncer cancels its pending invocation
//! - Panics raised by the action are left to the scheduler's execution context
//!
//! # Example
//!
//! ```rust
//! use hush::{Debouncer, ManualScheduler};
//! use std::sync::{Arc, Mutex};
//! use std::time::Duration;
//!
//! let scheduler = ManualScheduler::new();
//! let seen = Arc::new(Mutex::new(Vec::new()));
//! let log = seen.clone();
//!
//! let search = Debouncer::with_scheduler(
//!     Duration::from_millis(50),
//!     scheduler.clone(),
//!     move |query: &'static str| log.lock().unwrap().push(query),
//! );
//!
//! search.call("r");
//! search.call("ru");
//! search.call("rus");
//! scheduler.advance(Duration::from_millis(50));
//!
//! assert_eq!(*seen.lock().unwrap(), vec!["rus"]);
//! ```

use core::fmt;
use core::time::Duration;
use hush_core::{Result, ResultExt, TimerHandle};
use hush_runtime::Scheduler;
use parking_lot::Mutex;
use std::sync::Arc;

type Action<T> = Arc<dyn Fn(T) + Send + Sync>;

/// Debounced entry point for an action taking a single `T`.
///
/// Cheap to clone; clones share the pending invocation. Composite arguments
/// are passed as one value (a tuple or struct).
pub struct Debouncer<T, S> {
    inner: Arc<Inner<T, S>>,
}

struct Inner<T, S> {
    delay: Duration,
    scheduler: S,
    action: Action<T>,
    pending: Mutex<Option<TimerHandle>>,
}

impl<T, S> Debouncer<T, S>
where
    T: Send + 'static,
    S: Scheduler,
{
    /// Creates a debouncer running `action` on `scheduler`.
    ///
    /// Every delay is accepted; `Duration::ZERO` fires on the scheduler's
    /// next turn.
    pub fn with_scheduler<F>(delay: Duration, scheduler: S, action: F) -> Self
    where
        F: Fn(T) + Send + Sync + 'static,
    {
        Self {
            inner: Arc::new(Inner {
                delay,
                scheduler,
                action: Arc::new(action),
                pending: Mutex::new(None),
            }),
        }
    }

    /// Defers the action with `arg`, superseding any invocation still waiting.
    ///
    /// Never blocks on the action. If the scheduler cannot accept the timer
    /// the call is dropped and a warning is logged; use
    /// [`try_call`](Self::try_call) to observe the failure instead.
    pub fn call(&self, arg: T) {
        if let Err(error) = self.try_call(arg) {
            hush_core::warn!("debounced call dropped: {}", error);
        }
    }

    /// Like [`call`](Self::call), but reports a scheduler that refused the timer.
    ///
    /// On error the previous invocation has still been withdrawn and nothing
    /// is pending, so the debouncer stays usable.
    ///
    /// # Errors
    ///
    /// Returns [`HushError::SchedulerUnavailable`](hush_core::HushError::SchedulerUnavailable)
    /// when the scheduler cannot accept work.
    pub fn try_call(&self, arg: T) -> Result<()> {
        let action = Arc::clone(&self.inner.action);

        // Cancel-and-replace happens under one lock so concurrent callers
        // cannot both leave a timer armed.
        let mut pending = self.inner.pending.lock();

        if let Some(previous) = pending.take() {
            if previous.cancel() {
                hush_core::trace!("superseded pending debounced invocation");
            }
        }

        let handle = self
            .inner
            .scheduler
            .schedule_after(self.inner.delay, move || action(arg))
            .context("arming debounce timer")?;

        *pending = Some(handle);

        Ok(())
    }

    /// Returns `true` while an invocation is armed and has not fired yet.
    pub fn is_pending(&self) -> bool {
        self.inner
            .pending
            .lock()
            .as_ref()
            .is_some_and(TimerHandle::is_armed)
    }

    /// Quiet period that must pass after the last call.
    pub fn delay(&self) -> Duration {
        self.inner.delay
    }

    /// Scheduler the timers and the action run on.
    pub fn scheduler(&self) -> &S {
        &self.inner.scheduler
    }

    /// Turns the debouncer into a plain callable.
    pub fn into_fn(self) -> impl Fn(T) + Clone + Send + Sync + 'static {
        move |arg| self.call(arg)
    }
}

#[cfg(any(feature = "runtime-tokio", feature = "runtime-smol"))]
impl<T> Debouncer<T, crate::DefaultScheduler>
where
    T: Send + 'static,
{
    /// Creates a debouncer on the default scheduler for the enabled runtime.
    pub fn new<F>(delay: Duration, action: F) -> Self
    where
        F: Fn(T) + Send + Sync + 'static,
    {
        Self::with_scheduler(delay, crate::DefaultScheduler::default(), action)
    }
}

impl<T, S> Clone for Debouncer<T, S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T, S: fmt::Debug> fmt::Debug for Debouncer<T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Debouncer")
            .field("delay", &self.inner.delay)
            .field("scheduler", &self.inner.scheduler)
            .field("pending", &*self.inner.pending.lock())
            .finish_non_exhaustive()
    }
}

impl<T, S> Drop for Inner<T, S> {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.get_mut().take() {
            if handle.cancel() {
                hush_core::trace!("debouncer dropped with an invocation pending; cancelled");
            }
        }
    }
}

/// Wraps `action` so it runs on `scheduler` only after `delay` of quiet.
///
/// The returned callable can be cloned and shared across threads; all clones
/// debounce together. Dropping every clone cancels the pending invocation.
pub fn debounce_on<T, S, F>(
    delay: Duration,
    scheduler: S,
    action: F,
) -> impl Fn(T) + Clone + Send + Sync + 'static
where
    T: Send + 'static,
    S: Scheduler,
    F: Fn(T) + Send + Sync + 'static,
{
    Debouncer::with_scheduler(delay, scheduler, action).into_fn()
}

/// Wraps `action` so it runs on the default scheduler only after `delay` of quiet.
///
/// # Example
///
/// ```rust
/// # #[cfg(feature = "runtime-tokio")]
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// use std::time::Duration;
///
/// let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
/// let on_resize = hush::debounce(Duration::from_millis(20), move |size: (u32, u32)| {
///     let _ = tx.send(size);
/// });
///
/// on_resize((800, 600));
/// on_resize((1024, 768));
///
/// assert_eq!(rx.recv().await, Some((1024, 768)));
/// # }
/// # #[cfg(not(feature = "runtime-tokio"))]
/// # fn main() {}
/// ```
#[cfg(any(feature = "runtime-tokio", feature = "runtime-smol"))]
pub fn debounce<T, F>(delay: Duration, action: F) -> impl Fn(T) + Clone + Send + Sync + 'static
where
    T: Send + 'static,
    F: Fn(T) + Send + Sync + 'static,
{
    Debouncer::new(delay, action).into_fn()
}
