// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! One-shot, runtime-agnostic handle to a scheduled callback.
//!
//! A `TimerHandle` starts [`Armed`](TimerState::Armed) and leaves that state
//! exactly once: either the scheduler claims it to run the callback
//! ([`try_fire`](TimerHandle::try_fire)) or the owner withdraws it
//! ([`cancel`](TimerHandle::cancel)). Both transitions are compare-and-swap
//! operations, so whichever comes first wins and the other becomes a no-op.

use core::future::Future;
use core::pin::Pin;
use core::sync::atomic::{AtomicU8, Ordering};
use core::task::{Context, Poll};
use event_listener::{Event, EventListener};
use std::sync::Arc;

const ARMED: u8 = 0;
const FIRED: u8 = 1;
const CANCELLED: u8 = 2;

/// Observable state of a [`TimerHandle`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TimerState {
    /// Waiting for its deadline
    Armed,
    /// Claimed by the scheduler; the callback has run or is running
    Fired,
    /// Withdrawn before the scheduler claimed it
    Cancelled,
}

/// Handle to a callback armed on a scheduler.
///
/// Clones share the same state. The scheduler keeps one clone to claim the
/// callback when its deadline passes; the owner keeps another to cancel it.
///
/// # Example
///
/// ```
/// use hush_core::{TimerHandle, TimerState};
///
/// let handle = TimerHandle::new();
/// let scheduler_side = handle.clone();
///
/// assert!(handle.cancel());
/// assert!(!scheduler_side.try_fire());
/// assert_eq!(handle.state(), TimerState::Cancelled);
/// ```
#[derive(Clone, Debug)]
pub struct TimerHandle {
    inner: Arc<Inner>,
}

#[derive(Debug)]
struct Inner {
    state: AtomicU8,
    event: Event,
}

impl TimerHandle {
    /// Create a new armed handle.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Inner {
                state: AtomicU8::new(ARMED),
                event: Event::new(),
            }),
        }
    }

    /// Withdraw the callback, waking anyone awaiting [`cancelled`](Self::cancelled).
    ///
    /// Idempotent. Returns `true` only for the call that actually moved the
    /// handle out of `Armed`; if the callback already fired (or is firing) this
    /// is a no-op and returns `false`.
    pub fn cancel(&self) -> bool {
        let won = self
            .inner
            .state
            .compare_exchange(ARMED, CANCELLED, Ordering::AcqRel, Ordering::Acquire)
            .is_ok();

        if won {
            self.inner.event.notify(usize::MAX);
        }

        won
    }

    /// Claim the callback for execution.
    ///
    /// Called by the scheduler once the deadline has passed. Returns `true` if
    /// the caller now owns the right to run the callback, `false` if the
    /// handle was cancelled or already fired.
    pub fn try_fire(&self) -> bool {
        self.inner
            .state
            .compare_exchange(ARMED, FIRED, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    /// Current state of the handle.
    pub fn state(&self) -> TimerState {
        match self.inner.state.load(Ordering::Acquire) {
            ARMED => TimerState::Armed,
            FIRED => TimerState::Fired,
            _ => TimerState::Cancelled,
        }
    }

    /// Still waiting: neither fired nor cancelled.
    pub fn is_armed(&self) -> bool {
        self.state() == TimerState::Armed
    }

    /// The scheduler claimed the callback.
    pub fn is_fired(&self) -> bool {
        self.state() == TimerState::Fired
    }

    /// Withdrawn before it could fire.
    pub fn is_cancelled(&self) -> bool {
        self.state() == TimerState::Cancelled
    }

    /// Wait asynchronously until the handle is cancelled.
    ///
    /// Resolves immediately if it already is. Never resolves for a handle
    /// that fired, so schedulers race it against their sleep.
    pub fn cancelled(&self) -> Cancelled<'_> {
        Cancelled {
            handle: self,
            listener: None,
        }
    }
}

impl Default for TimerHandle {
    fn default() -> Self {
        Self::new()
    }
}

/// Future returned by [`TimerHandle::cancelled()`].
pub struct Cancelled<'a> {
    handle: &'a TimerHandle,
    listener: Option<EventListener>,
}

impl Future for Cancelled<'_> {
    type Output = ();

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        let this = self.get_mut();

        loop {
            if this.handle.is_cancelled() {
                return Poll::Ready(());
            }

            match this.listener.as_mut() {
                // Register, then re-check the state before sleeping: cancel()
                // may have run between the check above and listen().
                None => this.listener = Some(this.handle.inner.event.listen()),
                Some(listener) => match Pin::new(listener).poll(cx) {
                    Poll::Ready(()) => this.listener = None,
                    Poll::Pending => return Poll::Pending,
                },
            }
        }
    }
}
