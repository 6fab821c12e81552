// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Deterministic, host-driven scheduler with a virtual clock.
//!
//! Nothing runs on its own: the host moves time forward with
//! [`ManualScheduler::advance`] (or runs the current instant with
//! [`ManualScheduler::tick`]) and due callbacks execute on the calling thread,
//! in deadline order, FIFO among equal deadlines. This models a single-threaded
//! event loop and makes timing behaviour reproducible in tests.
//!
//! # Example
//!
//! ```
//! use hush_runtime::impls::manual::ManualScheduler;
//! use hush_runtime::Scheduler;
//! use std::sync::atomic::{AtomicBool, Ordering};
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! let scheduler = ManualScheduler::new();
//! let ran = Arc::new(AtomicBool::new(false));
//! let flag = ran.clone();
//!
//! scheduler
//!     .schedule_after(Duration::from_millis(50), move || flag.store(true, Ordering::SeqCst))
//!     .unwrap();
//!
//! assert_eq!(scheduler.advance(Duration::from_millis(49)), 0);
//! assert_eq!(scheduler.advance(Duration::from_millis(1)), 1);
//! assert!(ran.load(Ordering::SeqCst));
//! ```

use core::cmp::{Ordering, Reverse};
use core::fmt;
use core::time::Duration;
use hush_core::{HushError, Result, TimerHandle};
use parking_lot::Mutex;
use std::collections::BinaryHeap;
use std::sync::Arc;

use crate::scheduler::Scheduler;

type Callback = Box<dyn FnOnce() + Send>;

/// Queue length below which cancelled entries are left for `advance` to discard.
const COMPACT_MIN: usize = 8;

#[derive(Clone, Default)]
pub struct ManualScheduler {
    state: Arc<Mutex<State>>,
}

#[derive(Default)]
struct State {
    now: Duration,
    next_sequence: u64,
    queue: BinaryHeap<Reverse<Entry>>,
    compact_at: usize,
    shut_down: bool,
}

impl State {
    /// Take cancelled entries out of the queue once it has doubled since the
    /// last sweep. The caller drops them after releasing the lock.
    fn sweep_cancelled(&mut self) -> Vec<Entry> {
        if self.queue.len() < self.compact_at.max(COMPACT_MIN) {
            return Vec::new();
        }

        let (armed, cancelled): (Vec<Entry>, Vec<Entry>) = self
            .queue
            .drain()
            .map(|Reverse(entry)| entry)
            .partition(|entry| entry.handle.is_armed());

        self.queue = armed.into_iter().map(Reverse).collect();
        self.compact_at = self.queue.len() * 2;

        cancelled
    }
}

struct Entry {
    deadline: Duration,
    sequence: u64,
    handle: TimerHandle,
    callback: Callback,
}

impl Entry {
    fn key(&self) -> (Duration, u64) {
        (self.deadline, self.sequence)
    }
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Entry {}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

impl ManualScheduler {
    /// Create a scheduler whose clock starts at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Virtual time elapsed since the scheduler was created.
    pub fn now(&self) -> Duration {
        self.state.lock().now
    }

    /// Number of armed (neither fired nor cancelled) timers.
    pub fn pending(&self) -> usize {
        self.state
            .lock()
            .queue
            .iter()
            .filter(|Reverse(entry)| entry.handle.is_armed())
            .count()
    }

    /// Number of queued entries, including cancelled ones not yet released.
    pub fn queued(&self) -> usize {
        self.state.lock().queue.len()
    }

    /// Move the clock forward by `by`, running every callback that falls due.
    ///
    /// Callbacks observe [`now`](Self::now) equal to their own deadline, and
    /// timers they arm are run too if they fall due within the window.
    /// Returns how many callbacks ran.
    pub fn advance(&self, by: Duration) -> usize {
        // Saturates: `Duration::MAX` is the far future, not an overflow.
        let target = self.state.lock().now.saturating_add(by);
        let mut fired = 0;

        while let Some(entry) = self.pop_due(target) {
            // Lock released: the callback may schedule again.
            if entry.handle.try_fire() {
                (entry.callback)();
                fired += 1;
            }
        }

        let mut state = self.state.lock();
        if state.now < target {
            state.now = target;
        }

        fired
    }

    /// Run everything due at the current instant without moving the clock.
    pub fn tick(&self) -> usize {
        self.advance(Duration::ZERO)
    }

    /// Cancel every outstanding timer and refuse new ones.
    pub fn shutdown(&self) {
        let drained: Vec<Entry> = {
            let mut state = self.state.lock();
            state.shut_down = true;
            state.queue.drain().map(|Reverse(entry)| entry).collect()
        };

        // Callbacks are dropped outside the lock; their captures may call back in.
        for entry in drained {
            entry.handle.cancel();
        }
    }

    pub fn is_shut_down(&self) -> bool {
        self.state.lock().shut_down
    }

    fn pop_due(&self, target: Duration) -> Option<Entry> {
        let mut state = self.state.lock();

        let due = state
            .queue
            .peek()
            .is_some_and(|Reverse(entry)| entry.deadline <= target);
        if !due {
            return None;
        }

        let Reverse(entry) = state.queue.pop()?;
        if entry.deadline > state.now {
            state.now = entry.deadline;
        }

        Some(entry)
    }
}

impl Scheduler for ManualScheduler {
    fn schedule_after<F>(&self, delay: Duration, callback: F) -> Result<TimerHandle>
    where
        F: FnOnce() + Send + 'static,
    {
        let handle = TimerHandle::new();

        let swept = {
            let mut state = self.state.lock();

            if state.shut_down {
                hush_core::trace!("manual scheduler refused a timer after shutdown");
                return Err(HushError::scheduler_unavailable(
                    "manual scheduler has been shut down",
                ));
            }

            let swept = state.sweep_cancelled();
            let entry = Entry {
                deadline: state.now.saturating_add(delay),
                sequence: state.next_sequence,
                handle: handle.clone(),
                callback: Box::new(callback),
            };
            state.next_sequence += 1;
            state.queue.push(Reverse(entry));

            swept
        };

        if !swept.is_empty() {
            hush_core::trace!("released {} cancelled timers", swept.len());
        }
        drop(swept);

        Ok(handle)
    }
}

impl fmt::Debug for ManualScheduler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.lock();
        f.debug_struct("ManualScheduler")
            .field("now", &state.now)
            .field("queued", &state.queue.len())
            .field("shut_down", &state.shut_down)
            .finish()
    }
}
