// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::fmt::Debug;
use core::time::Duration;
use hush_core::{Result, TimerHandle};

/// An execution context that can run a callback after a delay.
///
/// Implementations must uphold three rules:
///
/// - the callback never runs synchronously inside `schedule_after`, not even
///   for a zero delay; it runs on the context's next turn at the earliest
/// - the callback runs only if [`TimerHandle::try_fire`] succeeds, so a
///   cancelled handle never fires and no handle fires twice
/// - no scheduler lock is held while the callback runs, so callbacks may
///   schedule again
pub trait Scheduler: Clone + Send + Sync + Debug + 'static {
    /// Arm `callback` to run once `delay` has elapsed.
    ///
    /// # Errors
    ///
    /// Returns [`HushError::SchedulerUnavailable`](hush_core::HushError::SchedulerUnavailable)
    /// when the context cannot accept work (no runtime, or shut down).
    fn schedule_after<F>(&self, delay: Duration, callback: F) -> Result<TimerHandle>
    where
        F: FnOnce() + Send + 'static;
}
