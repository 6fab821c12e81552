// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#[cfg(feature = "runtime-tokio")]
use std::time::Duration;

#[cfg(feature = "runtime-tokio")]
use hush_core::{HushError, Result, TimerHandle};

#[cfg(feature = "runtime-tokio")]
use tokio::runtime::Handle;

#[cfg(feature = "runtime-tokio")]
use crate::{impls::common::run_when_due, scheduler::Scheduler, timer::Timer};

#[cfg(feature = "runtime-tokio")]
#[derive(Clone, Debug, Default)]
pub struct TokioTimer;

#[cfg(feature = "runtime-tokio")]
impl Timer for TokioTimer {
    type Sleep = tokio::time::Sleep;

    fn sleep_future(&self, duration: Duration) -> Self::Sleep {
        tokio::time::sleep(duration)
    }
}

/// Runs timers as tasks on a tokio runtime.
///
/// [`TokioScheduler::current`] (also the `Default`) resolves the runtime of the
/// calling thread each time a timer is armed, so it can be built outside any
/// runtime. [`TokioScheduler::from_handle`] pins every timer to one runtime,
/// which lets threads that are not inside a runtime schedule onto it.
#[cfg(feature = "runtime-tokio")]
#[derive(Clone, Debug, Default)]
pub struct TokioScheduler {
    handle: Option<Handle>,
    timer: TokioTimer,
}

#[cfg(feature = "runtime-tokio")]
impl TokioScheduler {
    pub fn current() -> Self {
        Self::default()
    }

    pub fn from_handle(handle: Handle) -> Self {
        Self {
            handle: Some(handle),
            timer: TokioTimer,
        }
    }

    fn runtime(&self) -> Result<Handle> {
        match &self.handle {
            Some(handle) => Ok(handle.clone()),
            None => Handle::try_current()
                .map_err(|error| HushError::scheduler_unavailable(error.to_string())),
        }
    }
}

#[cfg(feature = "runtime-tokio")]
impl Scheduler for TokioScheduler {
    fn schedule_after<F>(&self, delay: Duration, callback: F) -> Result<TimerHandle>
    where
        F: FnOnce() + Send + 'static,
    {
        let runtime = self.runtime()?;
        let handle = TimerHandle::new();

        // Entering the runtime lets the sleep capture its deadline now, even
        // when the caller is a thread outside any runtime.
        let sleep = {
            let _guard = runtime.enter();
            self.timer.sleep_future(delay)
        };
        runtime.spawn(run_when_due(sleep, handle.clone(), callback));

        Ok(handle)
    }
}
