// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! smol runtime implementation of [`Timer`] and [`Scheduler`].
//!
//! Timers run as detached tasks on smol's global executor.

#[cfg(feature = "runtime-smol")]
use std::time::Duration;

#[cfg(feature = "runtime-smol")]
use hush_core::{Result, TimerHandle};

#[cfg(feature = "runtime-smol")]
use crate::{impls::common::run_when_due, scheduler::Scheduler, timer::Timer};

#[cfg(feature = "runtime-smol")]
#[derive(Clone, Debug, Default)]
pub struct SmolTimer;

/// Wrapper for async-io Timer to implement `Future<Output = ()>`
#[cfg(feature = "runtime-smol")]
pub struct SmolSleep {
    timer: async_io::Timer,
}

#[cfg(feature = "runtime-smol")]
impl SmolSleep {
    fn new(duration: Duration) -> Self {
        Self {
            timer: async_io::Timer::after(duration),
        }
    }
}

#[cfg(feature = "runtime-smol")]
impl core::future::Future for SmolSleep {
    type Output = ();

    fn poll(
        mut self: core::pin::Pin<&mut Self>,
        cx: &mut core::task::Context<'_>,
    ) -> core::task::Poll<Self::Output> {
        core::pin::Pin::new(&mut self.timer).poll(cx).map(|_| ())
    }
}

#[cfg(feature = "runtime-smol")]
impl Timer for SmolTimer {
    type Sleep = SmolSleep;

    fn sleep_future(&self, duration: Duration) -> Self::Sleep {
        SmolSleep::new(duration)
    }
}

#[cfg(feature = "runtime-smol")]
#[derive(Clone, Debug, Default)]
pub struct SmolScheduler {
    timer: SmolTimer,
}

#[cfg(feature = "runtime-smol")]
impl SmolScheduler {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(feature = "runtime-smol")]
impl Scheduler for SmolScheduler {
    fn schedule_after<F>(&self, delay: Duration, callback: F) -> Result<TimerHandle>
    where
        F: FnOnce() + Send + 'static,
    {
        let handle = TimerHandle::new();
        let sleep = self.timer.sleep_future(delay);

        smol::spawn(run_when_due(sleep, handle.clone(), callback)).detach();

        Ok(handle)
    }
}
