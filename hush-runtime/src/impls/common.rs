// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#[cfg(any(feature = "runtime-tokio", feature = "runtime-smol"))]
use core::future::Future;

#[cfg(any(feature = "runtime-tokio", feature = "runtime-smol"))]
use futures::future::{select, Either};

#[cfg(any(feature = "runtime-tokio", feature = "runtime-smol"))]
use hush_core::TimerHandle;

/// Body of a spawned timer task: sleep until due, then run `callback` if the
/// handle is still armed. Returns early when the handle is cancelled so
/// superseded timers do not keep a task parked until their deadline.
#[cfg(any(feature = "runtime-tokio", feature = "runtime-smol"))]
pub(crate) async fn run_when_due<S, F>(sleep: S, handle: TimerHandle, callback: F)
where
    S: Future<Output = ()>,
    F: FnOnce(),
{
    let sleep = core::pin::pin!(sleep);
    let cancelled = core::pin::pin!(handle.cancelled());

    match select(sleep, cancelled).await {
        Either::Left(((), _)) => {
            if handle.try_fire() {
                hush_core::trace!("timer fired");
                callback();
            } else {
                hush_core::trace!("timer cancelled at its deadline");
            }
        }
        Either::Right(((), _)) => {
            hush_core::trace!("timer cancelled before its deadline");
        }
    }
}
