// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Execution contexts for hush.
//!
//! A [`Scheduler`](scheduler::Scheduler) runs a callback once a delay has
//! elapsed and hands back a [`TimerHandle`](hush_core::TimerHandle) that can
//! withdraw it. Async runtimes plug in through the [`Timer`](timer::Timer)
//! trait; [`ManualScheduler`](impls::manual::ManualScheduler) is a
//! deterministic loop driven by the host.
//!
//! # Runtime Support
//!
//! - `runtime-tokio` (default) - `TokioScheduler` / `TokioTimer`
//! - `runtime-smol` - `SmolScheduler` / `SmolTimer`
//! - always available - `ManualScheduler`

pub mod impls;
pub mod scheduler;
pub mod timer;

pub use scheduler::Scheduler;
pub use timer::Timer;
