// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Trailing-edge debounce for closures.
//!
//! [`debounce`] turns an action into a callable that only runs the action once
//! calls have stopped for a given delay, using the argument of the last call.
//! Bursts of keystrokes, resize events or file notifications collapse into a
//! single trailing invocation.
//!
//! # Overview
//!
//! - **[`debounce`]** / **[`debounce_on`]** - build a debounced `Fn(T)`
//! - **[`Debouncer`]** - the object form, with [`try_call`](Debouncer::try_call)
//!   and [`is_pending`](Debouncer::is_pending)
//! - **[`Scheduler`]** - where timers and the action run; inject your own or use
//!   [`DefaultScheduler`]
//! - **[`ManualScheduler`]** - a virtual-time loop the host drives, ideal for tests
//!
//! # Runtime Support
//!
//! Enable runtime-specific features in your `Cargo.toml`:
//! - `runtime-tokio` (default) - `DefaultScheduler` is `TokioScheduler`
//! - `runtime-smol` - `DefaultScheduler` is `SmolScheduler` (when tokio is off)
//! - `tracing` (default) - log through `tracing` instead of stderr
//!
//! # Example
//!
//! ```rust
//! use hush::{debounce_on, ManualScheduler};
//! use std::sync::{Arc, Mutex};
//! use std::time::Duration;
//!
//! let scheduler = ManualScheduler::new();
//! let saved = Arc::new(Mutex::new(None));
//! let slot = saved.clone();
//!
//! let autosave = debounce_on(Duration::from_millis(300), scheduler.clone(), move |text: String| {
//!     *slot.lock().unwrap() = Some(text);
//! });
//!
//! autosave("hel".to_string());
//! autosave("hello".to_string());
//! scheduler.advance(Duration::from_millis(300));
//!
//! assert_eq!(saved.lock().unwrap().as_deref(), Some("hello"));
//! ```

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]

mod debouncer;

pub mod prelude;

pub use debouncer::{debounce_on, Debouncer};
pub use hush_core::{HushError, Result, TimerHandle, TimerState};
pub use hush_runtime::impls::manual::ManualScheduler;
pub use hush_runtime::{Scheduler, Timer};

#[cfg(any(feature = "runtime-tokio", feature = "runtime-smol"))]
pub use debouncer::debounce;

#[cfg(feature = "runtime-tokio")]
pub use hush_runtime::impls::tokio::{TokioScheduler, TokioTimer};

#[cfg(feature = "runtime-smol")]
pub use hush_runtime::impls::smol::{SmolScheduler, SmolTimer};

#[cfg(feature = "runtime-tokio")]
pub type DefaultScheduler = TokioScheduler;

#[cfg(all(feature = "runtime-smol", not(feature = "runtime-tokio")))]
pub type DefaultScheduler = SmolScheduler;
