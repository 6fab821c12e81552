// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Core building blocks shared by the hush crates.
//!
//! - [`TimerHandle`] - the one-shot handle linking a debouncer to the timer it armed
//! - [`HushError`] / [`Result`] - the error surface of scheduling
//! - logging shim macros (`trace!`, `warn!`) that route to `tracing`
//!   when the `tracing` feature is enabled

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]

#[macro_use]
pub mod logging;

pub mod error;
pub mod timer_handle;

pub use self::error::{HushError, Result, ResultExt};
pub use self::timer_handle::{Cancelled, TimerHandle, TimerState};
