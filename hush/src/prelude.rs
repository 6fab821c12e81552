// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Convenience re-exports for debouncing.
//!
//! ```rust
//! use hush::prelude::*;
//! ```

pub use crate::{debounce_on, Debouncer, ManualScheduler, Scheduler};

#[cfg(any(feature = "runtime-tokio", feature = "runtime-smol"))]
pub use crate::{debounce, DefaultScheduler};
