// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Error types for hush.
//!
//! Debouncing itself has no failure modes: any delay is accepted and the
//! wrapped action's own failures are left to the execution context. The only
//! thing that can go wrong is the host refusing to accept a timer, which is
//! what [`HushError`] describes.
//!
//! # Examples
//!
//! ```
//! use hush_core::{HushError, Result};
//!
//! fn arm() -> Result<()> {
//!     Err(HushError::scheduler_unavailable("no runtime running"))
//! }
//!
//! assert!(arm().is_err());
//! ```

/// Root error type for scheduling operations
#[derive(Debug, thiserror::Error)]
pub enum HushError {
    /// The execution context cannot accept new timers
    ///
    /// Raised when no async runtime is reachable from the calling thread, or
    /// when a manually driven scheduler has been shut down.
    #[error("Scheduler unavailable: {context}")]
    SchedulerUnavailable {
        /// What the scheduler was asked to do and why it refused
        context: String,
    },
}

impl HushError {
    /// Create a scheduler-unavailable error with the given context
    pub fn scheduler_unavailable(context: impl Into<String>) -> Self {
        Self::SchedulerUnavailable {
            context: context.into(),
        }
    }

    /// Check if retrying the same call later could succeed
    ///
    /// A missing runtime may appear later (the caller can enter one), so
    /// scheduler errors are considered recoverable.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::SchedulerUnavailable { .. })
    }
}

/// Specialized Result type for hush operations
pub type Result<T> = core::result::Result<T, HushError>;

/// Helper trait for adding context to `Result`s
pub trait ResultExt<T> {
    /// Prefix the error's context with additional information
    ///
    /// # Errors
    /// Returns `Err(HushError)` if the underlying result is `Err`.
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|error| match error {
            HushError::SchedulerUnavailable { context: inner } => {
                HushError::scheduler_unavailable(format!("{}: {inner}", context.into()))
            }
        })
    }
}
