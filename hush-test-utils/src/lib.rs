// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test utilities and fixtures for the hush workspace.
//!
//! - [`CallRecorder`] - thread-safe log of the arguments a debounced action received
//! - [`Person`] fixtures - `person_alice`, `person_bob`, `person_charlie`, `person_diane`
//! - [`helpers::settle`] - yield to the tokio runtime so freshly woken timer tasks run
//!
//! ```rust
//! use hush_test_utils::{person_alice, CallRecorder};
//!
//! let recorder = CallRecorder::new();
//! let action = recorder.sink();
//! action(person_alice());
//!
//! assert_eq!(recorder.calls(), vec![person_alice()]);
//! ```

pub mod helpers;
pub mod person;
pub mod recorder;

pub use helpers::settle;
pub use person::{person_alice, person_bob, person_charlie, person_diane, Person};
pub use recorder::CallRecorder;
