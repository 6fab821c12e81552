// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use parking_lot::Mutex;
use std::fmt::Debug;
use std::sync::Arc;

/// Records every value handed to the action it produces.
///
/// Clones share the same log, so a recorder can be moved into an action and
/// still be inspected from the test body.
#[derive(Debug)]
pub struct CallRecorder<T> {
    calls: Arc<Mutex<Vec<T>>>,
}

impl<T> Clone for CallRecorder<T> {
    fn clone(&self) -> Self {
        Self {
            calls: self.calls.clone(),
        }
    }
}

impl<T> Default for CallRecorder<T> {
    fn default() -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl<T> CallRecorder<T>
where
    T: Send + 'static,
{
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, value: T) {
        self.calls.lock().push(value);
    }

    /// An action that appends its argument to this recorder.
    pub fn sink(&self) -> impl Fn(T) + Clone + Send + Sync + 'static {
        let recorder = self.clone();
        move |value| recorder.record(value)
    }

    pub fn count(&self) -> usize {
        self.calls.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.calls.lock().is_empty()
    }
}

impl<T> CallRecorder<T>
where
    T: Clone + Debug + Send + 'static,
{
    pub fn calls(&self) -> Vec<T> {
        self.calls.lock().clone()
    }

    pub fn last(&self) -> Option<T> {
        self.calls.lock().last().cloned()
    }
}
