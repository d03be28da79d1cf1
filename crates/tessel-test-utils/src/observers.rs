//! Mock shape observers.
//!
//! - [`RecordingObserver`]: remembers every shape id it was notified about.
//! - [`FailingObserver`]: fails deterministically after N calls.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use tessel_core::{ObserverError, ShapeId};
use tessel_shape::{Shape, ShapeObserver};

/// Records the id and name of each notifying shape, in order.
///
/// Useful for asserting notification order and counts.
#[derive(Default)]
pub struct RecordingObserver {
    pub name: String,
    seen: Mutex<Vec<(ShapeId, String)>>,
}

impl RecordingObserver {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            seen: Mutex::new(Vec::new()),
        }
    }

    /// `(id, name)` of every notification received so far.
    pub fn seen(&self) -> Vec<(ShapeId, String)> {
        self.seen.lock().unwrap().clone()
    }

    /// Number of notifications received.
    pub fn calls(&self) -> usize {
        self.seen.lock().unwrap().len()
    }
}

impl ShapeObserver for RecordingObserver {
    fn name(&self) -> &str {
        &self.name
    }

    fn update(&self, shape: &Shape) -> Result<(), ObserverError> {
        self.seen
            .lock()
            .unwrap()
            .push((shape.id().clone(), shape.name().to_owned()));
        Ok(())
    }
}

/// Succeeds a configurable number of times, then fails on every call.
///
/// Uses `AtomicUsize` for the call counter so it satisfies `Sync`.
pub struct FailingObserver {
    pub name: String,
    pub succeed_count: usize,
    call_count: AtomicUsize,
}

impl FailingObserver {
    /// Create an observer that succeeds `succeed_count` times then fails.
    pub fn new(name: impl Into<String>, succeed_count: usize) -> Self {
        Self {
            name: name.into(),
            succeed_count,
            call_count: AtomicUsize::new(0),
        }
    }

    /// How many times `update()` has been called.
    pub fn calls(&self) -> usize {
        self.call_count.load(Ordering::Relaxed)
    }
}

impl ShapeObserver for FailingObserver {
    fn name(&self) -> &str {
        &self.name
    }

    fn update(&self, _shape: &Shape) -> Result<(), ObserverError> {
        let n = self.call_count.fetch_add(1, Ordering::Relaxed);
        if n >= self.succeed_count {
            Err(ObserverError::new(
                self.name.clone(),
                format!("deliberate failure after {} successes", self.succeed_count),
            ))
        } else {
            Ok(())
        }
    }
}
