//! Change-notification protocol between shapes and their observers.

use crate::shape::Shape;
use smallvec::SmallVec;
use std::sync::Arc;
use tessel_core::ObserverError;

/// Receives a shape after each of its mutations.
///
/// `update` runs synchronously inside the mutator, after derived values
/// have been recomputed. An `Err` is logged by the shape and does not stop
/// the remaining observers from running.
///
/// `Send + Sync` is required so that shapes holding observers can cross
/// threads behind a lock.
pub trait ShapeObserver: Send + Sync {
    /// Human-readable name used in diagnostics.
    fn name(&self) -> &str;

    /// Handle a change to `shape`.
    fn update(&self, shape: &Shape) -> Result<(), ObserverError>;
}

/// Shared handle to an observer. Registration identity is the handle's
/// allocation, not the observer's value.
pub type ObserverHandle = Arc<dyn ShapeObserver>;

/// Set-like, insertion-ordered list of observer handles.
#[derive(Default)]
pub(crate) struct ObserverList {
    handles: SmallVec<[ObserverHandle; 2]>,
}

impl ObserverList {
    /// Append `handle` unless the same handle is already registered.
    pub(crate) fn insert(&mut self, handle: ObserverHandle) -> bool {
        if self.contains(&handle) {
            return false;
        }
        self.handles.push(handle);
        true
    }

    /// Remove the first registration of `handle`.
    pub(crate) fn remove(&mut self, handle: &ObserverHandle) -> bool {
        match self.handles.iter().position(|h| same_handle(h, handle)) {
            Some(idx) => {
                self.handles.remove(idx);
                true
            }
            None => false,
        }
    }

    pub(crate) fn contains(&self, handle: &ObserverHandle) -> bool {
        self.handles.iter().any(|h| same_handle(h, handle))
    }

    pub(crate) fn len(&self) -> usize {
        self.handles.len()
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &ObserverHandle> {
        self.handles.iter()
    }
}

fn same_handle(a: &ObserverHandle, b: &ObserverHandle) -> bool {
    // Compare data pointers only; vtable pointers for the same type may
    // differ across codegen units.
    std::ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b))
}
