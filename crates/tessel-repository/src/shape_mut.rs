//! [`ShapeMut`]: write access to a shape owned by a repository.

use std::fmt;
use std::ops::Deref;
use std::ptr;
use std::sync::Arc;
use tessel_core::{Point, ShapeError};
use tessel_shape::{ObserverHandle, Shape};
use tracing::trace;

/// Mutable view of a shape held by a [`ShapeRepository`](crate::ShapeRepository).
///
/// Forwards the shape's setters and observer registration, and derefs to
/// [`Shape`] for reads. The shape cannot be swapped out and the
/// repository's sync agent cannot be detached, so every accepted change
/// reaches the property store under the id the repository keys it by.
pub struct ShapeMut<'a> {
    shape: &'a mut Shape,
    agent: ObserverHandle,
}

impl<'a> ShapeMut<'a> {
    pub(crate) fn new(shape: &'a mut Shape, agent: ObserverHandle) -> Self {
        Self { shape, agent }
    }

    /// See [`Shape::set_name`].
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.shape.set_name(name);
    }

    /// See [`Shape::set_top_left`].
    pub fn set_top_left(&mut self, point: Point) -> Result<(), ShapeError> {
        self.shape.set_top_left(point)
    }

    /// See [`Shape::set_bottom_right`].
    pub fn set_bottom_right(&mut self, point: Point) -> Result<(), ShapeError> {
        self.shape.set_bottom_right(point)
    }

    /// See [`Shape::set_apex`].
    pub fn set_apex(&mut self, point: Point) -> Result<(), ShapeError> {
        self.shape.set_apex(point)
    }

    /// See [`Shape::set_base_center`].
    pub fn set_base_center(&mut self, point: Point) -> Result<(), ShapeError> {
        self.shape.set_base_center(point)
    }

    /// See [`Shape::set_radius`].
    pub fn set_radius(&mut self, radius: f64) -> Result<(), ShapeError> {
        self.shape.set_radius(radius)
    }

    /// See [`Shape::set_height`].
    pub fn set_height(&mut self, height: f64) -> Result<(), ShapeError> {
        self.shape.set_height(height)
    }

    /// Register a caller observer. It runs after the sync agent.
    pub fn add_observer(&mut self, observer: ObserverHandle) -> bool {
        self.shape.add_observer(observer)
    }

    /// Unregister a caller observer. The repository's sync agent stays
    /// attached: passing its handle returns `false`.
    pub fn remove_observer(&mut self, observer: &ObserverHandle) -> bool {
        if ptr::addr_eq(Arc::as_ptr(observer), Arc::as_ptr(&self.agent)) {
            trace!(shape = %self.shape.id(), "refused to detach sync agent");
            return false;
        }
        self.shape.remove_observer(observer)
    }
}

impl Deref for ShapeMut<'_> {
    type Target = Shape;

    fn deref(&self) -> &Shape {
        self.shape
    }
}

impl fmt::Debug for ShapeMut<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ShapeMut").field(&*self.shape).finish()
    }
}
