//! The observer that mirrors shape-derived values into a store.

use crate::store::PropertyStore;
use std::sync::Arc;
use tessel_core::{Metric, ObserverError};
use tessel_shape::{Geometry, Shape, ShapeObserver};

/// Pushes a shape's derived values into a [`PropertyStore`] on every
/// change.
///
/// - Rectangle: area and perimeter.
/// - Cone: volume and surface area.
/// - Any other geometry: nothing.
///
/// Holds no state besides the store handle.
#[derive(Clone, Debug)]
pub struct SyncAgent {
    store: Arc<PropertyStore>,
}

impl SyncAgent {
    /// Name reported in observer diagnostics.
    pub const NAME: &'static str = "property-store-sync";

    /// Create an agent writing into `store`.
    pub fn new(store: Arc<PropertyStore>) -> Self {
        Self { store }
    }

    /// The target store.
    pub fn store(&self) -> &Arc<PropertyStore> {
        &self.store
    }

    /// Push `shape`'s current derived values.
    pub fn sync(&self, shape: &Shape) {
        let id = shape.id().as_str();
        match shape.geometry() {
            Geometry::Rectangle(r) => {
                self.store.set(id, Metric::Area, r.area());
                self.store.set(id, Metric::Perimeter, r.perimeter());
            }
            Geometry::Cone(c) => {
                self.store.set(id, Metric::Volume, c.volume());
                self.store.set(id, Metric::SurfaceArea, c.surface_area());
            }
            _ => {}
        }
    }
}

impl ShapeObserver for SyncAgent {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn update(&self, shape: &Shape) -> Result<(), ObserverError> {
        self.sync(shape);
        Ok(())
    }
}
