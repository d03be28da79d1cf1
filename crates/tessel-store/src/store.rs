//! The shared derived-property cache.

use crate::stats::StoreStatistics;
use indexmap::IndexMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tessel_core::{Metric, ShapeId, ShapeKind};
use tessel_shape::Shape;
use tracing::trace;

/// Last-pushed derived scalars for one shape id.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CachedMetrics {
    /// Cached rectangle area.
    pub area: Option<f64>,
    /// Cached rectangle perimeter.
    pub perimeter: Option<f64>,
    /// Cached cone volume.
    pub volume: Option<f64>,
    /// Cached cone surface area.
    pub surface_area: Option<f64>,
}

impl CachedMetrics {
    /// The cached value of `metric`, if set.
    pub fn get(&self, metric: Metric) -> Option<f64> {
        match metric {
            Metric::Area => self.area,
            Metric::Perimeter => self.perimeter,
            Metric::Volume => self.volume,
            Metric::SurfaceArea => self.surface_area,
        }
    }

    fn slot_mut(&mut self, metric: Metric) -> &mut Option<f64> {
        match metric {
            Metric::Area => &mut self.area,
            Metric::Perimeter => &mut self.perimeter,
            Metric::Volume => &mut self.volume,
            Metric::SurfaceArea => &mut self.surface_area,
        }
    }
}

#[derive(Debug, Default)]
struct StoreInner {
    kinds: IndexMap<ShapeId, ShapeKind>,
    metrics: IndexMap<ShapeId, CachedMetrics>,
}

/// Cache of derived scalars keyed by shape id.
///
/// Registration (`add_shape`) and cached values are independent: a value
/// may be set for an id that was never registered, and registering does
/// not set any value. [`remove_shape`](Self::remove_shape) purges both.
///
/// All methods take `&self`; state lives behind a mutex so that one
/// `Arc<PropertyStore>` can be handed to every holder. Lookups for unknown
/// ids return `None` and never panic.
#[derive(Debug, Default)]
pub struct PropertyStore {
    inner: Mutex<StoreInner>,
}

impl PropertyStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store behind a shared handle.
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    // Values are plain scalars, so a writer that panicked mid-update
    // cannot leave them structurally broken.
    fn lock(&self) -> MutexGuard<'_, StoreInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    // ── Registration ───────────────────────────────────────────────

    /// Register a shape's id and kind. Does not set any cached value.
    pub fn add_shape(&self, shape: &Shape) {
        self.register(shape.id().clone(), shape.kind());
    }

    /// Register an id with its kind, replacing any earlier kind.
    pub fn register(&self, id: ShapeId, kind: ShapeKind) {
        self.lock().kinds.insert(id, kind);
    }

    /// Unregister `id` and purge all of its cached values.
    ///
    /// Returns `true` if the id was registered or had any cached value.
    pub fn remove_shape(&self, id: &str) -> bool {
        let mut inner = self.lock();
        let kind = inner.kinds.shift_remove(id);
        let metrics = inner.metrics.shift_remove(id);
        let removed = kind.is_some() || metrics.is_some();
        if removed {
            trace!(shape = id, "purged property store entry");
        }
        removed
    }

    /// Whether `id` is registered.
    pub fn contains(&self, id: &str) -> bool {
        self.lock().kinds.contains_key(id)
    }

    /// Registered kind of `id`.
    pub fn kind_of(&self, id: &str) -> Option<ShapeKind> {
        self.lock().kinds.get(id).copied()
    }

    /// Number of registered shapes.
    pub fn len(&self) -> usize {
        self.lock().kinds.len()
    }

    /// `true` if no shape is registered.
    pub fn is_empty(&self) -> bool {
        self.lock().kinds.is_empty()
    }

    /// Drop every registration and cached value.
    pub fn clear(&self) {
        let mut inner = self.lock();
        inner.kinds.clear();
        inner.metrics.clear();
    }

    // ── Cached values ──────────────────────────────────────────────

    /// Cache `value` for `metric` of `id`.
    pub fn set(&self, id: &str, metric: Metric, value: f64) {
        let mut inner = self.lock();
        let entry = inner.metrics.entry(ShapeId::from(id)).or_default();
        *entry.slot_mut(metric) = Some(value);
    }

    /// Cached value of `metric` for `id`, if set.
    pub fn get(&self, id: &str, metric: Metric) -> Option<f64> {
        self.lock().metrics.get(id).and_then(|m| m.get(metric))
    }

    /// Every cached value for `id`, or `None` if nothing is cached.
    pub fn metrics(&self, id: &str) -> Option<CachedMetrics> {
        self.lock().metrics.get(id).copied()
    }

    /// Copy of one category: every id with a set value for `metric`.
    pub fn all(&self, metric: Metric) -> Vec<(ShapeId, f64)> {
        self.lock()
            .metrics
            .iter()
            .filter_map(|(id, m)| m.get(metric).map(|v| (id.clone(), v)))
            .collect()
    }

    /// Cache a rectangle area.
    pub fn set_area(&self, id: &str, area: f64) {
        self.set(id, Metric::Area, area);
    }

    /// Cached rectangle area.
    pub fn get_area(&self, id: &str) -> Option<f64> {
        self.get(id, Metric::Area)
    }

    /// Cache a rectangle perimeter.
    pub fn set_perimeter(&self, id: &str, perimeter: f64) {
        self.set(id, Metric::Perimeter, perimeter);
    }

    /// Cached rectangle perimeter.
    pub fn get_perimeter(&self, id: &str) -> Option<f64> {
        self.get(id, Metric::Perimeter)
    }

    /// Cache a cone volume.
    pub fn set_volume(&self, id: &str, volume: f64) {
        self.set(id, Metric::Volume, volume);
    }

    /// Cached cone volume.
    pub fn get_volume(&self, id: &str) -> Option<f64> {
        self.get(id, Metric::Volume)
    }

    /// Cache a cone surface area.
    pub fn set_surface_area(&self, id: &str, surface_area: f64) {
        self.set(id, Metric::SurfaceArea, surface_area);
    }

    /// Cached cone surface area.
    pub fn get_surface_area(&self, id: &str) -> Option<f64> {
        self.get(id, Metric::SurfaceArea)
    }

    // ── Statistics ─────────────────────────────────────────────────

    /// Aggregate counts and sums over the current contents.
    pub fn statistics(&self) -> StoreStatistics {
        let inner = self.lock();
        StoreStatistics::collect(inner.kinds.values(), inner.metrics.values())
    }
}
