//! [`ShapeRepository`]: CRUD, queries and ordering over owned shapes.

use crate::shape_mut::ShapeMut;
use indexmap::IndexMap;
use std::sync::Arc;
use tessel_core::{Quadrant, ShapeId, ShapeKind};
use tessel_query::{ShapeComparator, Specification};
use tessel_shape::{ObserverHandle, Shape};
use tessel_store::{PropertyStore, StoreStatistics, SyncAgent};
use tracing::{debug, trace};

/// Shapes keyed by id, with a property store kept in sync.
///
/// Iteration order is the order shapes were first added under their id,
/// until [`sort_in_place`](Self::sort_in_place) reorders it. Overwriting
/// an id keeps its position.
///
/// Shapes are mutated through [`get_mut`](Self::get_mut), which hands out
/// a [`ShapeMut`] rather than the shape itself; the attached sync agent
/// pushes new derived values into the store as part of each mutator call.
pub struct ShapeRepository {
    shapes: IndexMap<ShapeId, Shape>,
    store: Arc<PropertyStore>,
    agent: Arc<SyncAgent>,
}

impl ShapeRepository {
    /// Create an empty repository synchronising into `store`.
    pub fn new(store: Arc<PropertyStore>) -> Self {
        let agent = Arc::new(SyncAgent::new(Arc::clone(&store)));
        Self {
            shapes: IndexMap::new(),
            store,
            agent,
        }
    }

    /// The shared store this repository writes into.
    pub fn store(&self) -> &Arc<PropertyStore> {
        &self.store
    }

    fn agent_handle(&self) -> ObserverHandle {
        Arc::clone(&self.agent) as ObserverHandle
    }

    // ── Mutation ───────────────────────────────────────────────────

    /// Insert `shape` under its id, attach the sync agent and prime the
    /// store with its current derived values.
    ///
    /// Any store entry under the id is purged first, including one primed
    /// by another repository sharing the store. An existing shape with the
    /// same id in this repository is replaced and returned with the agent
    /// detached.
    pub fn add(&mut self, mut shape: Shape) -> Option<Shape> {
        let handle = self.agent_handle();
        let id = shape.id().clone();
        self.store.remove_shape(id.as_str());
        shape.add_observer(Arc::clone(&handle));
        self.store.add_shape(&shape);
        self.agent.sync(&shape);
        debug!(shape = %id, kind = %shape.kind(), "added shape");
        self.shapes.insert(id, shape).map(|mut old| {
            old.remove_observer(&handle);
            old
        })
    }

    /// Remove `id` and purge its store entry. Returns whether a shape was
    /// removed.
    pub fn remove(&mut self, id: &str) -> bool {
        self.take(id).is_some()
    }

    /// Remove and return the shape under `id`, detached from the store.
    pub fn take(&mut self, id: &str) -> Option<Shape> {
        let mut shape = self.shapes.shift_remove(id)?;
        shape.remove_observer(&self.agent_handle());
        self.store.remove_shape(id);
        debug!(shape = id, "removed shape");
        Some(shape)
    }

    /// Drop every shape and clear the store.
    pub fn clear(&mut self) {
        let n = self.shapes.len();
        self.shapes.clear();
        self.store.clear();
        debug!(shapes = n, "cleared repository");
    }

    // ── Lookup ─────────────────────────────────────────────────────

    /// The shape under `id`.
    pub fn get_by_id(&self, id: &str) -> Option<&Shape> {
        self.shapes.get(id)
    }

    /// Write access to the shape under `id`, through its setters only.
    pub fn get_mut(&mut self, id: &str) -> Option<ShapeMut<'_>> {
        let agent = self.agent_handle();
        self.shapes
            .get_mut(id)
            .map(|shape| ShapeMut::new(shape, agent))
    }

    /// Whether a shape is stored under `id`.
    pub fn exists(&self, id: &str) -> bool {
        self.shapes.contains_key(id)
    }

    /// Number of shapes.
    pub fn count(&self) -> usize {
        self.shapes.len()
    }

    /// `true` if the repository holds no shapes.
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// A fresh vector of every shape, in iteration order.
    pub fn get_all(&self) -> Vec<&Shape> {
        self.shapes.values().collect()
    }

    /// Iterate over every shape.
    pub fn iter(&self) -> impl Iterator<Item = &Shape> + '_ {
        self.shapes.values()
    }

    // ── Queries ────────────────────────────────────────────────────

    /// Every shape satisfying `spec`, in iteration order.
    pub fn find(&self, spec: &Specification) -> Vec<&Shape> {
        self.iter().filter(|s| spec.is_satisfied_by(s)).collect()
    }

    /// The first shape satisfying `spec`.
    pub fn find_one(&self, spec: &Specification) -> Option<&Shape> {
        self.iter().find(|s| spec.is_satisfied_by(s))
    }

    /// Shapes whose name contains `needle`.
    pub fn find_by_name(&self, needle: &str, case_sensitive: bool) -> Vec<&Shape> {
        let spec = if case_sensitive {
            Specification::name_contains_exact(needle)
        } else {
            Specification::name_contains(needle)
        };
        self.find(&spec)
    }

    /// Shapes whose first point lies strictly inside `quadrant`.
    pub fn in_quadrant(&self, quadrant: Quadrant) -> Vec<&Shape> {
        self.find(&Specification::in_quadrant(quadrant))
    }

    /// Shapes whose first point has `z > 0`.
    pub fn with_positive_z(&self) -> Vec<&Shape> {
        self.find(&Specification::positive_z())
    }

    /// Shapes whose first point has `z < 0`.
    pub fn with_negative_z(&self) -> Vec<&Shape> {
        self.find(&Specification::negative_z())
    }

    /// Shapes whose first point is between `min` and `max` from the origin.
    pub fn by_distance_range(&self, min: f64, max: f64) -> Vec<&Shape> {
        self.find(&Specification::distance_between(min, max))
    }

    /// Rectangles with area in `[min, max]`.
    pub fn rectangles_by_area_range(&self, min: f64, max: f64) -> Vec<&Shape> {
        self.find(&Specification::area_between(min, max))
    }

    /// Rectangles with perimeter in `[min, max]`.
    pub fn rectangles_by_perimeter_range(&self, min: f64, max: f64) -> Vec<&Shape> {
        self.find(&Specification::perimeter_between(min, max))
    }

    /// Cones with volume in `[min, max]`.
    pub fn cones_by_volume_range(&self, min: f64, max: f64) -> Vec<&Shape> {
        self.find(&Specification::volume_between(min, max))
    }

    /// Cones with surface area in `[min, max]`.
    pub fn cones_by_surface_area_range(&self, min: f64, max: f64) -> Vec<&Shape> {
        self.find(&Specification::surface_area_between(min, max))
    }

    /// Every shape of `kind`.
    pub fn all_of_kind(&self, kind: ShapeKind) -> Vec<&Shape> {
        self.find(&Specification::of_kind(kind))
    }

    // ── Ordering ───────────────────────────────────────────────────

    /// A fresh vector of every shape ordered by `by`. Stable.
    pub fn sort<C: ShapeComparator + ?Sized>(&self, by: &C) -> Vec<&Shape> {
        let mut all = self.get_all();
        all.sort_by(|a, b| by.compare(a, b));
        all
    }

    /// Reorder iteration to match [`sort`](Self::sort) with the same
    /// comparator.
    pub fn sort_in_place<C: ShapeComparator + ?Sized>(&mut self, by: &C) {
        self.shapes.sort_by(|_, a, _, b| by.compare(a, b));
        trace!(shapes = self.shapes.len(), "reordered repository");
    }

    // ── Statistics ─────────────────────────────────────────────────

    /// Aggregates over the store this repository writes into.
    ///
    /// When the store is shared with other repositories the totals cover
    /// all of them.
    pub fn statistics(&self) -> StoreStatistics {
        self.store.statistics()
    }
}

impl Extend<Shape> for ShapeRepository {
    fn extend<I: IntoIterator<Item = Shape>>(&mut self, iter: I) {
        for shape in iter {
            self.add(shape);
        }
    }
}

impl std::fmt::Debug for ShapeRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShapeRepository")
            .field("shapes", &self.shapes.len())
            .field("store", &self.store)
            .finish()
    }
}
