//! The observable [`Shape`] entity.

use crate::cone::Cone;
use crate::geometry::Geometry;
use crate::observer::{ObserverHandle, ObserverList};
use crate::rectangle::Rectangle;
use std::fmt;
use tessel_core::{Point, ShapeError, ShapeId, ShapeKind, ShapeProperty};
use tracing::warn;

/// A rectangle or cone with identity, a display name, and observers.
///
/// Every mutator follows the same sequence: validate the new value,
/// replace it, recompute derived values, then notify observers in
/// registration order. A rejected value leaves the shape untouched and
/// notifies nobody.
pub struct Shape {
    id: ShapeId,
    name: String,
    geometry: Geometry,
    observers: ObserverList,
}

impl Shape {
    /// Wrap a geometry. The display name starts out equal to the id.
    pub fn new(id: impl Into<ShapeId>, geometry: impl Into<Geometry>) -> Self {
        let id = id.into();
        Self {
            name: id.as_str().to_owned(),
            id,
            geometry: geometry.into(),
            observers: ObserverList::default(),
        }
    }

    /// Build a rectangle shape from two corners.
    pub fn rectangle(
        id: impl Into<ShapeId>,
        top_left: Point,
        bottom_right: Point,
    ) -> Result<Self, ShapeError> {
        Ok(Self::new(id, Rectangle::new(top_left, bottom_right)?))
    }

    /// Build a cone shape.
    pub fn cone(
        id: impl Into<ShapeId>,
        apex: Point,
        base_center: Point,
        radius: f64,
        height: f64,
    ) -> Result<Self, ShapeError> {
        Ok(Self::new(id, Cone::new(apex, base_center, radius, height)?))
    }

    /// Identity.
    pub fn id(&self) -> &ShapeId {
        &self.id
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Variant tag.
    pub fn kind(&self) -> ShapeKind {
        self.geometry.kind()
    }

    /// Current geometry, read-only. Mutation goes through the setters on
    /// `Shape` so that observers are always notified.
    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    /// The rectangle, if this shape is one.
    pub fn as_rectangle(&self) -> Option<&Rectangle> {
        match &self.geometry {
            Geometry::Rectangle(r) => Some(r),
            Geometry::Cone(_) => None,
        }
    }

    /// The cone, if this shape is one.
    pub fn as_cone(&self) -> Option<&Cone> {
        match &self.geometry {
            Geometry::Cone(c) => Some(c),
            Geometry::Rectangle(_) => None,
        }
    }

    /// Anchor point: top-left for rectangles, apex for cones.
    pub fn first_point(&self) -> Point {
        self.geometry.first_point()
    }

    /// Read a derived or geometry scalar.
    pub fn property(&self, property: ShapeProperty) -> Option<f64> {
        self.geometry.property(property)
    }

    /// Read a scalar by name (case-insensitive). Unknown names, and names
    /// this variant does not carry, are absent.
    pub fn get_property(&self, name: &str) -> Option<f64> {
        ShapeProperty::from_name(name).and_then(|p| self.property(p))
    }

    // ── Mutators ───────────────────────────────────────────────────

    /// Rename the shape and notify observers.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
        self.notify_observers();
    }

    /// Move a rectangle's anchor corner.
    pub fn set_top_left(&mut self, point: Point) -> Result<(), ShapeError> {
        self.rectangle_mut()?.set_top_left(point)?;
        self.notify_observers();
        Ok(())
    }

    /// Move a rectangle's opposite corner.
    pub fn set_bottom_right(&mut self, point: Point) -> Result<(), ShapeError> {
        self.rectangle_mut()?.set_bottom_right(point)?;
        self.notify_observers();
        Ok(())
    }

    /// Move a cone's apex.
    pub fn set_apex(&mut self, point: Point) -> Result<(), ShapeError> {
        self.cone_mut()?.set_apex(point)?;
        self.notify_observers();
        Ok(())
    }

    /// Move a cone's base centre.
    pub fn set_base_center(&mut self, point: Point) -> Result<(), ShapeError> {
        self.cone_mut()?.set_base_center(point)?;
        self.notify_observers();
        Ok(())
    }

    /// Change a cone's radius.
    pub fn set_radius(&mut self, radius: f64) -> Result<(), ShapeError> {
        self.cone_mut()?.set_radius(radius)?;
        self.notify_observers();
        Ok(())
    }

    /// Change a cone's height.
    pub fn set_height(&mut self, height: f64) -> Result<(), ShapeError> {
        self.cone_mut()?.set_height(height)?;
        self.notify_observers();
        Ok(())
    }

    fn rectangle_mut(&mut self) -> Result<&mut Rectangle, ShapeError> {
        match &mut self.geometry {
            Geometry::Rectangle(r) => Ok(r),
            Geometry::Cone(_) => Err(ShapeError::KindMismatch {
                expected: ShapeKind::Rectangle,
                actual: ShapeKind::Cone,
            }),
        }
    }

    fn cone_mut(&mut self) -> Result<&mut Cone, ShapeError> {
        match &mut self.geometry {
            Geometry::Cone(c) => Ok(c),
            Geometry::Rectangle(_) => Err(ShapeError::KindMismatch {
                expected: ShapeKind::Cone,
                actual: ShapeKind::Rectangle,
            }),
        }
    }

    // ── Observers ──────────────────────────────────────────────────

    /// Register an observer. Returns `false` if this handle is already
    /// registered (registration is idempotent).
    pub fn add_observer(&mut self, observer: ObserverHandle) -> bool {
        self.observers.insert(observer)
    }

    /// Unregister an observer. Returns `false` if it was not registered.
    pub fn remove_observer(&mut self, observer: &ObserverHandle) -> bool {
        self.observers.remove(observer)
    }

    /// Whether `observer` is registered on this shape.
    pub fn has_observer(&self, observer: &ObserverHandle) -> bool {
        self.observers.contains(observer)
    }

    /// Number of registered observers.
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Invoke every observer in registration order.
    ///
    /// A failing observer is logged and skipped; the rest still run.
    /// Returns the number of observers that failed.
    pub fn notify_observers(&self) -> usize {
        let mut failed = 0;
        for observer in self.observers.iter() {
            if let Err(error) = observer.update(self) {
                failed += 1;
                warn!(
                    shape = %self.id,
                    observer = observer.name(),
                    %error,
                    "shape observer failed"
                );
            }
        }
        failed
    }
}

impl fmt::Debug for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Shape")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("geometry", &self.geometry)
            .field("observers", &self.observers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observer::ShapeObserver;
    use std::sync::{Arc, Mutex};
    use tessel_core::ObserverError;

    /// Records `(observer name, area-or-volume)` for every update it sees.
    struct Probe {
        name: &'static str,
        log: Arc<Mutex<Vec<(&'static str, Option<f64>)>>>,
        fail: bool,
    }

    impl ShapeObserver for Probe {
        fn name(&self) -> &str {
            self.name
        }

        fn update(&self, shape: &Shape) -> Result<(), ObserverError> {
            let metric = shape
                .property(ShapeProperty::Area)
                .or_else(|| shape.property(ShapeProperty::Volume));
            self.log.lock().unwrap().push((self.name, metric));
            if self.fail {
                Err(ObserverError::new(self.name, "boom"))
            } else {
                Ok(())
            }
        }
    }

    type Log = Arc<Mutex<Vec<(&'static str, Option<f64>)>>>;

    fn probe(name: &'static str, log: &Log, fail: bool) -> ObserverHandle {
        Arc::new(Probe {
            name,
            log: Arc::clone(log),
            fail,
        })
    }

    fn rect() -> Shape {
        Shape::rectangle("r1", Point::planar(0.0, 0.0), Point::planar(4.0, 3.0)).unwrap()
    }

    fn cone() -> Shape {
        Shape::cone("c1", Point::new(0.0, 0.0, 5.0), Point::ORIGIN, 3.0, 5.0).unwrap()
    }

    #[test]
    fn name_defaults_to_id() {
        let s = rect();
        assert_eq!(s.name(), "r1");
        assert_eq!(s.id().as_str(), "r1");
    }

    #[test]
    fn first_point_per_variant() {
        assert_eq!(rect().first_point(), Point::planar(0.0, 0.0));
        assert_eq!(cone().first_point(), Point::new(0.0, 0.0, 5.0));
        assert_eq!(rect().kind(), ShapeKind::Rectangle);
        assert_eq!(cone().kind(), ShapeKind::Cone);
    }

    #[test]
    fn get_property_is_case_insensitive_and_total() {
        let r = rect();
        assert_eq!(r.get_property("AREA"), Some(12.0));
        assert_eq!(r.get_property("Perimeter"), Some(14.0));
        assert_eq!(r.get_property("volume"), None);
        assert_eq!(r.get_property("no-such-thing"), None);

        let c = cone();
        assert_eq!(c.get_property("surfaceArea"), c.get_property("surfacearea"));
        assert!(c.get_property("surface_area").is_some());
    }

    #[test]
    fn get_property_is_idempotent() {
        let c = cone();
        assert_eq!(c.get_property("volume"), c.get_property("volume"));
    }

    #[test]
    fn registration_is_idempotent_by_handle() {
        let log = Log::default();
        let a = probe("a", &log, false);
        let mut s = rect();
        assert!(s.add_observer(Arc::clone(&a)));
        assert!(!s.add_observer(Arc::clone(&a)));
        assert_eq!(s.observer_count(), 1);

        // A distinct allocation of an identical observer is a new handle.
        let b = probe("a", &log, false);
        assert!(s.add_observer(b));
        assert_eq!(s.observer_count(), 2);
    }

    #[test]
    fn remove_observer_is_noop_when_absent() {
        let log = Log::default();
        let a = probe("a", &log, false);
        let b = probe("b", &log, false);
        let mut s = rect();
        s.add_observer(Arc::clone(&a));
        assert!(!s.remove_observer(&b));
        assert!(s.remove_observer(&a));
        assert!(!s.has_observer(&a));
        assert_eq!(s.observer_count(), 0);
    }

    #[test]
    fn observers_run_in_registration_order_after_recompute() {
        let log = Log::default();
        let mut s = rect();
        s.add_observer(probe("first", &log, false));
        s.add_observer(probe("second", &log, false));
        s.set_bottom_right(Point::planar(2.0, 2.0)).unwrap();
        assert_eq!(
            *log.lock().unwrap(),
            vec![("first", Some(4.0)), ("second", Some(4.0))]
        );
    }

    #[test]
    fn failing_observer_does_not_block_the_rest() {
        let log = Log::default();
        let mut s = cone();
        s.add_observer(probe("bad", &log, true));
        s.add_observer(probe("good", &log, false));
        assert_eq!(s.notify_observers(), 1);
        s.set_radius(1.0).unwrap();
        let names: Vec<_> = log.lock().unwrap().iter().map(|(n, _)| *n).collect();
        assert_eq!(names, ["bad", "good", "bad", "good"]);
    }

    #[test]
    fn rejected_mutation_notifies_nobody() {
        let log = Log::default();
        let mut s = cone();
        s.add_observer(probe("a", &log, false));
        let before = s.as_cone().unwrap().volume();
        let err = s.set_height(0.0).unwrap_err();
        assert!(err.is_invalid_data());
        assert!(log.lock().unwrap().is_empty());
        assert_eq!(s.as_cone().unwrap().volume(), before);
    }

    #[test]
    fn variant_mutators_reject_other_kind() {
        let mut r = rect();
        assert_eq!(
            r.set_radius(2.0),
            Err(ShapeError::KindMismatch {
                expected: ShapeKind::Cone,
                actual: ShapeKind::Rectangle,
            })
        );
        let mut c = cone();
        assert!(matches!(
            c.set_top_left(Point::ORIGIN),
            Err(ShapeError::KindMismatch { .. })
        ));
    }

    #[test]
    fn rename_notifies() {
        let log = Log::default();
        let mut s = rect();
        s.add_observer(probe("a", &log, false));
        s.set_name("floor tile");
        assert_eq!(s.name(), "floor tile");
        assert_eq!(log.lock().unwrap().len(), 1);
    }
}
