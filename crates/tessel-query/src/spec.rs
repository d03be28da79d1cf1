//! The [`Specification`] predicate tree.

use crate::criterion::{AxisSign, Criterion};
use std::ops;
use tessel_core::{Quadrant, ShapeId, ShapeKind, ShapeProperty};
use tessel_shape::Shape;

/// Immutable boolean predicate over shapes.
///
/// Combinators build a new node around their operands; nothing is
/// flattened or simplified. Evaluation short-circuits, left operand first.
///
/// ```
/// use tessel_core::{Quadrant, ShapeKind};
/// use tessel_query::Specification;
///
/// let big_cones_up_top = Specification::of_kind(ShapeKind::Cone)
///     .and(Specification::volume_between(100.0, f64::INFINITY))
///     .and(Specification::in_quadrant(Quadrant::First).or(Specification::positive_z()));
/// # let _ = big_cones_up_top;
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Specification {
    /// A single criterion.
    Leaf(Criterion),
    /// Both operands hold.
    And(Box<Specification>, Box<Specification>),
    /// At least one operand holds.
    Or(Box<Specification>, Box<Specification>),
    /// The operand does not hold.
    Not(Box<Specification>),
}

impl Specification {
    /// Evaluate against `candidate`.
    pub fn is_satisfied_by(&self, candidate: &Shape) -> bool {
        match self {
            Self::Leaf(c) => c.matches(candidate),
            Self::And(a, b) => a.is_satisfied_by(candidate) && b.is_satisfied_by(candidate),
            Self::Or(a, b) => a.is_satisfied_by(candidate) || b.is_satisfied_by(candidate),
            Self::Not(s) => !s.is_satisfied_by(candidate),
        }
    }

    /// `self AND other`.
    #[allow(clippy::should_implement_trait)]
    pub fn and(self, other: Specification) -> Specification {
        Self::And(Box::new(self), Box::new(other))
    }

    /// `self OR other`.
    #[allow(clippy::should_implement_trait)]
    pub fn or(self, other: Specification) -> Specification {
        Self::Or(Box::new(self), Box::new(other))
    }

    /// `NOT self`.
    #[allow(clippy::should_implement_trait)]
    pub fn not(self) -> Specification {
        Self::Not(Box::new(self))
    }

    // ── Leaf constructors ──────────────────────────────────────────

    /// Id equals `id`.
    pub fn id(id: impl Into<ShapeId>) -> Self {
        Self::Leaf(Criterion::Id(id.into()))
    }

    /// Name contains `needle`, ignoring case.
    pub fn name_contains(needle: impl Into<String>) -> Self {
        Self::Leaf(Criterion::Name {
            needle: needle.into(),
            case_sensitive: false,
        })
    }

    /// Name contains `needle`, case-sensitively.
    pub fn name_contains_exact(needle: impl Into<String>) -> Self {
        Self::Leaf(Criterion::Name {
            needle: needle.into(),
            case_sensitive: true,
        })
    }

    /// First point strictly inside `quadrant`.
    pub fn in_quadrant(quadrant: Quadrant) -> Self {
        Self::Leaf(Criterion::Quadrant(quadrant))
    }

    /// First point has `z > 0`.
    pub fn positive_z() -> Self {
        Self::Leaf(Criterion::ZSign(AxisSign::Positive))
    }

    /// First point has `z < 0`.
    pub fn negative_z() -> Self {
        Self::Leaf(Criterion::ZSign(AxisSign::Negative))
    }

    /// First point's distance from the origin in `[min, max]`.
    pub fn distance_between(min: f64, max: f64) -> Self {
        Self::Leaf(Criterion::DistanceRange { min, max })
    }

    /// Shape is of `kind`.
    pub fn of_kind(kind: ShapeKind) -> Self {
        Self::Leaf(Criterion::Kind(kind))
    }

    /// A `kind` shape whose `property` lies in `[min, max]`.
    pub fn property_between(kind: ShapeKind, property: ShapeProperty, min: f64, max: f64) -> Self {
        Self::Leaf(Criterion::PropertyRange {
            kind,
            property,
            min,
            max,
        })
    }

    /// Rectangle with area in `[min, max]`.
    pub fn area_between(min: f64, max: f64) -> Self {
        Self::property_between(ShapeKind::Rectangle, ShapeProperty::Area, min, max)
    }

    /// Rectangle with perimeter in `[min, max]`.
    pub fn perimeter_between(min: f64, max: f64) -> Self {
        Self::property_between(ShapeKind::Rectangle, ShapeProperty::Perimeter, min, max)
    }

    /// Cone with volume in `[min, max]`.
    pub fn volume_between(min: f64, max: f64) -> Self {
        Self::property_between(ShapeKind::Cone, ShapeProperty::Volume, min, max)
    }

    /// Cone with surface area in `[min, max]`.
    pub fn surface_area_between(min: f64, max: f64) -> Self {
        Self::property_between(ShapeKind::Cone, ShapeProperty::SurfaceArea, min, max)
    }
}

impl From<Criterion> for Specification {
    fn from(c: Criterion) -> Self {
        Self::Leaf(c)
    }
}

impl ops::BitAnd for Specification {
    type Output = Specification;

    fn bitand(self, rhs: Specification) -> Specification {
        self.and(rhs)
    }
}

impl ops::BitOr for Specification {
    type Output = Specification;

    fn bitor(self, rhs: Specification) -> Specification {
        self.or(rhs)
    }
}

impl ops::Not for Specification {
    type Output = Specification;

    fn not(self) -> Specification {
        Specification::Not(Box::new(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use tessel_test_utils::{cone_at, rect, reference_cone, reference_rectangle};

    #[test]
    fn combinators_wrap_without_flattening() {
        let a = Specification::positive_z();
        let b = Specification::of_kind(ShapeKind::Cone);
        let both = a.clone().and(b.clone());
        assert_eq!(
            both,
            Specification::And(Box::new(a.clone()), Box::new(b.clone()))
        );
        assert_eq!(a.clone() & b.clone(), both);
        assert_eq!(a.clone() | b.clone(), a.clone().or(b));
        assert_eq!(!a.clone(), a.not());
    }

    #[test]
    fn and_or_not_evaluate() {
        let r = reference_rectangle("r");
        let c = reference_cone("c");
        let cone = Specification::of_kind(ShapeKind::Cone);
        let up = Specification::positive_z();

        assert!(cone.clone().and(up.clone()).is_satisfied_by(&c));
        assert!(!cone.clone().and(up.clone()).is_satisfied_by(&r));
        assert!(cone.clone().or(up.clone()).is_satisfied_by(&c));
        assert!(!cone.clone().or(up).is_satisfied_by(&r));
        assert!(cone.not().is_satisfied_by(&r));
    }

    #[test]
    fn range_helpers_pick_kind_and_property() {
        let r = reference_rectangle("r");
        let c = reference_cone("c");
        assert!(Specification::area_between(12.0, 12.0).is_satisfied_by(&r));
        assert!(Specification::perimeter_between(10.0, 20.0).is_satisfied_by(&r));
        assert!(!Specification::perimeter_between(10.0, 20.0).is_satisfied_by(&c));
        assert!(Specification::volume_between(47.0, 48.0).is_satisfied_by(&c));
        assert!(Specification::surface_area_between(83.0, 84.0).is_satisfied_by(&c));
        assert!(!Specification::surface_area_between(83.0, 84.0).is_satisfied_by(&r));
    }

    #[test]
    fn name_helpers() {
        let mut s = reference_rectangle("r");
        s.set_name("Garden Bed");
        assert!(Specification::name_contains("garden").is_satisfied_by(&s));
        assert!(!Specification::name_contains_exact("garden").is_satisfied_by(&s));
        assert!(Specification::name_contains_exact("Garden").is_satisfied_by(&s));
    }

    fn arb_shape() -> impl Strategy<Value = Shape> {
        prop_oneof![
            (-20.0f64..20.0, -20.0f64..20.0, 0.0f64..10.0, 0.0f64..10.0)
                .prop_map(|(x, y, w, h)| rect("r", (x, y), (x + w, y + h))),
            (
                -20.0f64..20.0,
                -20.0f64..20.0,
                -20.0f64..20.0,
                0.1f64..5.0,
                0.1f64..5.0
            )
                .prop_map(|(x, y, z, r, h)| cone_at("c", (x, y, z), r, h)),
        ]
    }

    fn arb_spec() -> impl Strategy<Value = Specification> {
        let leaf = prop_oneof![
            Just(Specification::positive_z()),
            Just(Specification::negative_z()),
            Just(Specification::of_kind(ShapeKind::Rectangle)),
            Just(Specification::in_quadrant(Quadrant::First)),
            Just(Specification::in_quadrant(Quadrant::Third)),
            (0.0f64..20.0, 0.0f64..20.0).prop_map(|(a, b)| Specification::distance_between(
                a.min(b),
                a.max(b)
            )),
            (0.0f64..100.0).prop_map(|v| Specification::area_between(0.0, v)),
            (0.0f64..100.0).prop_map(|v| Specification::volume_between(v, f64::INFINITY)),
        ];
        leaf.prop_recursive(3, 16, 2, |inner| {
            prop_oneof![
                (inner.clone(), inner.clone()).prop_map(|(a, b)| a.and(b)),
                (inner.clone(), inner.clone()).prop_map(|(a, b)| a.or(b)),
                inner.prop_map(Specification::not),
            ]
        })
    }

    proptest! {
        #[test]
        fn and_is_idempotent(s in arb_spec(), x in arb_shape()) {
            prop_assert_eq!(s.clone().and(s.clone()).is_satisfied_by(&x), s.is_satisfied_by(&x));
        }

        #[test]
        fn double_negation_cancels(s in arb_spec(), x in arb_shape()) {
            prop_assert_eq!(s.clone().not().not().is_satisfied_by(&x), s.is_satisfied_by(&x));
        }

        #[test]
        fn excluded_middle(s in arb_spec(), x in arb_shape()) {
            prop_assert!(s.clone().or(s.not()).is_satisfied_by(&x));
        }
    }
}
