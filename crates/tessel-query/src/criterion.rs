//! Leaf predicates over a single shape.

use tessel_core::{Quadrant, ShapeId, ShapeKind, ShapeProperty};
use tessel_shape::Shape;

/// Sign of a coordinate along one axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AxisSign {
    /// Strictly greater than zero.
    Positive,
    /// Strictly less than zero.
    Negative,
}

impl AxisSign {
    /// Whether `value` has this sign. Zero has neither.
    pub fn holds_for(self, value: f64) -> bool {
        match self {
            Self::Positive => value > 0.0,
            Self::Negative => value < 0.0,
        }
    }
}

/// A leaf of a [`Specification`](crate::Specification).
///
/// Spatial criteria look only at the shape's first point.
#[derive(Clone, Debug, PartialEq)]
pub enum Criterion {
    /// Exact id equality.
    Id(ShapeId),
    /// Substring match on the display name.
    Name {
        /// Text to look for.
        needle: String,
        /// When `false`, both sides are lowercased before matching.
        case_sensitive: bool,
    },
    /// First point lies strictly inside an XY quadrant.
    Quadrant(Quadrant),
    /// Sign of the first point's z coordinate.
    ZSign(AxisSign),
    /// Euclidean norm of the first point within `[min, max]`.
    DistanceRange {
        /// Inclusive lower bound.
        min: f64,
        /// Inclusive upper bound.
        max: f64,
    },
    /// Shape kind equality.
    Kind(ShapeKind),
    /// A shape of `kind` whose `property` lies in `[min, max]`.
    ///
    /// False for other kinds and for shapes lacking the property.
    PropertyRange {
        /// Kind the range applies to.
        kind: ShapeKind,
        /// Property to read.
        property: ShapeProperty,
        /// Inclusive lower bound.
        min: f64,
        /// Inclusive upper bound.
        max: f64,
    },
}

impl Criterion {
    /// Evaluate this criterion against `shape`.
    pub fn matches(&self, shape: &Shape) -> bool {
        match self {
            Self::Id(id) => shape.id() == id,
            Self::Name {
                needle,
                case_sensitive: true,
            } => shape.name().contains(needle.as_str()),
            Self::Name {
                needle,
                case_sensitive: false,
            } => shape
                .name()
                .to_lowercase()
                .contains(needle.to_lowercase().as_str()),
            Self::Quadrant(q) => q.contains(&shape.first_point()),
            Self::ZSign(sign) => sign.holds_for(shape.first_point().z()),
            Self::DistanceRange { min, max } => {
                let d = shape.first_point().distance_from_origin();
                d >= *min && d <= *max
            }
            Self::Kind(kind) => shape.kind() == *kind,
            Self::PropertyRange {
                kind,
                property,
                min,
                max,
            } => {
                shape.kind() == *kind
                    && shape
                        .property(*property)
                        .is_some_and(|v| v >= *min && v <= *max)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tessel_test_utils::{cone_at, rect, reference_cone, reference_rectangle};

    #[test]
    fn id_equality() {
        let s = reference_rectangle("rect1");
        assert!(Criterion::Id("rect1".into()).matches(&s));
        assert!(!Criterion::Id("rect2".into()).matches(&s));
    }

    #[test]
    fn name_substring_case_modes() {
        let mut s = reference_rectangle("r");
        s.set_name("Kitchen Floor");
        let insensitive = Criterion::Name {
            needle: "FLOOR".into(),
            case_sensitive: false,
        };
        let sensitive = Criterion::Name {
            needle: "FLOOR".into(),
            case_sensitive: true,
        };
        assert!(insensitive.matches(&s));
        assert!(!sensitive.matches(&s));
    }

    #[test]
    fn points_on_axes_are_in_no_quadrant() {
        let on_axis = rect("a", (0.0, 3.0), (2.0, 1.0));
        for q in Quadrant::ALL {
            assert!(!Criterion::Quadrant(q).matches(&on_axis));
        }
        let second = rect("b", (-3.0, 2.0), (-1.0, 1.0));
        assert!(Criterion::Quadrant(Quadrant::Second).matches(&second));
    }

    #[test]
    fn z_sign_uses_first_point() {
        let up = reference_cone("c");
        let down = cone_at("d", (0.0, 0.0, -2.0), 1.0, 1.0);
        let flat = reference_rectangle("r");
        assert!(Criterion::ZSign(AxisSign::Positive).matches(&up));
        assert!(Criterion::ZSign(AxisSign::Negative).matches(&down));
        assert!(!Criterion::ZSign(AxisSign::Positive).matches(&flat));
        assert!(!Criterion::ZSign(AxisSign::Negative).matches(&flat));
    }

    #[test]
    fn distance_bounds_are_inclusive() {
        let s = rect("r", (3.0, 4.0), (5.0, 5.0));
        let exact = Criterion::DistanceRange { min: 5.0, max: 5.0 };
        let below = Criterion::DistanceRange { min: 0.0, max: 4.99 };
        assert!(exact.matches(&s));
        assert!(!below.matches(&s));
    }

    #[test]
    fn property_range_is_false_for_other_kinds() {
        let r = reference_rectangle("r");
        let c = reference_cone("c");
        let area = Criterion::PropertyRange {
            kind: ShapeKind::Rectangle,
            property: ShapeProperty::Area,
            min: 10.0,
            max: 20.0,
        };
        let volume = Criterion::PropertyRange {
            kind: ShapeKind::Cone,
            property: ShapeProperty::Volume,
            min: 0.0,
            max: 1e9,
        };
        assert!(area.matches(&r));
        assert!(!area.matches(&c));
        assert!(volume.matches(&c));
        assert!(!volume.matches(&r));
    }

    #[test]
    fn property_range_on_missing_property_is_false() {
        let mismatched = Criterion::PropertyRange {
            kind: ShapeKind::Rectangle,
            property: ShapeProperty::Volume,
            min: f64::NEG_INFINITY,
            max: f64::INFINITY,
        };
        assert!(!mismatched.matches(&reference_rectangle("r")));
    }
}
