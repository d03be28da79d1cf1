//! The closed set of shape geometries.

use crate::cone::Cone;
use crate::rectangle::Rectangle;
use tessel_core::{Point, ShapeKind, ShapeProperty};

/// Geometry of a shape: one variant per [`ShapeKind`].
///
/// Matches outside this crate need a fallback arm; consumers treat
/// geometries they do not know as no-ops.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum Geometry {
    /// See [`Rectangle`].
    Rectangle(Rectangle),
    /// See [`Cone`].
    Cone(Cone),
}

impl Geometry {
    /// Variant tag.
    pub fn kind(&self) -> ShapeKind {
        match self {
            Self::Rectangle(_) => ShapeKind::Rectangle,
            Self::Cone(_) => ShapeKind::Cone,
        }
    }

    /// Anchor point used by spatial predicates and comparators:
    /// the top-left corner of a rectangle, the apex of a cone.
    pub fn first_point(&self) -> Point {
        match self {
            Self::Rectangle(r) => r.top_left(),
            Self::Cone(c) => c.apex(),
        }
    }

    /// Read a scalar by property; absent if the variant lacks it.
    pub fn property(&self, property: ShapeProperty) -> Option<f64> {
        match self {
            Self::Rectangle(r) => r.property(property),
            Self::Cone(c) => c.property(property),
        }
    }
}

impl From<Rectangle> for Geometry {
    fn from(r: Rectangle) -> Self {
        Self::Rectangle(r)
    }
}

impl From<Cone> for Geometry {
    fn from(c: Cone) -> Self {
        Self::Cone(c)
    }
}
