//! Pairwise orderings used to sort shapes.

use std::cmp::Ordering;
use tessel_shape::Shape;

/// A stateless three-way ordering rule for a pair of shapes.
///
/// Implementations need not be a strict total order; callers sort stably
/// so ties keep their input order.
pub trait ShapeComparator {
    /// Compare `a` against `b`.
    fn compare(&self, a: &Shape, b: &Shape) -> Ordering;

    /// This ordering, descending.
    fn reversed(self) -> Reversed<Self>
    where
        Self: Sized,
    {
        Reversed(self)
    }

    /// Break ties in this ordering with `next`.
    fn then<C: ShapeComparator>(self, next: C) -> Then<Self, C>
    where
        Self: Sized,
    {
        Then(self, next)
    }
}

impl<F> ShapeComparator for F
where
    F: Fn(&Shape, &Shape) -> Ordering,
{
    fn compare(&self, a: &Shape, b: &Shape) -> Ordering {
        self(a, b)
    }
}

/// Built-in orderings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShapeOrder {
    /// Id, lexicographic.
    Id,
    /// Display name, lexicographic.
    Name,
    /// First point's x coordinate.
    FirstPointX,
    /// First point's y coordinate.
    FirstPointY,
    /// First point's z coordinate.
    FirstPointZ,
    /// Euclidean norm of the first point.
    DistanceFromOrigin,
}

impl ShapeOrder {
    /// All built-in orderings.
    pub const ALL: [ShapeOrder; 6] = [
        Self::Id,
        Self::Name,
        Self::FirstPointX,
        Self::FirstPointY,
        Self::FirstPointZ,
        Self::DistanceFromOrigin,
    ];
}

// NaN never reaches a shape, but a comparator must stay total.
fn numeric(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

impl ShapeComparator for ShapeOrder {
    fn compare(&self, a: &Shape, b: &Shape) -> Ordering {
        match self {
            Self::Id => a.id().as_str().cmp(b.id().as_str()),
            Self::Name => a.name().cmp(b.name()),
            Self::FirstPointX => numeric(a.first_point().x(), b.first_point().x()),
            Self::FirstPointY => numeric(a.first_point().y(), b.first_point().y()),
            Self::FirstPointZ => numeric(a.first_point().z(), b.first_point().z()),
            Self::DistanceFromOrigin => numeric(
                a.first_point().distance_from_origin(),
                b.first_point().distance_from_origin(),
            ),
        }
    }
}

/// See [`ShapeComparator::reversed`].
#[derive(Clone, Copy, Debug)]
pub struct Reversed<C>(C);

impl<C: ShapeComparator> ShapeComparator for Reversed<C> {
    fn compare(&self, a: &Shape, b: &Shape) -> Ordering {
        self.0.compare(b, a)
    }
}

/// See [`ShapeComparator::then`].
#[derive(Clone, Copy, Debug)]
pub struct Then<A, B>(A, B);

impl<A: ShapeComparator, B: ShapeComparator> ShapeComparator for Then<A, B> {
    fn compare(&self, a: &Shape, b: &Shape) -> Ordering {
        self.0.compare(a, b).then_with(|| self.1.compare(a, b))
    }
}
