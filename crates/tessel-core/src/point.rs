//! Immutable 3D coordinates and XY-plane quadrants.

use std::fmt;

/// An immutable `(x, y, z)` coordinate.
///
/// Construction never fails; finiteness is checked by the geometry
/// mutators that accept points (see [`Point::is_finite`]).
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    x: f64,
    y: f64,
    z: f64,
}

impl Point {
    /// The origin `(0, 0, 0)`.
    pub const ORIGIN: Point = Point::new(0.0, 0.0, 0.0);

    /// Create a point from three coordinates.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Create a point in the XY plane (`z = 0`).
    pub const fn planar(x: f64, y: f64) -> Self {
        Self::new(x, y, 0.0)
    }

    /// X coordinate.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Y coordinate.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Z coordinate.
    pub fn z(&self) -> f64 {
        self.z
    }

    /// `true` if all three coordinates are finite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Euclidean norm of the point.
    pub fn distance_from_origin(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Euclidean distance to `other`.
    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }

    /// The XY quadrant containing this point.
    ///
    /// Returns `None` for points on either axis.
    pub fn quadrant(&self) -> Option<Quadrant> {
        Quadrant::ALL.into_iter().find(|q| q.contains(self))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

impl From<(f64, f64, f64)> for Point {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Self::new(x, y, z)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::planar(x, y)
    }
}

/// One of the four open quadrants of the XY plane.
///
/// Membership uses strict inequalities, so a point lying exactly on an
/// axis belongs to no quadrant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Quadrant {
    /// `x > 0, y > 0`
    First,
    /// `x < 0, y > 0`
    Second,
    /// `x < 0, y < 0`
    Third,
    /// `x > 0, y < 0`
    Fourth,
}

impl Quadrant {
    /// All quadrants in counter-clockwise order.
    pub const ALL: [Quadrant; 4] = [
        Quadrant::First,
        Quadrant::Second,
        Quadrant::Third,
        Quadrant::Fourth,
    ];

    /// Whether `point` lies strictly inside this quadrant.
    pub fn contains(self, point: &Point) -> bool {
        let (x, y) = (point.x(), point.y());
        match self {
            Self::First => x > 0.0 && y > 0.0,
            Self::Second => x < 0.0 && y > 0.0,
            Self::Third => x < 0.0 && y < 0.0,
            Self::Fourth => x > 0.0 && y < 0.0,
        }
    }
}
