//! Shape identifiers and the [`ShapeKind`] variant tag.

use std::borrow::Borrow;
use std::fmt;

/// Opaque string identifier of a shape.
///
/// Unique within one repository. Uniqueness is not enforced globally: two
/// unattached shapes, or shapes in different repositories, may share an id.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShapeId(String);

impl ShapeId {
    /// Wrap a string as a shape id.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ShapeId {
    fn from(v: &str) -> Self {
        Self(v.to_owned())
    }
}

impl From<String> for ShapeId {
    fn from(v: String) -> Self {
        Self(v)
    }
}

impl Borrow<str> for ShapeId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ShapeId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Variant tag of a shape.
///
/// Dispatch on shape variants goes through this tag with an exhaustive
/// `match`, never through type names.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ShapeKind {
    /// Axis-aligned rectangle in the XY plane.
    Rectangle,
    /// Right circular cone.
    Cone,
}

impl ShapeKind {
    /// All kinds, in declaration order.
    pub const ALL: [ShapeKind; 2] = [ShapeKind::Rectangle, ShapeKind::Cone];

    /// Lowercase tag used in logs and CLI output.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Rectangle => "rectangle",
            Self::Cone => "cone",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
