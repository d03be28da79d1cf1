//! Named scalar properties of shapes and the cached [`Metric`] categories.

use crate::id::ShapeKind;
use std::fmt;

/// A scalar that can be read from a shape by name.
///
/// Covers both derived values (area, volume, ...) and geometry parameters
/// (width, radius, ...). A property that a shape's variant does not carry
/// reads as absent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShapeProperty {
    /// Rectangle area (derived).
    Area,
    /// Rectangle perimeter (derived).
    Perimeter,
    /// Rectangle width, `|Δx|`.
    Width,
    /// Rectangle height `|Δy|`, or cone height.
    Height,
    /// Cone volume (derived).
    Volume,
    /// Cone total surface area (derived).
    SurfaceArea,
    /// Cone base radius.
    Radius,
    /// Cone slant height (derived).
    SlantHeight,
}

impl ShapeProperty {
    /// Every property, in declaration order.
    pub const ALL: [ShapeProperty; 8] = [
        ShapeProperty::Area,
        ShapeProperty::Perimeter,
        ShapeProperty::Width,
        ShapeProperty::Height,
        ShapeProperty::Volume,
        ShapeProperty::SurfaceArea,
        ShapeProperty::Radius,
        ShapeProperty::SlantHeight,
    ];

    /// Canonical key: lowercase, no separators.
    pub fn key(self) -> &'static str {
        match self {
            Self::Area => "area",
            Self::Perimeter => "perimeter",
            Self::Width => "width",
            Self::Height => "height",
            Self::Volume => "volume",
            Self::SurfaceArea => "surfacearea",
            Self::Radius => "radius",
            Self::SlantHeight => "slantheight",
        }
    }

    /// Resolve a property name.
    ///
    /// Matching is case-insensitive and ignores `_`, `-` and spaces, so
    /// `surfaceArea`, `surfacearea` and `surface_area` all resolve to
    /// [`ShapeProperty::SurfaceArea`]. Unknown names return `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        let normalized: String = name
            .chars()
            .filter(|c| !matches!(c, '_' | '-' | ' '))
            .flat_map(char::to_lowercase)
            .collect();
        Self::ALL.into_iter().find(|p| p.key() == normalized)
    }
}

impl fmt::Display for ShapeProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Derived scalar categories mirrored into the property store.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Metric {
    /// Rectangle area.
    Area,
    /// Rectangle perimeter.
    Perimeter,
    /// Cone volume.
    Volume,
    /// Cone surface area.
    SurfaceArea,
}

impl Metric {
    /// Every metric, in declaration order.
    pub const ALL: [Metric; 4] = [
        Metric::Area,
        Metric::Perimeter,
        Metric::Volume,
        Metric::SurfaceArea,
    ];

    /// The shape property this metric caches.
    pub fn property(self) -> ShapeProperty {
        match self {
            Self::Area => ShapeProperty::Area,
            Self::Perimeter => ShapeProperty::Perimeter,
            Self::Volume => ShapeProperty::Volume,
            Self::SurfaceArea => ShapeProperty::SurfaceArea,
        }
    }

    /// The shape kind that produces this metric.
    pub fn kind(self) -> ShapeKind {
        match self {
            Self::Area | Self::Perimeter => ShapeKind::Rectangle,
            Self::Volume | Self::SurfaceArea => ShapeKind::Cone,
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.property().fmt(f)
    }
}
