//! Axis-aligned rectangle defined by two opposite corners.

use crate::validate::finite_point;
use tessel_core::{Point, ShapeError, ShapeProperty};

/// Axis-aligned rectangle with cached area and perimeter.
///
/// Only the x and y components of the corners take part in the geometry.
/// The corners need not be ordered: width and height are absolute
/// differences, so a rectangle given by its top-right and bottom-left
/// corners has the same derived values.
#[derive(Clone, Debug, PartialEq)]
pub struct Rectangle {
    top_left: Point,
    bottom_right: Point,
    area: f64,
    perimeter: f64,
}

impl Rectangle {
    /// Build a rectangle from two corners.
    ///
    /// Degenerate (zero-width or zero-height) rectangles are accepted;
    /// see [`is_valid`](Self::is_valid).
    pub fn new(top_left: Point, bottom_right: Point) -> Result<Self, ShapeError> {
        let mut rect = Self {
            top_left: finite_point("top_left", top_left)?,
            bottom_right: finite_point("bottom_right", bottom_right)?,
            area: 0.0,
            perimeter: 0.0,
        };
        rect.recompute();
        Ok(rect)
    }

    /// The anchor corner.
    pub fn top_left(&self) -> Point {
        self.top_left
    }

    /// The corner opposite [`top_left`](Self::top_left).
    pub fn bottom_right(&self) -> Point {
        self.bottom_right
    }

    /// `|Δx|` between the corners.
    pub fn width(&self) -> f64 {
        (self.bottom_right.x() - self.top_left.x()).abs()
    }

    /// `|Δy|` between the corners.
    pub fn height(&self) -> f64 {
        (self.bottom_right.y() - self.top_left.y()).abs()
    }

    /// Cached `width · height`.
    pub fn area(&self) -> f64 {
        self.area
    }

    /// Cached `2 · (width + height)`.
    pub fn perimeter(&self) -> f64 {
        self.perimeter
    }

    /// Width equals height, compared exactly.
    pub fn is_square(&self) -> bool {
        self.width() == self.height()
    }

    /// An axis-aligned rectangle is a rhombus exactly when it is a square.
    pub fn is_rhombus(&self) -> bool {
        self.is_square()
    }

    /// Both width and height are strictly positive.
    pub fn is_valid(&self) -> bool {
        self.width() > 0.0 && self.height() > 0.0
    }

    /// Replace the anchor corner and recompute derived values.
    ///
    /// On error the rectangle is unchanged.
    pub fn set_top_left(&mut self, point: Point) -> Result<(), ShapeError> {
        self.top_left = finite_point("top_left", point)?;
        self.recompute();
        Ok(())
    }

    /// Replace the opposite corner and recompute derived values.
    ///
    /// On error the rectangle is unchanged.
    pub fn set_bottom_right(&mut self, point: Point) -> Result<(), ShapeError> {
        self.bottom_right = finite_point("bottom_right", point)?;
        self.recompute();
        Ok(())
    }

    /// Read a rectangle scalar. Cone-only properties are absent.
    pub fn property(&self, property: ShapeProperty) -> Option<f64> {
        match property {
            ShapeProperty::Area => Some(self.area),
            ShapeProperty::Perimeter => Some(self.perimeter),
            ShapeProperty::Width => Some(self.width()),
            ShapeProperty::Height => Some(self.height()),
            ShapeProperty::Volume
            | ShapeProperty::SurfaceArea
            | ShapeProperty::Radius
            | ShapeProperty::SlantHeight => None,
        }
    }

    fn recompute(&mut self) {
        let (width, height) = (self.width(), self.height());
        self.area = width * height;
        self.perimeter = 2.0 * (width + height);
    }
}
