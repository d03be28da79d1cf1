//! Right circular cone given by apex, base centre, radius and height.

use crate::validate::{finite_point, positive};
use std::f64::consts::PI;
use tessel_core::{Point, ShapeError, ShapeProperty};

/// Right circular cone with cached volume and surface area.
///
/// `height` is a parameter in its own right and is not derived from the
/// apex/base-centre distance; the two points locate the cone in space.
#[derive(Clone, Debug, PartialEq)]
pub struct Cone {
    apex: Point,
    base_center: Point,
    radius: f64,
    height: f64,
    volume: f64,
    surface_area: f64,
}

/// How a cone's volume divides between the half-spaces `z > 0` and `z < 0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VolumeSplit {
    /// Volume with `z ≥ 0`.
    pub above: f64,
    /// Volume with `z ≤ 0`.
    pub below: f64,
    /// Full cone volume, `above + below`.
    pub total: f64,
}

impl Cone {
    /// Build a cone. Radius and height must be finite and strictly positive.
    pub fn new(
        apex: Point,
        base_center: Point,
        radius: f64,
        height: f64,
    ) -> Result<Self, ShapeError> {
        let mut cone = Self {
            apex: finite_point("apex", apex)?,
            base_center: finite_point("base_center", base_center)?,
            radius: positive("radius", radius)?,
            height: positive("height", height)?,
            volume: 0.0,
            surface_area: 0.0,
        };
        cone.recompute();
        Ok(cone)
    }

    /// The apex; the cone's anchor point.
    pub fn apex(&self) -> Point {
        self.apex
    }

    /// Centre of the base disc.
    pub fn base_center(&self) -> Point {
        self.base_center
    }

    /// Base radius.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Height.
    pub fn height(&self) -> f64 {
        self.height
    }

    /// `√(r² + h²)`.
    pub fn slant_height(&self) -> f64 {
        (self.radius * self.radius + self.height * self.height).sqrt()
    }

    /// Cached `π·r²·h / 3`.
    pub fn volume(&self) -> f64 {
        self.volume
    }

    /// Cached `π·r·(r + slant)`, base disc included.
    pub fn surface_area(&self) -> f64 {
        self.surface_area
    }

    /// The base disc lies in the XOY plane.
    pub fn is_base_on_xoy(&self) -> bool {
        self.base_center.z() == 0.0
    }

    /// Split the volume by the XOY plane.
    ///
    /// When the plane cuts the axis between apex and base centre, the piece
    /// on the apex side is a similar cone scaled by `f = |apex.z| / |Δz|`,
    /// so it holds `f³` of the volume.
    pub fn volume_split_by_xoy(&self) -> VolumeSplit {
        let total = self.volume;
        let (za, zb) = (self.apex.z(), self.base_center.z());
        let (z_min, z_max) = (za.min(zb), za.max(zb));

        if z_min >= 0.0 {
            return VolumeSplit {
                above: total,
                below: 0.0,
                total,
            };
        }
        if z_max <= 0.0 {
            return VolumeSplit {
                above: 0.0,
                below: total,
                total,
            };
        }

        let axis = (zb - za).abs();
        let f = (za.abs() / axis).clamp(0.0, 1.0);
        let apex_side = total * f.powi(3);
        if za > 0.0 {
            VolumeSplit {
                above: apex_side,
                below: total - apex_side,
                total,
            }
        } else {
            VolumeSplit {
                above: total - apex_side,
                below: apex_side,
                total,
            }
        }
    }

    /// Replace the apex and recompute. On error the cone is unchanged.
    pub fn set_apex(&mut self, point: Point) -> Result<(), ShapeError> {
        self.apex = finite_point("apex", point)?;
        self.recompute();
        Ok(())
    }

    /// Replace the base centre and recompute. On error the cone is unchanged.
    pub fn set_base_center(&mut self, point: Point) -> Result<(), ShapeError> {
        self.base_center = finite_point("base_center", point)?;
        self.recompute();
        Ok(())
    }

    /// Replace the radius and recompute. On error the cone is unchanged.
    pub fn set_radius(&mut self, radius: f64) -> Result<(), ShapeError> {
        self.radius = positive("radius", radius)?;
        self.recompute();
        Ok(())
    }

    /// Replace the height and recompute. On error the cone is unchanged.
    pub fn set_height(&mut self, height: f64) -> Result<(), ShapeError> {
        self.height = positive("height", height)?;
        self.recompute();
        Ok(())
    }

    /// Read a cone scalar. Rectangle-only properties are absent.
    pub fn property(&self, property: ShapeProperty) -> Option<f64> {
        match property {
            ShapeProperty::Volume => Some(self.volume),
            ShapeProperty::SurfaceArea => Some(self.surface_area),
            ShapeProperty::Radius => Some(self.radius),
            ShapeProperty::Height => Some(self.height),
            ShapeProperty::SlantHeight => Some(self.slant_height()),
            ShapeProperty::Area | ShapeProperty::Perimeter | ShapeProperty::Width => None,
        }
    }

    fn recompute(&mut self) {
        let (r, h) = (self.radius, self.height);
        self.surface_area = PI * r * (r + self.slant_height());
        self.volume = (1.0 / 3.0) * PI * r * r * h;
    }
}
