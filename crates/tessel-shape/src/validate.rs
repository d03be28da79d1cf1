//! Parameter checks shared by the rectangle and cone mutators.

use tessel_core::{Point, ShapeError};

pub(crate) fn finite_point(parameter: &'static str, point: Point) -> Result<Point, ShapeError> {
    for value in [point.x(), point.y(), point.z()] {
        if !value.is_finite() {
            return Err(ShapeError::NonFinite { parameter, value });
        }
    }
    Ok(point)
}

pub(crate) fn positive(parameter: &'static str, value: f64) -> Result<f64, ShapeError> {
    if !value.is_finite() {
        return Err(ShapeError::NonFinite { parameter, value });
    }
    if value <= 0.0 {
        return Err(ShapeError::NonPositive { parameter, value });
    }
    Ok(value)
}
