//! Turning records into validated shapes.
//!
//! Record layouts, whitespace separated. Extra trailing numbers are
//! ignored, but every field must be a number:
//!
//! | Kind      | Fields                     |
//! |-----------|----------------------------|
//! | rectangle | `x1 y1 x2 y2`              |
//! | cone      | `ax ay az bx by bz r h`    |
//!
//! Ids are derived from the source line (`rect_12`, `cone_3`), so they are
//! unique within one file.

use crate::error::RecordError;
use crate::reader::Record;
use tessel_core::{Point, ShapeKind};
use tessel_shape::Shape;

/// Fields a rectangle record needs.
pub const RECTANGLE_FIELDS: usize = 4;

/// Fields a cone record needs.
pub const CONE_FIELDS: usize = 8;

/// Id prefix for shapes of `kind`.
pub fn id_prefix(kind: ShapeKind) -> &'static str {
    match kind {
        ShapeKind::Rectangle => "rect",
        ShapeKind::Cone => "cone",
    }
}

/// Parse `record` as a shape of `kind`.
pub fn parse_record(kind: ShapeKind, record: &Record<'_>) -> Result<Shape, RecordError> {
    match kind {
        ShapeKind::Rectangle => parse_rectangle(record),
        ShapeKind::Cone => parse_cone(record),
    }
}

/// Parse a rectangle record. Zero width or height is rejected.
pub fn parse_rectangle(record: &Record<'_>) -> Result<Shape, RecordError> {
    let [x1, y1, x2, y2] = numbers::<RECTANGLE_FIELDS>(ShapeKind::Rectangle, record)?;
    let shape = Shape::rectangle(
        shape_id(ShapeKind::Rectangle, record),
        Point::planar(x1, y1),
        Point::planar(x2, y2),
    )?;
    match shape.as_rectangle() {
        Some(r) if !r.is_valid() => Err(RecordError::Degenerate {
            width: r.width(),
            height: r.height(),
        }),
        _ => Ok(shape),
    }
}

/// Parse a cone record. Radius and height must be positive.
pub fn parse_cone(record: &Record<'_>) -> Result<Shape, RecordError> {
    let [ax, ay, az, bx, by, bz, r, h] = numbers::<CONE_FIELDS>(ShapeKind::Cone, record)?;
    Ok(Shape::cone(
        shape_id(ShapeKind::Cone, record),
        Point::new(ax, ay, az),
        Point::new(bx, by, bz),
        r,
        h,
    )?)
}

fn shape_id(kind: ShapeKind, record: &Record<'_>) -> String {
    format!("{}_{}", id_prefix(kind), record.line)
}

/// The first `N` fields as numbers. Fields past `N` are checked but
/// dropped. Finiteness is left to the shape constructors.
fn numbers<const N: usize>(kind: ShapeKind, record: &Record<'_>) -> Result<[f64; N], RecordError> {
    let mut out = [0.0; N];
    let mut found = 0;
    for (index, text) in record.fields().enumerate() {
        let value: f64 = text.parse().map_err(|_| RecordError::NotANumber {
            index,
            text: text.to_string(),
        })?;
        if index < N {
            out[index] = value;
            found += 1;
        }
    }
    if found < N {
        return Err(RecordError::TooFewFields {
            kind,
            expected: N,
            found,
        });
    }
    Ok(out)
}
