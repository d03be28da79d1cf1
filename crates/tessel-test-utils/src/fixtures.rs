//! Shape fixtures.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tessel_core::Point;
use tessel_shape::Shape;

/// Rectangle from (0, 0) to (4, 3): area 12, perimeter 14.
pub fn reference_rectangle(id: &str) -> Shape {
    rect(id, (0.0, 0.0), (4.0, 3.0))
}

/// Cone with apex (0, 0, 5), base centre at the origin, r = 3, h = 5.
pub fn reference_cone(id: &str) -> Shape {
    cone_at(id, (0.0, 0.0, 5.0), 3.0, 5.0)
}

/// Planar rectangle between two corners.
///
/// # Panics
///
/// Panics on non-finite corners.
pub fn rect(id: &str, top_left: (f64, f64), bottom_right: (f64, f64)) -> Shape {
    Shape::rectangle(id, top_left.into(), bottom_right.into()).expect("finite corners")
}

/// Cone with the given apex and its base centre directly below it on the
/// XOY plane.
///
/// # Panics
///
/// Panics on a non-finite apex or non-positive radius/height.
pub fn cone_at(id: &str, apex: (f64, f64, f64), radius: f64, height: f64) -> Shape {
    let apex = Point::from(apex);
    let base = Point::planar(apex.x(), apex.y());
    Shape::cone(id, apex, base, radius, height).expect("valid cone parameters")
}

/// `n` shapes with deterministic pseudo-random geometry.
///
/// Ids are `shape_0 .. shape_{n-1}`; roughly half are rectangles and half
/// cones, anchored in `[-100, 100)` on every axis.
pub fn scatter_shapes(seed: u64, n: usize) -> Vec<Shape> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..n)
        .map(|i| {
            let id = format!("shape_{i}");
            let x = rng.random_range(-100.0..100.0);
            let y = rng.random_range(-100.0..100.0);
            if rng.random_bool(0.5) {
                let w = rng.random_range(0.5..20.0);
                let h = rng.random_range(0.5..20.0);
                rect(&id, (x, y), (x + w, y - h))
            } else {
                let z = rng.random_range(-100.0..100.0);
                let r = rng.random_range(0.5..10.0);
                let h = rng.random_range(0.5..10.0);
                cone_at(&id, (x, y, z), r, h)
            }
        })
        .collect()
}
