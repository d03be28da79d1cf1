//! Observable geometric shapes for Tessel.
//!
//! A [`Shape`] pairs an identity and display name with a [`Geometry`]
//! (one of [`Rectangle`] or [`Cone`]) and a list of [`ShapeObserver`]s.
//! Derived values are recomputed synchronously inside every geometry
//! mutator, before observers are notified, so an observer always sees
//! derived fields that agree with the current geometry.
//!
//! # Formulas
//!
//! - Rectangle: `width = |Δx|`, `height = |Δy|`, `area = width·height`,
//!   `perimeter = 2(width + height)`.
//! - Cone: `slant = √(r² + h²)`, `surface_area = π·r·(r + slant)`,
//!   `volume = π·r²·h / 3`.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cone;
pub mod geometry;
pub mod observer;
pub mod rectangle;
pub mod shape;

mod validate;

pub use cone::{Cone, VolumeSplit};
pub use geometry::Geometry;
pub use observer::{ObserverHandle, ShapeObserver};
pub use rectangle::Rectangle;
pub use shape::Shape;
