//! Core value types for the Tessel shape registry.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the vocabulary shared by every other Tessel crate: shape identifiers
//! and kind tags, the [`Point`] coordinate type, property and metric
//! names, and the error types raised by geometry mutators and observers.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod id;
pub mod point;
pub mod property;

pub use error::{ObserverError, ShapeError};
pub use id::{ShapeId, ShapeKind};
pub use point::{Point, Quadrant};
pub use property::{Metric, ShapeProperty};
