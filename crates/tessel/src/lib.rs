//! Tessel: an observable shape registry.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! Tessel sub-crates. For most users, adding `tessel` as a single dependency
//! is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use tessel::prelude::*;
//!
//! let mut repo = ShapeRepository::new(PropertyStore::shared());
//! repo.add(Shape::rectangle("rect", Point::planar(0.0, 0.0), Point::planar(4.0, 3.0)).unwrap());
//! repo.add(
//!     Shape::cone("cone", Point::new(0.0, 0.0, 5.0), Point::ORIGIN, 3.0, 5.0).unwrap(),
//! );
//! assert_eq!(repo.store().get_area("rect"), Some(12.0));
//!
//! // Mutations flow into the store through the attached sync agent.
//! repo.get_mut("rect").unwrap().set_bottom_right(Point::planar(10.0, 10.0)).unwrap();
//! assert_eq!(repo.store().get_area("rect"), Some(100.0));
//!
//! let up_cones = Specification::of_kind(ShapeKind::Cone) & Specification::positive_z();
//! assert_eq!(repo.find(&up_cones).len(), 1);
//!
//! let by_x = repo.sort(&ShapeOrder::FirstPointX);
//! assert_eq!(by_x[0].id().as_str(), "rect");
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `tessel-core` | Points, ids, kinds, property names, errors |
//! | [`shape`] | `tessel-shape` | Rectangle, cone, the `Shape` entity and observers |
//! | [`store`] | `tessel-store` | Property store, statistics and the sync agent |
//! | [`query`] | `tessel-query` | Specifications and comparators |
//! | [`repository`] | `tessel-repository` | The owning shape repository |
//! | [`ingest`] | `tessel-ingest` | Text-file record reader and loader |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core value types and errors (`tessel-core`).
pub use tessel_core as types;

/// Geometry and the observable shape entity (`tessel-shape`).
///
/// [`shape::Shape`] wraps a [`shape::Geometry`] and notifies its
/// [`shape::ShapeObserver`]s after every change.
pub use tessel_shape as shape;

/// Derived-property cache (`tessel-store`).
///
/// One [`store::PropertyStore`] is shared as an `Arc` between repositories
/// and [`store::SyncAgent`]s.
pub use tessel_store as store;

/// Predicates and orderings (`tessel-query`).
pub use tessel_query as query;

/// The owning repository (`tessel-repository`).
pub use tessel_repository as repository;

/// Loading shapes from text files (`tessel-ingest`).
pub use tessel_ingest as ingest;

/// Common imports for typical Tessel usage.
///
/// ```rust
/// use tessel::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use tessel_core::{Metric, Point, Quadrant, ShapeId, ShapeKind, ShapeProperty};

    // Errors
    pub use tessel_core::{ObserverError, ShapeError};

    // Shapes
    pub use tessel_shape::{Cone, Geometry, ObserverHandle, Rectangle, Shape, ShapeObserver};

    // Store
    pub use tessel_store::{PropertyStore, StoreStatistics, SyncAgent};

    // Queries
    pub use tessel_query::{Criterion, ShapeComparator, ShapeOrder, Specification};

    // Repository
    pub use tessel_repository::{ShapeMut, ShapeRepository};

    // Ingestion
    pub use tessel_ingest::{IngestConfig, IngestError, LoadReport, Loader, RecordError};
}
