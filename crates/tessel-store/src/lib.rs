//! Derived-property cache for Tessel shapes.
//!
//! [`PropertyStore`] holds the last-pushed area, perimeter, volume and
//! surface area for each shape id, plus the kind of each registered
//! shape for statistics. It never owns shapes. One store is created
//! explicitly and shared as `Arc<PropertyStore>` by every repository and
//! [`SyncAgent`] that should see the same cache.
//!
//! [`SyncAgent`] is the observer that mirrors a shape's derived values
//! into the store whenever the shape changes.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod stats;
pub mod store;
pub mod sync;

pub use stats::StoreStatistics;
pub use store::{CachedMetrics, PropertyStore};
pub use sync::SyncAgent;
