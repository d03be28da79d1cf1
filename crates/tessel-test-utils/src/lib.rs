//! Test utilities and mock types for Tessel development.
//!
//! - Fixtures: [`reference_rectangle`], [`reference_cone`], [`rect`],
//!   [`cone_at`], and seeded random populations via [`scatter_shapes`].
//! - Observers: [`RecordingObserver`] and [`FailingObserver`].

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;
pub mod observers;

pub use fixtures::{cone_at, rect, reference_cone, reference_rectangle, scatter_shapes};
pub use observers::{FailingObserver, RecordingObserver};
