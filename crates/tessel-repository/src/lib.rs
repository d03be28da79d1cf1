//! The owning shape collection.
//!
//! [`ShapeRepository`] maps shape ids to shapes and keeps a shared
//! [`PropertyStore`](tessel_store::PropertyStore) in step with them: every
//! added shape gets the repository's [`SyncAgent`](tessel_store::SyncAgent)
//! as an observer and is pushed into the store once immediately, so the
//! cache is populated before the first mutation.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod repository;
pub mod shape_mut;

pub use repository::ShapeRepository;
pub use shape_mut::ShapeMut;
