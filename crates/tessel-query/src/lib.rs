//! Querying and ordering over collections of shapes.
//!
//! # Predicates
//!
//! A [`Specification`] is an immutable predicate tree: [`Criterion`]
//! leaves combined with AND, OR and NOT. Trees are evaluated fresh on
//! every call by structural recursion, with short-circuiting left to
//! right. Every leaf is total: a criterion that does not apply to a
//! shape (a volume range on a rectangle, say) is simply `false`.
//!
//! # Orderings
//!
//! A [`ShapeComparator`] is a three-way ordering of two shapes. The
//! built-in orderings live in [`ShapeOrder`]; comparators compose with
//! [`reversed`](ShapeComparator::reversed) and
//! [`then`](ShapeComparator::then), and any
//! `Fn(&Shape, &Shape) -> Ordering` is a comparator too.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod compare;
pub mod criterion;
pub mod spec;

pub use compare::{Reversed, ShapeComparator, ShapeOrder, Then};
pub use criterion::{AxisSign, Criterion};
pub use spec::Specification;
