//! Benchmark profiles for the Tessel shape registry.
//!
//! - [`populated_repository`]: a repository filled with a seeded random
//!   population, every shape wired to one shared store.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use tessel_repository::ShapeRepository;
use tessel_store::PropertyStore;
use tessel_test_utils::scatter_shapes;

/// Shapes in the reference profile.
pub const REFERENCE_SIZE: usize = 10_000;

/// A repository holding `n` scattered shapes generated from `seed`.
pub fn populated_repository(seed: u64, n: usize) -> ShapeRepository {
    let mut repo = ShapeRepository::new(PropertyStore::shared());
    repo.extend(scatter_shapes(seed, n));
    repo
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_is_fully_primed() {
        let repo = populated_repository(3, 500);
        assert_eq!(repo.count(), 500);
        assert_eq!(repo.store().len(), 500);
        assert_eq!(repo.statistics().total_shapes, 500);
    }
}
