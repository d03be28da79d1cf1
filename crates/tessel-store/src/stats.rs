//! Aggregate statistics over the property store.
//!
//! [`StoreStatistics`] is computed on demand from the store's current
//! contents; nothing is maintained incrementally.

use crate::store::CachedMetrics;
use tessel_core::{Metric, ShapeKind};

/// Counts and sums over a [`PropertyStore`](crate::PropertyStore).
///
/// Shape counts cover registered shapes. Metric totals cover entries
/// whose value is currently set; unset entries contribute nothing.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StoreStatistics {
    /// Number of registered shapes.
    pub total_shapes: usize,
    /// Registered rectangles.
    pub rectangles: usize,
    /// Registered cones.
    pub cones: usize,
    /// Sum of cached areas.
    pub total_area: f64,
    /// Sum of cached perimeters.
    pub total_perimeter: f64,
    /// Sum of cached volumes.
    pub total_volume: f64,
    /// Sum of cached surface areas.
    pub total_surface_area: f64,
}

impl StoreStatistics {
    pub(crate) fn collect<'a>(
        kinds: impl Iterator<Item = &'a ShapeKind>,
        metrics: impl Iterator<Item = &'a CachedMetrics>,
    ) -> Self {
        let mut stats = Self::default();
        for kind in kinds {
            stats.total_shapes += 1;
            match kind {
                ShapeKind::Rectangle => stats.rectangles += 1,
                ShapeKind::Cone => stats.cones += 1,
            }
        }
        for m in metrics {
            stats.total_area += m.area.unwrap_or(0.0);
            stats.total_perimeter += m.perimeter.unwrap_or(0.0);
            stats.total_volume += m.volume.unwrap_or(0.0);
            stats.total_surface_area += m.surface_area.unwrap_or(0.0);
        }
        stats
    }

    /// Registered shapes of `kind`.
    pub fn count_of(&self, kind: ShapeKind) -> usize {
        match kind {
            ShapeKind::Rectangle => self.rectangles,
            ShapeKind::Cone => self.cones,
        }
    }

    /// Sum of the cached values of `metric`.
    pub fn total_of(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Area => self.total_area,
            Metric::Perimeter => self.total_perimeter,
            Metric::Volume => self.total_volume,
            Metric::SurfaceArea => self.total_surface_area,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_statistics_are_zero() {
        let s = StoreStatistics::default();
        assert_eq!(s.total_shapes, 0);
        assert_eq!(s.rectangles, 0);
        assert_eq!(s.cones, 0);
        for m in Metric::ALL {
            assert_eq!(s.total_of(m), 0.0);
        }
    }

    #[test]
    fn unset_entries_contribute_nothing() {
        let kinds = [ShapeKind::Rectangle, ShapeKind::Cone, ShapeKind::Cone];
        let metrics = [
            CachedMetrics {
                area: Some(12.0),
                perimeter: Some(14.0),
                ..Default::default()
            },
            CachedMetrics {
                volume: Some(5.0),
                ..Default::default()
            },
            CachedMetrics::default(),
        ];
        let s = StoreStatistics::collect(kinds.iter(), metrics.iter());
        assert_eq!(s.total_shapes, 3);
        assert_eq!(s.count_of(ShapeKind::Rectangle), 1);
        assert_eq!(s.count_of(ShapeKind::Cone), 2);
        assert_eq!(s.total_area, 12.0);
        assert_eq!(s.total_perimeter, 14.0);
        assert_eq!(s.total_volume, 5.0);
        assert_eq!(s.total_surface_area, 0.0);
    }
}
