//! Nearest occupied center search.
//!
//! Both strategies answer the same question with the same semantics: the
//! minimum great-circle distance from a query point to any indexed center.
//! The R*-tree indexes centers on the unit sphere, where Euclidean chord
//! order matches great-circle order, then measures the winner with the
//! haversine formula.

use crate::compute::spatial::algorithms::{distance_between, unit_vector};
use hexfield_types::config::{DistanceUnit, NearestStrategy};
use hexfield_types::point::Point;
use rstar::RTree;
use rstar::primitives::GeomWithData;

/// Pluggable nearest-neighbor strategy over a fixed set of centers.
pub trait NearestNeighbor: Send + Sync {
    /// Distance from `query` to the closest center, `None` when empty.
    fn nearest_distance(&self, query: &Point) -> Option<f64>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Scans every center for every query.
#[derive(Debug, Clone)]
pub struct BruteForceNearest {
    centers: Vec<Point>,
    unit: DistanceUnit,
}

impl BruteForceNearest {
    pub fn new(centers: Vec<Point>, unit: DistanceUnit) -> Self {
        Self { centers, unit }
    }
}

impl NearestNeighbor for BruteForceNearest {
    fn nearest_distance(&self, query: &Point) -> Option<f64> {
        self.centers
            .iter()
            .map(|center| distance_between(query, center, self.unit))
            .min_by(|a, b| a.total_cmp(b))
    }

    fn len(&self) -> usize {
        self.centers.len()
    }
}

type SphereEntry = GeomWithData<[f64; 3], usize>;

/// R*-tree over centers projected onto the unit sphere.
pub struct RTreeNearest {
    tree: RTree<SphereEntry>,
    centers: Vec<Point>,
    unit: DistanceUnit,
}

impl RTreeNearest {
    pub fn new(centers: Vec<Point>, unit: DistanceUnit) -> Self {
        let entries = centers
            .iter()
            .enumerate()
            .map(|(i, center)| SphereEntry::new(unit_vector(center), i))
            .collect();
        Self {
            tree: RTree::bulk_load(entries),
            centers,
            unit,
        }
    }
}

impl NearestNeighbor for RTreeNearest {
    fn nearest_distance(&self, query: &Point) -> Option<f64> {
        let entry = self.tree.nearest_neighbor(&unit_vector(query))?;
        let center = self.centers.get(entry.data)?;
        Some(distance_between(query, center, self.unit))
    }

    fn len(&self) -> usize {
        self.centers.len()
    }
}

impl std::fmt::Debug for RTreeNearest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RTreeNearest")
            .field("centers", &self.centers.len())
            .field("unit", &self.unit)
            .finish()
    }
}

/// Build the configured strategy over `centers`.
pub fn build_nearest(
    strategy: NearestStrategy,
    centers: Vec<Point>,
    unit: DistanceUnit,
) -> Box<dyn NearestNeighbor> {
    match strategy {
        NearestStrategy::BruteForce => Box::new(BruteForceNearest::new(centers, unit)),
        NearestStrategy::RTree => Box::new(RTreeNearest::new(centers, unit)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scatter() -> Vec<Point> {
        // Deterministic scatter around Boulder.
        (0..200)
            .map(|i| {
                let t = i as f64;
                Point::from_lat_lon(
                    40.0 + (t * 0.37).sin() * 0.3,
                    -105.2 + (t * 0.53).cos() * 0.4,
                )
            })
            .collect()
    }

    #[test]
    fn test_empty_returns_none() {
        let brute = BruteForceNearest::new(vec![], DistanceUnit::Kilometers);
        let tree = RTreeNearest::new(vec![], DistanceUnit::Kilometers);
        let q = Point::from_lat_lon(40.0, -105.0);

        assert!(brute.is_empty());
        assert!(tree.is_empty());
        assert_eq!(brute.nearest_distance(&q), None);
        assert_eq!(tree.nearest_distance(&q), None);
    }

    #[test]
    fn test_exact_hit_is_zero() {
        let centers = scatter();
        let tree = RTreeNearest::new(centers.clone(), DistanceUnit::Kilometers);
        for c in centers.iter().take(20) {
            assert_eq!(tree.nearest_distance(c), Some(0.0));
        }
    }

    #[test]
    fn test_rtree_matches_brute_force() {
        let centers = scatter();
        let brute = BruteForceNearest::new(centers.clone(), DistanceUnit::Kilometers);
        let tree = RTreeNearest::new(centers, DistanceUnit::Kilometers);

        for i in 0..100 {
            let t = i as f64;
            let q = Point::from_lat_lon(39.5 + t * 0.011, -105.8 + t * 0.013);
            let expected = brute.nearest_distance(&q).unwrap();
            let actual = tree.nearest_distance(&q).unwrap();
            assert!(
                (expected - actual).abs() < 1e-9,
                "query {}: brute {} vs tree {}",
                i,
                expected,
                actual
            );
        }
    }

    #[test]
    fn test_build_nearest_strategies() {
        let centers = scatter();
        for strategy in [NearestStrategy::BruteForce, NearestStrategy::RTree] {
            let nn = build_nearest(strategy, centers.clone(), DistanceUnit::Meters);
            assert_eq!(nn.len(), centers.len());
            assert_eq!(nn.nearest_distance(&centers[3]), Some(0.0));
        }
    }
}
