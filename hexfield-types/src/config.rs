use crate::point::Point;
use serde::{Deserialize, Serialize};

/// Unit used for every great-circle distance within one field computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DistanceUnit {
    #[default]
    Kilometers,
    Meters,
    Radians,
}

/// Nearest-occupied-cell search used by the distance field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum NearestStrategy {
    /// Scan every occupied center for every candidate.
    BruteForce,
    /// R*-tree over occupied centers on the unit sphere.
    #[default]
    RTree,
}

/// Which point of a candidate cell is tested against the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CentroidMode {
    /// The cell's nominal center.
    #[default]
    Nominal,
    /// The planar centroid of the cell's boundary ring.
    Exact,
}

/// Region to compute a field over.
///
/// The traversal root is the ancestor of `center` at `root_level`; candidates
/// are its descendants at `level` lying within `radius_km` of `center`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RegionConfig {
    pub center: Point,
    pub radius_km: f64,
    pub level: u8,
    pub root_level: u8,
}

impl RegionConfig {
    pub fn new(center: Point, radius_km: f64, level: u8, root_level: u8) -> Self {
        Self {
            center,
            radius_km,
            level,
            root_level,
        }
    }
}
