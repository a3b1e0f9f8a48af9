//! Multi-resolution occupancy.
//!
//! Every accepted point is recorded under its leaf cell and under each of
//! that cell's ancestors, one per materialized level. The resulting index is
//! immutable; later stages only read it.

use crate::compute::spatial::{Cell, HexIndex};
use crate::compute::validation::validate_geographic_point;
use crate::error::{HexFieldError, Result};
use hexfield_types::point::Point;
use rustc_hash::FxHashMap;
use std::collections::BTreeMap;

type LevelMap = FxHashMap<Cell, Vec<Point>>;

/// Per-resolution mapping from cell to the points it holds.
#[derive(Debug, Clone, Default)]
pub struct OccupancyIndex {
    leaf_resolution: u8,
    point_count: usize,
    levels: BTreeMap<u8, LevelMap>,
}

impl OccupancyIndex {
    pub fn leaf_resolution(&self) -> u8 {
        self.leaf_resolution
    }

    /// Number of points indexed (after sentinel and range filtering).
    pub fn point_count(&self) -> usize {
        self.point_count
    }

    /// Materialized resolutions, coarsest first.
    pub fn resolutions(&self) -> impl Iterator<Item = u8> + '_ {
        self.levels.keys().copied()
    }

    pub fn contains_level(&self, resolution: u8) -> bool {
        self.levels.contains_key(&resolution)
    }

    pub fn level(&self, resolution: u8) -> Option<&FxHashMap<Cell, Vec<Point>>> {
        self.levels.get(&resolution)
    }

    /// Points recorded under `cell`, in input order.
    pub fn points_in(&self, cell: Cell) -> &[Point] {
        self.levels
            .get(&cell.resolution())
            .and_then(|level| level.get(&cell))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn is_occupied(&self, cell: Cell) -> bool {
        !self.points_in(cell).is_empty()
    }

    /// Cells with at least one point at `resolution`, sorted by id.
    pub fn occupied_cells(&self, resolution: u8) -> Vec<Cell> {
        let mut cells: Vec<Cell> = self
            .levels
            .get(&resolution)
            .map(|level| {
                level
                    .iter()
                    .filter(|(_, points)| !points.is_empty())
                    .map(|(cell, _)| *cell)
                    .collect()
            })
            .unwrap_or_default();
        cells.sort();
        cells
    }

    /// Centers of the occupied cells at `resolution`, in cell order.
    pub fn occupied_centers(&self, resolution: u8) -> Vec<Point> {
        self.occupied_cells(resolution)
            .into_iter()
            .map(|cell| cell.center())
            .collect()
    }

    /// Sum of list lengths at `resolution`.
    pub fn total_points(&self, resolution: u8) -> usize {
        self.levels
            .get(&resolution)
            .map(|level| level.values().map(Vec::len).sum())
            .unwrap_or(0)
    }
}

/// Builds an [`OccupancyIndex`] from a static point set.
#[derive(Debug, Clone)]
pub struct OccupancyBuilder<'a> {
    index: &'a HexIndex,
    leaf_resolution: u8,
    levels: u8,
    sentinel: Option<(f64, f64)>,
}

impl<'a> OccupancyBuilder<'a> {
    /// `levels` counts the leaf level, so `levels == 1` only indexes leaves.
    pub fn new(index: &'a HexIndex, leaf_resolution: u8, levels: u8) -> Result<Self> {
        if levels == 0 {
            return Err(HexFieldError::Configuration(
                "Level count must be greater than zero".to_string(),
            ));
        }
        if leaf_resolution > crate::config::MAX_RESOLUTION {
            return Err(HexFieldError::Configuration(format!(
                "Leaf resolution {} exceeds maximum {}",
                leaf_resolution,
                crate::config::MAX_RESOLUTION
            )));
        }
        if levels > leaf_resolution {
            return Err(HexFieldError::Configuration(format!(
                "Cannot materialize {} levels below leaf resolution {}",
                levels, leaf_resolution
            )));
        }

        Ok(Self {
            index,
            leaf_resolution,
            levels,
            sentinel: None,
        })
    }

    /// Drop points equal to this `(lat, lon)` pair before indexing.
    pub fn with_sentinel(mut self, sentinel: Option<(f64, f64)>) -> Self {
        self.sentinel = sentinel;
        self
    }

    /// Keep points that are neither sentinels nor out of range.
    fn accept(&self, point: &Point) -> bool {
        if let Some(sentinel) = self.sentinel
            && point.is_sentinel(sentinel)
        {
            return false;
        }
        if let Err(e) = validate_geographic_point(point) {
            log::warn!("Dropping point {:?}: {}", point, e);
            return false;
        }
        true
    }

    /// Record `point` under its leaf cell and each materialized ancestor.
    fn record(&self, levels: &mut BTreeMap<u8, LevelMap>, point: Point) -> Result<()> {
        let mut cell = self.index.cell_of(&point, self.leaf_resolution)?;
        for step in 0..self.levels {
            if step > 0 {
                cell = self.index.parent(cell)?;
            }
            levels
                .entry(cell.resolution())
                .or_default()
                .entry(cell)
                .or_default()
                .push(point);
        }
        Ok(())
    }

    fn empty_levels(&self) -> BTreeMap<u8, LevelMap> {
        let coarsest = self.leaf_resolution + 1 - self.levels;
        (coarsest..=self.leaf_resolution)
            .map(|r| (r, LevelMap::default()))
            .collect()
    }

    /// Index `points`. Cost is O(points × levels).
    pub fn build(&self, points: &[Point]) -> Result<OccupancyIndex> {
        let accepted: Vec<Point> = points.iter().copied().filter(|p| self.accept(p)).collect();
        let dropped = points.len() - accepted.len();
        if dropped > 0 {
            log::warn!(
                "Dropped {} of {} points (sentinel or out of range)",
                dropped,
                points.len()
            );
        }

        let levels = self.index_points(&accepted)?;

        log::info!(
            "Indexed {} points at resolutions {}..={} ({} leaf cells)",
            accepted.len(),
            self.leaf_resolution + 1 - self.levels,
            self.leaf_resolution,
            levels.get(&self.leaf_resolution).map_or(0, |l| l.len())
        );

        Ok(OccupancyIndex {
            leaf_resolution: self.leaf_resolution,
            point_count: accepted.len(),
            levels,
        })
    }

    #[cfg(not(feature = "parallel"))]
    fn index_points(&self, points: &[Point]) -> Result<BTreeMap<u8, LevelMap>> {
        let mut levels = self.empty_levels();
        for point in points {
            self.record(&mut levels, *point)?;
        }
        Ok(levels)
    }

    /// Partition points across threads, then merge partial maps in input
    /// order so every list keeps the sequential ordering.
    #[cfg(feature = "parallel")]
    fn index_points(&self, points: &[Point]) -> Result<BTreeMap<u8, LevelMap>> {
        use rayon::prelude::*;

        points
            .par_iter()
            .try_fold(
                || self.empty_levels(),
                |mut levels, point| {
                    self.record(&mut levels, *point)?;
                    Ok(levels)
                },
            )
            .try_reduce(|| self.empty_levels(), |left, right| Ok(merge_levels(left, right)))
    }
}

#[cfg(feature = "parallel")]
fn merge_levels(
    mut left: BTreeMap<u8, LevelMap>,
    right: BTreeMap<u8, LevelMap>,
) -> BTreeMap<u8, LevelMap> {
    for (resolution, cells) in right {
        let level = left.entry(resolution).or_default();
        for (cell, points) in cells {
            level.entry(cell).or_default().extend(points);
        }
    }
    left
}
