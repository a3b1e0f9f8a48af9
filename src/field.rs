//! Nearest-occupied-cell distance field.
//!
//! For each candidate cell the engine measures the great-circle distance
//! from its center to the closest occupied center, normalizes by the largest
//! such distance and reshapes the proximity `1 - n` with an exponent. Scores
//! are always in `[0, 1]`, with 1 at occupied cells.

use crate::compute::spatial::{Cell, HexIndex, NearestNeighbor, build_nearest};
use crate::error::{HexFieldError, Result};
use crate::occupancy::OccupancyIndex;
use hexfield_types::config::NearestStrategy;
use rustc_hash::FxHashMap;

pub const DEFAULT_EXPONENT: f64 = 0.5;

/// Score for one candidate cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldEntry {
    pub cell: Cell,
    /// Distance to the nearest occupied center, in the index's unit.
    pub distance: f64,
    pub score: f64,
}

/// Scores over one candidate set. Built fresh per computation.
#[derive(Debug, Clone)]
pub struct Field {
    resolution: u8,
    exponent: f64,
    max_distance: f64,
    entries: Vec<FieldEntry>,
    positions: FxHashMap<Cell, usize>,
}

impl Field {
    fn new(resolution: u8, exponent: f64, max_distance: f64, entries: Vec<FieldEntry>) -> Self {
        let positions = entries
            .iter()
            .enumerate()
            .map(|(i, entry)| (entry.cell, i))
            .collect();
        Self {
            resolution,
            exponent,
            max_distance,
            entries,
            positions,
        }
    }

    pub fn resolution(&self) -> u8 {
        self.resolution
    }

    pub fn exponent(&self) -> f64 {
        self.exponent
    }

    /// Largest nearest-occupied distance over the candidates.
    pub fn max_distance(&self) -> f64 {
        self.max_distance
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in candidate order.
    pub fn entries(&self) -> &[FieldEntry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldEntry> {
        self.entries.iter()
    }

    pub fn get(&self, cell: Cell) -> Option<&FieldEntry> {
        self.positions.get(&cell).map(|&i| &self.entries[i])
    }

    pub fn score(&self, cell: Cell) -> Option<f64> {
        self.get(cell).map(|entry| entry.score)
    }

    /// Lowest and highest scoring entries; ties resolve to the earliest.
    pub fn extremes(&self) -> Option<(FieldEntry, FieldEntry)> {
        let first = *self.entries.first()?;
        Some(self.entries.iter().skip(1).fold((first, first), |(lo, hi), e| {
            (
                if e.score < lo.score { *e } else { lo },
                if e.score > hi.score { *e } else { hi },
            )
        }))
    }
}

/// Map a normalized distance `n` in `[0, 1]` to `(1 - n)^exponent`.
///
/// ```
/// use hexfield::field::reshape;
///
/// assert_eq!(reshape(0.0, 0.5), 1.0);
/// assert_eq!(reshape(1.0, 0.5), 0.0);
/// assert!((reshape(0.75, 0.5) - 0.5).abs() < 1e-12);
/// assert_eq!(reshape(0.25, 1.0), 0.75);
/// ```
#[inline]
pub fn reshape(normalized: f64, exponent: f64) -> f64 {
    (1.0 - normalized).clamp(0.0, 1.0).powf(exponent)
}

/// Computes a [`Field`] over candidate cells.
#[derive(Debug, Clone)]
pub struct DistanceFieldEngine<'a> {
    index: &'a HexIndex,
    exponent: f64,
    strategy: NearestStrategy,
}

impl<'a> DistanceFieldEngine<'a> {
    pub fn new(index: &'a HexIndex) -> Self {
        Self {
            index,
            exponent: DEFAULT_EXPONENT,
            strategy: NearestStrategy::default(),
        }
    }

    /// Reshaping exponent; 1.0 leaves linear proximity untouched.
    pub fn with_exponent(mut self, exponent: f64) -> Self {
        self.exponent = exponent;
        self
    }

    pub fn with_strategy(mut self, strategy: NearestStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Measure `candidates` against the occupied cells of `occupancy` at
    /// `resolution`.
    pub fn compute(
        &self,
        candidates: &[Cell],
        occupancy: &OccupancyIndex,
        resolution: u8,
    ) -> Result<Field> {
        if !occupancy.contains_level(resolution) {
            return Err(HexFieldError::Configuration(format!(
                "Resolution {} was not materialized (leaf resolution {})",
                resolution,
                occupancy.leaf_resolution()
            )));
        }

        let centers = occupancy.occupied_centers(resolution);
        if centers.is_empty() {
            return Err(HexFieldError::EmptyOccupiedSet { resolution });
        }

        let nearest = build_nearest(self.strategy, centers, self.index.unit());
        self.compute_with(candidates, nearest.as_ref(), resolution)
    }

    /// Same as [`compute`](Self::compute) with a caller-supplied
    /// nearest-neighbor structure.
    pub fn compute_with(
        &self,
        candidates: &[Cell],
        nearest: &dyn NearestNeighbor,
        resolution: u8,
    ) -> Result<Field> {
        if !self.exponent.is_finite() || self.exponent <= 0.0 {
            return Err(HexFieldError::Configuration(format!(
                "Exponent must be a positive finite number, got {}",
                self.exponent
            )));
        }
        if nearest.is_empty() {
            return Err(HexFieldError::EmptyOccupiedSet { resolution });
        }
        if let Some(cell) = candidates.iter().find(|c| c.resolution() != resolution) {
            return Err(HexFieldError::Configuration(format!(
                "Candidate {} is at resolution {}, expected {}",
                cell,
                cell.resolution(),
                resolution
            )));
        }

        let distances = nearest_distances(candidates, nearest)
            .ok_or(HexFieldError::EmptyOccupiedSet { resolution })?;

        let max_distance = distances.iter().copied().fold(0.0_f64, f64::max);
        let degenerate = max_distance == 0.0;
        if degenerate && !candidates.is_empty() {
            log::debug!(
                "All {} candidates coincide with occupied cells; scoring every cell 1.0",
                candidates.len()
            );
        }

        let entries: Vec<FieldEntry> = candidates
            .iter()
            .zip(distances)
            .map(|(cell, distance)| {
                let score = if degenerate {
                    1.0
                } else {
                    reshape(distance / max_distance, self.exponent)
                };
                FieldEntry {
                    cell: *cell,
                    distance,
                    score,
                }
            })
            .collect();

        if entries.is_empty() {
            log::warn!("No candidate cells at resolution {}; field is empty", resolution);
        } else {
            log::info!(
                "Computed field over {} cells against {} occupied cells (max distance {:.4})",
                entries.len(),
                nearest.len(),
                max_distance
            );
        }

        Ok(Field::new(resolution, self.exponent, max_distance, entries))
    }
}

#[cfg(not(feature = "parallel"))]
fn nearest_distances(candidates: &[Cell], nearest: &dyn NearestNeighbor) -> Option<Vec<f64>> {
    candidates
        .iter()
        .map(|cell| nearest.nearest_distance(&cell.center()))
        .collect()
}

#[cfg(feature = "parallel")]
fn nearest_distances(candidates: &[Cell], nearest: &dyn NearestNeighbor) -> Option<Vec<f64>> {
    use rayon::prelude::*;

    candidates
        .par_iter()
        .map(|cell| nearest.nearest_distance(&cell.center()))
        .collect()
}
