//! Candidate cell selection.
//!
//! Descendants of a root cell at the field level are kept when their center
//! lies within a radius of the region center and their representative point
//! lies inside the boundary (points on the boundary count as inside).

use crate::compute::spatial::{Cell, HexIndex, convert_km, point_in_boundary};
use crate::error::{HexFieldError, Result};
use hexfield_types::config::{CentroidMode, RegionConfig};
use hexfield_types::point::Point;
use hexfield_types::polygon::Boundary;

#[derive(Debug, Clone)]
pub struct RegionSelector<'a> {
    index: &'a HexIndex,
    boundary: &'a Boundary,
    centroid: CentroidMode,
}

impl<'a> RegionSelector<'a> {
    pub fn new(index: &'a HexIndex, boundary: &'a Boundary) -> Self {
        Self {
            index,
            boundary,
            centroid: CentroidMode::default(),
        }
    }

    pub fn with_centroid_mode(mut self, mode: CentroidMode) -> Self {
        self.centroid = mode;
        self
    }

    fn representative(&self, cell: Cell, center: Point) -> Point {
        match self.centroid {
            CentroidMode::Nominal => center,
            CentroidMode::Exact => cell.centroid(),
        }
    }

    /// Descendants of `root` at `level` within `radius` (in the index's
    /// unit) of `center` whose representative point lies in the boundary.
    /// Returned sorted by cell id.
    pub fn select(&self, level: u8, root: Cell, center: &Point, radius: f64) -> Result<Vec<Cell>> {
        if !radius.is_finite() || radius < 0.0 {
            return Err(HexFieldError::Configuration(format!(
                "Radius must be a non-negative finite number, got {}",
                radius
            )));
        }

        let children = self.index.children(root, level)?;
        let total = children.len();

        let mut selected: Vec<Cell> = children
            .into_iter()
            .filter(|cell| {
                let cell_center = self.index.center(*cell);
                if self.index.great_circle_distance(&cell_center, center) > radius {
                    return false;
                }
                point_in_boundary(self.boundary, &self.representative(*cell, cell_center))
            })
            .collect();
        selected.sort();

        log::info!(
            "Selected {} of {} cells at resolution {} under {}",
            selected.len(),
            total,
            level,
            root
        );

        Ok(selected)
    }

    /// Select using a region configuration; the root is the ancestor of the
    /// region center at `root_level`.
    pub fn select_region(&self, region: &RegionConfig) -> Result<Vec<Cell>> {
        let root = self.index.cell_of(&region.center, region.root_level)?;
        let radius = convert_km(region.radius_km, self.index.unit());
        self.select(region.level, root, &region.center, radius)
    }
}
