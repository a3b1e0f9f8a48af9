//! End-to-end field computation.
//!
//! ingest → occupancy → region selection → distance field → colors. Each
//! stage consumes the previous stage's output without modifying it.

use crate::compute::spatial::{Cell, HexIndex};
use crate::config::Config;
use crate::error::Result;
use crate::field::{DistanceFieldEngine, Field};
use crate::gradient::{Rgb, color_of};
use crate::ingest::PointSource;
use crate::occupancy::{OccupancyBuilder, OccupancyIndex};
use crate::region::RegionSelector;
use hexfield_types::config::RegionConfig;
use hexfield_types::point::Point;
use hexfield_types::polygon::Boundary;

/// A validated pipeline. Create one with [`FieldBuilder`](crate::FieldBuilder).
#[derive(Debug, Clone)]
pub struct ProximityField {
    pub(crate) config: Config,
    pub(crate) region: RegionConfig,
    pub(crate) boundary: Boundary,
    pub(crate) index: HexIndex,
}

/// Everything one run produced.
#[derive(Debug, Clone)]
pub struct FieldOutput {
    pub occupancy: OccupancyIndex,
    pub candidates: Vec<Cell>,
    pub field: Field,
}

/// What the renderer needs for one cell.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderCell {
    pub cell: Cell,
    pub ring: Vec<Point>,
    pub score: f64,
    pub color: Rgb,
}

impl FieldOutput {
    /// Boundary ring and color for every field cell, in field order.
    pub fn render_cells(&self) -> Vec<RenderCell> {
        self.field
            .iter()
            .map(|entry| RenderCell {
                cell: entry.cell,
                ring: entry.cell.boundary_ring(),
                score: entry.score,
                color: color_of(entry.score),
            })
            .collect()
    }
}

impl ProximityField {
    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn region(&self) -> &RegionConfig {
        &self.region
    }

    pub fn boundary(&self) -> &Boundary {
        &self.boundary
    }

    pub fn index(&self) -> &HexIndex {
        &self.index
    }

    pub fn build_occupancy(&self, points: &[Point]) -> Result<OccupancyIndex> {
        OccupancyBuilder::new(&self.index, self.config.leaf_resolution, self.config.levels)?
            .with_sentinel(self.config.sentinel)
            .build(points)
    }

    pub fn select_candidates(&self) -> Result<Vec<Cell>> {
        RegionSelector::new(&self.index, &self.boundary)
            .with_centroid_mode(self.config.centroid)
            .select_region(&self.region)
    }

    pub fn compute_field(&self, candidates: &[Cell], occupancy: &OccupancyIndex) -> Result<Field> {
        DistanceFieldEngine::new(&self.index)
            .with_exponent(self.config.exponent)
            .with_strategy(self.config.nearest)
            .compute(candidates, occupancy, self.region.level)
    }

    /// Run every stage over a static point set.
    pub fn run(&self, points: &[Point]) -> Result<FieldOutput> {
        let occupancy = self.build_occupancy(points)?;
        let candidates = self.select_candidates()?;
        let field = self.compute_field(&candidates, &occupancy)?;

        if let Some((lo, hi)) = field.extremes() {
            log::info!(
                "Least proximate cell {} ({:.3}), most proximate cell {} ({:.3})",
                lo.cell,
                lo.score,
                hi.cell,
                hi.score
            );
        }

        Ok(FieldOutput {
            occupancy,
            candidates,
            field,
        })
    }

    /// Pull the full point set from `source`, then [`run`](Self::run).
    pub fn run_source<S: PointSource + ?Sized>(&self, source: &S) -> Result<FieldOutput> {
        let points = source.points()?;
        self.run(&points)
    }
}
