//! Hexagonal hierarchy wrapper over the H3 index.
//!
//! Cells are derived values: everything about a [`Cell`] (resolution, center,
//! boundary) is recomputed from its identifier on demand.

use crate::compute::spatial::algorithms::{distance_between, ring_centroid};
use crate::error::{HexFieldError, Result};
use h3o::{CellIndex, LatLng, Resolution};
use hexfield_types::config::DistanceUnit;
use hexfield_types::point::Point;
use std::fmt;
use std::str::FromStr;

/// One hexagon (or pentagon) at one resolution of the hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell(CellIndex);

impl Cell {
    /// Raw 64-bit identifier.
    #[inline]
    pub fn id(&self) -> u64 {
        u64::from(self.0)
    }

    #[inline]
    pub fn index(&self) -> CellIndex {
        self.0
    }

    #[inline]
    pub fn resolution(&self) -> u8 {
        u8::from(self.0.resolution())
    }

    /// Nominal center of the cell.
    pub fn center(&self) -> Point {
        let ll = LatLng::from(self.0);
        Point::from_lat_lon(ll.lat(), ll.lng())
    }

    /// Closed boundary ring: the first vertex is repeated at the end.
    pub fn boundary_ring(&self) -> Vec<Point> {
        let mut ring: Vec<Point> = self
            .0
            .boundary()
            .iter()
            .map(|ll| Point::from_lat_lon(ll.lat(), ll.lng()))
            .collect();
        if let Some(first) = ring.first().copied() {
            ring.push(first);
        }
        ring
    }

    /// Planar centroid of the boundary ring, falling back to the center.
    pub fn centroid(&self) -> Point {
        ring_centroid(&self.boundary_ring()).unwrap_or_else(|| self.center())
    }
}

impl From<CellIndex> for Cell {
    fn from(index: CellIndex) -> Self {
        Self(index)
    }
}

impl TryFrom<u64> for Cell {
    type Error = HexFieldError;

    fn try_from(value: u64) -> Result<Self> {
        Ok(Self(CellIndex::try_from(value)?))
    }
}

impl FromStr for Cell {
    type Err = HexFieldError;

    fn from_str(s: &str) -> Result<Self> {
        CellIndex::from_str(s)
            .map(Self)
            .map_err(|e| HexFieldError::Hex(format!("Invalid cell '{}': {}", s, e)))
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Navigation and measurement over the hexagonal hierarchy.
///
/// Holds the distance unit so every distance within one field computation
/// is measured the same way.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HexIndex {
    unit: DistanceUnit,
}

impl HexIndex {
    pub fn new(unit: DistanceUnit) -> Self {
        Self { unit }
    }

    pub fn unit(&self) -> DistanceUnit {
        self.unit
    }

    /// Cell containing `point` at `resolution`.
    ///
    /// The point is located at the finest resolution and walked up, so
    /// `cell_of(p, r)` is always the ancestor of `cell_of(p, r')` for any
    /// finer `r'`. H3 children do not tile their parent exactly, which means
    /// this can differ from a direct lookup near cell edges.
    ///
    /// ```rust
    /// use hexfield::compute::spatial::HexIndex;
    /// use hexfield::Point;
    ///
    /// let index = HexIndex::default();
    /// let p = Point::from_lat_lon(40.0150, -105.2705);
    ///
    /// let leaf = index.cell_of(&p, 11)?;
    /// let coarse = index.cell_of(&p, 7)?;
    /// assert_eq!(index.ancestor(leaf, 7)?, coarse);
    /// # Ok::<(), hexfield::HexFieldError>(())
    /// ```
    pub fn cell_of(&self, point: &Point, resolution: u8) -> Result<Cell> {
        let resolution = Resolution::try_from(resolution)?;
        let ll = LatLng::new(point.lat(), point.lon())?;
        self.ancestor_at(Cell(ll.to_cell(Resolution::Fifteen)), resolution)
    }

    /// Parent one resolution coarser. Fails for resolution 0 cells.
    pub fn parent(&self, cell: Cell) -> Result<Cell> {
        let coarser = cell.0.resolution().pred().ok_or_else(|| {
            HexFieldError::Configuration(format!("Cell {} is at the coarsest resolution", cell))
        })?;
        self.ancestor_at(cell, coarser)
    }

    /// Ancestor of `cell` at `resolution`, which must not be finer than the
    /// cell itself. A cell is its own ancestor at its own resolution.
    pub fn ancestor(&self, cell: Cell, resolution: u8) -> Result<Cell> {
        let resolution = Resolution::try_from(resolution)?;
        if resolution > cell.0.resolution() {
            return Err(HexFieldError::Configuration(format!(
                "Ancestor resolution {} is finer than cell {} at {}",
                u8::from(resolution),
                cell,
                cell.resolution()
            )));
        }
        self.ancestor_at(cell, resolution)
    }

    fn ancestor_at(&self, cell: Cell, resolution: Resolution) -> Result<Cell> {
        cell.0.parent(resolution).map(Cell).ok_or_else(|| {
            HexFieldError::Hex(format!(
                "No ancestor of {} at resolution {}",
                cell,
                u8::from(resolution)
            ))
        })
    }

    /// All descendants of `cell` at `target`, which must be strictly finer.
    /// The result exactly covers the cell's area without overlap.
    pub fn children(&self, cell: Cell, target: u8) -> Result<Vec<Cell>> {
        let target_resolution = Resolution::try_from(target)?;
        if target_resolution <= cell.0.resolution() {
            return Err(HexFieldError::Configuration(format!(
                "Child resolution {} must be finer than cell {} at {}",
                target,
                cell,
                cell.resolution()
            )));
        }
        Ok(cell.0.children(target_resolution).map(Cell).collect())
    }

    #[inline]
    pub fn center(&self, cell: Cell) -> Point {
        cell.center()
    }

    #[inline]
    pub fn boundary_ring(&self, cell: Cell) -> Vec<Point> {
        cell.boundary_ring()
    }

    /// Great-circle distance in this index's unit.
    #[inline]
    pub fn great_circle_distance(&self, a: &Point, b: &Point) -> f64 {
        distance_between(a, b, self.unit)
    }
}
