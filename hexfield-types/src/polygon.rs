use crate::point::Point;
use geo::Polygon;
use serde::{Deserialize, Serialize};

/// The polygon delimiting a region of interest, in lon/lat degrees.
///
/// Read-only input to region selection. The optional name records which
/// feature of the boundary source it came from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Boundary {
    pub name: Option<String>,
    pub polygon: Polygon,
}

impl Boundary {
    pub fn new(polygon: Polygon) -> Self {
        Self {
            name: None,
            polygon,
        }
    }

    pub fn named(name: impl Into<String>, polygon: Polygon) -> Self {
        Self {
            name: Some(name.into()),
            polygon,
        }
    }

    /// Build a boundary from an ordered ring of points. The ring is closed
    /// automatically if the last point differs from the first.
    ///
    /// ```
    /// use hexfield_types::{point::Point, polygon::Boundary};
    ///
    /// let square = Boundary::from_ring(&[
    ///     Point::new(0.0, 0.0),
    ///     Point::new(1.0, 0.0),
    ///     Point::new(1.0, 1.0),
    ///     Point::new(0.0, 1.0),
    /// ]);
    /// assert_eq!(square.ring().len(), 5);
    /// ```
    pub fn from_ring(points: &[Point]) -> Self {
        let coords: Vec<geo::Coord> = points
            .iter()
            .map(|p| geo::Coord { x: p.x(), y: p.y() })
            .collect();
        Self::new(Polygon::new(geo::LineString::from(coords), vec![]))
    }

    pub fn polygon(&self) -> &Polygon {
        &self.polygon
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The closed exterior ring.
    pub fn ring(&self) -> Vec<Point> {
        self.polygon
            .exterior()
            .coords()
            .map(|c| Point::from(*c))
            .collect()
    }
}

impl From<Polygon> for Boundary {
    fn from(polygon: Polygon) -> Self {
        Self::new(polygon)
    }
}
