//! Spherical distance and containment helpers built on the geo crate.

use geo::{Centroid, Distance, HaversineMeasure, Intersects};
use hexfield_types::config::DistanceUnit;
use hexfield_types::point::Point;
use hexfield_types::polygon::Boundary;

/// Mean earth radius used by the H3 library, in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.007180918475;

/// Haversine over a sphere of radius 1: distances are central angles.
const UNIT_SPHERE: HaversineMeasure = HaversineMeasure::new(1.0);

/// Central angle between two points in radians.
///
/// Symmetric and exactly zero for identical coordinates.
#[inline]
pub fn central_angle(a: &Point, b: &Point) -> f64 {
    UNIT_SPHERE.distance(*a.inner(), *b.inner())
}

/// Great-circle distance between two points in the requested unit.
///
/// # Examples
///
/// ```rust
/// use hexfield::compute::spatial::distance_between;
/// use hexfield::{DistanceUnit, Point};
///
/// let boulder = Point::from_lat_lon(40.0150, -105.2705);
/// let denver = Point::from_lat_lon(39.7392, -104.9903);
///
/// let km = distance_between(&boulder, &denver, DistanceUnit::Kilometers);
/// assert!(km > 35.0 && km < 40.0);
/// ```
pub fn distance_between(a: &Point, b: &Point, unit: DistanceUnit) -> f64 {
    convert_radians(central_angle(a, b), unit)
}

/// Convert a central angle to the given unit.
#[inline]
pub fn convert_radians(radians: f64, unit: DistanceUnit) -> f64 {
    match unit {
        DistanceUnit::Kilometers => radians * EARTH_RADIUS_KM,
        DistanceUnit::Meters => radians * EARTH_RADIUS_KM * 1000.0,
        DistanceUnit::Radians => radians,
    }
}

/// Convert a kilometer distance to the given unit.
#[inline]
pub fn convert_km(km: f64, unit: DistanceUnit) -> f64 {
    convert_radians(km / EARTH_RADIUS_KM, unit)
}

/// Inclusive point-in-polygon test: points on the boundary count as inside.
///
/// # Examples
///
/// ```rust
/// use hexfield::compute::spatial::point_in_boundary;
/// use hexfield::{Boundary, Point};
///
/// let square = Boundary::from_ring(&[
///     Point::new(0.0, 0.0),
///     Point::new(1.0, 0.0),
///     Point::new(1.0, 1.0),
///     Point::new(0.0, 1.0),
/// ]);
///
/// assert!(point_in_boundary(&square, &Point::new(0.5, 0.5)));
/// assert!(point_in_boundary(&square, &Point::new(1.0, 0.5)));
/// assert!(!point_in_boundary(&square, &Point::new(1.5, 0.5)));
/// ```
pub fn point_in_boundary(boundary: &Boundary, point: &Point) -> bool {
    boundary.polygon().intersects(point.inner())
}

/// Planar centroid of a closed ring, or `None` for a degenerate ring.
///
/// Longitudes are unwrapped relative to the first vertex so rings crossing
/// the antimeridian stay contiguous; the result is wrapped back into
/// [-180, 180].
pub fn ring_centroid(ring: &[Point]) -> Option<Point> {
    let first = ring.first()?;
    if ring.len() < 3 {
        return None;
    }
    let coords: Vec<geo::Coord> = ring
        .iter()
        .map(|p| geo::Coord {
            x: unwrap_longitude(p.lon(), first.lon()),
            y: p.lat(),
        })
        .collect();
    let centroid = geo::Polygon::new(geo::LineString::from(coords), vec![]).centroid()?;
    Some(Point::new(wrap_longitude(centroid.x()), centroid.y()))
}

/// Shift `lon` by a whole turn so it lies within 180 degrees of `reference`.
fn unwrap_longitude(lon: f64, reference: f64) -> f64 {
    let delta = lon - reference;
    if delta > 180.0 {
        lon - 360.0
    } else if delta < -180.0 {
        lon + 360.0
    } else {
        lon
    }
}

fn wrap_longitude(lon: f64) -> f64 {
    if lon > 180.0 {
        lon - 360.0
    } else if lon < -180.0 {
        lon + 360.0
    } else {
        lon
    }
}

/// Position of a point on the unit sphere.
///
/// Chord length between two such vectors grows monotonically with the
/// great-circle distance, so Euclidean nearest neighbors in this space are
/// great-circle nearest neighbors.
#[inline]
pub fn unit_vector(point: &Point) -> [f64; 3] {
    let lat = point.lat().to_radians();
    let lon = point.lon().to_radians();
    let cos_lat = lat.cos();
    [cos_lat * lon.cos(), cos_lat * lon.sin(), lat.sin()]
}
