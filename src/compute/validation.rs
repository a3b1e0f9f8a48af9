//! Validation for geographic coordinates and boundaries.

use crate::error::{HexFieldError, Result};
use hexfield_types::point::Point;
use hexfield_types::polygon::Boundary;

/// Validates a point has finite, in-range longitude and latitude.
///
/// Longitude: [-180.0, 180.0], Latitude: [-90.0, 90.0]
///
/// # Examples
///
/// ```
/// use hexfield::compute::validation::validate_geographic_point;
/// use hexfield::Point;
///
/// assert!(validate_geographic_point(&Point::from_lat_lon(40.0150, -105.2705)).is_ok());
/// assert!(validate_geographic_point(&Point::from_lat_lon(95.0, 0.0)).is_err());
/// assert!(validate_geographic_point(&Point::from_lat_lon(0.0, 200.0)).is_err());
/// ```
pub fn validate_geographic_point(point: &Point) -> Result<()> {
    let (lon, lat) = (point.lon(), point.lat());

    if !lon.is_finite() {
        return Err(HexFieldError::InvalidInput(format!(
            "Longitude must be finite, got: {}",
            lon
        )));
    }

    if !lat.is_finite() {
        return Err(HexFieldError::InvalidInput(format!(
            "Latitude must be finite, got: {}",
            lat
        )));
    }

    if !(-180.0..=180.0).contains(&lon) {
        return Err(HexFieldError::InvalidInput(format!(
            "Longitude out of range [-180.0, 180.0]: {}",
            lon
        )));
    }

    if !(-90.0..=90.0).contains(&lat) {
        return Err(HexFieldError::InvalidInput(format!(
            "Latitude out of range [-90.0, 90.0]: {}",
            lat
        )));
    }

    Ok(())
}

/// Validates a boundary: a closed exterior ring of at least three distinct
/// vertices, every coordinate in range.
pub fn validate_boundary(boundary: &Boundary) -> Result<()> {
    let exterior = boundary.polygon().exterior();

    // geo closes rings on construction, so a triangle has 4 coordinates.
    if exterior.0.len() < 4 {
        return Err(HexFieldError::InvalidInput(format!(
            "Boundary ring needs at least 3 vertices, got {}",
            exterior.0.len().saturating_sub(1)
        )));
    }

    for (idx, coord) in exterior.coords().enumerate() {
        validate_geographic_point(&Point::from(*coord)).map_err(|e| {
            HexFieldError::InvalidInput(format!("Exterior ring point at index {}: {}", idx, e))
        })?;
    }

    for (ring_idx, interior) in boundary.polygon().interiors().iter().enumerate() {
        for (idx, coord) in interior.coords().enumerate() {
            validate_geographic_point(&Point::from(*coord)).map_err(|e| {
                HexFieldError::InvalidInput(format!(
                    "Interior ring {} point at index {}: {}",
                    ring_idx, idx, e
                ))
            })?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::polygon;

    #[test]
    fn test_valid_geographic_point() {
        let cases = [
            Point::from_lat_lon(40.0150, -105.2705),
            Point::from_lat_lon(0.0, 180.0),
            Point::from_lat_lon(0.0, -180.0),
            Point::from_lat_lon(90.0, 0.0),
            Point::from_lat_lon(-90.0, 0.0),
        ];
        for p in &cases {
            assert!(validate_geographic_point(p).is_ok(), "{:?}", p);
        }
    }

    #[test]
    fn test_invalid_coordinates() {
        assert!(validate_geographic_point(&Point::from_lat_lon(90.1, 0.0)).is_err());
        assert!(validate_geographic_point(&Point::from_lat_lon(0.0, -180.1)).is_err());
        assert!(validate_geographic_point(&Point::from_lat_lon(f64::NAN, 0.0)).is_err());
        assert!(validate_geographic_point(&Point::from_lat_lon(0.0, f64::INFINITY)).is_err());
    }

    #[test]
    fn test_validate_boundary() {
        let valid = Boundary::new(polygon![
            (x: -105.7, y: 39.9),
            (x: -105.0, y: 39.9),
            (x: -105.0, y: 40.3),
            (x: -105.7, y: 40.3),
            (x: -105.7, y: 39.9),
        ]);
        assert!(validate_boundary(&valid).is_ok());

        let out_of_range = Boundary::new(polygon![
            (x: -105.7, y: 39.9),
            (x: 999.0, y: 39.9),
            (x: -105.0, y: 40.3),
            (x: -105.7, y: 39.9),
        ]);
        assert!(validate_boundary(&out_of_range).is_err());

        let degenerate = Boundary::from_ring(&[Point::new(0.0, 0.0), Point::new(1.0, 1.0)]);
        assert!(validate_boundary(&degenerate).is_err());
    }
}
