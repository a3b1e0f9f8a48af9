use serde::{Deserialize, Serialize};

/// A geographic sample with longitude/latitude coordinates in degrees.
///
/// Stored as a `geo::Point` so `x` is the longitude and `y` the latitude.
/// Points are never mutated once created.
///
/// # Examples
///
/// ```
/// use hexfield_types::point::Point;
///
/// let p = Point::new(-105.2705, 40.0150);
/// assert_eq!(p.x(), -105.2705);
/// assert_eq!(p.lat(), 40.0150);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    inner: geo::Point<f64>,
}

impl Point {
    /// Create a point from x (longitude) and y (latitude).
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            inner: geo::Point::new(x, y),
        }
    }

    /// Create a point from a (latitude, longitude) pair, the order used by
    /// point sources.
    #[inline]
    pub fn from_lat_lon(lat: f64, lon: f64) -> Self {
        Self::new(lon, lat)
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.inner.x()
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.inner.y()
    }

    /// Get the longitude (alias for x).
    #[inline]
    pub fn lon(&self) -> f64 {
        self.x()
    }

    /// Get the latitude (alias for y).
    #[inline]
    pub fn lat(&self) -> f64 {
        self.y()
    }

    /// Access the inner `geo::Point`.
    #[inline]
    pub fn inner(&self) -> &geo::Point<f64> {
        &self.inner
    }

    /// Convert into the inner `geo::Point`.
    #[inline]
    pub fn into_inner(self) -> geo::Point<f64> {
        self.inner
    }

    /// Both coordinates are finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x().is_finite() && self.y().is_finite()
    }

    /// Whether this point equals the `(lat, lon)` placeholder a point source
    /// emits for a missing reading.
    ///
    /// ```
    /// use hexfield_types::point::Point;
    ///
    /// let missing = Point::from_lat_lon(-999.0, -999.0);
    /// assert!(missing.is_sentinel((-999.0, -999.0)));
    /// assert!(!Point::from_lat_lon(40.0, -105.0).is_sentinel((-999.0, -999.0)));
    /// ```
    #[inline]
    pub fn is_sentinel(&self, sentinel: (f64, f64)) -> bool {
        self.lat() == sentinel.0 && self.lon() == sentinel.1
    }
}

impl From<geo::Point<f64>> for Point {
    fn from(inner: geo::Point<f64>) -> Self {
        Self { inner }
    }
}

impl From<Point> for geo::Point<f64> {
    fn from(point: Point) -> Self {
        point.inner
    }
}

impl From<geo::Coord<f64>> for Point {
    fn from(coord: geo::Coord<f64>) -> Self {
        Self::new(coord.x, coord.y)
    }
}
