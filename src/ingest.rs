//! Point record parsing.
//!
//! Records are `lat,lon` lines. Malformed records are skipped with a
//! warning; they never abort ingest.

use crate::error::{HexFieldError, Result};
use hexfield_types::point::Point;

/// Anything that can hand over the full point set before indexing.
pub trait PointSource {
    fn points(&self) -> Result<Vec<Point>>;
}

impl PointSource for Vec<Point> {
    fn points(&self) -> Result<Vec<Point>> {
        Ok(self.clone())
    }
}

impl PointSource for [Point] {
    fn points(&self) -> Result<Vec<Point>> {
        Ok(self.to_vec())
    }
}

/// In-memory `lat,lon` text, optionally with a header line.
#[derive(Debug, Clone)]
pub struct TextPointSource {
    text: String,
    has_header: bool,
}

impl TextPointSource {
    pub fn new(text: impl Into<String>, has_header: bool) -> Self {
        Self {
            text: text.into(),
            has_header,
        }
    }
}

impl PointSource for TextPointSource {
    fn points(&self) -> Result<Vec<Point>> {
        Ok(parse_points(&self.text, self.has_header).points)
    }
}

/// Outcome of parsing a batch of records.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IngestReport {
    pub points: Vec<Point>,
    /// 1-based line numbers of skipped records.
    pub skipped: Vec<usize>,
}

/// Parse one `lat,lon` record. `line` is the 1-based line number used in
/// the error.
///
/// ```
/// use hexfield::ingest::parse_point_record;
///
/// let p = parse_point_record(2, " 40.0150, -105.2705 ")?;
/// assert_eq!(p.lat(), 40.0150);
/// assert_eq!(p.lon(), -105.2705);
///
/// assert!(parse_point_record(3, "40.0150").is_err());
/// # Ok::<(), hexfield::HexFieldError>(())
/// ```
pub fn parse_point_record(line: usize, record: &str) -> Result<Point> {
    let malformed = |reason: String| HexFieldError::MalformedPoint { line, reason };

    let mut fields = record.trim().split(',');
    let (Some(lat), Some(lon), None) = (fields.next(), fields.next(), fields.next()) else {
        return Err(malformed(format!(
            "expected 2 comma-separated fields in '{}'",
            record.trim()
        )));
    };

    let lat: f64 = lat
        .trim()
        .parse()
        .map_err(|e| malformed(format!("latitude '{}': {}", lat.trim(), e)))?;
    let lon: f64 = lon
        .trim()
        .parse()
        .map_err(|e| malformed(format!("longitude '{}': {}", lon.trim(), e)))?;

    if !lat.is_finite() || !lon.is_finite() {
        return Err(malformed(format!("non-finite coordinates ({}, {})", lat, lon)));
    }

    Ok(Point::from_lat_lon(lat, lon))
}

/// Parse every record in `text`, skipping blank lines, the header when
/// `has_header` is set, and malformed records.
pub fn parse_points(text: &str, has_header: bool) -> IngestReport {
    let mut report = IngestReport::default();

    for (idx, record) in text.lines().enumerate() {
        let line = idx + 1;
        if (has_header && idx == 0) || record.trim().is_empty() {
            continue;
        }
        match parse_point_record(line, record) {
            Ok(point) => report.points.push(point),
            Err(e) => {
                log::warn!("Skipping record: {}", e);
                report.skipped.push(line);
            }
        }
    }

    if !report.skipped.is_empty() {
        log::warn!(
            "Skipped {} malformed records out of {}",
            report.skipped.len(),
            report.skipped.len() + report.points.len()
        );
    }

    report
}
