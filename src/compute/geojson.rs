//! GeoJSON boundary loading and field export.
//!
//! Boundaries come from a `FeatureCollection` whose features carry a name
//! property; exactly one feature must match the requested region. Fields go
//! out as one polygon feature per cell, carrying its score and color.

use crate::compute::validation::validate_boundary;
use crate::error::{HexFieldError, Result};
use crate::field::Field;
use crate::gradient::color_of;
use geojson::feature::Id;
use geojson::{Feature, FeatureCollection, Geometry, Value};
use hexfield_types::polygon::Boundary;
use serde_json::Map;
use std::path::Path;

/// Property key holding the region name in county-style boundary files.
pub const DEFAULT_NAME_PROPERTY: &str = "NAME";

/// Provider of candidate boundaries for a named region.
pub trait BoundarySource {
    /// Every boundary whose name matches `name`.
    fn matching(&self, name: &str) -> Result<Vec<Boundary>>;
}

/// Require exactly one match; zero or several is a configuration error.
pub fn select_boundary(name: &str, mut matches: Vec<Boundary>) -> Result<Boundary> {
    match matches.len() {
        1 => Ok(matches.remove(0)),
        0 => Err(HexFieldError::Configuration(format!(
            "No boundary named '{}'",
            name
        ))),
        n => Err(HexFieldError::Configuration(format!(
            "Expected one boundary named '{}', found {}",
            name, n
        ))),
    }
}

/// Fetch the single boundary named `name` from `source` and validate it.
pub fn load_boundary(source: &dyn BoundarySource, name: &str) -> Result<Boundary> {
    let boundary = select_boundary(name, source.matching(name)?)?;
    validate_boundary(&boundary)?;
    Ok(boundary)
}

/// Boundaries read from a GeoJSON `FeatureCollection`.
#[derive(Debug, Clone)]
pub struct GeoJsonBoundarySource {
    collection: FeatureCollection,
    property: String,
}

impl GeoJsonBoundarySource {
    pub fn from_json(json: &str) -> Result<Self> {
        let collection: FeatureCollection = serde_json::from_str(json).map_err(|e| {
            HexFieldError::InvalidInput(format!("Failed to parse GeoJSON: {}", e))
        })?;
        Ok(Self {
            collection,
            property: DEFAULT_NAME_PROPERTY.to_string(),
        })
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Match on a different name property.
    pub fn with_property(mut self, property: impl Into<String>) -> Self {
        self.property = property.into();
        self
    }

    pub fn len(&self) -> usize {
        self.collection.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.collection.features.is_empty()
    }
}

impl BoundarySource for GeoJsonBoundarySource {
    fn matching(&self, name: &str) -> Result<Vec<Boundary>> {
        self.collection
            .features
            .iter()
            .filter(|feature| {
                feature
                    .property(&self.property)
                    .and_then(|v| v.as_str())
                    .is_some_and(|v| v == name)
            })
            .map(|feature| feature_to_boundary(name, feature))
            .collect()
    }
}

fn feature_to_boundary(name: &str, feature: &Feature) -> Result<Boundary> {
    let geometry = feature.geometry.as_ref().ok_or_else(|| {
        HexFieldError::InvalidInput(format!("Feature '{}' has no geometry", name))
    })?;

    let polygon = match &geometry.value {
        Value::Polygon(rings) => polygon_from_rings(rings)?,
        Value::MultiPolygon(polygons) if polygons.len() == 1 => polygon_from_rings(&polygons[0])?,
        Value::MultiPolygon(polygons) => {
            return Err(HexFieldError::InvalidInput(format!(
                "Feature '{}' is a MultiPolygon with {} parts",
                name,
                polygons.len()
            )));
        }
        _ => {
            return Err(HexFieldError::InvalidInput(format!(
                "Feature '{}' geometry is not a Polygon",
                name
            )));
        }
    };

    Ok(Boundary::named(name, polygon))
}

fn ring_from_positions(ring: &[Vec<f64>]) -> Result<geo::LineString> {
    let coords = ring
        .iter()
        .map(|coords| {
            if coords.len() < 2 {
                return Err(HexFieldError::InvalidInput(
                    "Coordinate must have at least 2 values".to_string(),
                ));
            }
            Ok(geo::Coord {
                x: coords[0],
                y: coords[1],
            })
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(geo::LineString::from(coords))
}

fn polygon_from_rings(rings: &[Vec<Vec<f64>>]) -> Result<geo::Polygon> {
    let Some((exterior, interiors)) = rings.split_first() else {
        return Err(HexFieldError::InvalidInput(
            "Polygon must have at least one ring".to_string(),
        ));
    };

    let exterior = ring_from_positions(exterior)?;
    let interiors = interiors
        .iter()
        .map(|ring| ring_from_positions(ring))
        .collect::<Result<Vec<_>>>()?;

    Ok(geo::Polygon::new(exterior, interiors))
}

/// One polygon feature per field cell with `cell`, `score`, `distance` and
/// `color` properties. Coordinates are lon/lat.
pub fn field_to_feature_collection(field: &Field) -> FeatureCollection {
    let features = field
        .iter()
        .map(|entry| {
            let ring: Vec<Vec<f64>> = entry
                .cell
                .boundary_ring()
                .iter()
                .map(|p| vec![p.lon(), p.lat()])
                .collect();

            let mut props = Map::new();
            props.insert("cell".to_string(), entry.cell.to_string().into());
            props.insert("score".to_string(), entry.score.into());
            props.insert("distance".to_string(), entry.distance.into());
            props.insert("color".to_string(), color_of(entry.score).to_hex().into());

            Feature {
                bbox: None,
                geometry: Some(Geometry::new(Value::Polygon(vec![ring]))),
                id: Some(Id::String(entry.cell.to_string())),
                properties: Some(props),
                foreign_members: None,
            }
        })
        .collect();

    FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    }
}

/// Serialized form of [`field_to_feature_collection`].
pub fn field_to_geojson(field: &Field) -> Result<String> {
    serde_json::to_string(&field_to_feature_collection(field)).map_err(|e| {
        HexFieldError::Serialization(format!("Failed to serialize field: {}", e))
    })
}
