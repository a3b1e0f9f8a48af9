//! Compute layer: spatial primitives, validation and GeoJSON conversion.
//!
//! This module is independent of the pipeline stages built on top of it:
//! - Hexagonal index navigation and great-circle measurement
//! - Nearest-neighbor strategies
//! - Coordinate and boundary validation
//! - Boundary loading and field export as GeoJSON

pub mod geojson;
pub mod spatial;
pub mod validation;
