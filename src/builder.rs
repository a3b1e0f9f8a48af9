//! Pipeline builder
//!
//! Collects the configuration, the region and its boundary, validates them
//! together and produces a [`ProximityField`].

use crate::compute::geojson::{BoundarySource, load_boundary};
use crate::compute::spatial::HexIndex;
use crate::compute::validation::{validate_boundary, validate_geographic_point};
use crate::config::Config;
use crate::error::{HexFieldError, Result};
use crate::pipeline::ProximityField;
use hexfield_types::config::RegionConfig;
use hexfield_types::polygon::Boundary;

/// Builder for a field pipeline.
#[derive(Debug, Clone, Default)]
pub struct FieldBuilder {
    config: Config,
    region: Option<RegionConfig>,
    boundary: Option<Boundary>,
}

impl FieldBuilder {
    /// Create a builder with the default configuration and no region.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the pipeline configuration (resolutions, exponent, strategy).
    pub fn config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Set the region center, radius and levels.
    pub fn region(mut self, region: RegionConfig) -> Self {
        self.region = Some(region);
        self
    }

    pub fn boundary(mut self, boundary: Boundary) -> Self {
        self.boundary = Some(boundary);
        self
    }

    /// Take the boundary from `source`; it must yield exactly one match.
    pub fn boundary_from(mut self, source: &dyn BoundarySource, name: &str) -> Result<Self> {
        self.boundary = Some(load_boundary(source, name)?);
        Ok(self)
    }

    /// Validate everything and build the pipeline.
    pub fn build(self) -> Result<ProximityField> {
        self.config
            .validate()
            .map_err(HexFieldError::Configuration)?;

        let region = self
            .region
            .ok_or_else(|| HexFieldError::Configuration("No region configured".to_string()))?;
        self.config
            .validate_region(&region)
            .map_err(HexFieldError::Configuration)?;
        validate_geographic_point(&region.center)?;

        let boundary = self
            .boundary
            .ok_or_else(|| HexFieldError::Configuration("No boundary configured".to_string()))?;
        validate_boundary(&boundary)?;

        Ok(ProximityField {
            index: HexIndex::new(self.config.distance_unit),
            config: self.config,
            region,
            boundary,
        })
    }
}
