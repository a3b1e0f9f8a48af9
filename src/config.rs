//! Configuration for hexfield pipelines
//!
//! This module provides the pipeline configuration and re-exports the
//! configuration enums from the `hexfield-types` crate for convenience.
use serde::de::Error;

pub use hexfield_types::config::{CentroidMode, DistanceUnit, NearestStrategy, RegionConfig};
pub use hexfield_types::point::Point;
pub use hexfield_types::polygon::Boundary;

/// Finest resolution supported by the hexagonal hierarchy.
pub const MAX_RESOLUTION: u8 = 15;

/// Pipeline configuration
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Resolution at which samples are first assigned to cells.
    #[serde(default = "Config::default_leaf_resolution")]
    pub leaf_resolution: u8,

    /// Number of hierarchy levels materialized, counting the leaf level.
    #[serde(default = "Config::default_levels")]
    pub levels: u8,

    /// Reshaping exponent applied to normalized proximity.
    #[serde(default = "Config::default_exponent")]
    pub exponent: f64,

    #[serde(default)]
    pub distance_unit: DistanceUnit,

    #[serde(default)]
    pub nearest: NearestStrategy,

    #[serde(default)]
    pub centroid: CentroidMode,

    /// `(lat, lon)` pair marking a missing reading. `None` disables filtering.
    #[serde(default = "Config::default_sentinel")]
    pub sentinel: Option<(f64, f64)>,
}

impl Config {
    const fn default_leaf_resolution() -> u8 {
        11
    }

    const fn default_levels() -> u8 {
        8
    }

    const fn default_exponent() -> f64 {
        0.5
    }

    const fn default_sentinel() -> Option<(f64, f64)> {
        Some((-999.0, -999.0))
    }

    pub fn with_leaf_resolution(mut self, resolution: u8) -> Self {
        assert!(
            resolution <= MAX_RESOLUTION,
            "Leaf resolution must be at most {}",
            MAX_RESOLUTION
        );
        self.leaf_resolution = resolution;
        self
    }

    pub fn with_levels(mut self, levels: u8) -> Self {
        assert!(levels > 0, "Level count must be greater than zero");
        self.levels = levels;
        self
    }

    pub fn with_exponent(mut self, exponent: f64) -> Self {
        assert!(
            exponent.is_finite() && exponent > 0.0,
            "Exponent must be a positive finite number"
        );
        self.exponent = exponent;
        self
    }

    pub fn with_distance_unit(mut self, unit: DistanceUnit) -> Self {
        self.distance_unit = unit;
        self
    }

    pub fn with_nearest(mut self, strategy: NearestStrategy) -> Self {
        self.nearest = strategy;
        self
    }

    pub fn with_centroid(mut self, mode: CentroidMode) -> Self {
        self.centroid = mode;
        self
    }

    pub fn with_sentinel(mut self, sentinel: Option<(f64, f64)>) -> Self {
        self.sentinel = sentinel;
        self
    }

    /// Coarsest resolution materialized by the occupancy builder.
    pub fn coarsest_resolution(&self) -> u8 {
        self.leaf_resolution
            .saturating_add(1)
            .saturating_sub(self.levels)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.leaf_resolution > MAX_RESOLUTION {
            return Err(format!(
                "Leaf resolution {} exceeds maximum {}",
                self.leaf_resolution, MAX_RESOLUTION
            ));
        }

        if self.levels == 0 {
            return Err("Level count must be greater than zero".to_string());
        }

        if self.levels > self.leaf_resolution {
            return Err(format!(
                "Cannot materialize {} levels below leaf resolution {}",
                self.levels, self.leaf_resolution
            ));
        }

        if !self.exponent.is_finite() || self.exponent <= 0.0 {
            return Err(format!(
                "Exponent must be a positive finite number, got {}",
                self.exponent
            ));
        }

        if let Some((lat, lon)) = self.sentinel
            && (lat.is_nan() || lon.is_nan())
        {
            return Err("Sentinel coordinates must not be NaN".to_string());
        }

        Ok(())
    }

    /// Check that a region can be computed from the occupancy this config
    /// builds.
    pub fn validate_region(&self, region: &RegionConfig) -> Result<(), String> {
        if region.level > self.leaf_resolution {
            return Err(format!(
                "Field level {} is finer than leaf resolution {}",
                region.level, self.leaf_resolution
            ));
        }

        if region.level < self.coarsest_resolution() {
            return Err(format!(
                "Field level {} is coarser than the coarsest materialized level {}",
                region.level,
                self.coarsest_resolution()
            ));
        }

        if region.root_level >= region.level {
            return Err(format!(
                "Root level {} must be coarser than field level {}",
                region.root_level, region.level
            ));
        }

        if !region.radius_km.is_finite() || region.radius_km < 0.0 {
            return Err(format!(
                "Radius must be a non-negative finite number, got {}",
                region.radius_km
            ));
        }

        Ok(())
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let config: Config = serde_json::from_str(json)?;
        if let Err(e) = config.validate() {
            return Err(Error::custom(e));
        }
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    #[cfg(feature = "toml")]
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        let config: Config = toml::from_str(toml_str)?;
        if let Err(e) = config.validate() {
            return Err(toml::de::Error::custom(e));
        }
        Ok(config)
    }

    #[cfg(feature = "toml")]
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            leaf_resolution: Self::default_leaf_resolution(),
            levels: Self::default_levels(),
            exponent: Self::default_exponent(),
            distance_unit: DistanceUnit::default(),
            nearest: NearestStrategy::default(),
            centroid: CentroidMode::default(),
            sentinel: Self::default_sentinel(),
        }
    }
}
