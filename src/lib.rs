//! Hexagonal multi-resolution occupancy and proximity fields.
//!
//! Point samples are assigned to H3 cells at a leaf resolution and rolled up
//! through coarser levels. For a region (a root cell, a radius and a boundary
//! polygon) every candidate cell gets a score in `[0, 1]` measuring how close
//! it is to the nearest occupied cell, ready to be colored and rendered.
//!
//! ```rust
//! use hexfield::{Boundary, FieldBuilder, Point, RegionConfig};
//!
//! let boundary = Boundary::from_ring(&[
//!     Point::new(-105.7, 39.9),
//!     Point::new(-105.0, 39.9),
//!     Point::new(-105.0, 40.3),
//!     Point::new(-105.7, 40.3),
//! ]);
//! let center = Point::from_lat_lon(40.0150, -105.2705);
//!
//! let pipeline = FieldBuilder::new()
//!     .region(RegionConfig::new(center, 5.0, 9, 6))
//!     .boundary(boundary)
//!     .build()?;
//!
//! let output = pipeline.run(&[center, Point::from_lat_lon(40.02, -105.26)])?;
//! assert!(output.field.iter().all(|e| (0.0..=1.0).contains(&e.score)));
//! # Ok::<(), hexfield::HexFieldError>(())
//! ```

pub mod builder;
pub mod compute;
pub mod config;
pub mod error;
pub mod field;
pub mod gradient;
pub mod ingest;
pub mod occupancy;
pub mod pipeline;
pub mod region;

pub use builder::FieldBuilder;
pub use error::{HexFieldError, Result};

pub use config::{
    Boundary, CentroidMode, Config, DistanceUnit, NearestStrategy, Point, RegionConfig,
};

pub use compute::spatial::{Cell, HexIndex, NearestNeighbor};
pub use field::{DistanceFieldEngine, Field, FieldEntry};
pub use gradient::{Rgb, color_of};
pub use ingest::{IngestReport, PointSource, parse_points};
pub use occupancy::{OccupancyBuilder, OccupancyIndex};
pub use pipeline::{FieldOutput, ProximityField, RenderCell};
pub use region::RegionSelector;

// Re-export validation and GeoJSON utilities
pub use compute::geojson;
pub use compute::validation;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common imports
pub mod prelude {
    pub use crate::{FieldBuilder, HexFieldError, Result};

    pub use crate::{Boundary, Cell, Point, RegionConfig};

    pub use crate::{CentroidMode, Config, DistanceUnit, NearestStrategy};

    pub use crate::{Field, FieldOutput, ProximityField, color_of};

    pub use crate::{geojson, validation};
}
