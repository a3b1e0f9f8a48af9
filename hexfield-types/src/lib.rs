//! # hexfield-types
//!
//! Plain data types shared by the `hexfield` crate:
//!
//! - **Point**: an immutable latitude/longitude sample in degrees
//! - **Boundary**: the polygon delimiting the region of interest
//! - **Config enums and `RegionConfig`**: serializable knobs for the pipeline
//!
//! All types are serializable with Serde and built on top of the `geo` crate's
//! geometric primitives.
//!
//! ## Examples
//!
//! ```rust
//! use hexfield_types::point::Point;
//!
//! let boulder = Point::from_lat_lon(40.0150, -105.2705);
//! assert_eq!(boulder.lat(), 40.0150);
//! assert_eq!(boulder.lon(), -105.2705);
//! ```

pub mod config;
pub mod point;
pub mod polygon;
