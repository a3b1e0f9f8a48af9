pub mod algorithms;
pub use algorithms::{
    EARTH_RADIUS_KM, central_angle, convert_km, distance_between, point_in_boundary,
    ring_centroid, unit_vector,
};

pub mod hex;
pub use hex::{Cell, HexIndex};

pub mod nearest;
pub use nearest::{BruteForceNearest, NearestNeighbor, RTreeNearest, build_nearest};
