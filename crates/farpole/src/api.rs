//! Curated re-export surface.
//!
//! Prefer these re-exports for clarity and consistency across callers; the
//! module tree stays free to move things around underneath.

// Polygon input and distance primitives
pub use crate::geom::{segment_distance, signed_distance, BBox, Polygon, Ring};
// Random polygons for tests and benches
pub use crate::geom::rand::{draw_polygon_radial, RadialCfg, ReplayToken};
// Branch-and-bound search
pub use crate::search::{find_pole, find_pole_with_stats, Cell, Pole, SearchCfg, SearchStats};
// Validation errors
pub use crate::error::InvalidPolygon;
