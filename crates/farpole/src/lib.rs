//! Pole-of-inaccessibility search for simple polygons with holes.
//!
//! Given a polygon as an explicit list of rings (outer boundary first, then
//! holes), find the interior point farthest from the boundary together with
//! that distance, to within a caller-chosen absolute precision. The search is
//! an adaptive branch-and-bound over square cells of the bounding box: pop
//! the cell with the largest achievable-distance bound, update the incumbent,
//! prune or subdivide.
//!
//! The result is an anytime approximation, not an exact optimum: the reported
//! distance is always achievable, and within `precision` of the best
//! achievable. Typical use is label placement ("best interior point").

pub mod api;
pub mod error;
pub mod geom;
pub mod search;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Convenience re-exports so callers can write `farpole::find_pole(...)`.
pub use error::InvalidPolygon;
pub use geom::{Polygon, Ring};
pub use nalgebra::Vector2 as Vec2;
pub use search::{find_pole, find_pole_with_stats, Pole, SearchCfg};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::error::InvalidPolygon;
    pub use crate::geom::rand::{draw_polygon_radial, RadialCfg, ReplayToken};
    pub use crate::geom::{signed_distance, BBox, Polygon, Ring};
    pub use crate::search::{
        find_pole, find_pole_with_stats, Cell, Pole, SearchCfg, SearchStats,
    };
    pub use nalgebra::Vector2 as Vec2;
}
