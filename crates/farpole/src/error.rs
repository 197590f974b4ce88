//! Input validation errors.
//!
//! Only structurally invalid input is surfaced to callers. Geometric
//! degeneracies (zero-area bounding box, zero-length segments, zero shoelace
//! area) are resolved locally with explicit fallback values in `geom` and
//! `search` and never propagate as errors.

use thiserror::Error;

/// Rejected polygon structure. Returned by `Polygon::new` before any search
/// state is built; the search loop itself cannot fail.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidPolygon {
    #[error("polygon has no rings")]
    NoRings,

    #[error("ring {index} has no vertices")]
    EmptyRing { index: usize },

    #[error("non-finite coordinate at ring {ring}, vertex {vertex}")]
    NonFinite { ring: usize, vertex: usize },
}
