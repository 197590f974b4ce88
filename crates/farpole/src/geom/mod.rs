//! Polygon geometry primitives.
//!
//! Purpose
//! - Structured polygon input (`Ring`, `Polygon`) validated at construction,
//!   so the search loop runs on a precondition instead of re-checking.
//! - Signed distance from a point to the polygon boundary (even-odd rule),
//!   the only geometric query the search needs.
//!
//! Code cross-refs: `search::Cell`, `search::find_pole`.

pub mod rand;

mod dist;
mod types;

pub use dist::{segment_distance, signed_distance};
pub use types::{BBox, Polygon, Ring};

#[cfg(test)]
mod tests;
