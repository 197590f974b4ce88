//! Branch-and-bound search for the pole of inaccessibility.
//!
//! Purpose
//! - Refine square cells over the polygon's bounding box, always popping the
//!   cell with the largest achievable-distance bound, until no remaining cell
//!   can improve on the incumbent by more than the configured precision.
//!
//! Why this shape
//! - The bound `d + h·√2` is sound (signed boundary distance is 1-Lipschitz),
//!   so pruning never discards the optimum beyond the tolerance, and the
//!   sorted queue makes a single prune cover everything behind it.
//!
//! Code cross-refs: `geom::signed_distance`, `geom::Polygon`.

mod cell;
mod solve;

pub use cell::{Cell, SearchCfg};
pub use solve::{find_pole, find_pole_with_stats, Pole, SearchStats};
