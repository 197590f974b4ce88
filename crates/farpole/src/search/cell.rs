//! Search cell, queue ordering, and configuration.
//!
//! Kept small and explicit to make `solve` easy to read.

use nalgebra::Vector2;

use crate::geom::{signed_distance, Polygon};

/// Square search cell.
///
/// Invariants:
/// - `d` is the signed boundary distance at `center` (positive inside).
/// - `max = d + h·√2` bounds the distance achievable anywhere in the cell
///   (√2·h is the center-to-corner distance of a square with half-side h).
/// - Immutable once built; subdivision constructs new cells.
#[derive(Clone, Copy, Debug)]
pub struct Cell {
    pub center: Vector2<f64>,
    /// Half-side length.
    pub h: f64,
    /// Signed distance from `center` to the polygon boundary.
    pub d: f64,
    /// Upper bound on the boundary distance of any point inside the cell.
    pub max: f64,
}

impl Cell {
    /// Evaluate a cell at `center` with half-size `h`. Pure, O(edges).
    pub fn new(center: Vector2<f64>, h: f64, polygon: &Polygon) -> Self {
        let d = signed_distance(center, polygon);
        Self {
            center,
            h,
            d,
            max: d + h * std::f64::consts::SQRT_2,
        }
    }
}

/// Heap entry: cells ordered by descending `max`, exact ties popping in
/// insertion order via the sequence number. The sequence is scoped to one
/// search invocation, never to the process.
#[derive(Clone, Copy, Debug)]
pub(crate) struct QueueEntry {
    pub cell: Cell,
    pub seq: u64,
}

impl PartialEq for QueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cell.max == other.cell.max && self.seq == other.seq
    }
}
impl Eq for QueueEntry {}
impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // BinaryHeap is a max-heap: larger bound first, then smaller seq.
        self.cell
            .max
            .total_cmp(&other.cell.max)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Search configuration.
#[derive(Clone, Copy, Debug)]
pub struct SearchCfg {
    /// Absolute tolerance on the reported distance: refinement of a cell
    /// stops once it cannot beat the incumbent by more than this. Values
    /// `<= 0.0` are accepted but may never terminate under floating-point
    /// noise; keep it strictly positive.
    pub precision: f64,
}

impl Default for SearchCfg {
    fn default() -> Self {
        Self { precision: 1.0 }
    }
}
