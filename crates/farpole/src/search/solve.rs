//! Seeding and the pop/evaluate/subdivide loop.
//!
//! Procedure
//! - Tile the outer-ring bounding box with cells of half-size
//!   `min(width, height) / 2`, seed the incumbent from the area centroid and
//!   the bbox center, then pop cells by descending bound: improve the
//!   incumbent, prune once the bound is within `precision` of it, subdivide
//!   otherwise.
//!
//! The tiling steps strictly below the bbox maximum, so the last row/column
//! may overhang the box by up to one cell rather than leave a gap.
//! Overhanging cells sit outside the polygon, get negative `d`, and die in
//! the queue.

use std::collections::BinaryHeap;

use nalgebra::Vector2;

use crate::geom::Polygon;

use super::cell::{Cell, QueueEntry, SearchCfg};

/// Search result: the pole of inaccessibility and its boundary distance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pole {
    pub point: Vector2<f64>,
    /// Distance from `point` to the boundary; ≥ 0 for non-degenerate input.
    pub distance: f64,
}

/// Diagnostic counters. Observational only; never feeds back into the search.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SearchStats {
    /// Cells evaluated: initial tiling, both seeds, four per subdivision.
    pub probes: u64,
    /// Incumbent distances in improvement order (non-decreasing).
    pub improvements: Vec<f64>,
}

/// Find the pole of inaccessibility of `polygon`.
pub fn find_pole(polygon: &Polygon, cfg: SearchCfg) -> Pole {
    find_pole_with_stats(polygon, cfg).0
}

/// As [`find_pole`], also returning diagnostic counters.
pub fn find_pole_with_stats(polygon: &Polygon, cfg: SearchCfg) -> (Pole, SearchStats) {
    let bbox = polygon.bbox();
    let cell_size = bbox.width().min(bbox.height());

    if cell_size == 0.0 {
        // Degenerate bbox (point, segment, or collinear ring): nothing to
        // tile, and every boundary point is equally good.
        let pole = Pole {
            point: bbox.min,
            distance: 0.0,
        };
        return (pole, SearchStats::default());
    }

    let mut stats = SearchStats::default();
    let mut seq: u64 = 0;
    let mut queue: BinaryHeap<QueueEntry> = BinaryHeap::new();

    // Cover the bounding box; strict `<` lets the last row/column overhang.
    let h = cell_size / 2.0;
    let mut x = bbox.min.x;
    while x < bbox.max.x {
        let mut y = bbox.min.y;
        while y < bbox.max.y {
            let cell = Cell::new(Vector2::new(x + h, y + h), h, polygon);
            push_cell(&mut queue, &mut seq, cell);
            y += cell_size;
        }
        x += cell_size;
    }
    stats.probes = queue.len() as u64;

    // Seed the incumbent: area centroid of the outer ring, with the bbox
    // center as fallback for shapes whose centroid lies outside.
    let mut best = centroid_cell(polygon);
    let bbox_cell = Cell::new(bbox.center(), 0.0, polygon);
    if bbox_cell.d > best.d {
        best = bbox_cell;
    }
    stats.probes += 2;
    stats.improvements.push(best.d);

    while let Some(entry) = queue.pop() {
        let cell = entry.cell;

        if cell.d > best.d {
            best = cell;
            stats.improvements.push(cell.d);
            log::debug!("found best {:.4} after {} probes", cell.d, stats.probes);
        }

        // Neither this cell nor anything still queued (the queue is sorted
        // by bound) can beat the incumbent by more than the tolerance.
        if cell.max - best.d <= cfg.precision {
            continue;
        }

        let h = cell.h / 2.0;
        for (sx, sy) in [(-1.0, -1.0), (1.0, -1.0), (-1.0, 1.0), (1.0, 1.0)] {
            let center = cell.center + Vector2::new(sx * h, sy * h);
            push_cell(&mut queue, &mut seq, Cell::new(center, h, polygon));
        }
        stats.probes += 4;
    }

    log::debug!("num probes: {}", stats.probes);
    log::debug!("best distance: {}", best.d);

    let pole = Pole {
        point: best.center,
        distance: best.d,
    };
    (pole, stats)
}

#[inline]
fn push_cell(queue: &mut BinaryHeap<QueueEntry>, seq: &mut u64, cell: Cell) {
    queue.push(QueueEntry { cell, seq: *seq });
    *seq += 1;
}

/// Zero-size cell at the area-weighted centroid of the outer ring.
///
/// The shoelace accumulator folds the factor of 3 into `area`. A zero signed
/// area (collinear or self-cancelling ring) falls back to the first vertex.
pub(crate) fn centroid_cell(polygon: &Polygon) -> Cell {
    let pts = &polygon.outer().pts;
    let mut area = 0.0;
    let mut x = 0.0;
    let mut y = 0.0;
    let mut b = pts[pts.len() - 1];
    for &a in pts {
        let f = a.x * b.y - b.x * a.y;
        x += (a.x + b.x) * f;
        y += (a.y + b.y) * f;
        area += f * 3.0;
        b = a;
    }
    if area == 0.0 {
        return Cell::new(pts[0], 0.0, polygon);
    }
    Cell::new(Vector2::new(x / area, y / area), 0.0, polygon)
}
