//! Point-to-boundary distance queries.
//!
//! - `segment_distance`: clamped orthogonal projection onto a segment.
//! - `signed_distance`: minimum distance to any edge of any ring, positive
//!   inside the polygon (even-odd rule across all rings) and negative
//!   outside.
//!
//! Both fold squared distances and take a single square root at the end.

use nalgebra::Vector2;

use super::types::Polygon;

/// Squared distance from `p` to the segment `(a, b)`.
///
/// Zero-length segments (`b == a`) fall back to the point-to-point distance;
/// the projection parameter is undefined there.
#[inline]
fn segment_distance_sq(p: Vector2<f64>, a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    let mut q = a;
    let d = b - a;
    let len_sq = d.x * d.x + d.y * d.y;
    if len_sq > 0.0 {
        let t = (p - a).dot(&d) / len_sq;
        if t > 1.0 {
            q = b;
        } else if t > 0.0 {
            q += d * t;
        }
    }
    (p - q).norm_squared()
}

/// Minimum Euclidean distance from `p` to the segment `(a, b)`.
#[inline]
pub fn segment_distance(p: Vector2<f64>, a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    segment_distance_sq(p, a, b).sqrt()
}

/// Signed distance from `p` to the polygon boundary.
///
/// Magnitude is the minimum distance to any edge of any ring; the sign is
/// positive iff `p` is inside per the even-odd rule. The inside toggle runs
/// across all rings, so holes flip insideness.
pub fn signed_distance(p: Vector2<f64>, polygon: &Polygon) -> f64 {
    let mut inside = false;
    let mut min_dist_sq = f64::INFINITY;

    for ring in polygon.rings() {
        for (b, a) in ring.edges() {
            // Ray cast: a horizontal ray from `p` crosses the edge iff the
            // endpoints straddle p.y and the x-intersection lies right of p.
            // The straddle test also keeps the division well-defined.
            if (a.y > p.y) != (b.y > p.y) && p.x < (b.x - a.x) * (p.y - a.y) / (b.y - a.y) + a.x {
                inside = !inside;
            }
            min_dist_sq = min_dist_sq.min(segment_distance_sq(p, a, b));
        }
    }

    let dist = min_dist_sq.sqrt();
    if inside {
        dist
    } else {
        -dist
    }
}
