//! Polygon input types and the outer-ring bounding box.
//!
//! - `Ring`: ordered vertex list, implicitly closed.
//! - `Polygon`: outer ring plus holes, validated on construction so that
//!   downstream code never sees an empty ring or a NaN coordinate.
//! - `BBox`: axis-aligned bounds of the outer ring.

use nalgebra::Vector2;

use crate::error::InvalidPolygon;

/// Ordered vertex ring, implicitly closed (the last vertex connects back to
/// the first). A trailing duplicate of the first vertex is accepted and
/// harmless; it only adds a zero-length edge.
#[derive(Clone, Debug, PartialEq)]
pub struct Ring {
    pub pts: Vec<Vector2<f64>>,
}

impl Ring {
    #[inline]
    pub fn new(pts: Vec<Vector2<f64>>) -> Self {
        Self { pts }
    }

    /// Iterate edges as `(prev, cur)` pairs, starting with the wrap-around
    /// edge from the last vertex to the first.
    pub fn edges(&self) -> impl Iterator<Item = (Vector2<f64>, Vector2<f64>)> + '_ {
        let n = self.pts.len();
        (0..n).map(move |i| (self.pts[(i + n - 1) % n], self.pts[i]))
    }
}

/// Polygon as an explicit ring list: outer boundary first, then holes.
///
/// Invariants (enforced by [`Polygon::new`]):
/// - At least one ring.
/// - Every ring has at least one vertex.
/// - All coordinates are finite.
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    rings: Vec<Ring>,
}

impl Polygon {
    pub fn new(rings: Vec<Ring>) -> Result<Self, InvalidPolygon> {
        if rings.is_empty() {
            return Err(InvalidPolygon::NoRings);
        }
        for (ri, ring) in rings.iter().enumerate() {
            if ring.pts.is_empty() {
                return Err(InvalidPolygon::EmptyRing { index: ri });
            }
            for (vi, p) in ring.pts.iter().enumerate() {
                if !(p.x.is_finite() && p.y.is_finite()) {
                    return Err(InvalidPolygon::NonFinite { ring: ri, vertex: vi });
                }
            }
        }
        Ok(Self { rings })
    }

    /// Build from nested coordinate pairs, outer ring first.
    pub fn from_coords(rings: &[Vec<(f64, f64)>]) -> Result<Self, InvalidPolygon> {
        let rings = rings
            .iter()
            .map(|r| Ring::new(r.iter().map(|&(x, y)| Vector2::new(x, y)).collect()))
            .collect();
        Self::new(rings)
    }

    /// Outer boundary ring.
    #[inline]
    pub fn outer(&self) -> &Ring {
        &self.rings[0]
    }

    /// All rings, outer first.
    #[inline]
    pub fn rings(&self) -> &[Ring] {
        &self.rings
    }

    /// Axis-aligned bounding box of the outer ring's vertices. Holes are
    /// ignored; a hole outside the outer ring contributes nothing useful.
    pub fn bbox(&self) -> BBox {
        let first = self.rings[0].pts[0];
        let mut min = first;
        let mut max = first;
        for p in &self.rings[0].pts {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
        }
        BBox { min, max }
    }
}

/// Axis-aligned bounding box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BBox {
    pub min: Vector2<f64>,
    pub max: Vector2<f64>,
}

impl BBox {
    #[inline]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }
    #[inline]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }
    #[inline]
    pub fn center(&self) -> Vector2<f64> {
        (self.min + self.max) / 2.0
    }
}
