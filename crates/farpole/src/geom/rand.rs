//! Random simple polygons (radial jitter + replay tokens).
//!
//! Purpose
//! - Provide a small, deterministic sampler of star-shaped polygons for
//!   property tests and benches. The generator is parameterizable,
//!   reproducible, and returns validated `Polygon`s ready for the search.
//!
//! Model
//! - Start from `n` equally spaced angles on [0, 2π), add bounded angular and
//!   radial jitter, sort ascending, and take the jittered ring directly: the
//!   shape is star-shaped around its center, hence simple, and concavity is
//!   wanted here (poles of convex shapes are uninteresting).
//! - Optionally a scaled copy of the ring, reversed, is punched in as a hole.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::types::{Polygon, Ring};
use crate::error::InvalidPolygon;

/// Radial-jitter sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct RadialCfg {
    /// Vertex count of the outer ring (min 3).
    pub vertices: usize,
    /// Angular jitter as a fraction of the base spacing Δ=2π/n. Clamped to [0, 0.49].
    pub angle_jitter_frac: f64,
    /// Radial jitter (relative amplitude). Radii = `base_radius * (1 + u)`, with `u∈[-radial_jitter, radial_jitter]`.
    pub radial_jitter: f64,
    /// Base radius around `center`.
    pub base_radius: f64,
    /// Ring center.
    pub center: Vector2<f64>,
    /// Scale of an optional hole (the same jittered ring, scaled toward the
    /// center and reversed). `None` for no hole.
    pub hole_scale: Option<f64>,
}

impl Default for RadialCfg {
    fn default() -> Self {
        Self {
            vertices: 12,
            angle_jitter_frac: 0.3,
            radial_jitter: 0.25,
            base_radius: 1.0,
            center: Vector2::zeros(),
            hole_scale: None,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw a random star-shaped polygon via radial jitter; a hole is punched in
/// per `cfg.hole_scale`.
///
/// Errors only when `cfg` itself carries non-finite values (`base_radius`,
/// `center`); the sampler cannot otherwise produce an invalid ring.
pub fn draw_polygon_radial(cfg: RadialCfg, tok: ReplayToken) -> Result<Polygon, InvalidPolygon> {
    let mut rng = tok.to_std_rng();
    let n = cfg.vertices.max(3);
    let aj = cfg.angle_jitter_frac.clamp(0.0, 0.49);
    let rj = cfg.radial_jitter.max(0.0);
    let delta = std::f64::consts::TAU / (n as f64);

    let mut angles: Vec<f64> = (0..n)
        .map(|k| {
            let jitter = (rng.gen::<f64>() * 2.0 - 1.0) * aj * delta;
            (k as f64) * delta + jitter
        })
        .collect();
    angles.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let pts: Vec<Vector2<f64>> = angles
        .into_iter()
        .map(|th| {
            let u = (rng.gen::<f64>() * 2.0 - 1.0) * rj;
            let r = (1.0 + u).max(1e-6) * cfg.base_radius;
            cfg.center + Vector2::new(th.cos() * r, th.sin() * r)
        })
        .collect();

    let mut rings = vec![Ring::new(pts.clone())];
    if let Some(s) = cfg.hole_scale {
        let s = s.clamp(0.05, 0.9);
        let mut hole: Vec<Vector2<f64>> = pts
            .iter()
            .map(|p| cfg.center + (p - cfg.center) * s)
            .collect();
        hole.reverse();
        rings.push(Ring::new(hole));
    }
    Polygon::new(rings)
}
