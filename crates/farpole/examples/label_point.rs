//! Timing probe for label placement on a lake-with-island polygon.
//!
//! Purpose
//! - Provide a reproducible data point for "how long does the search take on
//!   a few-hundred-vertex polygon with a hole?" and show the stats surface.
//!
//! Why this shape
//! - A jittered ring with a punched hole is the typical label-placement
//!   input: concave outline, interior blocked in the middle, so neither the
//!   centroid nor the bbox center is the answer.

use std::time::Instant;

use farpole::geom::rand::{draw_polygon_radial, RadialCfg, ReplayToken};
use farpole::search::{find_pole_with_stats, SearchCfg};

fn main() {
    let cfg = RadialCfg {
        vertices: 256,
        base_radius: 1000.0,
        hole_scale: Some(0.4),
        ..RadialCfg::default()
    };
    let poly = draw_polygon_radial(cfg, ReplayToken { seed: 7, index: 0 })
        .expect("sampler yields valid rings");

    let start = Instant::now();
    let (pole, stats) = find_pole_with_stats(&poly, SearchCfg { precision: 0.5 });
    let elapsed = start.elapsed().as_secs_f64() * 1e3;

    println!(
        "pole=({:.3}, {:.3}) distance={:.3}",
        pole.point.x, pole.point.y, pole.distance
    );
    println!(
        "probes={} improvements={}",
        stats.probes,
        stats.improvements.len()
    );
    println!("search_time_ms={elapsed:.3}");
}
