//! Criterion benchmarks for the pole search.
//! Focus sizes: n in {8, 32, 128, 512} outer vertices, with and without a hole.
//! Results land under target/criterion by default.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use farpole::geom::rand::{draw_polygon_radial, RadialCfg, ReplayToken};
use farpole::search::{find_pole, SearchCfg};

fn bench_find_pole(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_pole");
    for &n in &[8usize, 32, 128, 512] {
        for (name, hole_scale) in [("simple", None), ("holed", Some(0.4))] {
            let cfg = RadialCfg {
                vertices: n,
                base_radius: 100.0,
                hole_scale,
                ..RadialCfg::default()
            };
            let poly = draw_polygon_radial(cfg, ReplayToken { seed: 43, index: 0 })
                .expect("sampler yields valid rings");
            for &precision in &[1.0, 0.1] {
                group.bench_with_input(
                    BenchmarkId::new(format!("{name}_p{precision}"), n),
                    &poly,
                    |b, poly| b.iter(|| find_pole(poly, SearchCfg { precision })),
                );
            }
        }
    }
    group.finish();
}

criterion_group!(benches, bench_find_pole);
criterion_main!(benches);
