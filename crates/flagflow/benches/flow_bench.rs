//! Criterion benchmarks for the flows and the step-and-sample loop.
//! Focus sizes: flags in {3, 4, 8, 32}; animation ranges in {10, 100}.
//! Results: by default under target/criterion; to store under data/bench, run:
//!   CARGO_TARGET_DIR=data/bench cargo bench -p flagflow

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use flagflow::api::{
    animate, draw_positive_complex, AnimationCfg, ConicCfg, ConicReplay, EruptionStyle,
    FlagComplex, HullTessellator, QuadStyle, Tessellator, Trafo, TrafoRange,
};

fn complex(flags: usize, seed: u64) -> FlagComplex {
    let cfg = ConicCfg {
        flags,
        ..ConicCfg::default()
    };
    draw_positive_complex(cfg, ConicReplay { seed, index: 0 }).unwrap()
}

fn bench_flows(c: &mut Criterion) {
    let mut group = c.benchmark_group("flows");
    for &n in &[3usize, 4, 8, 32] {
        group.bench_with_input(BenchmarkId::new("erupt_q", n), &n, |b, &n| {
            b.iter_batched(
                || complex(n, 41),
                |mut fc| fc.erupt_triangle(0.01, [0, 1, 2], EruptionStyle::Q).unwrap(),
                BatchSize::SmallInput,
            )
        });
        if n >= 4 {
            group.bench_with_input(BenchmarkId::new("bulge", n), &n, |b, &n| {
                b.iter_batched(
                    || complex(n, 42),
                    |mut fc| {
                        fc.bulge_quadrilateral(0.01, [0, 1, 2, 3], QuadStyle::Bulge)
                            .unwrap()
                    },
                    BatchSize::SmallInput,
                )
            });
        }
        group.bench_with_input(BenchmarkId::new("draw_complex", n), &n, |b, &n| {
            b.iter_batched(
                || complex(n, 43),
                |mut fc| fc.draw_complex().unwrap(),
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_animation(c: &mut Criterion) {
    let mut group = c.benchmark_group("animation");
    for &range in &[10u32, 100] {
        let cfg = AnimationCfg {
            range: TrafoRange {
                trafo_range: range,
                t_step: 0.01,
            },
            ..AnimationCfg::default()
        };
        group.bench_with_input(BenchmarkId::new("erupt", range), &cfg, |b, cfg| {
            b.iter_batched(
                || complex(3, 44),
                |mut fc| animate(&mut fc, Trafo::Erupt, cfg, None).unwrap(),
                BatchSize::SmallInput,
            )
        });
        group.bench_with_input(BenchmarkId::new("eruptmp_tessellated", range), &cfg, |b, cfg| {
            let tess = HullTessellator { depth: 2 };
            b.iter_batched(
                || complex(4, 45),
                |mut fc| {
                    animate(&mut fc, Trafo::EruptMinusPlus, cfg, Some(&tess as &dyn Tessellator))
                        .unwrap()
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_flows, bench_animation);
criterion_main!(benches);
