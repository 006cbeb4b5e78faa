//! Benchmarks for the resonant ladder filter.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use groovebox_dsp::dsp::{LadderCoefficients, LadderFilter};

use crate::BLOCK_SIZES;

const SAMPLE_RATE: f32 = 44_100.0;

pub fn bench_ladder(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/ladder");

    for &size in BLOCK_SIZES {
        // Sawtooth-like ramp as test signal
        let input: Vec<f32> = (0..size)
            .map(|i| (i as f32 / size as f32) * 2.0 - 1.0)
            .collect();

        let mut filter = LadderFilter::new(SAMPLE_RATE, 2_000.0, 0.9);
        let mut buffer = input.clone();
        group.bench_with_input(BenchmarkId::new("process", size), &size, |b, _| {
            b.iter(|| {
                buffer.copy_from_slice(&input);
                filter.render(black_box(&mut buffer));
            })
        });
    }

    group.bench_function("recompute_coefficients", |b| {
        b.iter(|| {
            black_box(LadderCoefficients::recompute(
                black_box(SAMPLE_RATE),
                black_box(2_000.0),
                black_box(0.9),
            ))
        })
    });

    group.finish();
}
