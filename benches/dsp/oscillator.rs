//! Benchmarks for the wavetable oscillator.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use groovebox_dsp::dsp::Wavetable;

use crate::BLOCK_SIZES;

const SAMPLE_RATE: f32 = 44_100.0;

pub fn bench_oscillator(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/oscillator");

    for &size in BLOCK_SIZES {
        let mut osc = Wavetable::sawtooth(SAMPLE_RATE);
        osc.set_frequency(110.0);
        let mut buffer = vec![0.0f32; size];

        group.bench_with_input(BenchmarkId::new("sawtooth", size), &size, |b, _| {
            b.iter(|| osc.render(black_box(&mut buffer)))
        });
    }

    group.finish();
}
