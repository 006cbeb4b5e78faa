//! Benchmarks for the DSP primitives and full engine blocks.
//!
//! Run with: cargo bench
//!
//! These measure the per-block cost of the audio-rate paths to confirm they
//! sit well inside real-time deadlines.
//!
//! Reference timing at 44.1kHz sample rate:
//!   - 64 samples  = 1.45ms deadline
//!   - 128 samples = 2.90ms deadline
//!   - 256 samples = 5.80ms deadline
//!   - 512 samples = 11.61ms deadline

use criterion::{criterion_group, criterion_main};

mod dsp;
mod scenarios;

/// Common buffer sizes used in audio applications.
pub const BLOCK_SIZES: &[usize] = &[64, 128, 256, 512];

criterion_group!(
    benches,
    dsp::bench_ladder,
    dsp::bench_oscillator,
    scenarios::bench_drum_machine,
    scenarios::bench_filter_synth,
);
criterion_main!(benches);
