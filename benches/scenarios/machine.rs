//! Full-engine block benchmarks: a busy drum machine and the filter synth.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use groovebox_dsp::engine::{
    AudioOut, DrumInputs, DrumMachine, EngineConfig, FilterSynth, NullProbe, SynthControls,
};
use groovebox_dsp::sampler::{SampleBank, SampleBuffer};
use groovebox_dsp::sequencing::{Pattern, PatternBank};

use crate::BLOCK_SIZES;

fn dense_machine() -> DrumMachine {
    let bank = SampleBank::new(
        (0..8)
            .map(|t| SampleBuffer::from_samples(vec![0.1 * (t + 1) as f32; 4_096]))
            .collect(),
    );
    // Every timbre on every step keeps the voice pool saturated
    let patterns = PatternBank::new(vec![Pattern::from_masks(&[0xFF; 16])]);

    let mut machine =
        DrumMachine::new(EngineConfig::default(), bank, patterns).expect("valid bench config");
    machine.set_playing(true);
    machine
}

pub fn bench_drum_machine(c: &mut Criterion) {
    let mut group = c.benchmark_group("scenarios/drum_machine");

    for &size in BLOCK_SIZES {
        let mut machine = dense_machine();
        let control_frames = size.div_ceil(2);

        let trigger = vec![true; size];
        let tempo = vec![0.0; control_frames];
        let x = vec![0.40; control_frames];
        let y = vec![0.45; control_frames];
        let z = vec![0.37; control_frames];
        let mut samples = vec![0.0f32; size * 2];
        let mut beacon = vec![false; size];

        group.bench_with_input(BenchmarkId::new("saturated_pool", size), &size, |b, _| {
            b.iter(|| {
                let inputs = DrumInputs {
                    trigger: &trigger,
                    tempo: &tempo,
                    axis_x: &x,
                    axis_y: &y,
                    axis_z: &z,
                };
                let mut audio = AudioOut::new(black_box(&mut samples), 2);
                machine.process_block(&inputs, &mut audio, black_box(&mut beacon));
            })
        });
    }

    group.finish();
}

pub fn bench_filter_synth(c: &mut Criterion) {
    let mut group = c.benchmark_group("scenarios/filter_synth");
    let config = EngineConfig::default();

    for &size in BLOCK_SIZES {
        let mut synth = FilterSynth::new(&config).expect("valid bench config");
        let controls = SynthControls {
            frequency: 110.0,
            amplitude: 0.3,
            cutoff_hz: 2_000.0,
            resonance: 0.9,
        };
        let mut samples = vec![0.0f32; size * 2];

        group.bench_with_input(BenchmarkId::new("block", size), &size, |b, _| {
            b.iter(|| {
                let mut audio = AudioOut::new(black_box(&mut samples), 2);
                synth.process_block(&controls, &mut audio, &mut NullProbe);
            })
        });
    }

    group.finish();
}
