//! Render the groovebox offline and print some numbers.
//!
//! Run with: cargo run --example offline_bounce

use groovebox_dsp::drum_pattern;
use groovebox_dsp::engine::{
    AudioOut, DrumInputs, DrumMachine, EngineConfig, FilterSynth, FnProbe, SynthControls,
};
use groovebox_dsp::sampler::{SampleBank, SampleBuffer};
use groovebox_dsp::sequencing::PatternBank;

const SAMPLE_RATE: f32 = 44_100.0;
const BLOCK: usize = 256;
const BLOCKS: usize = 400;

/// Decaying sine burst: a stand-in for a pre-decoded kick/tom sample.
fn sine_burst(frequency: f32, length: usize) -> SampleBuffer {
    let samples = (0..length)
        .map(|n| {
            let t = n as f32 / SAMPLE_RATE;
            let decay = (-6.0 * n as f32 / length as f32).exp();
            (std::f32::consts::TAU * frequency * t).sin() * decay
        })
        .collect();
    SampleBuffer::from_samples(samples)
}

/// Decaying noise burst from a tiny LCG: a stand-in for a snare/hat sample.
fn noise_burst(length: usize, seed: u32) -> SampleBuffer {
    let mut state = seed;
    let samples = (0..length)
        .map(|n| {
            state = state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
            let white = (state >> 9) as f32 / (1 << 23) as f32 - 1.0;
            let decay = (-8.0 * n as f32 / length as f32).exp();
            white * decay * 0.5
        })
        .collect();
    SampleBuffer::from_samples(samples)
}

fn main() {
    let bank = SampleBank::new(vec![
        sine_burst(55.0, 6_000),   // kick
        noise_burst(4_000, 1),     // snare
        noise_burst(1_200, 2),     // hat
    ]);

    let patterns = PatternBank::new(vec![
        drum_pattern! {
            [x . . . x . . .],
            [. . x . . . x .],
            [x x x x x x x x],
        },
        drum_pattern! {
            [x . x . x . x .],
            [. x . x . x . x],
            [. . . . . . . .],
        },
    ]);

    let config = EngineConfig {
        sample_rate: SAMPLE_RATE,
        ..EngineConfig::default()
    };

    let mut machine =
        DrumMachine::new(config, bank, patterns).expect("offline config is valid");
    machine.set_playing(true);

    let mut synth = FilterSynth::new(&config).expect("offline config is valid");
    let controls = SynthControls {
        frequency: 110.0,
        amplitude: 0.3,
        cutoff_hz: 1_200.0,
        resonance: 0.9,
    };

    // Held-high button, mid tempo, neutral tilt
    let control_frames = BLOCK / 2;
    let trigger = vec![true; BLOCK];
    let tempo = vec![0.15; control_frames];
    let x = vec![0.40; control_frames];
    let y = vec![0.45; control_frames];
    let z = vec![0.37; control_frames];

    let mut drum_peak = 0.0f32;
    let mut synth_peak = 0.0f32;
    let mut raw_peak = 0.0f32;

    for _ in 0..BLOCKS {
        let mut drums = vec![0.0f32; BLOCK];
        let mut beacon = vec![false; BLOCK];
        let inputs = DrumInputs {
            trigger: &trigger,
            tempo: &tempo,
            axis_x: &x,
            axis_y: &y,
            axis_z: &z,
        };
        machine.process_block(&inputs, &mut AudioOut::new(&mut drums, 1), &mut beacon);

        let mut synth_out = vec![0.0f32; BLOCK];
        let mut probe = FnProbe(|raw: f32, _filtered: f32| raw_peak = raw_peak.max(raw.abs()));
        synth.process_block(&controls, &mut AudioOut::new(&mut synth_out, 1), &mut probe);

        drum_peak = drums.iter().fold(drum_peak, |m, &s| m.max(s.abs()));
        synth_peak = synth_out.iter().fold(synth_peak, |m, &s| m.max(s.abs()));
    }

    let frames = BLOCKS * BLOCK;
    println!(
        "Rendered {:.2}s at {} Hz",
        frames as f32 / SAMPLE_RATE,
        SAMPLE_RATE
    );
    println!("Drum machine peak: {drum_peak:.3}");
    println!("Synth raw peak:    {raw_peak:.3}");
    println!("Synth output peak: {synth_peak:.3}");
    println!("Active voices at end: {}", machine.active_voices());
}
