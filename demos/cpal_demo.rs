//! Play the drum machine and the filter synth through the default output
//! device for a few seconds.
//!
//! Run with: cargo run --example cpal_demo

use std::{thread, time::Duration};

use color_eyre::eyre::{eyre, Result as EyreResult, WrapErr};
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use groovebox_dsp::{
    drum_pattern,
    engine::{
        AudioOut, DrumInputs, DrumMachine, EngineConfig, FilterSynth, NullProbe, SynthControls,
    },
    sampler::{SampleBank, SampleBuffer},
    sequencing::PatternBank,
    MAX_BLOCK_SIZE,
};

const PLAY_SECONDS: u64 = 8;

fn percussive(frequency: f32, length: usize, sample_rate: f32) -> SampleBuffer {
    let samples = (0..length)
        .map(|n| {
            let t = n as f32 / sample_rate;
            let decay = (-7.0 * n as f32 / length as f32).exp();
            (std::f32::consts::TAU * frequency * t).sin() * decay
        })
        .collect();
    SampleBuffer::from_samples(samples)
}

fn main() -> EyreResult<()> {
    color_eyre::install()?;

    let host = cpal::default_host();
    let device = host
        .default_output_device()
        .ok_or_else(|| eyre!("no default output device available"))?;
    let stream_config = device
        .default_output_config()
        .wrap_err("failed to fetch default output config")?;
    let sample_rate = stream_config.sample_rate().0 as f32;
    let channels = stream_config.channels() as usize;

    let config = EngineConfig {
        sample_rate,
        control_divider: 1,
        ..EngineConfig::default()
    };

    let bank = SampleBank::new(vec![
        percussive(60.0, 6_000, sample_rate),
        percussive(220.0, 2_500, sample_rate),
        percussive(880.0, 900, sample_rate),
    ]);
    let patterns = PatternBank::new(vec![drum_pattern! {
        [x . . . x . x .],
        [. . x . . . x .],
        [x x x x x x x x],
    }]);

    let mut machine = DrumMachine::new(config, bank, patterns)
        .wrap_err("drum machine rejected the setup")?;
    machine.set_playing(true);

    let mut synth = FilterSynth::new(&config).wrap_err("synth rejected the setup")?;
    let synth_controls = SynthControls {
        frequency: 55.0,
        amplitude: 0.2,
        cutoff_hz: 900.0,
        resonance: 0.95,
    };

    // Buffers reused by the audio callback
    let mut drum_buf = vec![0.0f32; MAX_BLOCK_SIZE];
    let mut synth_buf = vec![0.0f32; MAX_BLOCK_SIZE];
    let mut beacon_buf = vec![false; MAX_BLOCK_SIZE];
    let trigger = vec![true; MAX_BLOCK_SIZE];
    let tempo = vec![0.1; MAX_BLOCK_SIZE];
    let axis_x = vec![0.40f32; MAX_BLOCK_SIZE];
    let axis_y = vec![0.45f32; MAX_BLOCK_SIZE];
    let axis_z = vec![0.37f32; MAX_BLOCK_SIZE];

    let stream = device
        .build_output_stream(
            &stream_config.into(),
            move |data: &mut [f32], _| {
                let total_frames = data.len() / channels;
                let mut frames_written = 0;
                while frames_written < total_frames {
                    let frames_remaining = total_frames - frames_written;
                    let frames_to_render = frames_remaining.min(MAX_BLOCK_SIZE);

                    let drums = &mut drum_buf[..frames_to_render];
                    let inputs = DrumInputs {
                        trigger: &trigger[..frames_to_render],
                        tempo: &tempo[..frames_to_render],
                        axis_x: &axis_x[..frames_to_render],
                        axis_y: &axis_y[..frames_to_render],
                        axis_z: &axis_z[..frames_to_render],
                    };
                    machine.process_block(
                        &inputs,
                        &mut AudioOut::new(drums, 1),
                        &mut beacon_buf[..frames_to_render],
                    );

                    let lead = &mut synth_buf[..frames_to_render];
                    synth.process_block(&synth_controls, &mut AudioOut::new(lead, 1), &mut NullProbe);

                    // Mix the two layers and duplicate mono to all channels
                    let out_off = frames_written * channels;
                    for i in 0..frames_to_render {
                        let s = drum_buf[i] * 0.7 + synth_buf[i];
                        for ch in 0..channels {
                            data[out_off + i * channels + ch] = s;
                        }
                    }

                    frames_written += frames_to_render;
                }
            },
            move |err| eprintln!("Stream error: {err}"),
            None,
        )
        .wrap_err("failed to build output stream")?;

    stream.play().wrap_err("failed to start output stream")?;
    println!("Playing for {PLAY_SECONDS}s at {sample_rate} Hz on {channels} channel(s)...");
    thread::sleep(Duration::from_secs(PLAY_SECONDS));

    Ok(())
}
