/*
Block I/O Boundary
==================

The host hands the core plain slices each block: per-frame digital reads,
control-rate analog reads, and an interleaved output buffer. Hardware
drivers, GUI widgets, and visualization sinks all live on the far side of
this boundary; the core only reads and writes through it, so everything
here is synchronization-free by construction (producer and consumer share
the one callback thread).
*/

/// Per-block inputs for the drum machine.
///
/// `trigger` carries one digital read per audio frame (true = high).
/// The analog slices run at the slower control rate: audio frame `n`
/// addresses control index `n / control_divider`.
pub struct DrumInputs<'a> {
    /// Digital transport button, per audio frame.
    pub trigger: &'a [bool],
    /// Normalized 0-1 tempo knob, control rate.
    pub tempo: &'a [f32],
    /// Accelerometer axes in raw volts, control rate.
    pub axis_x: &'a [f32],
    pub axis_y: &'a [f32],
    pub axis_z: &'a [f32],
}

/// Interleaved multi-channel output buffer. The core writes an identical
/// mono mix to every channel of a frame.
pub struct AudioOut<'a> {
    samples: &'a mut [f32],
    channels: usize,
}

impl<'a> AudioOut<'a> {
    pub fn new(samples: &'a mut [f32], channels: usize) -> Self {
        assert!(channels > 0, "output needs at least one channel");
        assert_eq!(
            samples.len() % channels,
            0,
            "output length must be a whole number of frames"
        );
        Self { samples, channels }
    }

    #[inline]
    pub fn frames(&self) -> usize {
        self.samples.len() / self.channels
    }

    #[inline]
    pub fn channels(&self) -> usize {
        self.channels
    }

    /// Write one value to every channel of a frame.
    #[inline]
    pub fn write_frame(&mut self, frame: usize, value: f32) {
        let base = frame * self.channels;
        for sample in &mut self.samples[base..base + self.channels] {
            *sample = value;
        }
    }
}

/// External 2-channel visualization sink: one raw tap, one filtered tap
/// per frame. The oscilloscope consumer lives outside the core.
pub trait ScopeProbe {
    fn log(&mut self, raw: f32, filtered: f32);
}

/// Discards every tap.
pub struct NullProbe;

impl ScopeProbe for NullProbe {
    #[inline]
    fn log(&mut self, _raw: f32, _filtered: f32) {}
}

/// Adapts a closure into a probe, which keeps tests and demos terse.
pub struct FnProbe<F>(pub F);

impl<F: FnMut(f32, f32)> ScopeProbe for FnProbe<F> {
    #[inline]
    fn log(&mut self, raw: f32, filtered: f32) {
        (self.0)(raw, filtered)
    }
}
