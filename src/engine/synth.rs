use crate::dsp::{LadderFilter, Wavetable};
use crate::engine::config::{ConfigError, ControlRanges, EngineConfig};
use crate::engine::context::{AudioOut, ScopeProbe};

/// Control-rate parameters for the synth, sampled once per block. The host
/// reads its widgets and fills this in; the core does not validate the
/// values against their ranges.
#[derive(Debug, Clone, Copy)]
pub struct SynthControls {
    pub frequency: f32,
    pub amplitude: f32,
    pub cutoff_hz: f32,
    pub resonance: f32,
}

impl SynthControls {
    /// Start from the widget defaults.
    pub fn from_ranges(ranges: &ControlRanges) -> Self {
        Self {
            frequency: ranges.frequency.default,
            amplitude: ranges.amplitude.default,
            cutoff_hz: ranges.cutoff.default,
            resonance: ranges.resonance.default,
        }
    }
}

/// Band-limited oscillator driving the resonant ladder filter.
///
/// Per block: the oscillator frequency is set and the filter coefficients
/// are recomputed, once. Per frame: one oscillator sample is scaled by the
/// amplitude control, pushed through the filter, written to every output
/// channel, and both the raw and filtered taps go to the scope probe.
pub struct FilterSynth {
    sample_rate: f32,
    oscillator: Wavetable,
    filter: LadderFilter,
}

impl FilterSynth {
    /// A sawtooth into the ladder, the classic subtractive starting point.
    pub fn new(config: &EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let ranges = &config.ranges;
        Ok(Self {
            sample_rate: config.sample_rate,
            oscillator: Wavetable::sawtooth(config.sample_rate),
            filter: LadderFilter::new(
                config.sample_rate,
                ranges.cutoff.default,
                ranges.resonance.default,
            ),
        })
    }

    /// Swap in a different single-cycle waveform.
    pub fn with_oscillator(mut self, oscillator: Wavetable) -> Self {
        self.oscillator = oscillator;
        self
    }

    /// Process one fixed-size block. Coefficients refresh here, never per
    /// sample; the frame loop is allocation- and lock-free.
    pub fn process_block(
        &mut self,
        controls: &SynthControls,
        audio: &mut AudioOut,
        scope: &mut impl ScopeProbe,
    ) {
        self.oscillator.set_frequency(controls.frequency);
        self.filter
            .set_controls(self.sample_rate, controls.cutoff_hz, controls.resonance);

        for n in 0..audio.frames() {
            let raw = controls.amplitude * self.oscillator.next_sample();
            let filtered = self.filter.process(raw);
            audio.write_frame(n, filtered);
            scope.log(raw, filtered);
        }
    }

    /// Zero the filter delay lines and rewind the oscillator.
    pub fn reset(&mut self) {
        self.filter.reset();
        self.oscillator.reset();
    }
}
