/*
Resonant Ladder Low-Pass Filter
===============================

A 4th-order low-pass built from four identical one-pole stages in series,
with a nonlinear feedback path from the last stage back to the input. This
is the classic transistor-ladder topology: each stage contributes ~6 dB/oct
of rolloff, and the feedback produces the resonant peak at the cutoff.

Signal path per sample:

    drive     = in + 2*k*in - 4*k*y3          (k = resonance gain,
    saturated = tanh(drive)                    y3 = last stage's previous output)
    stage i:    y_i = b0*x_i + b1*x_i[n-1] + a1*y_i[n-1]

The tanh is the only thing standing between high resonance and numeric
blow-up: there is deliberately no clamping of cutoff or resonance, so
driving the cutoff toward Nyquist or the resonance past ~1 produces audible
artifacts or instability, exactly like the analog circuit being modeled.

Coefficients are recomputed once per block, not per sample. The cutoff warp
uses a 4th-order polynomial fit of the discrete-time cutoff angle rather
than a bilinear transform, with Valimaki and Huovilainen's resonance
correction polynomial keeping the peak gain consistent across the range.
*/

use std::f32::consts::PI;

/// Per-block filter coefficients. Transient: overwritten by every
/// `recompute`, never persisted beyond the block that uses them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LadderCoefficients {
    pub b0: f32,
    pub b1: f32,
    pub a1: f32,
    pub resonance_gain: f32,
}

impl LadderCoefficients {
    /// Derive coefficients from the current controls. Deterministic: equal
    /// inputs yield bit-identical outputs.
    ///
    /// No clamping is applied; `cutoff_hz` at or beyond Nyquist extrapolates
    /// the polynomial outside its fitted range.
    pub fn recompute(sample_rate: f32, cutoff_hz: f32, resonance: f32) -> Self {
        // Discrete-time cutoff angle in radians/sample
        let wc = 2.0 * PI * cutoff_hz / sample_rate;
        let wc2 = wc * wc;
        let wc3 = wc2 * wc;
        let wc4 = wc3 * wc;

        // Polynomial fit of the frequency warp
        let g = 0.9892 * wc - 0.4342 * wc2 + 0.1381 * wc3 - 0.0202 * wc4;

        // Resonance correction keeps the peak consistent across cutoffs
        let resonance_gain = resonance * (1.0029 + 0.0526 * wc - 0.0926 * wc2 + 0.0218 * wc3);

        Self {
            b0: g / 1.3,
            b1: g * 0.3 / 1.3,
            a1: 1.0 - g,
            resonance_gain,
        }
    }
}

/// Four cascaded one-pole stages with nonlinear resonance feedback.
///
/// The eight delay-line values are the only inter-sample state. They are
/// zeroed at construction and by `reset`, and mutated on every `process`.
pub struct LadderFilter {
    last_input: [f32; 4],
    last_output: [f32; 4],
    coefficients: LadderCoefficients,
}

// Input bleed ratio into the feedback sum: the original 4*in*k*gcomp with
// the compensation constant gcomp = 0.5 folded in.
const INPUT_COMP: f32 = 2.0;
const FEEDBACK: f32 = 4.0;

impl LadderFilter {
    pub fn new(sample_rate: f32, cutoff_hz: f32, resonance: f32) -> Self {
        Self {
            last_input: [0.0; 4],
            last_output: [0.0; 4],
            coefficients: LadderCoefficients::recompute(sample_rate, cutoff_hz, resonance),
        }
    }

    /// Refresh coefficients from the control values. Call once per audio
    /// block; the per-sample path only reads them.
    pub fn set_controls(&mut self, sample_rate: f32, cutoff_hz: f32, resonance: f32) {
        self.coefficients = LadderCoefficients::recompute(sample_rate, cutoff_hz, resonance);
    }

    pub fn coefficients(&self) -> LadderCoefficients {
        self.coefficients
    }

    /// Process one sample. Called once per audio frame.
    pub fn process(&mut self, input: f32) -> f32 {
        let c = self.coefficients;

        // Nonlinear feedback: raw input plus a scaled copy, minus the last
        // stage's previous output weighted by the resonance gain.
        let drive = input + INPUT_COMP * c.resonance_gain * input
            - FEEDBACK * c.resonance_gain * self.last_output[3];
        let saturated = drive.tanh();

        let mut stage_input = saturated;
        for i in 0..4 {
            let out = c.b0 * stage_input + c.b1 * self.last_input[i] + c.a1 * self.last_output[i];
            self.last_input[i] = stage_input;
            self.last_output[i] = out;
            stage_input = out;
        }

        stage_input
    }

    /// Filter a buffer in place.
    pub fn render(&mut self, buffer: &mut [f32]) {
        for sample in buffer.iter_mut() {
            *sample = self.process(*sample);
        }
    }

    /// Zero both delay lines.
    pub fn reset(&mut self) {
        self.last_input = [0.0; 4];
        self.last_output = [0.0; 4];
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dsp::oscillator::Wavetable;

    const SAMPLE_RATE: f32 = 48_000.0;

    fn peak_after_transient(buffer: &[f32]) -> f32 {
        let skip = buffer.len().min(64);
        buffer
            .get(skip..)
            .unwrap_or(buffer)
            .iter()
            .fold(0.0f32, |acc, &x| acc.max(x.abs()))
    }

    #[test]
    fn coefficients_are_deterministic() {
        let a = LadderCoefficients::recompute(SAMPLE_RATE, 2_000.0, 0.9);
        let b = LadderCoefficients::recompute(SAMPLE_RATE, 2_000.0, 0.9);
        assert_eq!(a, b, "equal inputs must yield bit-identical coefficients");
    }

    #[test]
    fn coefficients_match_hand_computation() {
        let c = LadderCoefficients::recompute(SAMPLE_RATE, 1_000.0, 0.5);
        let wc = 2.0 * PI * 1_000.0 / SAMPLE_RATE;
        let g = 0.9892 * wc - 0.4342 * wc.powi(2) + 0.1381 * wc.powi(3) - 0.0202 * wc.powi(4);

        assert!((c.b0 - g / 1.3).abs() < 1e-7);
        assert!((c.b1 - g * 0.3 / 1.3).abs() < 1e-7);
        assert!((c.a1 - (1.0 - g)).abs() < 1e-7);
    }

    #[test]
    fn zero_input_zero_state_stays_at_origin() {
        let mut filter = LadderFilter::new(SAMPLE_RATE, 2_000.0, 0.9);
        for _ in 0..1_000 {
            assert_eq!(filter.process(0.0), 0.0);
        }
    }

    #[test]
    fn lowpass_attenuates_above_cutoff() {
        let cutoff = 500.0;

        // Tone well below the cutoff
        let mut filter = LadderFilter::new(SAMPLE_RATE, cutoff, 0.0);
        let mut osc = Wavetable::sine(SAMPLE_RATE);
        osc.set_frequency(100.0);
        let mut low = vec![0.0; 2_048];
        osc.render(&mut low);
        filter.render(&mut low);
        let low_peak = peak_after_transient(&low);

        // Tone an octave-and-change above it
        let mut filter = LadderFilter::new(SAMPLE_RATE, cutoff, 0.0);
        let mut osc = Wavetable::sine(SAMPLE_RATE);
        osc.set_frequency(4_000.0);
        let mut high = vec![0.0; 2_048];
        osc.render(&mut high);
        filter.render(&mut high);
        let high_peak = peak_after_transient(&high);

        assert!(
            low_peak > high_peak * 4.0,
            "expected >12dB of separation, got low={low_peak}, high={high_peak}"
        );
    }

    #[test]
    fn resonance_boosts_signal_at_cutoff() {
        let cutoff = 1_000.0;

        let mut flat = LadderFilter::new(SAMPLE_RATE, cutoff, 0.0);
        let mut osc = Wavetable::sine(SAMPLE_RATE);
        osc.set_frequency(cutoff);
        let mut a = vec![0.0; 4_096];
        osc.render(&mut a);
        flat.render(&mut a);
        let flat_peak = peak_after_transient(&a);

        let mut resonant = LadderFilter::new(SAMPLE_RATE, cutoff, 0.9);
        let mut osc = Wavetable::sine(SAMPLE_RATE);
        osc.set_frequency(cutoff);
        let mut b = vec![0.0; 4_096];
        osc.render(&mut b);
        resonant.render(&mut b);
        let resonant_peak = peak_after_transient(&b);

        assert!(
            resonant_peak > flat_peak,
            "expected resonance to lift the peak: resonant={resonant_peak}, flat={flat_peak}"
        );
    }

    #[test]
    fn saturation_bounds_the_feedback_path() {
        // Even with resonance past unity the tanh keeps the drive finite
        let mut filter = LadderFilter::new(SAMPLE_RATE, 3_000.0, 1.1);
        let mut osc = Wavetable::sawtooth(SAMPLE_RATE);
        osc.set_frequency(220.0);

        for _ in 0..48_000 {
            let out = filter.process(osc.next_sample());
            assert!(out.is_finite(), "filter output went non-finite");
        }
    }

    #[test]
    fn reset_clears_delay_lines() {
        let mut filter = LadderFilter::new(SAMPLE_RATE, 2_000.0, 0.5);
        for _ in 0..100 {
            filter.process(1.0);
        }
        filter.reset();
        assert_eq!(filter.process(0.0), 0.0);
    }
}
