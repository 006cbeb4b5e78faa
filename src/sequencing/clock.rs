use crate::control::map_range;

/*
Step Clock
==========

Sample-accurate interval timer driving pattern advance. The tempo knob is a
normalized 0-1 control remapped every frame to an event interval between
50 ms and 1000 ms, then converted into a sample count:

    interval_samples = round(ms * 0.001 * sample_rate)

The counter increments once per audio frame; on reaching the interval it
resets and reports a step fire. Because the interval is refreshed from the
control each frame, tempo changes take effect mid-interval without a
discontinuity larger than one frame.

A companion beacon output stays asserted for a fixed hold window after each
fire, for an external indicator (the original hardware drove an LED).
*/

/// Fastest event interval the tempo control can select.
pub const TEMPO_MIN_MS: f32 = 50.0;
/// Slowest event interval the tempo control can select.
pub const TEMPO_MAX_MS: f32 = 1000.0;

pub struct StepClock {
    interval_samples: u32,
    counter: u32,
    beacon_hold_samples: u32,
}

impl StepClock {
    pub fn new(beacon_hold_samples: u32) -> Self {
        Self {
            interval_samples: 1,
            counter: 0,
            beacon_hold_samples,
        }
    }

    /// Remap the normalized tempo control to an interval in samples.
    /// Called every frame while the transport runs.
    pub fn set_tempo(&mut self, control: f32, sample_rate: f32) {
        let ms = map_range(control, 0.0, 1.0, TEMPO_MIN_MS, TEMPO_MAX_MS);
        self.set_interval_samples((ms * 0.001 * sample_rate).round() as u32);
    }

    /// Set the interval directly, bypassing the tempo mapping.
    pub fn set_interval_samples(&mut self, samples: u32) {
        self.interval_samples = samples.max(1);
    }

    pub fn interval_samples(&self) -> u32 {
        self.interval_samples
    }

    /// Advance one frame. Returns true on the frame a step fires.
    pub fn tick(&mut self) -> bool {
        self.counter += 1;
        if self.counter >= self.interval_samples {
            self.counter = 0;
            true
        } else {
            false
        }
    }

    /// True within the hold window immediately following a fire.
    pub fn beacon_lit(&self) -> bool {
        self.counter < self.beacon_hold_samples
    }

    /// Rewind to the start of an interval.
    pub fn reset(&mut self) {
        self.counter = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_RATE: f32 = 44_100.0;

    #[test]
    fn tempo_mapping_matches_interval_formula() {
        let mut clock = StepClock::new(0);

        for control in [0.0, 0.1, 0.25, 0.5, 0.77, 1.0] {
            clock.set_tempo(control, SAMPLE_RATE);
            let ms = TEMPO_MIN_MS + control * (TEMPO_MAX_MS - TEMPO_MIN_MS);
            let expected = (ms * 0.001 * SAMPLE_RATE).round() as u32;
            assert_eq!(
                clock.interval_samples(),
                expected,
                "control {control} mapped to the wrong interval"
            );
        }
    }

    #[test]
    fn fires_exactly_once_per_interval() {
        let mut clock = StepClock::new(0);
        clock.set_interval_samples(100);

        let mut fires = Vec::new();
        for frame in 0u32..1_000 {
            if clock.tick() {
                fires.push(frame);
            }
        }

        assert_eq!(fires.len(), 10);
        for (i, &frame) in fires.iter().enumerate() {
            assert_eq!(frame, 99 + i as u32 * 100);
        }
    }

    #[test]
    fn beacon_holds_for_configured_window() {
        let mut clock = StepClock::new(5);
        clock.set_interval_samples(20);

        // Run up to the first fire
        while !clock.tick() {}

        let mut lit_frames = 0;
        for _ in 0..19 {
            if clock.beacon_lit() {
                lit_frames += 1;
            }
            clock.tick();
        }
        assert_eq!(lit_frames, 5);
    }

    #[test]
    fn zero_interval_is_pinned_to_one() {
        let mut clock = StepClock::new(0);
        clock.set_interval_samples(0);
        assert_eq!(clock.interval_samples(), 1);
        assert!(clock.tick());
        assert!(clock.tick());
    }
}
