use crate::control::{Gesture, GestureClassifier};
use crate::engine::config::{ConfigError, EngineConfig};
use crate::engine::context::{AudioOut, DrumInputs};
use crate::sampler::{PlayDirection, SampleBank, VoicePool};
use crate::sequencing::{PatternBank, StepClock};

/*
Drum Machine
============

The per-block entry point tying the sequencer together. Each audio frame,
in order:

  1. the digital transport button is read; a falling edge toggles playback
  2. the accelerometer is read at control rate and classified; a match
     latches the pattern index (and possibly flips the direction latch)
  3. while playing, the tempo knob refreshes the clock interval, the clock
     ticks, and a fire scans the current step's mask and requests one voice
     per set bit
  4. the voice pool mixes one sample per active voice into the frame, which
     is written identically to every output channel

All state lives in this struct and is mutated only by `process_block` on
the callback thread: no statics, no locks, no allocation past construction.

Policy decisions (there is no error channel at audio rate):
  - a saturated voice pool drops the trigger
  - switching patterns mid-sequence keeps the step index, wrapping it
    modulo the new pattern's length at the next advance
  - when stopped, active voices freeze in place and silence is written
*/

pub struct DrumMachine {
    config: EngineConfig,
    bank: SampleBank,
    patterns: PatternBank,
    pool: VoicePool,
    clock: StepClock,
    classifier: GestureClassifier,

    current_pattern: usize,
    current_step: usize,
    is_playing: bool,
    direction: PlayDirection,
    last_trigger: bool,
    last_gesture: Option<Gesture>,
}

impl DrumMachine {
    /// Checks the startup preconditions and builds the machine. No audio
    /// frame is processed if this fails.
    pub fn new(
        config: EngineConfig,
        bank: SampleBank,
        patterns: PatternBank,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        if patterns.is_empty() {
            return Err(ConfigError::EmptyPatternBank);
        }

        let clock = StepClock::new(config.beacon_hold_samples());

        Ok(Self {
            config,
            bank,
            patterns,
            pool: VoicePool::new(),
            clock,
            classifier: GestureClassifier::new(),
            current_pattern: 0,
            current_step: 0,
            is_playing: false,
            direction: PlayDirection::Forward,
            last_trigger: true, // Button idles high
            last_gesture: None,
        })
    }

    /// Replace the default gesture calibration/thresholds.
    pub fn with_classifier(mut self, classifier: GestureClassifier) -> Self {
        self.classifier = classifier;
        self
    }

    /// Process one fixed-size block. Runs the strictly sequential per-frame
    /// loop; never allocates, locks, or blocks.
    ///
    /// `beacon` receives the step indicator state per frame. Slice lengths
    /// must match the block: one trigger/beacon entry per audio frame and
    /// one control entry per `control_divider` audio frames.
    pub fn process_block(
        &mut self,
        inputs: &DrumInputs,
        audio: &mut AudioOut,
        beacon: &mut [bool],
    ) {
        let frames = audio.frames();
        let divider = self.config.control_divider;
        let control_frames = frames.div_ceil(divider);

        assert_eq!(inputs.trigger.len(), frames, "one trigger read per frame");
        assert_eq!(beacon.len(), frames, "one beacon slot per frame");
        assert!(
            inputs.tempo.len() >= control_frames
                && inputs.axis_x.len() >= control_frames
                && inputs.axis_y.len() >= control_frames
                && inputs.axis_z.len() >= control_frames,
            "control streams shorter than the block"
        );

        for n in 0..frames {
            let trigger = inputs.trigger[n];
            if !trigger && self.last_trigger {
                self.is_playing = !self.is_playing;
            }
            self.last_trigger = trigger;

            let ci = n / divider;
            let gesture = self.classifier.classify_volts(
                inputs.axis_x[ci],
                inputs.axis_y[ci],
                inputs.axis_z[ci],
            );
            if let Some(g) = gesture {
                self.current_pattern = g.pattern_index() % self.patterns.len();
                // Direction flips once per entry into the inverted gesture
                if g.toggles_direction() && self.last_gesture != Some(g) {
                    self.direction = self.direction.toggled();
                }
            }
            self.last_gesture = gesture;

            let mix = if self.is_playing {
                self.clock.set_tempo(inputs.tempo[ci], self.config.sample_rate);
                if self.clock.tick() {
                    self.advance_step();
                }
                beacon[n] = self.clock.beacon_lit();
                self.pool.tick(&self.bank)
            } else {
                beacon[n] = false;
                0.0
            };

            audio.write_frame(n, mix);
        }
    }

    /// Trigger every timbre set in the current step's mask, then advance
    /// the step index with wraparound.
    fn advance_step(&mut self) {
        let Some(pattern) = self.patterns.get(self.current_pattern) else {
            return;
        };
        if pattern.is_empty() {
            return;
        }

        // A pattern switch may have left the index past the new length
        let step = self.current_step % pattern.len();
        let mask = pattern.step(step);

        for timbre in 0..self.bank.num_timbres() {
            if mask.contains(timbre) {
                self.pool.allocate(timbre, &self.bank, self.direction);
            }
        }

        self.current_step = (step + 1) % pattern.len();
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    /// Start or stop the transport directly, bypassing the button input.
    pub fn set_playing(&mut self, playing: bool) {
        self.is_playing = playing;
    }

    pub fn current_pattern(&self) -> usize {
        self.current_pattern
    }

    pub fn current_step(&self) -> usize {
        self.current_step
    }

    pub fn direction(&self) -> PlayDirection {
        self.direction
    }

    pub fn active_voices(&self) -> usize {
        self.pool.active_count()
    }

    pub fn interval_samples(&self) -> u32 {
        self.clock.interval_samples()
    }
}
