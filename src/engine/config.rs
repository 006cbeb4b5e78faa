#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A host control widget's range. Consumed once at setup; the core reads
/// these values and never validates them.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy)]
pub struct ControlRange {
    pub min: f32,
    pub max: f32,
    pub default: f32,
    pub step: f32,
}

impl ControlRange {
    pub fn new(min: f32, max: f32, default: f32, step: f32) -> Self {
        Self {
            min,
            max,
            default,
            step,
        }
    }
}

/// Ranges for every externally supplied control.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy)]
pub struct ControlRanges {
    pub tempo: ControlRange,
    pub frequency: ControlRange,
    pub amplitude: ControlRange,
    pub cutoff: ControlRange,
    pub resonance: ControlRange,
}

impl Default for ControlRanges {
    fn default() -> Self {
        Self {
            tempo: ControlRange::new(0.0, 1.0, 0.5, 0.0),
            frequency: ControlRange::new(40.0, 8_000.0, 100.0, 0.0),
            amplitude: ControlRange::new(0.0, 2.0, 0.3, 0.0),
            cutoff: ControlRange::new(100.0, 5_000.0, 2_000.0, 0.0),
            resonance: ControlRange::new(0.0, 1.1, 0.9, 0.0),
        }
    }
}

/// Setup-time configuration, consumed once before the first block.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy)]
pub struct EngineConfig {
    pub sample_rate: f32,
    /// Audio frames per control frame. Frame `n` reads control index
    /// `n / control_divider`; the per-frame addressing math assumes this
    /// ratio holds for the whole run.
    pub control_divider: usize,
    /// How long the step beacon stays asserted after each fire.
    pub beacon_hold_ms: f32,
    pub ranges: ControlRanges,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            sample_rate: 44_100.0,
            control_divider: 2,
            beacon_hold_ms: 50.0,
            ranges: ControlRanges::default(),
        }
    }
}

impl EngineConfig {
    /// The beacon hold window converted to samples at this rate.
    pub fn beacon_hold_samples(&self) -> u32 {
        (self.beacon_hold_ms * 0.001 * self.sample_rate) as u32
    }

    /// The one hard failure in the system: the audio and control streams
    /// must be alignable before any frame is processed.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.sample_rate > 0.0) {
            return Err(ConfigError::InvalidSampleRate {
                sample_rate: self.sample_rate,
            });
        }
        if self.control_divider == 0 {
            return Err(ConfigError::ZeroControlDivider);
        }
        Ok(())
    }
}

/// Startup precondition violations. Initialization aborts on these; there
/// is no error channel at audio rate.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Sample rate must be positive and finite.
    InvalidSampleRate { sample_rate: f32 },
    /// The control stream divider cannot be zero.
    ZeroControlDivider,
    /// The drum machine needs at least one pattern to sequence.
    EmptyPatternBank,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidSampleRate { sample_rate } => {
                write!(f, "invalid sample rate: {}", sample_rate)
            }
            ConfigError::ZeroControlDivider => {
                write!(f, "control divider must be at least 1")
            }
            ConfigError::EmptyPatternBank => {
                write!(f, "pattern bank is empty: nothing to sequence")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
