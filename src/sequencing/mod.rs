//! Step patterns and the metronome clock that advances them.

pub mod clock;
pub mod pattern;

pub use clock::{StepClock, TEMPO_MAX_MS, TEMPO_MIN_MS};
pub use pattern::{Pattern, PatternBank, StepMask};
