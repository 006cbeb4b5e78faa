//! Low-level DSP primitives used by the engine entry points.
//!
//! These components are allocation-free and realtime-safe once constructed,
//! making them safe to run inside a hard-deadline audio callback. They stay
//! focused on the signal-processing math; block orchestration and control
//! sampling live in `engine`.

/// Nonlinear resonant low-pass ladder filter.
pub mod ladder;
/// Wavetable oscillator waveforms.
pub mod oscillator;

pub use ladder::{LadderCoefficients, LadderFilter};
pub use oscillator::Wavetable;
