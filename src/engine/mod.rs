//! Per-block callback entry points.
//!
//! The host owns the audio thread and calls `DrumMachine::process_block` and
//! `FilterSynth::process_block` once per fixed-size block. Everything these
//! entry points touch is owned state passed in by reference; there are no
//! statics, no locks, and no allocation on the block path.

pub mod config;
pub mod context;
pub mod drum_machine;
pub mod synth;

pub use config::{ConfigError, ControlRange, ControlRanges, EngineConfig};
pub use context::{AudioOut, DrumInputs, FnProbe, NullProbe, ScopeProbe};
pub use drum_machine::DrumMachine;
pub use synth::{FilterSynth, SynthControls};
