pub mod control; // Control-voltage calibration and gesture classification
pub mod dsp; // Oscillator and ladder filter primitives
pub mod engine; // Per-block callback entry points
pub mod sampler; // Sample storage and the bounded voice pool
pub mod sequencing; // Step patterns and the metronome clock

pub const MAX_BLOCK_SIZE: usize = 2048;
