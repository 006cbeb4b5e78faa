//! Sample storage and bounded-polyphony playback.
//!
//! `SampleBank` owns the pre-decoded drum timbres for the process lifetime;
//! `VoicePool` plays them back through a fixed set of cursor slots. Neither
//! allocates after setup.

pub mod bank;
pub mod voice;

pub use bank::{SampleBank, SampleBuffer};
pub use voice::{PlayDirection, VoicePool, VoiceSlot, VOICE_CAPACITY};
