use super::bank::SampleBank;

/*
Voice Pool
==========

Bounded polyphony for the drum machine: a fixed array of playback cursors,
one sample advanced per audio frame. Allocation scans slots lowest-index
first and claims the first inactive one; when every slot is busy the trigger
is dropped silently. Saturation is a deliberate resource limit, not a fault,
so there is no error channel, no queueing, and no voice stealing.

Each slot is a tagged variant rather than a -1 sentinel, so an active voice
always carries an in-bounds cursor by construction: the cursor is checked
against the buffer on the same frame it would leave it, and the voice
retires without contributing a sample past the end.
*/

/// Fixed number of playback slots.
pub const VOICE_CAPACITY: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayDirection {
    Forward,
    /// End-anchored: the cursor starts at the last sample and steps down
    /// to zero, playing the buffer once in reverse.
    Backward,
}

impl PlayDirection {
    pub fn toggled(self) -> Self {
        match self {
            PlayDirection::Forward => PlayDirection::Backward,
            PlayDirection::Backward => PlayDirection::Forward,
        }
    }
}

/// One playback slot. `Active` voices hold a cursor into their timbre's
/// buffer; the direction is captured at trigger time, so flipping the
/// machine's direction latch does not disturb voices already in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoiceSlot {
    Inactive,
    Active {
        timbre: usize,
        position: usize,
        direction: PlayDirection,
    },
}

impl VoiceSlot {
    #[inline]
    pub fn is_active(&self) -> bool {
        matches!(self, VoiceSlot::Active { .. })
    }
}

/// Fixed-capacity set of voices. Constructed once; never allocates again.
pub struct VoicePool {
    slots: [VoiceSlot; VOICE_CAPACITY],
}

impl VoicePool {
    pub fn new() -> Self {
        Self {
            slots: [VoiceSlot::Inactive; VOICE_CAPACITY],
        }
    }

    /// Claim the first free slot for `timbre`, starting its cursor at the
    /// buffer head (forward) or tail (backward). Dropped silently when the
    /// pool is saturated or the timbre has no buffer.
    pub fn allocate(&mut self, timbre: usize, bank: &SampleBank, direction: PlayDirection) {
        let len = match bank.get(timbre) {
            Some(buffer) if !buffer.is_empty() => buffer.len(),
            _ => return,
        };

        for slot in self.slots.iter_mut() {
            if !slot.is_active() {
                let position = match direction {
                    PlayDirection::Forward => 0,
                    PlayDirection::Backward => len - 1,
                };
                *slot = VoiceSlot::Active {
                    timbre,
                    position,
                    direction,
                };
                return;
            }
        }
        // Saturated: bounded polyphony drops the trigger
    }

    /// Advance every active voice by one frame and return the equal-weighted
    /// mix of the samples read. A voice whose cursor leaves its buffer this
    /// frame retires after contributing its final sample.
    pub fn tick(&mut self, bank: &SampleBank) -> f32 {
        let mut mix = 0.0;

        for slot in self.slots.iter_mut() {
            if let VoiceSlot::Active {
                timbre,
                position,
                direction,
            } = *slot
            {
                let Some(buffer) = bank.get(timbre) else {
                    *slot = VoiceSlot::Inactive;
                    continue;
                };

                mix += buffer.sample(position);

                *slot = match direction {
                    PlayDirection::Forward => {
                        if position + 1 >= buffer.len() {
                            VoiceSlot::Inactive
                        } else {
                            VoiceSlot::Active {
                                timbre,
                                position: position + 1,
                                direction,
                            }
                        }
                    }
                    PlayDirection::Backward => {
                        if position == 0 {
                            VoiceSlot::Inactive
                        } else {
                            VoiceSlot::Active {
                                timbre,
                                position: position - 1,
                                direction,
                            }
                        }
                    }
                };
            }
        }

        mix
    }

    pub fn active_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_active()).count()
    }

    /// Slot states, for tests and external indicators.
    pub fn slots(&self) -> &[VoiceSlot] {
        &self.slots
    }

    /// Retire every voice.
    pub fn reset(&mut self) {
        self.slots = [VoiceSlot::Inactive; VOICE_CAPACITY];
    }
}

impl Default for VoicePool {
    fn default() -> Self {
        Self::new()
    }
}
