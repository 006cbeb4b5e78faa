use std::f32::consts::TAU;

/*
Wavetable Oscillator
====================

A wavetable oscillator stores one cycle of a waveform in a lookup table and
scans through it with a fractional read pointer. The pointer advances by

    increment = table_len * frequency / sample_rate

samples per frame, wrapping at the table boundary. Reading between two table
entries uses linear interpolation, which keeps the output smooth even when
the increment is not an integer.

Compared to computing sin() per sample, a table read is cheap and the cost is
identical for every waveform. The table is built once at setup time, so the
per-sample path never allocates.
*/

const DEFAULT_TABLE_SIZE: usize = 1024;

/// A single-cycle wavetable with a fractional phase accumulator.
pub struct Wavetable {
    table: Vec<f32>,
    sample_rate: f32,
    read_pointer: f32,
    increment: f32,
    frequency: f32,
}

impl Wavetable {
    /// Wrap a pre-computed single-cycle table. The table is owned for the
    /// oscillator's lifetime and never reallocated.
    pub fn from_table(sample_rate: f32, table: Vec<f32>) -> Self {
        let mut osc = Self {
            table,
            sample_rate,
            read_pointer: 0.0,
            increment: 0.0,
            frequency: 0.0,
        };
        osc.set_frequency(440.0);
        osc
    }

    /// One cycle of a sine wave.
    pub fn sine(sample_rate: f32) -> Self {
        let table = (0..DEFAULT_TABLE_SIZE)
            .map(|n| (TAU * n as f32 / DEFAULT_TABLE_SIZE as f32).sin())
            .collect();
        Self::from_table(sample_rate, table)
    }

    /// One cycle of a sawtooth: a ramp from -1 to 1.
    pub fn sawtooth(sample_rate: f32) -> Self {
        let table = (0..DEFAULT_TABLE_SIZE)
            .map(|n| -1.0 + 2.0 * n as f32 / (DEFAULT_TABLE_SIZE - 1) as f32)
            .collect();
        Self::from_table(sample_rate, table)
    }

    pub fn set_frequency(&mut self, frequency: f32) {
        self.frequency = frequency;
        self.increment = self.table.len() as f32 * frequency / self.sample_rate;
    }

    pub fn frequency(&self) -> f32 {
        self.frequency
    }

    /// Produce the next sample and advance the phase. Called once per frame.
    pub fn next_sample(&mut self) -> f32 {
        let len = self.table.len();

        let index = self.read_pointer as usize;
        let next_index = (index + 1) % len;
        let frac = self.read_pointer - index as f32;

        let a = self.table[index];
        let b = self.table[next_index];
        let sample = a + frac * (b - a);

        self.read_pointer += self.increment;
        while self.read_pointer >= len as f32 {
            self.read_pointer -= len as f32;
        }

        sample
    }

    /// Fill a buffer with oscillator output.
    pub fn render(&mut self, buffer: &mut [f32]) {
        for sample in buffer.iter_mut() {
            *sample = self.next_sample();
        }
    }

    /// Rewind the phase to the start of the table.
    pub fn reset(&mut self) {
        self.read_pointer = 0.0;
    }
}
