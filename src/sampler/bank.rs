/// One drum timbre: an immutable run of mono PCM samples.
///
/// Decoding happens outside this crate; the buffer arrives pre-decoded at
/// setup time and is read-only for the rest of the process.
#[derive(Debug, Clone)]
pub struct SampleBuffer {
    data: Vec<f32>,
}

impl SampleBuffer {
    pub fn from_samples(data: Vec<f32>) -> Self {
        Self { data }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    pub fn sample(&self, position: usize) -> f32 {
        self.data[position]
    }

    pub fn samples(&self) -> &[f32] {
        &self.data
    }
}

/// The full set of timbres, keyed by timbre index. Bit *i* of a step mask
/// refers to `buffers[i]`.
#[derive(Debug, Clone)]
pub struct SampleBank {
    buffers: Vec<SampleBuffer>,
}

impl SampleBank {
    pub fn new(buffers: Vec<SampleBuffer>) -> Self {
        Self { buffers }
    }

    #[inline]
    pub fn num_timbres(&self) -> usize {
        self.buffers.len()
    }

    #[inline]
    pub fn get(&self, timbre: usize) -> Option<&SampleBuffer> {
        self.buffers.get(timbre)
    }
}
