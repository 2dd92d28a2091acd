//! Stereo buffer pair for offline processing.

/// A pair of equal-length left/right sample buffers.
///
/// The interchange type between WAV I/O and the block-processing loop: the
/// two channels stay deinterleaved so they can be handed to the EQ core as
/// independent spans.
#[derive(Debug, Clone)]
pub struct StereoSamples {
    /// Left channel samples.
    pub left: Vec<f32>,
    /// Right channel samples.
    pub right: Vec<f32>,
}

impl StereoSamples {
    /// Create from left and right channel buffers.
    pub fn new(left: Vec<f32>, right: Vec<f32>) -> Self {
        debug_assert_eq!(left.len(), right.len(), "channels must have same length");
        Self { left, right }
    }

    /// Duplicate a mono buffer into both channels.
    pub fn from_mono(mono: Vec<f32>) -> Self {
        Self {
            left: mono.clone(),
            right: mono,
        }
    }

    /// Deinterleave an `L R L R ...` buffer. A trailing odd sample is
    /// dropped.
    pub fn from_interleaved(interleaved: &[f32]) -> Self {
        let frames = interleaved.len() / 2;
        let mut left = Vec::with_capacity(frames);
        let mut right = Vec::with_capacity(frames);
        for frame in interleaved.chunks_exact(2) {
            left.push(frame[0]);
            right.push(frame[1]);
        }
        Self { left, right }
    }

    /// Interleave into an `L R L R ...` buffer.
    pub fn to_interleaved(&self) -> Vec<f32> {
        let mut interleaved = Vec::with_capacity(self.left.len() * 2);
        for (l, r) in self.left.iter().zip(self.right.iter()) {
            interleaved.push(*l);
            interleaved.push(*r);
        }
        interleaved
    }

    /// Mix down to mono by averaging the channels.
    pub fn to_mono(&self) -> Vec<f32> {
        self.left
            .iter()
            .zip(self.right.iter())
            .map(|(l, r)| (l + r) * 0.5)
            .collect()
    }

    /// Number of sample frames per channel.
    pub fn len(&self) -> usize {
        self.left.len()
    }

    /// Whether the buffers are empty.
    pub fn is_empty(&self) -> bool {
        self.left.is_empty()
    }
}
