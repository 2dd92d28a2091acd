//! File I/O layer for the tresbanda equalizer.
//!
//! Provides WAV reading/writing ([`read_wav`], [`write_wav`] and their
//! stereo variants) plus [`StereoSamples`], the left/right buffer pair the
//! offline processing path works on.
//!
//! Real-time device streaming is deliberately absent: the EQ core is driven
//! by a host's audio callback in that scenario, and this crate only serves
//! the offline/file workflow.

mod stereo;
mod wav;

pub use stereo::StereoSamples;
pub use wav::{
    WavFormat, WavInfo, WavSpec, read_wav, read_wav_info, read_wav_stereo, write_wav,
    write_wav_stereo,
};

/// Error types for file I/O operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// WAV file read/write error.
    #[error("WAV file error: {0}")]
    Wav(#[from] hound::Error),

    /// Standard I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type for file I/O operations.
pub type Result<T> = std::result::Result<T, Error>;
