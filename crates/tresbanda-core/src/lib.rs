//! Tresbanda Core - three-band parametric equalizer DSP
//!
//! The processing core of a real-time three-band EQ: a Butterworth low-cut
//! cascade, a peaking band, and a Butterworth high-cut cascade applied per
//! channel, with lock-free parameter hand-off and per-block coefficient
//! redesign.
//!
//! # Architecture
//!
//! - [`BiquadCoefficients`] / [`Biquad`] - the second-order IIR building
//!   block and its RBJ cookbook designers
//! - [`design_high_pass`] / [`design_low_pass`] - Butterworth decomposition
//!   into cascaded second-order sections
//! - [`CascadeStage`] - four bypassable biquad slots in series, shared
//!   shape of the low-cut and high-cut bands
//! - [`MonoChain`] - the fixed LowCut → Peak → HighCut pipeline for one
//!   channel
//! - [`EqParams`] / [`ChainSettings`] - atomic shared parameters and the
//!   typed per-block snapshot they resolve to
//! - [`StereoEq`] - the stereo block processor: snapshot, redesign,
//!   install, process, every block
//!
//! # Real-time contract
//!
//! The audio path ([`StereoEq::process_block`]) never locks, never
//! allocates, and never performs I/O; all work is proportional to the
//! sample count. Parameter changes travel through [`EqParams`] as
//! single-writer atomic fields and become audible within one block.
//!
//! # no_std support
//!
//! This crate is `no_std` compatible for embedded targets. Disable the
//! default `std` feature:
//!
//! ```toml
//! [dependencies]
//! tresbanda-core = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod biquad;
pub mod butterworth;
pub mod cascade;
pub mod chain;
pub mod math;
pub mod params;
pub mod processor;
pub mod settings;

// Re-export main types at crate root
pub use biquad::{Biquad, BiquadCoefficients, clamp_frequency};
pub use butterworth::{CutCoefficients, MAX_SECTIONS, design_high_pass, design_low_pass};
pub use cascade::CascadeStage;
pub use chain::{MonoChain, PeakStage};
pub use math::{db_to_linear, linear_to_db};
pub use params::EqParams;
pub use processor::StereoEq;
pub use settings::{
    ChainSettings, MAX_FREQ_HZ, MAX_GAIN_DB, MAX_Q, MIN_FREQ_HZ, MIN_GAIN_DB, MIN_Q, Slope,
};
