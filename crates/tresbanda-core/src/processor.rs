//! Stereo block processor and filter-update orchestration.
//!
//! [`StereoEq`] owns the two per-channel chains and the shared parameter
//! handle. Once per block, and once at stream preparation, it resolves a
//! settings snapshot, redesigns every filter from it, installs the
//! coefficients into both chains, and runs each channel span through its
//! chain in place.
//!
//! Coefficients are redesigned every block even when settings have not
//! changed. That keeps parameter changes audible within one block of
//! latency and the per-block work fixed; the redundant design work is a
//! deliberate tradeoff over dirty-checking.
//!
//! # Real-time contract
//!
//! [`StereoEq::process_block`] takes no locks, performs no allocation and
//! no I/O, and completes in time proportional to the sample count.
//! [`StereoEq::prepare`] must only run while the stream is stopped.

#[cfg(not(feature = "std"))]
use alloc::sync::Arc;
#[cfg(feature = "std")]
use std::sync::Arc;

use crate::biquad::BiquadCoefficients;
use crate::butterworth::{design_high_pass, design_low_pass};
use crate::chain::MonoChain;
use crate::params::EqParams;
use crate::settings::ChainSettings;

/// Sample rate assumed until the host calls [`StereoEq::prepare`].
const DEFAULT_SAMPLE_RATE: f32 = 48000.0;

/// The stereo three-band equalizer processor.
///
/// One instance per stream. Create it bound to shared [`EqParams`], call
/// [`prepare`](Self::prepare) with the stream spec, then feed blocks to
/// [`process_block`](Self::process_block) from the audio context.
pub struct StereoEq {
    params: Arc<EqParams>,
    left: MonoChain,
    right: MonoChain,
    sample_rate: f32,
    max_block_size: usize,
}

impl StereoEq {
    /// Create a processor bound to shared parameters.
    ///
    /// The chains start flat; call [`prepare`](Self::prepare) before the
    /// first block.
    pub fn new(params: Arc<EqParams>) -> Self {
        Self {
            params,
            left: MonoChain::new(),
            right: MonoChain::new(),
            sample_rate: DEFAULT_SAMPLE_RATE,
            max_block_size: 0,
        }
    }

    /// The shared parameter storage this processor reads from.
    pub fn params(&self) -> &Arc<EqParams> {
        &self.params
    }

    /// The prepared sample rate in Hz.
    pub fn sample_rate(&self) -> f32 {
        self.sample_rate
    }

    /// The left-channel chain (channel 0).
    pub fn left(&self) -> &MonoChain {
        &self.left
    }

    /// The right-channel chain (channel 1).
    pub fn right(&self) -> &MonoChain {
        &self.right
    }

    /// Ready the processor for a (re)started stream.
    ///
    /// Stores the stream spec, zeroes every delay line, and installs
    /// coefficients from a fresh snapshot so the very first block is
    /// processed with correct, non-default filters. Call before first use
    /// and again whenever the sample rate or maximum block size changes;
    /// only while the audio path is inactive.
    pub fn prepare(&mut self, sample_rate: f32, max_block_size: usize) {
        self.sample_rate = sample_rate;
        self.max_block_size = max_block_size;
        self.left.reset();
        self.right.reset();

        let settings = self.params.snapshot();
        self.update_filters(&settings);

        #[cfg(feature = "tracing")]
        tracing::debug!("prepare: sample_rate={sample_rate}, max_block_size={max_block_size}");
    }

    /// Clear all delay-line state without redesigning coefficients.
    pub fn reset(&mut self) {
        self.left.reset();
        self.right.reset();
    }

    /// Redesign and install every filter from a settings snapshot.
    ///
    /// Runs once per block and once during [`prepare`](Self::prepare).
    /// Each coefficient set is designed once and installed into both
    /// channels; band bypass flags are applied as the stages' outer
    /// bypasses, which take precedence over per-slot enables.
    pub fn update_filters(&mut self, settings: &ChainSettings) {
        self.update_peak(settings);
        self.update_low_cut(settings);
        self.update_high_cut(settings);
    }

    fn update_peak(&mut self, settings: &ChainSettings) {
        let coeffs = BiquadCoefficients::peak(
            settings.peak_freq,
            settings.peak_q,
            settings.peak_gain_db,
            self.sample_rate,
        );
        for chain in [&mut self.left, &mut self.right] {
            let peak = chain.peak_mut();
            peak.install(coeffs);
            peak.set_bypassed(settings.peak_bypassed);
        }
    }

    fn update_low_cut(&mut self, settings: &ChainSettings) {
        let coeffs = design_high_pass(settings.low_cut_freq, self.sample_rate, settings.low_cut_slope);
        for chain in [&mut self.left, &mut self.right] {
            let cut = chain.low_cut_mut();
            cut.install(&coeffs, settings.low_cut_slope);
            cut.set_bypassed(settings.low_cut_bypassed);
        }
    }

    fn update_high_cut(&mut self, settings: &ChainSettings) {
        let coeffs = design_low_pass(settings.high_cut_freq, self.sample_rate, settings.high_cut_slope);
        for chain in [&mut self.left, &mut self.right] {
            let cut = chain.high_cut_mut();
            cut.install(&coeffs, settings.high_cut_slope);
            cut.set_bypassed(settings.high_cut_bypassed);
        }
    }

    /// Process one block of channel spans in place.
    ///
    /// Channels 0 and 1 run through the left and right chains
    /// independently (dual mono, no cross-channel coupling). Channels past
    /// the stereo pair are cleared: hosts may hand over more output
    /// channels than are driven by inputs. With fewer than two channels
    /// only the available ones are processed.
    pub fn process_block(&mut self, channels: &mut [&mut [f32]]) {
        debug_assert!(
            channels
                .iter()
                .all(|channel| channel.len() <= self.max_block_size),
            "block exceeds the prepared maximum size"
        );

        for channel in channels.iter_mut().skip(2) {
            channel.fill(0.0);
        }

        let settings = self.params.snapshot();
        self.update_filters(&settings);

        for (channel, chain) in channels
            .iter_mut()
            .take(2)
            .zip([&mut self.left, &mut self.right])
        {
            chain.process_block_inplace(channel);
        }
    }
}
