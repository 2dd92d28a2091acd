//! Per-channel filter chain.
//!
//! [`MonoChain`] is the fixed LowCut → Peak → HighCut pipeline applied to
//! one audio channel. The stereo processor owns two structurally identical,
//! independently stateful instances; nothing here is shared between
//! channels.

use crate::biquad::{Biquad, BiquadCoefficients};
use crate::cascade::CascadeStage;

/// The single-biquad peaking band with its bypass flag.
#[derive(Clone, Debug)]
pub struct PeakStage {
    filter: Biquad,
    bypassed: bool,
}

impl PeakStage {
    /// Create a peak stage with passthrough coefficients, not bypassed.
    pub fn new() -> Self {
        Self {
            filter: Biquad::new(),
            bypassed: false,
        }
    }

    /// Replace the peak coefficients wholesale.
    #[inline]
    pub fn install(&mut self, coeffs: BiquadCoefficients) {
        self.filter.set_coefficients(coeffs);
    }

    /// The currently installed coefficients.
    pub fn coefficients(&self) -> BiquadCoefficients {
        self.filter.coefficients()
    }

    /// Set the band bypass.
    pub fn set_bypassed(&mut self, bypassed: bool) {
        self.bypassed = bypassed;
    }

    /// Whether the band is bypassed.
    pub fn is_bypassed(&self) -> bool {
        self.bypassed
    }

    /// Process a single sample; identity while bypassed.
    #[inline]
    pub fn process(&mut self, input: f32) -> f32 {
        if self.bypassed {
            input
        } else {
            self.filter.process(input)
        }
    }

    /// Process a span in place.
    pub fn process_block_inplace(&mut self, buffer: &mut [f32]) {
        if self.bypassed {
            return;
        }
        for sample in buffer.iter_mut() {
            *sample = self.filter.process(*sample);
        }
    }

    /// Clear the delay lines.
    pub fn reset(&mut self) {
        self.filter.clear();
    }
}

impl Default for PeakStage {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixed three-stage chain for one audio channel.
///
/// The Cut → Peak → Cut ordering is structural and not reconfigurable.
/// Stages are addressed directly through the accessors; there is no runtime
/// topology to get wrong.
#[derive(Clone, Debug, Default)]
pub struct MonoChain {
    low_cut: CascadeStage,
    peak: PeakStage,
    high_cut: CascadeStage,
}

impl MonoChain {
    /// Create a chain with all three stages flat (no installed design).
    pub fn new() -> Self {
        Self::default()
    }

    /// The low-cut (high-pass) cascade.
    pub fn low_cut(&self) -> &CascadeStage {
        &self.low_cut
    }

    /// Mutable access to the low-cut cascade.
    pub fn low_cut_mut(&mut self) -> &mut CascadeStage {
        &mut self.low_cut
    }

    /// The peak band.
    pub fn peak(&self) -> &PeakStage {
        &self.peak
    }

    /// Mutable access to the peak band.
    pub fn peak_mut(&mut self) -> &mut PeakStage {
        &mut self.peak
    }

    /// The high-cut (low-pass) cascade.
    pub fn high_cut(&self) -> &CascadeStage {
        &self.high_cut
    }

    /// Mutable access to the high-cut cascade.
    pub fn high_cut_mut(&mut self) -> &mut CascadeStage {
        &mut self.high_cut
    }

    /// Process a single sample through all three stages.
    #[inline]
    pub fn process(&mut self, input: f32) -> f32 {
        let after_low_cut = self.low_cut.process(input);
        let after_peak = self.peak.process(after_low_cut);
        self.high_cut.process(after_peak)
    }

    /// Run the whole span through each stage in order, in place.
    ///
    /// Sample order is preserved; each stage sees the previous stage's full
    /// output span.
    pub fn process_block_inplace(&mut self, buffer: &mut [f32]) {
        self.low_cut.process_block_inplace(buffer);
        self.peak.process_block_inplace(buffer);
        self.high_cut.process_block_inplace(buffer);
    }

    /// Clear all delay-line state in every stage.
    pub fn reset(&mut self) {
        self.low_cut.reset();
        self.peak.reset();
        self.high_cut.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::butterworth::{design_high_pass, design_low_pass};
    use crate::settings::Slope;

    #[test]
    fn empty_chain_is_identity() {
        let mut chain = MonoChain::new();
        let input: [f32; 8] = [0.1, -0.2, 0.3, -0.4, 0.5, -0.6, 0.7, -0.8];
        let mut buffer = input;
        chain.process_block_inplace(&mut buffer);
        assert_eq!(buffer, input);
    }

    #[test]
    fn all_stages_bypassed_is_exact_identity() {
        let mut chain = MonoChain::new();
        chain
            .low_cut_mut()
            .install(&design_high_pass(400.0, 48000.0, Slope::Db48), Slope::Db48);
        chain
            .peak_mut()
            .install(BiquadCoefficients::peak(750.0, 2.0, 18.0, 48000.0));
        chain
            .high_cut_mut()
            .install(&design_low_pass(3000.0, 48000.0, Slope::Db48), Slope::Db48);

        chain.low_cut_mut().set_bypassed(true);
        chain.peak_mut().set_bypassed(true);
        chain.high_cut_mut().set_bypassed(true);

        let input: Vec<f32> = (0..256).map(|i| (i as f32 * 0.13).sin()).collect();
        let mut buffer = input.clone();
        chain.process_block_inplace(&mut buffer);
        assert_eq!(buffer, input, "fully bypassed chain must be bit-exact");
    }

    #[test]
    fn zero_input_stays_zero() {
        let mut chain = MonoChain::new();
        chain
            .low_cut_mut()
            .install(&design_high_pass(120.0, 48000.0, Slope::Db36), Slope::Db36);
        chain
            .peak_mut()
            .install(BiquadCoefficients::peak(1000.0, 0.5, -12.0, 48000.0));
        chain
            .high_cut_mut()
            .install(&design_low_pass(8000.0, 48000.0, Slope::Db24), Slope::Db24);

        let mut buffer = [0.0f32; 512];
        chain.process_block_inplace(&mut buffer);
        assert!(buffer.iter().all(|&s| s == 0.0), "zero in must give zero out");
    }

    #[test]
    fn reset_silences_residual_state() {
        let mut chain = MonoChain::new();
        chain
            .peak_mut()
            .install(BiquadCoefficients::peak(750.0, 1.0, 12.0, 48000.0));
        chain
            .low_cut_mut()
            .install(&design_high_pass(500.0, 48000.0, Slope::Db24), Slope::Db24);

        let mut loud = [0.9f32; 256];
        chain.process_block_inplace(&mut loud);

        chain.reset();
        let mut silence = [0.0f32; 64];
        chain.process_block_inplace(&mut silence);
        assert_eq!(silence[0], 0.0, "first sample after reset must be zero");
        assert!(silence.iter().all(|&s| s == 0.0));
    }
}
