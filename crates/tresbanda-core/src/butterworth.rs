//! Butterworth cut-filter design.
//!
//! Decomposes a high-order Butterworth high-pass or low-pass response into
//! cascaded second-order sections with analytically placed poles. An
//! order-N Butterworth prototype has its poles on the unit half-circle at
//! angles `π/2 + (2k+1)·π/(2N)`; each complex-conjugate pair becomes one
//! biquad whose quality factor is `1 / (2·sin((2k+1)·π/(2N)))`.
//!
//! The designers always return [`MAX_SECTIONS`] coefficient records so the
//! caller can install into a fixed-size cascade; entries past the slope's
//! section count are identity placeholders and are never enabled.
//!
//! Design is deterministic and side-effect-free: identical inputs produce
//! bit-identical coefficient sets.

use core::f32::consts::PI;
use libm::sinf;

use crate::biquad::BiquadCoefficients;
use crate::settings::Slope;

/// Number of biquad slots in a cut cascade (8th order at the steepest slope).
pub const MAX_SECTIONS: usize = 4;

/// Coefficient sets for up to [`MAX_SECTIONS`] cascaded sections.
///
/// Produced by [`design_high_pass`] / [`design_low_pass`] for a single
/// corner frequency and slope; consumed by
/// [`CascadeStage::install`](crate::cascade::CascadeStage::install).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CutCoefficients {
    sections: [BiquadCoefficients; MAX_SECTIONS],
}

impl CutCoefficients {
    /// Coefficients for section `index`.
    ///
    /// # Panics
    /// Panics if `index >= MAX_SECTIONS`.
    #[inline]
    pub fn section(&self, index: usize) -> BiquadCoefficients {
        self.sections[index]
    }
}

/// Quality factor for one conjugate pole pair of an order-`order`
/// Butterworth cascade, from the pair's angle off the imaginary axis.
fn section_q(order: usize, section: usize) -> f32 {
    let theta = (2 * section + 1) as f32 * PI / (2 * order) as f32;
    1.0 / (2.0 * sinf(theta))
}

/// Design a high-pass (low-cut) Butterworth cascade at `freq`.
///
/// `slope` selects the order: `slope.sections()` second-order sections are
/// designed, the rest of the returned set is identity.
pub fn design_high_pass(freq: f32, sample_rate: f32, slope: Slope) -> CutCoefficients {
    design(freq, sample_rate, slope, BiquadCoefficients::high_pass)
}

/// Design a low-pass (high-cut) Butterworth cascade at `freq`.
pub fn design_low_pass(freq: f32, sample_rate: f32, slope: Slope) -> CutCoefficients {
    design(freq, sample_rate, slope, BiquadCoefficients::low_pass)
}

fn design(
    freq: f32,
    sample_rate: f32,
    slope: Slope,
    make_section: fn(f32, f32, f32) -> BiquadCoefficients,
) -> CutCoefficients {
    let mut sections = [BiquadCoefficients::IDENTITY; MAX_SECTIONS];
    let order = slope.order();
    for (k, section) in sections.iter_mut().take(slope.sections()).enumerate() {
        *section = make_section(freq, section_q(order, k), sample_rate);
    }
    CutCoefficients { sections }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::biquad::Biquad;

    #[test]
    fn second_order_q_is_butterworth() {
        // A lone section of an order-2 cascade is the classic 1/sqrt(2).
        assert!((section_q(2, 0) - core::f32::consts::FRAC_1_SQRT_2).abs() < 1e-6);
    }

    #[test]
    fn fourth_order_q_values() {
        // Known Butterworth table values for order 4: {1.3066, 0.5412}.
        assert!((section_q(4, 0) - 1.3066).abs() < 1e-3);
        assert!((section_q(4, 1) - 0.5412).abs() < 1e-3);
    }

    #[test]
    fn eighth_order_q_values() {
        // Order 8: {2.5629, 0.8999, 0.6013, 0.5098}.
        let expected = [2.5629, 0.8999, 0.6013, 0.5098];
        for (k, want) in expected.iter().enumerate() {
            let got = section_q(8, k);
            assert!(
                (got - want).abs() < 1e-3,
                "section {k}: expected Q {want}, got {got}"
            );
        }
    }

    #[test]
    fn unused_sections_are_identity() {
        for slope in Slope::ALL {
            let set = design_high_pass(500.0, 48000.0, slope);
            for index in slope.sections()..MAX_SECTIONS {
                assert_eq!(
                    set.section(index),
                    BiquadCoefficients::IDENTITY,
                    "slope {slope:?} section {index} should be a placeholder"
                );
            }
        }
    }

    #[test]
    fn design_is_deterministic() {
        for slope in Slope::ALL {
            let first = design_low_pass(2500.0, 44100.0, slope);
            let second = design_low_pass(2500.0, 44100.0, slope);
            assert_eq!(first, second);
        }
    }

    #[test]
    fn high_pass_cascade_rejects_dc() {
        let set = design_high_pass(1000.0, 48000.0, Slope::Db48);
        let mut sections = [Biquad::new(), Biquad::new(), Biquad::new(), Biquad::new()];
        for (i, biquad) in sections.iter_mut().enumerate() {
            biquad.set_coefficients(set.section(i));
        }

        let mut output = 1.0;
        for _ in 0..4000 {
            output = sections.iter_mut().fold(1.0, |s, b| b.process(s));
        }
        assert!(
            output.abs() < 1e-4,
            "order-8 high-pass should reject DC, settled at {output}"
        );
    }

    #[test]
    fn low_pass_cascade_passes_dc() {
        let set = design_low_pass(1000.0, 48000.0, Slope::Db48);
        let mut sections = [Biquad::new(), Biquad::new(), Biquad::new(), Biquad::new()];
        for (i, biquad) in sections.iter_mut().enumerate() {
            biquad.set_coefficients(set.section(i));
        }

        let mut output = 0.0;
        for _ in 0..4000 {
            output = sections.iter_mut().fold(1.0, |s, b| b.process(s));
        }
        assert!(
            (output - 1.0).abs() < 1e-3,
            "order-8 low-pass should pass DC near unity, settled at {output}"
        );
    }
}
