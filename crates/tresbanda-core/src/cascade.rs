//! Cut-filter cascade stage.
//!
//! A fixed bank of [`MAX_SECTIONS`] biquad slots in series. Installing a
//! designed coefficient set enables the first `slope.sections()` slots and
//! bypasses the rest; an outer stage bypass short-circuits the whole bank
//! regardless of slot state. The same stage type serves the low-cut and
//! high-cut bands, and each slot owns its delay-line history, so nothing is
//! shared across stages or channels.

use crate::biquad::Biquad;
use crate::butterworth::{CutCoefficients, MAX_SECTIONS};
use crate::settings::Slope;

/// One biquad slot with its own bypass flag.
#[derive(Clone, Debug)]
struct Slot {
    filter: Biquad,
    bypassed: bool,
}

impl Slot {
    fn new() -> Self {
        Self {
            filter: Biquad::new(),
            bypassed: true,
        }
    }
}

/// Multi-order cut filter: up to four cascaded second-order sections.
#[derive(Clone, Debug)]
pub struct CascadeStage {
    slots: [Slot; MAX_SECTIONS],
    /// Outer band bypass. Takes precedence over the per-slot flags: a
    /// bypassed stage is the identity no matter how many slots are enabled.
    bypassed: bool,
}

impl CascadeStage {
    /// Create a stage with every slot bypassed (flat response) and the
    /// outer bypass off.
    pub fn new() -> Self {
        Self {
            slots: [Slot::new(), Slot::new(), Slot::new(), Slot::new()],
            bypassed: false,
        }
    }

    /// Install a designed coefficient set.
    ///
    /// Slots `0..slope.sections()` receive fresh coefficients (the whole
    /// record is assigned at once) and are activated; the remaining slots
    /// are bypassed, so their stale coefficients are never run.
    pub fn install(&mut self, coeffs: &CutCoefficients, slope: Slope) {
        let active = slope.sections();
        for (index, slot) in self.slots.iter_mut().enumerate() {
            if index < active {
                slot.filter.set_coefficients(coeffs.section(index));
                slot.bypassed = false;
            } else {
                slot.bypassed = true;
            }
        }
    }

    /// Set the outer band bypass.
    pub fn set_bypassed(&mut self, bypassed: bool) {
        self.bypassed = bypassed;
    }

    /// Whether the outer band bypass is engaged.
    pub fn is_bypassed(&self) -> bool {
        self.bypassed
    }

    /// Number of slots a sample would actually run through.
    ///
    /// Zero while the outer bypass is engaged.
    pub fn active_sections(&self) -> usize {
        if self.bypassed {
            0
        } else {
            self.slots.iter().filter(|slot| !slot.bypassed).count()
        }
    }

    /// Process a single sample through the active slots.
    #[inline]
    pub fn process(&mut self, input: f32) -> f32 {
        if self.bypassed {
            return input;
        }
        let mut signal = input;
        for slot in &mut self.slots {
            if !slot.bypassed {
                signal = slot.filter.process(signal);
            }
        }
        signal
    }

    /// Process a span in place.
    pub fn process_block_inplace(&mut self, buffer: &mut [f32]) {
        for sample in buffer.iter_mut() {
            *sample = self.process(*sample);
        }
    }

    /// Clear every slot's delay lines. Coefficients and bypass flags keep
    /// their values.
    pub fn reset(&mut self) {
        for slot in &mut self.slots {
            slot.filter.clear();
        }
    }
}

impl Default for CascadeStage {
    fn default() -> Self {
        Self::new()
    }
}
