//! Typed equalizer settings.
//!
//! [`ChainSettings`] is the value record every processing component consumes:
//! a full snapshot of the three bands, recomputed fresh at the top of each
//! processed block by the settings resolver ([`EqParams::snapshot`]).
//! [`Slope`] selects the cut-filter steepness in 12 dB/octave steps.
//!
//! The range constants here mirror the host-facing parameter layout; the
//! resolver clamps into them so the core never sees an out-of-range value.
//!
//! [`EqParams::snapshot`]: crate::params::EqParams::snapshot

/// Lowest designable band frequency in Hz.
pub const MIN_FREQ_HZ: f32 = 20.0;
/// Highest designable band frequency in Hz.
pub const MAX_FREQ_HZ: f32 = 20000.0;
/// Lowest peak-band quality factor.
pub const MIN_Q: f32 = 0.1;
/// Highest peak-band quality factor.
pub const MAX_Q: f32 = 10.0;
/// Lowest peak-band gain in dB.
pub const MIN_GAIN_DB: f32 = -24.0;
/// Highest peak-band gain in dB.
pub const MAX_GAIN_DB: f32 = 24.0;

/// Cut-filter steepness, in 12 dB/octave increments.
///
/// Each step adds one cascaded second-order section, so the four variants
/// map to filter orders 2, 4, 6 and 8.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Slope {
    /// 12 dB/octave: one second-order section.
    #[default]
    Db12,
    /// 24 dB/octave: two sections.
    Db24,
    /// 36 dB/octave: three sections.
    Db36,
    /// 48 dB/octave: four sections.
    Db48,
}

impl Slope {
    /// All slopes, steepness ascending.
    pub const ALL: [Self; 4] = [Self::Db12, Self::Db24, Self::Db36, Self::Db48];

    /// Number of active biquad sections (1 to 4).
    #[inline]
    pub fn sections(self) -> usize {
        match self {
            Self::Db12 => 1,
            Self::Db24 => 2,
            Self::Db36 => 3,
            Self::Db48 => 4,
        }
    }

    /// Butterworth filter order (2, 4, 6 or 8).
    #[inline]
    pub fn order(self) -> usize {
        self.sections() * 2
    }

    /// Stable storage index (0 to 3).
    #[inline]
    pub fn index(self) -> u32 {
        self.sections() as u32 - 1
    }

    /// Convert a raw stored index back into a slope.
    ///
    /// The enum is closed; out-of-range values from misconfigured storage
    /// clamp to the steepest slope rather than producing an invalid order.
    #[inline]
    pub fn from_index(index: u32) -> Self {
        match index {
            0 => Self::Db12,
            1 => Self::Db24,
            2 => Self::Db36,
            _ => Self::Db48,
        }
    }
}

/// One control-path snapshot of every equalizer parameter.
///
/// A plain `Copy` record with no identity beyond its values. The audio path
/// resolves a fresh snapshot at the start of every block and at stream
/// preparation, and feeds it to the filter-update pass; it is never retained
/// across blocks.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChainSettings {
    /// Low-cut (high-pass) corner frequency in Hz.
    pub low_cut_freq: f32,
    /// Low-cut steepness.
    pub low_cut_slope: Slope,
    /// Whether the low-cut band is bypassed entirely.
    pub low_cut_bypassed: bool,

    /// Peak band center frequency in Hz.
    pub peak_freq: f32,
    /// Peak band gain in dB (positive = boost, negative = cut).
    pub peak_gain_db: f32,
    /// Peak band quality factor (bandwidth = freq / Q).
    pub peak_q: f32,
    /// Whether the peak band is bypassed.
    pub peak_bypassed: bool,

    /// High-cut (low-pass) corner frequency in Hz.
    pub high_cut_freq: f32,
    /// High-cut steepness.
    pub high_cut_slope: Slope,
    /// Whether the high-cut band is bypassed entirely.
    pub high_cut_bypassed: bool,
}

impl Default for ChainSettings {
    /// Host-layout defaults: both cuts parked at the band edges (audibly
    /// inert), peak at 750 Hz with 0 dB gain and Q 1, nothing bypassed.
    fn default() -> Self {
        Self {
            low_cut_freq: MIN_FREQ_HZ,
            low_cut_slope: Slope::Db12,
            low_cut_bypassed: false,
            peak_freq: 750.0,
            peak_gain_db: 0.0,
            peak_q: 1.0,
            peak_bypassed: false,
            high_cut_freq: MAX_FREQ_HZ,
            high_cut_slope: Slope::Db12,
            high_cut_bypassed: false,
        }
    }
}
