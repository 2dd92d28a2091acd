//! Lock-free shared parameter storage.
//!
//! [`EqParams`] is the hand-off point between the control path (a UI or
//! automation writing individual parameters at any time) and the audio path
//! (reading one snapshot per block). Float values are stored as `AtomicU32`
//! bit-casts, slopes as atomic indices, bypasses as `AtomicBool`; there are
//! no locks and no allocation on either side.
//!
//! The setters clamp to the valid parameter ranges, so egregious
//! misconfiguration is corrected at this boundary and the processing core
//! can trust every snapshot it receives. Stores use `Release` and loads
//! `Acquire`; each field has a single logical writer, so a snapshot is
//! always a mix of current per-field values even if it straddles a write.

use core::sync::atomic::{AtomicBool, AtomicU32, Ordering};

use crate::settings::{
    ChainSettings, MAX_FREQ_HZ, MAX_GAIN_DB, MAX_Q, MIN_FREQ_HZ, MIN_GAIN_DB, MIN_Q, Slope,
};

/// An `f32` stored as a bit-cast `AtomicU32` for lock-free sharing.
#[derive(Debug)]
struct AtomicF32(AtomicU32);

impl AtomicF32 {
    fn new(value: f32) -> Self {
        Self(AtomicU32::new(value.to_bits()))
    }

    fn load(&self) -> f32 {
        f32::from_bits(self.0.load(Ordering::Acquire))
    }

    fn store(&self, value: f32) {
        self.0.store(value.to_bits(), Ordering::Release);
    }
}

/// Shared equalizer parameters.
///
/// The control path writes through the clamping setters (all take `&self`);
/// the audio path calls [`EqParams::snapshot`] once per block. Wrap in an
/// `Arc` to share between threads.
#[derive(Debug)]
pub struct EqParams {
    low_cut_freq: AtomicF32,
    low_cut_slope: AtomicU32,
    low_cut_bypassed: AtomicBool,

    peak_freq: AtomicF32,
    peak_gain_db: AtomicF32,
    peak_q: AtomicF32,
    peak_bypassed: AtomicBool,

    high_cut_freq: AtomicF32,
    high_cut_slope: AtomicU32,
    high_cut_bypassed: AtomicBool,
}

impl EqParams {
    /// Create parameter storage holding the default settings.
    pub fn new() -> Self {
        Self::from_settings(&ChainSettings::default())
    }

    /// Create parameter storage initialized from a settings record.
    ///
    /// Values pass through the same clamping as the setters.
    pub fn from_settings(settings: &ChainSettings) -> Self {
        let params = Self {
            low_cut_freq: AtomicF32::new(0.0),
            low_cut_slope: AtomicU32::new(0),
            low_cut_bypassed: AtomicBool::new(false),
            peak_freq: AtomicF32::new(0.0),
            peak_gain_db: AtomicF32::new(0.0),
            peak_q: AtomicF32::new(0.0),
            peak_bypassed: AtomicBool::new(false),
            high_cut_freq: AtomicF32::new(0.0),
            high_cut_slope: AtomicU32::new(0),
            high_cut_bypassed: AtomicBool::new(false),
        };
        params.set_low_cut_freq(settings.low_cut_freq);
        params.set_low_cut_slope(settings.low_cut_slope);
        params.set_low_cut_bypassed(settings.low_cut_bypassed);
        params.set_peak_freq(settings.peak_freq);
        params.set_peak_gain_db(settings.peak_gain_db);
        params.set_peak_q(settings.peak_q);
        params.set_peak_bypassed(settings.peak_bypassed);
        params.set_high_cut_freq(settings.high_cut_freq);
        params.set_high_cut_slope(settings.high_cut_slope);
        params.set_high_cut_bypassed(settings.high_cut_bypassed);
        params
    }

    /// Set the low-cut corner frequency in Hz. Clamped to [20, 20000].
    pub fn set_low_cut_freq(&self, freq: f32) {
        self.low_cut_freq.store(freq.clamp(MIN_FREQ_HZ, MAX_FREQ_HZ));
    }

    /// Set the low-cut steepness.
    pub fn set_low_cut_slope(&self, slope: Slope) {
        self.low_cut_slope.store(slope.index(), Ordering::Release);
    }

    /// Bypass or enable the low-cut band.
    pub fn set_low_cut_bypassed(&self, bypassed: bool) {
        self.low_cut_bypassed.store(bypassed, Ordering::Release);
    }

    /// Set the peak center frequency in Hz. Clamped to [20, 20000].
    pub fn set_peak_freq(&self, freq: f32) {
        self.peak_freq.store(freq.clamp(MIN_FREQ_HZ, MAX_FREQ_HZ));
    }

    /// Set the peak gain in dB. Clamped to [-24, +24].
    pub fn set_peak_gain_db(&self, gain_db: f32) {
        self.peak_gain_db.store(gain_db.clamp(MIN_GAIN_DB, MAX_GAIN_DB));
    }

    /// Set the peak quality factor. Clamped to [0.1, 10].
    pub fn set_peak_q(&self, q: f32) {
        self.peak_q.store(q.clamp(MIN_Q, MAX_Q));
    }

    /// Bypass or enable the peak band.
    pub fn set_peak_bypassed(&self, bypassed: bool) {
        self.peak_bypassed.store(bypassed, Ordering::Release);
    }

    /// Set the high-cut corner frequency in Hz. Clamped to [20, 20000].
    pub fn set_high_cut_freq(&self, freq: f32) {
        self.high_cut_freq.store(freq.clamp(MIN_FREQ_HZ, MAX_FREQ_HZ));
    }

    /// Set the high-cut steepness.
    pub fn set_high_cut_slope(&self, slope: Slope) {
        self.high_cut_slope.store(slope.index(), Ordering::Release);
    }

    /// Bypass or enable the high-cut band.
    pub fn set_high_cut_bypassed(&self, bypassed: bool) {
        self.high_cut_bypassed.store(bypassed, Ordering::Release);
    }

    /// Resolve a typed snapshot of every parameter.
    ///
    /// This is the audio path's per-block read: ten atomic loads, no locks,
    /// no allocation. Stored slope indices run back through
    /// [`Slope::from_index`], so even a corrupt index resolves to a valid
    /// order.
    pub fn snapshot(&self) -> ChainSettings {
        ChainSettings {
            low_cut_freq: self.low_cut_freq.load(),
            low_cut_slope: Slope::from_index(self.low_cut_slope.load(Ordering::Acquire)),
            low_cut_bypassed: self.low_cut_bypassed.load(Ordering::Acquire),
            peak_freq: self.peak_freq.load(),
            peak_gain_db: self.peak_gain_db.load(),
            peak_q: self.peak_q.load(),
            peak_bypassed: self.peak_bypassed.load(Ordering::Acquire),
            high_cut_freq: self.high_cut_freq.load(),
            high_cut_slope: Slope::from_index(self.high_cut_slope.load(Ordering::Acquire)),
            high_cut_bypassed: self.high_cut_bypassed.load(Ordering::Acquire),
        }
    }
}

impl Default for EqParams {
    fn default() -> Self {
        Self::new()
    }
}
