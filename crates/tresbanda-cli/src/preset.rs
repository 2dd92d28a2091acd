//! TOML preset files for the equalizer.
//!
//! A preset names only the fields it wants to change; everything else keeps
//! the default (inert) value. Range clamping happens in the `EqParams`
//! setters, so a preset can at worst be inaudible, never invalid -- except
//! for slopes, which must be one of the four supported steepnesses and are
//! validated here at the boundary.

use anyhow::Context;
use serde::Deserialize;
use std::path::Path;
use tresbanda_core::{EqParams, Slope};

/// A saved equalizer configuration.
///
/// ```toml
/// name = "Vocal presence"
///
/// [low_cut]
/// freq = 80.0
/// slope = 24
///
/// [peak]
/// freq = 3000.0
/// gain_db = 4.0
/// q = 1.2
///
/// [high_cut]
/// freq = 16000.0
/// ```
#[derive(Debug, Deserialize)]
pub struct EqPreset {
    /// Display name.
    pub name: String,
    /// Optional free-form description.
    #[serde(default)]
    pub description: Option<String>,
    /// Low-cut band settings.
    #[serde(default)]
    pub low_cut: CutBand,
    /// Peak band settings.
    #[serde(default)]
    pub peak: PeakBand,
    /// High-cut band settings.
    #[serde(default)]
    pub high_cut: CutBand,
}

/// Cut band fields; absent fields keep their defaults.
#[derive(Debug, Default, Deserialize)]
pub struct CutBand {
    /// Corner frequency in Hz.
    pub freq: Option<f32>,
    /// Slope in dB/octave (12, 24, 36 or 48).
    pub slope: Option<u32>,
    /// Bypass the band.
    #[serde(default)]
    pub bypassed: bool,
}

/// Peak band fields; absent fields keep their defaults.
#[derive(Debug, Default, Deserialize)]
pub struct PeakBand {
    /// Center frequency in Hz.
    pub freq: Option<f32>,
    /// Gain in dB.
    pub gain_db: Option<f32>,
    /// Quality factor.
    pub q: Option<f32>,
    /// Bypass the band.
    #[serde(default)]
    pub bypassed: bool,
}

impl EqPreset {
    /// Load and parse a preset file.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading preset {}", path.display()))?;
        let preset: Self = toml::from_str(&content)
            .with_context(|| format!("parsing preset {}", path.display()))?;
        tracing::debug!("loaded preset '{}' from {}", preset.name, path.display());
        Ok(preset)
    }

    /// Write the preset's fields into shared parameter storage.
    ///
    /// Fails only on an unsupported slope figure; everything else is
    /// clamped by the setters.
    pub fn apply(&self, params: &EqParams) -> anyhow::Result<()> {
        if let Some(freq) = self.low_cut.freq {
            params.set_low_cut_freq(freq);
        }
        if let Some(db) = self.low_cut.slope {
            params.set_low_cut_slope(slope_from_db(db).context("in [low_cut]")?);
        }
        params.set_low_cut_bypassed(self.low_cut.bypassed);

        if let Some(freq) = self.peak.freq {
            params.set_peak_freq(freq);
        }
        if let Some(gain) = self.peak.gain_db {
            params.set_peak_gain_db(gain);
        }
        if let Some(q) = self.peak.q {
            params.set_peak_q(q);
        }
        params.set_peak_bypassed(self.peak.bypassed);

        if let Some(freq) = self.high_cut.freq {
            params.set_high_cut_freq(freq);
        }
        if let Some(db) = self.high_cut.slope {
            params.set_high_cut_slope(slope_from_db(db).context("in [high_cut]")?);
        }
        params.set_high_cut_bypassed(self.high_cut.bypassed);

        Ok(())
    }
}

/// Map a dB/octave figure to a slope.
fn slope_from_db(db_per_octave: u32) -> anyhow::Result<Slope> {
    match db_per_octave {
        12 => Ok(Slope::Db12),
        24 => Ok(Slope::Db24),
        36 => Ok(Slope::Db36),
        48 => Ok(Slope::Db48),
        other => anyhow::bail!("unsupported slope: {other} dB/oct (expected 12, 24, 36 or 48)"),
    }
}
