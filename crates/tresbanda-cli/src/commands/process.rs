//! File-based EQ processing command.

use crate::preset::EqPreset;
use anyhow::Context;
use clap::{Args, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::debug;
use tresbanda_core::{EqParams, Slope, StereoEq, linear_to_db};
use tresbanda_io::{StereoSamples, WavSpec, read_wav_stereo, write_wav_stereo};

/// Cut-filter slopes as CLI values (dB/octave).
#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum CliSlope {
    /// 12 dB/octave.
    #[default]
    #[value(name = "12")]
    Db12,
    /// 24 dB/octave.
    #[value(name = "24")]
    Db24,
    /// 36 dB/octave.
    #[value(name = "36")]
    Db36,
    /// 48 dB/octave.
    #[value(name = "48")]
    Db48,
}

impl From<CliSlope> for Slope {
    fn from(slope: CliSlope) -> Self {
        match slope {
            CliSlope::Db12 => Slope::Db12,
            CliSlope::Db24 => Slope::Db24,
            CliSlope::Db36 => Slope::Db36,
            CliSlope::Db48 => Slope::Db48,
        }
    }
}

/// Arguments for `tresbanda process`.
#[derive(Args)]
pub struct ProcessArgs {
    /// Input WAV file
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output WAV file
    #[arg(value_name = "OUTPUT")]
    output: PathBuf,

    /// Preset file (TOML); overrides the individual band flags
    #[arg(short, long)]
    preset: Option<PathBuf>,

    /// Low-cut corner frequency in Hz
    #[arg(long, default_value = "20.0")]
    low_cut_freq: f32,

    /// Low-cut slope in dB/octave
    #[arg(long, value_enum, default_value = "12")]
    low_cut_slope: CliSlope,

    /// Bypass the low-cut band
    #[arg(long)]
    low_cut_bypass: bool,

    /// Peak center frequency in Hz
    #[arg(long, default_value = "750.0")]
    peak_freq: f32,

    /// Peak gain in dB
    #[arg(long, default_value = "0.0")]
    peak_gain: f32,

    /// Peak quality factor
    #[arg(long, default_value = "1.0")]
    peak_q: f32,

    /// Bypass the peak band
    #[arg(long)]
    peak_bypass: bool,

    /// High-cut corner frequency in Hz
    #[arg(long, default_value = "20000.0")]
    high_cut_freq: f32,

    /// High-cut slope in dB/octave
    #[arg(long, value_enum, default_value = "12")]
    high_cut_slope: CliSlope,

    /// Bypass the high-cut band
    #[arg(long)]
    high_cut_bypass: bool,

    /// Processing block size
    #[arg(long, default_value = "512")]
    block_size: usize,

    /// Output bit depth (16, 24, or 32)
    #[arg(long, default_value = "32")]
    bit_depth: u16,
}

/// Run the process command.
pub fn run(args: ProcessArgs) -> anyhow::Result<()> {
    println!("Reading {}...", args.input.display());
    let (mut samples, spec) = read_wav_stereo(&args.input)
        .with_context(|| format!("reading {}", args.input.display()))?;
    let sample_rate = spec.sample_rate as f32;

    println!(
        "  {} frames, {} Hz, {:.2}s",
        samples.len(),
        spec.sample_rate,
        samples.len() as f32 / sample_rate
    );

    let params = Arc::new(EqParams::new());
    if let Some(preset_path) = &args.preset {
        let preset = EqPreset::load(preset_path)?;
        println!("Using preset: {}", preset.name);
        preset.apply(&params)?;
    } else {
        params.set_low_cut_freq(args.low_cut_freq);
        params.set_low_cut_slope(args.low_cut_slope.into());
        params.set_low_cut_bypassed(args.low_cut_bypass);
        params.set_peak_freq(args.peak_freq);
        params.set_peak_gain_db(args.peak_gain);
        params.set_peak_q(args.peak_q);
        params.set_peak_bypassed(args.peak_bypass);
        params.set_high_cut_freq(args.high_cut_freq);
        params.set_high_cut_slope(args.high_cut_slope.into());
        params.set_high_cut_bypassed(args.high_cut_bypass);
    }
    debug!("settings: {:?}", params.snapshot());

    let (input_rms, input_peak) = stats(&samples);

    let mut eq = StereoEq::new(Arc::clone(&params));
    eq.prepare(sample_rate, args.block_size);

    let pb = ProgressBar::new(samples.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})")
            .unwrap()
            .progress_chars("##-"),
    );

    let mut processed = 0u64;
    for (left, right) in samples
        .left
        .chunks_mut(args.block_size)
        .zip(samples.right.chunks_mut(args.block_size))
    {
        let frames = left.len() as u64;
        let mut channels: [&mut [f32]; 2] = [left, right];
        eq.process_block(&mut channels);
        processed += frames;
        pb.set_position(processed);
    }
    pb.finish_with_message("done");

    let (output_rms, output_peak) = stats(&samples);

    println!("\nStats:");
    println!(
        "  Input:  RMS {:.1} dB, Peak {:.1} dB",
        linear_to_db(input_rms),
        linear_to_db(input_peak)
    );
    println!(
        "  Output: RMS {:.1} dB, Peak {:.1} dB",
        linear_to_db(output_rms),
        linear_to_db(output_peak)
    );

    let out_spec = WavSpec {
        channels: 2,
        sample_rate: spec.sample_rate,
        bits_per_sample: args.bit_depth,
    };

    println!("\nWriting {}...", args.output.display());
    write_wav_stereo(&args.output, &samples, out_spec)
        .with_context(|| format!("writing {}", args.output.display()))?;
    println!("Done!");

    Ok(())
}

/// RMS and absolute peak over both channels.
fn stats(samples: &StereoSamples) -> (f32, f32) {
    let all = samples.left.iter().chain(samples.right.iter());
    let mut sum_sq = 0.0f32;
    let mut peak = 0.0f32;
    let mut count = 0usize;
    for &s in all {
        sum_sq += s * s;
        peak = peak.max(s.abs());
        count += 1;
    }
    let rms = if count == 0 {
        0.0
    } else {
        (sum_sq / count as f32).sqrt()
    };
    (rms, peak)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_slope_maps_to_core_slope() {
        assert_eq!(Slope::from(CliSlope::Db12), Slope::Db12);
        assert_eq!(Slope::from(CliSlope::Db48), Slope::Db48);
    }

    #[test]
    fn stats_of_known_signal() {
        let samples = StereoSamples::new(vec![0.5, -0.5], vec![0.5, -0.5]);
        let (rms, peak) = stats(&samples);
        assert!((rms - 0.5).abs() < 1e-6);
        assert!((peak - 0.5).abs() < 1e-6);
    }

    #[test]
    fn stats_of_empty_signal_is_silent() {
        let samples = StereoSamples::new(vec![], vec![]);
        let (rms, peak) = stats(&samples);
        assert_eq!(rms, 0.0);
        assert_eq!(peak, 0.0);
    }
}
