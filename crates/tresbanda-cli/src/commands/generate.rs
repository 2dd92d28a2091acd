//! Test signal generation command.

use clap::{Args, Subcommand};
use std::path::PathBuf;
use tresbanda_io::{WavSpec, write_wav};

/// Arguments for `tresbanda generate`.
#[derive(Args)]
pub struct GenerateArgs {
    #[command(subcommand)]
    command: GenerateCommand,
}

#[derive(Subcommand)]
enum GenerateCommand {
    /// Generate a unit impulse
    Impulse {
        /// Output WAV file
        #[arg(value_name = "OUTPUT")]
        output: PathBuf,

        /// Length in samples
        #[arg(long, default_value = "48000")]
        length: usize,

        /// Sample rate
        #[arg(long, default_value = "48000")]
        sample_rate: u32,
    },

    /// Generate a fixed-frequency sine
    Sine {
        /// Output WAV file
        #[arg(value_name = "OUTPUT")]
        output: PathBuf,

        /// Frequency in Hz
        #[arg(long, default_value = "440.0")]
        freq: f32,

        /// Duration in seconds
        #[arg(long, default_value = "1.0")]
        duration: f32,

        /// Sample rate
        #[arg(long, default_value = "48000")]
        sample_rate: u32,

        /// Amplitude (0-1)
        #[arg(long, default_value = "0.8")]
        amplitude: f32,
    },

    /// Generate a logarithmic sine sweep (chirp)
    Sweep {
        /// Output WAV file
        #[arg(value_name = "OUTPUT")]
        output: PathBuf,

        /// Start frequency in Hz
        #[arg(long, default_value = "20.0")]
        start: f32,

        /// End frequency in Hz
        #[arg(long, default_value = "20000.0")]
        end: f32,

        /// Duration in seconds
        #[arg(long, default_value = "2.0")]
        duration: f32,

        /// Sample rate
        #[arg(long, default_value = "48000")]
        sample_rate: u32,

        /// Amplitude (0-1)
        #[arg(long, default_value = "0.8")]
        amplitude: f32,
    },
}

/// Run the generate command.
pub fn run(args: GenerateArgs) -> anyhow::Result<()> {
    let (output, samples, sample_rate) = match args.command {
        GenerateCommand::Impulse {
            output,
            length,
            sample_rate,
        } => (output, impulse(length), sample_rate),
        GenerateCommand::Sine {
            output,
            freq,
            duration,
            sample_rate,
            amplitude,
        } => (output, sine(freq, duration, sample_rate, amplitude), sample_rate),
        GenerateCommand::Sweep {
            output,
            start,
            end,
            duration,
            sample_rate,
            amplitude,
        } => (
            output,
            log_sweep(start, end, duration, sample_rate, amplitude),
            sample_rate,
        ),
    };

    let spec = WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 32,
    };
    write_wav(&output, &samples, spec)?;
    println!(
        "Wrote {} samples at {} Hz to {}",
        samples.len(),
        sample_rate,
        output.display()
    );

    Ok(())
}

fn impulse(length: usize) -> Vec<f32> {
    let mut samples = vec![0.0; length.max(1)];
    samples[0] = 1.0;
    samples
}

fn sine(freq: f32, duration: f32, sample_rate: u32, amplitude: f32) -> Vec<f32> {
    let num_samples = (duration * sample_rate as f32) as usize;
    (0..num_samples)
        .map(|i| {
            let t = i as f32 / sample_rate as f32;
            (2.0 * std::f32::consts::PI * freq * t).sin() * amplitude
        })
        .collect()
}

/// Exponential (log-frequency) sweep via phase accumulation.
fn log_sweep(start: f32, end: f32, duration: f32, sample_rate: u32, amplitude: f32) -> Vec<f32> {
    let num_samples = (duration * sample_rate as f32) as usize;
    let ratio = (end / start).max(1e-6);
    let mut phase = 0.0f32;
    (0..num_samples)
        .map(|i| {
            let t = i as f32 / num_samples.max(1) as f32;
            let freq = start * ratio.powf(t);
            phase += 2.0 * std::f32::consts::PI * freq / sample_rate as f32;
            phase.sin() * amplitude
        })
        .collect()
}
