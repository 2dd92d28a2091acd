//! Integration tests for tresbanda-io WAV round-trips.

use tempfile::NamedTempFile;
use tresbanda_io::{StereoSamples, WavSpec, read_wav, read_wav_info, write_wav, write_wav_stereo};

fn sine(sample_rate: u32, freq_hz: f32, num_samples: usize) -> Vec<f32> {
    (0..num_samples)
        .map(|i| (2.0 * std::f32::consts::PI * freq_hz * i as f32 / sample_rate as f32).sin() * 0.8)
        .collect()
}

#[test]
fn roundtrip_at_common_sample_rates() {
    for sr in [44100u32, 48000, 96000] {
        let samples = sine(sr, 440.0, sr as usize / 10);
        let spec = WavSpec {
            channels: 1,
            sample_rate: sr,
            bits_per_sample: 32,
        };

        let file = NamedTempFile::new().unwrap();
        write_wav(file.path(), &samples, spec).unwrap();

        let (loaded, loaded_spec) = read_wav(file.path()).unwrap();
        assert_eq!(loaded_spec.sample_rate, sr);
        assert_eq!(loaded.len(), samples.len());
        for (a, b) in samples.iter().zip(loaded.iter()) {
            assert!((a - b).abs() < 1e-6, "mismatch at {sr} Hz");
        }
    }
}

#[test]
fn pcm_24_bit_roundtrip() {
    let sr = 48000;
    let samples = sine(sr, 1000.0, 4800);
    let spec = WavSpec {
        channels: 1,
        sample_rate: sr,
        bits_per_sample: 24,
    };

    let file = NamedTempFile::new().unwrap();
    write_wav(file.path(), &samples, spec).unwrap();

    let (loaded, _) = read_wav(file.path()).unwrap();
    for (a, b) in samples.iter().zip(loaded.iter()) {
        assert!((a - b).abs() < 1e-4, "24-bit drift: {a} vs {b}");
    }
}

#[test]
fn stereo_file_info_matches_write() {
    let left = sine(48000, 440.0, 9600);
    let right = sine(48000, 880.0, 9600);
    let stereo = StereoSamples::new(left, right);

    let file = NamedTempFile::new().unwrap();
    write_wav_stereo(file.path(), &stereo, WavSpec::default()).unwrap();

    let info = read_wav_info(file.path()).unwrap();
    assert_eq!(info.channels, 2);
    assert_eq!(info.sample_rate, 48000);
    assert_eq!(info.num_frames, 9600);
    assert!((info.duration_secs - 0.2).abs() < 1e-9);
}
