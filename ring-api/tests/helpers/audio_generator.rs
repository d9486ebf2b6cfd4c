//! Audio test file generation
//!
//! Writes short mono 16-bit PCM WAV files for playback tests:
//! - Sine waves
//! - Sawtooth waves

use hound::{WavSpec, WavWriter};
use std::f32::consts::PI;
use std::path::Path;

/// Standard test sample rate (44.1 kHz)
pub const TEST_SAMPLE_RATE: u32 = 44100;

/// Quarter of full scale keeps the tone quiet if a test really plays it
const TEST_AMPLITUDE: f32 = 0.25;

fn mono_spec() -> WavSpec {
    WavSpec {
        channels: 1,
        sample_rate: TEST_SAMPLE_RATE,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    }
}

fn write_wave<P, F>(path: P, duration_ms: u64, wave: F) -> Result<u64, hound::Error>
where
    P: AsRef<Path>,
    F: Fn(u64) -> f32,
{
    let mut writer = WavWriter::create(path, mono_spec())?;
    let total_samples = (TEST_SAMPLE_RATE as u64 * duration_ms) / 1000;

    for i in 0..total_samples {
        let sample = wave(i) * TEST_AMPLITUDE * i16::MAX as f32;
        writer.write_sample(sample as i16)?;
    }

    writer.finalize()?;
    Ok(total_samples)
}

/// Generate sine wave WAV file
///
/// Returns the number of samples written.
pub fn generate_sine_wav<P: AsRef<Path>>(
    path: P,
    duration_ms: u64,
    frequency_hz: f32,
) -> Result<u64, hound::Error> {
    write_wave(path, duration_ms, |i| {
        let t = i as f32 / TEST_SAMPLE_RATE as f32;
        (2.0 * PI * frequency_hz * t).sin()
    })
}

/// Generate sawtooth wave WAV file
///
/// Ramps from -1.0 to 1.0 once per period. Returns the number of samples
/// written.
pub fn generate_sawtooth_wav<P: AsRef<Path>>(
    path: P,
    duration_ms: u64,
    frequency_hz: f32,
) -> Result<u64, hound::Error> {
    write_wave(path, duration_ms, |i| {
        let phase = (i as f32 * frequency_hz / TEST_SAMPLE_RATE as f32).fract();
        phase * 2.0 - 1.0
    })
}
