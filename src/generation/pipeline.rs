//! Per-file generation pipeline.
//!
//! Every placeholder runs the same sequence: synthesize a float buffer,
//! apply the fade envelope, quantize to 16 bits, write a mono WAV file.

use std::path::Path;

use rand::Rng;

use crate::audio::write_wav;
use crate::error::{GeneratorError, Result};
use crate::synth::{apply_fade, gaussian_noise, quantize, sine_wave, FADE_DURATION_SEC};

/// Rejects durations with no room between the fade-in and fade-out.
fn validate_duration(duration_sec: f64) -> Result<()> {
    if duration_sec <= FADE_DURATION_SEC * 2.0 {
        return Err(GeneratorError::invalid_duration(duration_sec));
    }
    Ok(())
}

/// Generates a faded sine tone and writes it as a mono 16-bit WAV file.
///
/// The duration must exceed 0.2 seconds so the two 100ms fade regions
/// do not overlap. Prints a confirmation line once the file is on disk.
///
/// # Arguments
///
/// * `path` - Output file path (created or overwritten)
/// * `frequency` - Tone frequency in Hz
/// * `duration_sec` - Length of the generated audio in seconds
/// * `sample_rate` - Sample rate in Hz (typically 44100)
pub fn generate_tone(
    path: &Path,
    frequency: f64,
    duration_sec: f64,
    sample_rate: u32,
) -> Result<()> {
    validate_duration(duration_sec)?;

    let mut samples = sine_wave(frequency, duration_sec, sample_rate);
    apply_fade(&mut samples, sample_rate);
    write_wav(&quantize(&samples), path, sample_rate)?;

    eprintln!(
        "Created {} - {}Hz for {}s",
        path.display(),
        frequency,
        duration_sec
    );
    Ok(())
}

/// Generates a faded Gaussian noise burst and writes it the same way.
///
/// Noise is drawn from the caller-provided RNG, so output is
/// reproducible only when the RNG is seeded.
pub fn generate_noise<R: Rng>(
    path: &Path,
    duration_sec: f64,
    sample_rate: u32,
    rng: &mut R,
) -> Result<()> {
    validate_duration(duration_sec)?;

    let mut samples = gaussian_noise(duration_sec, sample_rate, rng);
    apply_fade(&mut samples, sample_rate);
    write_wav(&quantize(&samples), path, sample_rate)?;

    eprintln!("Created {} - noise for {}s", path.display(), duration_sec);
    Ok(())
}
