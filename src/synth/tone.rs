//! Sine tone synthesis.

use std::f64::consts::PI;

use super::sample_count;

/// Builds a sine waveform at the given frequency.
///
/// Samples `sin(2π·f·t)` with `t = i / sample_rate` over
/// `floor(sample_rate × duration)` samples. Output amplitudes are in
/// [-1, 1]. Generation is deterministic: identical parameters produce
/// identical buffers.
pub fn sine_wave(frequency: f64, duration_sec: f64, sample_rate: u32) -> Vec<f32> {
    let count = sample_count(duration_sec, sample_rate);
    (0..count)
        .map(|i| {
            let t = i as f64 / sample_rate as f64;
            (2.0 * PI * frequency * t).sin() as f32
        })
        .collect()
}
