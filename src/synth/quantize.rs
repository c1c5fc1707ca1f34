//! 16-bit quantization of float waveforms.

/// Peak amplitude of the 16-bit output range.
pub const PEAK_AMPLITUDE: f32 = 32767.0;

/// Scales float samples in [-1, 1] to signed 16-bit integers.
///
/// Input is clamped to [-1, 1] before scaling, so every output value
/// lies in [-32767, 32767]. The scaled value is truncated toward zero.
pub fn quantize(samples: &[f32]) -> Vec<i16> {
    samples
        .iter()
        .map(|&s| (s.clamp(-1.0, 1.0) * PEAK_AMPLITUDE) as i16)
        .collect()
}
