//! WAV file writer for generated audio.
//!
//! Writes quantized samples to WAV format using the hound crate.

use std::path::Path;

use hound::{SampleFormat, WavSpec, WavWriter};

use crate::error::{GeneratorError, Result};

/// Audio sample rate for placeholder output (44.1kHz).
pub const SAMPLE_RATE: u32 = 44100;

/// Number of audio channels (mono).
pub const CHANNELS: u16 = 1;

/// Bit depth of the PCM output.
pub const BITS_PER_SAMPLE: u16 = 16;

/// Writes quantized audio samples to a WAV file.
///
/// The file is created or overwritten at `path` as a mono, 16-bit
/// integer PCM container.
///
/// # Arguments
///
/// * `samples` - Audio samples already scaled to the 16-bit range
/// * `path` - Output file path
/// * `sample_rate` - Sample rate in Hz (typically 44100)
pub fn write_wav(samples: &[i16], path: &Path, sample_rate: u32) -> Result<()> {
    let spec = WavSpec {
        channels: CHANNELS,
        sample_rate,
        bits_per_sample: BITS_PER_SAMPLE,
        sample_format: SampleFormat::Int,
    };

    let mut writer = WavWriter::create(path, spec)
        .map_err(|e| GeneratorError::wav_write_failed(format!("create {}: {}", path.display(), e)))?;

    for sample in samples {
        writer
            .write_sample(*sample)
            .map_err(|e| GeneratorError::wav_write_failed(format!("write sample: {}", e)))?;
    }

    writer
        .finalize()
        .map_err(|e| GeneratorError::wav_write_failed(format!("finalize {}: {}", path.display(), e)))?;

    Ok(())
}

/// Writes quantized audio samples to an in-memory WAV buffer.
///
/// Returns the WAV file contents as a byte vector.
pub fn write_wav_to_buffer(samples: &[i16], sample_rate: u32) -> Result<Vec<u8>> {
    let spec = WavSpec {
        channels: CHANNELS,
        sample_rate,
        bits_per_sample: BITS_PER_SAMPLE,
        sample_format: SampleFormat::Int,
    };

    let mut buffer = Vec::new();
    let cursor = std::io::Cursor::new(&mut buffer);
    let buf_writer = std::io::BufWriter::new(cursor);

    {
        let mut writer = WavWriter::new(buf_writer, spec)
            .map_err(|e| GeneratorError::wav_write_failed(format!("create writer: {}", e)))?;

        for sample in samples {
            writer
                .write_sample(*sample)
                .map_err(|e| GeneratorError::wav_write_failed(format!("write sample: {}", e)))?;
        }
    }

    Ok(buffer)
}

/// Calculates the duration of audio in seconds from sample count.
pub fn samples_to_duration(sample_count: usize, sample_rate: u32) -> f32 {
    sample_count as f32 / sample_rate as f32
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn write_wav_creates_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("test.wav");

        let samples = vec![0i16, 16383, -16383, 0];
        write_wav(&samples, &path, SAMPLE_RATE).unwrap();

        assert!(path.exists());

        // Verify file is valid WAV with the expected format
        let reader = hound::WavReader::open(&path).unwrap();
        let spec = reader.spec();
        assert_eq!(spec.channels, CHANNELS);
        assert_eq!(spec.sample_rate, SAMPLE_RATE);
        assert_eq!(spec.bits_per_sample, BITS_PER_SAMPLE);
        assert_eq!(spec.sample_format, SampleFormat::Int);
    }

    #[test]
    fn write_wav_roundtrips_samples() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("roundtrip.wav");

        let samples = vec![0i16, 100, -100, 32767, -32767];
        write_wav(&samples, &path, SAMPLE_RATE).unwrap();

        let mut reader = hound::WavReader::open(&path).unwrap();
        let read: Vec<i16> = reader.samples::<i16>().map(|s| s.unwrap()).collect();
        assert_eq!(read, samples);
    }

    #[test]
    fn write_wav_overwrites_existing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("overwrite.wav");

        write_wav(&[1i16, 2, 3, 4], &path, SAMPLE_RATE).unwrap();
        write_wav(&[9i16, 9], &path, SAMPLE_RATE).unwrap();

        let reader = hound::WavReader::open(&path).unwrap();
        assert_eq!(reader.len(), 2);
    }

    #[test]
    fn write_wav_to_buffer_returns_valid_wav() {
        let samples = vec![0i16, 16383, -16383, 0];
        let buffer = write_wav_to_buffer(&samples, SAMPLE_RATE).unwrap();

        assert!(!buffer.is_empty());
        // WAV files start with "RIFF"
        assert_eq!(&buffer[0..4], b"RIFF");
    }

    #[test]
    fn samples_to_duration_calculation() {
        assert_eq!(samples_to_duration(44100, 44100), 1.0);
        assert_eq!(samples_to_duration(220_500, 44100), 5.0);
        assert_eq!(samples_to_duration(22_050, 44100), 0.5);
    }
}
