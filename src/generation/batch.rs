//! Batch driver over the built-in catalog.
//!
//! Generates every placeholder file in sequence with a single RNG for
//! the noise entries, then records the results in sounds.json.

use std::fs;
use std::path::{Path, PathBuf};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::audio::SAMPLE_RATE;
use crate::catalog::{builtin_catalog, SoundKind};
use crate::error::{GeneratorError, Result};
use crate::generation::pipeline::{generate_noise, generate_tone};
use crate::manifest::{write_manifest, ManifestEntry};

/// File name of the JSON manifest written next to the WAV files.
pub const MANIFEST_FILE: &str = "sounds.json";

/// Summary of a completed batch run.
#[derive(Debug)]
pub struct BatchReport {
    /// Number of WAV files generated.
    pub generated: usize,
    /// Path of the written manifest.
    pub manifest_path: PathBuf,
}

/// Generates every catalog entry into `output_dir`.
///
/// The directory is created if missing. One RNG drives all noise
/// entries: seeded from `seed` when given (reproducible output),
/// seeded from entropy otherwise. The first failure aborts the
/// remaining batch; a partially written file may remain on disk.
pub fn run_batch(output_dir: &Path, seed: Option<u64>) -> Result<BatchReport> {
    fs::create_dir_all(output_dir).map_err(|e| {
        GeneratorError::output_dir_unavailable(format!("{}: {}", output_dir.display(), e))
    })?;

    let mut rng = match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };

    let catalog = builtin_catalog();
    let mut entries = Vec::with_capacity(catalog.len());

    for spec in &catalog {
        let path = output_dir.join(spec.filename());
        match spec.kind {
            SoundKind::Tone { frequency } => {
                generate_tone(&path, frequency, spec.duration_sec, SAMPLE_RATE)?;
            }
            SoundKind::Noise => {
                generate_noise(&path, spec.duration_sec, SAMPLE_RATE, &mut rng)?;
            }
        }
        entries.push(ManifestEntry::from_spec(spec, SAMPLE_RATE));
    }

    let manifest_path = output_dir.join(MANIFEST_FILE);
    write_manifest(&manifest_path, &entries)?;

    Ok(BatchReport {
        generated: entries.len(),
        manifest_path,
    })
}
