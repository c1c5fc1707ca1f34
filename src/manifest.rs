//! Manifest of generated placeholder files.
//!
//! A batch run writes sounds.json next to the WAV files so the app's
//! seed tooling can pick them up without probing the audio headers.
//! Each entry carries a deterministic sound ID computed from the
//! generation parameters.

use std::fs;
use std::path::Path;
use std::time::SystemTime;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::catalog::{Category, SoundKind, SoundSpec};
use crate::error::{GeneratorError, Result};

/// A generated placeholder file as recorded in sounds.json.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestEntry {
    /// Deterministic content ID (16 hex characters).
    pub sound_id: String,

    /// Catalog slug, e.g. "rain_heavy".
    pub id: String,

    /// Human-readable title shown in the app.
    pub title: String,

    /// Short description shown in the app.
    pub description: String,

    /// Library category.
    pub category: Category,

    /// Synthesis kind and parameters.
    #[serde(flatten)]
    pub kind: SoundKind,

    /// Output file name, relative to the manifest.
    pub file: String,

    /// Length of the generated audio in seconds.
    pub duration_sec: f64,

    /// Audio sample rate in Hz.
    pub sample_rate: u32,

    /// When the file was generated (Unix timestamp).
    #[serde(with = "system_time_serde")]
    pub generated_at: SystemTime,
}

impl ManifestEntry {
    /// Builds a manifest entry for a catalog sound generated at `sample_rate`.
    pub fn from_spec(spec: &SoundSpec, sample_rate: u32) -> Self {
        Self {
            sound_id: compute_sound_id(spec.id, spec.kind, spec.duration_sec, sample_rate),
            id: spec.id.to_string(),
            title: spec.title.to_string(),
            description: spec.description.to_string(),
            category: spec.category,
            kind: spec.kind,
            file: spec.filename(),
            duration_sec: spec.duration_sec,
            sample_rate,
            generated_at: SystemTime::now(),
        }
    }
}

/// Computes a deterministic sound ID from generation parameters.
///
/// The sound ID is the first 16 hex characters of the SHA256 hash of
/// `{id}:{kind}:{duration_sec}:{sample_rate}`. Identical parameters
/// always produce the same sound ID, so downstream tooling can tell
/// whether a placeholder was regenerated with different settings.
pub fn compute_sound_id(id: &str, kind: SoundKind, duration_sec: f64, sample_rate: u32) -> String {
    let input = format!(
        "{}:{}:{}:{}",
        id,
        kind.describe(),
        duration_sec,
        sample_rate
    );
    let mut hasher = Sha256::new();
    hasher.update(input.as_bytes());
    let result = hasher.finalize();
    // Take first 8 bytes (16 hex chars)
    hex::encode(&result[..8])
}

/// Writes the manifest entries to `path` as pretty-printed JSON.
pub fn write_manifest(path: &Path, entries: &[ManifestEntry]) -> Result<()> {
    let json = serde_json::to_string_pretty(entries)
        .map_err(|e| GeneratorError::manifest_write_failed(format!("serialize: {}", e)))?;

    fs::write(path, json).map_err(|e| {
        GeneratorError::manifest_write_failed(format!("{}: {}", path.display(), e))
    })?;

    Ok(())
}

/// Custom serde implementation for SystemTime as a Unix timestamp.
mod system_time_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::{Duration, SystemTime, UNIX_EPOCH};

    pub fn serialize<S>(time: &SystemTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let duration = time.duration_since(UNIX_EPOCH).unwrap_or(Duration::ZERO);
        duration.as_secs().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<SystemTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = u64::deserialize(deserializer)?;
        Ok(UNIX_EPOCH + Duration::from_secs(secs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::builtin_catalog;
    use tempfile::tempdir;

    #[test]
    fn sound_id_deterministic() {
        let kind = SoundKind::Tone { frequency: 200.0 };
        let id1 = compute_sound_id("rain_heavy", kind, 5.0, 44100);
        let id2 = compute_sound_id("rain_heavy", kind, 5.0, 44100);
        assert_eq!(id1, id2);
        assert_eq!(id1.len(), 16);
    }

    #[test]
    fn sound_id_varies_with_params() {
        let kind = SoundKind::Tone { frequency: 200.0 };
        let id1 = compute_sound_id("rain_heavy", kind, 5.0, 44100);
        let id2 = compute_sound_id("rain_heavy", kind, 10.0, 44100);
        let id3 = compute_sound_id("rain_heavy", SoundKind::Noise, 5.0, 44100);
        assert_ne!(id1, id2);
        assert_ne!(id1, id3);
    }

    #[test]
    fn sound_id_hex_format() {
        let id = compute_sound_id("test", SoundKind::Noise, 5.0, 44100);
        assert!(id.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn entry_serializes_kind_inline() {
        let catalog = builtin_catalog();
        let tone = ManifestEntry::from_spec(&catalog[0], 44100);
        let json = serde_json::to_string(&tone).unwrap();
        assert!(json.contains("\"kind\":\"tone\""));
        assert!(json.contains("\"frequency\":200.0"));

        let noise_spec = catalog.iter().find(|s| s.kind == SoundKind::Noise).unwrap();
        let noise = ManifestEntry::from_spec(noise_spec, 44100);
        let json = serde_json::to_string(&noise).unwrap();
        assert!(json.contains("\"kind\":\"noise\""));
        assert!(!json.contains("frequency"));
    }

    #[test]
    fn write_manifest_roundtrips() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("sounds.json");

        let entries: Vec<ManifestEntry> = builtin_catalog()
            .iter()
            .map(|spec| ManifestEntry::from_spec(spec, 44100))
            .collect();
        write_manifest(&path, &entries).unwrap();

        let json = std::fs::read_to_string(&path).unwrap();
        let parsed: Vec<ManifestEntry> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.len(), 15);
        assert_eq!(parsed[0].id, "rain_heavy");
        assert_eq!(parsed[0].sample_rate, 44100);
    }
}
