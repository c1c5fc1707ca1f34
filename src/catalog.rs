//! Built-in catalog of placeholder sounds.
//!
//! Mirrors the sound library the app ships with: every entry the app
//! expects gets a stand-in file until real recordings are available.

use serde::{Deserialize, Serialize};

/// Duration of every placeholder file in seconds.
pub const DEFAULT_DURATION_SEC: f64 = 5.0;

/// Category a sound belongs to in the app's library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Nature,
    #[serde(rename = "White Noise")]
    WhiteNoise,
    Meditation,
    #[serde(rename = "Binaural Beats")]
    BinauralBeats,
    Instrumental,
    Ambient,
}

impl Category {
    /// Returns the category name as shown in the app.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Nature => "Nature",
            Category::WhiteNoise => "White Noise",
            Category::Meditation => "Meditation",
            Category::BinauralBeats => "Binaural Beats",
            Category::Instrumental => "Instrumental",
            Category::Ambient => "Ambient",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How a placeholder waveform is synthesized.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SoundKind {
    /// Sine tone at a fixed frequency in Hz.
    Tone { frequency: f64 },
    /// Gaussian noise burst.
    Noise,
}

impl SoundKind {
    /// Short label used in confirmation lines and sound IDs.
    pub fn describe(&self) -> String {
        match self {
            SoundKind::Tone { frequency } => format!("{}Hz", frequency),
            SoundKind::Noise => "noise".to_string(),
        }
    }
}

/// A placeholder sound descriptor.
#[derive(Debug, Clone)]
pub struct SoundSpec {
    /// Catalog slug, also the output file stem.
    pub id: &'static str,
    /// Human-readable title shown in the app.
    pub title: &'static str,
    /// Short description shown in the app.
    pub description: &'static str,
    /// Library category.
    pub category: Category,
    /// Synthesis kind and parameters.
    pub kind: SoundKind,
    /// Length of the generated file in seconds.
    pub duration_sec: f64,
}

impl SoundSpec {
    /// Returns the output file name for this sound.
    pub fn filename(&self) -> String {
        format!("{}.wav", self.id)
    }
}

fn tone(
    id: &'static str,
    title: &'static str,
    description: &'static str,
    category: Category,
    frequency: f64,
) -> SoundSpec {
    SoundSpec {
        id,
        title,
        description,
        category,
        kind: SoundKind::Tone { frequency },
        duration_sec: DEFAULT_DURATION_SEC,
    }
}

fn noise(
    id: &'static str,
    title: &'static str,
    description: &'static str,
    category: Category,
) -> SoundSpec {
    SoundSpec {
        id,
        title,
        description,
        category,
        kind: SoundKind::Noise,
        duration_sec: DEFAULT_DURATION_SEC,
    }
}

/// Returns the fixed list of 15 placeholder sounds.
///
/// Tone frequencies approximate the character of the eventual
/// recording: low rumbles for rain and ocean, musical notes for the
/// instrumental entries, sub-audible frequencies for the binaural
/// labels (single-channel stand-ins only; no true binaural beats).
pub fn builtin_catalog() -> Vec<SoundSpec> {
    vec![
        // Nature
        tone(
            "rain_heavy",
            "Heavy Rain",
            "Relaxing heavy rain sounds for deep sleep",
            Category::Nature,
            200.0,
        ),
        tone(
            "rain_light",
            "Light Rain",
            "Soft rain sounds for peaceful sleep",
            Category::Nature,
            400.0,
        ),
        tone(
            "ocean_waves",
            "Ocean Waves",
            "Soothing ocean waves for relaxation",
            Category::Nature,
            100.0,
        ),
        tone(
            "forest_ambient",
            "Forest Ambient",
            "Immersive forest ambience for deep rest",
            Category::Nature,
            800.0,
        ),
        // Noise colors; all plain Gaussian for now, no spectral shaping
        noise(
            "white_noise",
            "White Noise",
            "Classic white noise for concentration and sleep",
            Category::WhiteNoise,
        ),
        noise(
            "pink_noise",
            "Pink Noise",
            "Pink noise for improved sleep quality",
            Category::WhiteNoise,
        ),
        noise(
            "brown_noise",
            "Brown Noise",
            "Deep brown noise for anxiety relief",
            Category::WhiteNoise,
        ),
        // Meditation
        tone(
            "meditation_deep",
            "Deep Sleep Meditation",
            "Guided meditation for deep, restful sleep",
            Category::Meditation,
            220.0,
        ),
        tone(
            "body_scan",
            "Body Scan Relaxation",
            "Body scan meditation for tension release",
            Category::Meditation,
            174.0,
        ),
        // Binaural labels
        tone(
            "delta_waves",
            "Delta Wave Binaural",
            "Delta waves for deep sleep and healing",
            Category::BinauralBeats,
            2.0,
        ),
        tone(
            "theta_waves",
            "Theta Wave Binaural",
            "Theta waves for REM sleep and creativity",
            Category::BinauralBeats,
            6.0,
        ),
        // Instrumental (A4 and E4)
        tone(
            "soft_piano",
            "Soft Piano",
            "Peaceful piano music for relaxation",
            Category::Instrumental,
            440.0,
        ),
        tone(
            "acoustic_guitar",
            "Acoustic Guitar",
            "Calming acoustic guitar for sleep",
            Category::Instrumental,
            330.0,
        ),
        // Ambient
        tone(
            "space_ambient",
            "Space Ambient",
            "Journey through space with ambient sounds",
            Category::Ambient,
            55.0,
        ),
        tone(
            "dream_pad",
            "Dream Pad",
            "Dreamy ambient sounds for lucid dreaming",
            Category::Ambient,
            110.0,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalog_has_fifteen_entries() {
        assert_eq!(builtin_catalog().len(), 15);
    }

    #[test]
    fn catalog_ids_are_unique() {
        let catalog = builtin_catalog();
        let ids: HashSet<&str> = catalog.iter().map(|s| s.id).collect();
        assert_eq!(ids.len(), catalog.len());
    }

    #[test]
    fn catalog_kind_split() {
        let catalog = builtin_catalog();
        let noises = catalog
            .iter()
            .filter(|s| s.kind == SoundKind::Noise)
            .count();
        assert_eq!(noises, 3);
        assert_eq!(catalog.len() - noises, 12);
    }

    #[test]
    fn catalog_durations_are_five_seconds() {
        assert!(builtin_catalog()
            .iter()
            .all(|s| s.duration_sec == DEFAULT_DURATION_SEC));
    }

    #[test]
    fn noise_entries_share_the_white_noise_category() {
        for spec in builtin_catalog() {
            if spec.kind == SoundKind::Noise {
                assert_eq!(spec.category, Category::WhiteNoise);
            }
        }
    }

    #[test]
    fn filename_appends_wav_extension() {
        let catalog = builtin_catalog();
        assert_eq!(catalog[0].filename(), "rain_heavy.wav");
        assert!(catalog.iter().all(|s| s.filename().ends_with(".wav")));
    }

    #[test]
    fn category_display_matches_app_names() {
        assert_eq!(Category::WhiteNoise.to_string(), "White Noise");
        assert_eq!(Category::BinauralBeats.to_string(), "Binaural Beats");
    }

    #[test]
    fn sound_kind_describe() {
        assert_eq!(SoundKind::Tone { frequency: 200.0 }.describe(), "200Hz");
        assert_eq!(SoundKind::Noise.describe(), "noise");
    }
}
