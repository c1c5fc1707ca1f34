//! CLI argument parser for the placeholder generator.
//!
//! The generator is a one-shot batch tool; the only knobs are where the
//! files land and an optional seed for reproducible noise.

use std::path::PathBuf;

use clap::Parser;

/// sleeptone: placeholder sound generation for the SleepTone app
#[derive(Parser, Debug)]
#[command(name = "sleeptone")]
#[command(about = "Generates placeholder sleep sounds (sine tones and noise bursts)")]
#[command(version)]
pub struct Cli {
    /// Directory to write the WAV files and manifest into
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Random seed for reproducible noise generation
    #[arg(short, long)]
    pub seed: Option<u64>,
}

impl Cli {
    /// Parses command-line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_current_directory() {
        let cli = Cli::try_parse_from(["sleeptone"]).unwrap();
        assert_eq!(cli.output_dir, PathBuf::from("."));
        assert!(cli.seed.is_none());
    }

    #[test]
    fn parses_output_dir_and_seed() {
        let cli =
            Cli::try_parse_from(["sleeptone", "--output-dir", "assets/audio", "--seed", "42"])
                .unwrap();
        assert_eq!(cli.output_dir, PathBuf::from("assets/audio"));
        assert_eq!(cli.seed, Some(42));
    }

    #[test]
    fn rejects_non_numeric_seed() {
        assert!(Cli::try_parse_from(["sleeptone", "--seed", "abc"]).is_err());
    }
}
