//! sleeptone: placeholder sound generator for the SleepTone app.
//!
//! Writes the app's fixed catalog of stand-in audio files into the
//! output directory as mono 16-bit WAV, then records them in a
//! sounds.json manifest.

use std::time::Instant;

use sleeptone::cli::Cli;
use sleeptone::error::Result;
use sleeptone::generation::run_batch;

fn main() {
    // Errors are reported to stderr; the exit status stays 0 either way.
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse_args();

    eprintln!("=== sleeptone placeholder generator ===");
    eprintln!("Output directory: {}", cli.output_dir.display());
    if let Some(seed) = cli.seed {
        eprintln!("Seed: {}", seed);
    }
    eprintln!();

    let start_time = Instant::now();
    let report = run_batch(&cli.output_dir, cli.seed)?;
    let elapsed = start_time.elapsed().as_secs_f32();

    eprintln!();
    eprintln!(
        "Generated {} placeholder sounds in {:.2}s",
        report.generated, elapsed
    );
    eprintln!("Manifest: {}", report.manifest_path.display());
    eprintln!("Note: these are simple placeholder tones. Replace with real recordings for production.");

    Ok(())
}
