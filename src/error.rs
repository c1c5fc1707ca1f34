//! Error types for the sleeptone generator.
//!
//! Defines all error codes and types used throughout the generator for
//! consistent error handling and reporting.

use std::fmt;

/// Error codes reported by the generator.
///
/// These codes identify the failure class so callers (and the top-level
/// reporter) can present a specific recovery hint alongside the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// Requested duration is too short for the fade envelope.
    /// Trigger: duration of 0.2 seconds or less.
    InvalidDuration,

    /// Failed to create, write, or finalize a WAV file.
    /// Trigger: I/O error, disk full, unwritable path.
    WavWriteFailed,

    /// Output directory cannot be created or accessed.
    /// Trigger: permission denied, path occupied by a file.
    OutputDirUnavailable,

    /// Failed to serialize or write the sounds.json manifest.
    /// Trigger: I/O error after the WAV batch completed.
    ManifestWriteFailed,
}

impl ErrorCode {
    /// Returns the string representation of the error code.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::InvalidDuration => "INVALID_DURATION",
            ErrorCode::WavWriteFailed => "WAV_WRITE_FAILED",
            ErrorCode::OutputDirUnavailable => "OUTPUT_DIR_UNAVAILABLE",
            ErrorCode::ManifestWriteFailed => "MANIFEST_WRITE_FAILED",
        }
    }

    /// Returns a human-readable description of the error.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::InvalidDuration => {
                "Duration is too short for the fade-in and fade-out regions"
            }
            ErrorCode::WavWriteFailed => "Failed to write a WAV file to disk",
            ErrorCode::OutputDirUnavailable => "Output directory cannot be created or accessed",
            ErrorCode::ManifestWriteFailed => "Failed to write the sounds.json manifest",
        }
    }

    /// Returns a recovery hint suggesting how to resolve this error.
    pub fn recovery_hint(&self) -> &'static str {
        match self {
            ErrorCode::InvalidDuration => {
                "Use a duration longer than 0.2 seconds so the 100ms fade-in \
                 and fade-out do not overlap"
            }
            ErrorCode::WavWriteFailed => {
                "Check free disk space and write permission on the output \
                 directory. A partially written file may remain and can be \
                 deleted safely"
            }
            ErrorCode::OutputDirUnavailable => {
                "Verify the --output-dir path is a writable directory, \
                 or omit it to write into the current directory"
            }
            ErrorCode::ManifestWriteFailed => {
                "The WAV files were already written. Check write permission \
                 on the output directory and re-run to regenerate sounds.json"
            }
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Main error type for generator operations.
#[derive(Debug)]
pub struct GeneratorError {
    /// The error code identifying the type of error.
    pub code: ErrorCode,
    /// Human-readable error message with context.
    pub message: String,
    /// Optional underlying cause of the error.
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl GeneratorError {
    /// Creates a new GeneratorError with the given code and message.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Creates a new GeneratorError with an underlying cause.
    pub fn with_source(
        code: ErrorCode,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            code,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Creates an INVALID_DURATION error.
    pub fn invalid_duration(duration_sec: f64) -> Self {
        Self::new(
            ErrorCode::InvalidDuration,
            format!(
                "Invalid duration: {} seconds (must exceed 0.2 seconds)",
                duration_sec
            ),
        )
    }

    /// Creates a WAV_WRITE_FAILED error.
    pub fn wav_write_failed(reason: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::WavWriteFailed,
            format!("Failed to write WAV file: {}", reason.into()),
        )
    }

    /// Creates an OUTPUT_DIR_UNAVAILABLE error.
    pub fn output_dir_unavailable(path: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::OutputDirUnavailable,
            format!("Output directory unavailable: {}", path.into()),
        )
    }

    /// Creates a MANIFEST_WRITE_FAILED error.
    pub fn manifest_write_failed(reason: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ManifestWriteFailed,
            format!("Failed to write manifest: {}", reason.into()),
        )
    }
}

impl fmt::Display for GeneratorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}. Recovery: {}",
            self.code,
            self.message,
            self.code.recovery_hint()
        )
    }
}

impl std::error::Error for GeneratorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Result type alias using GeneratorError.
pub type Result<T> = std::result::Result<T, GeneratorError>;
