//! Error types for sample source operations.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type for sample source operations.
pub type SourceResult<T> = Result<T, SourceError>;

/// Errors that can occur while opening a sample source.
///
/// All four variants are terminal for [`crate::SampleSource::open`]: no
/// partially-populated source is ever returned, and any buffer acquired
/// before a later failure is released before the error propagates.
#[derive(Debug, Error)]
pub enum SourceError {
    /// Input file missing or unreadable.
    #[error("cannot open input file {}: {source}", .path.display())]
    CannotOpenInput {
        /// Path that could not be opened.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Container decode failure or a decoded format outside supported
    /// constraints (bytes-per-sample, channel count, sample rate).
    #[error("unsupported WAV format: {reason}")]
    UnsupportedFormat {
        /// Human-readable description of the constraint violation.
        reason: String,
    },

    /// Buffer acquisition failed to obtain memory or a mapping.
    #[error("failed to acquire a {bytes}-byte sample buffer")]
    AllocationFailure {
        /// Requested buffer size.
        bytes: u64,
    },

    /// Fewer bytes read than the file's declared length.
    #[error("short read: expected {expected} bytes, got {actual}")]
    ShortRead {
        /// Byte count the file metadata declared.
        expected: u64,
        /// Byte count actually read.
        actual: u64,
    },
}

impl SourceError {
    /// Creates an unsupported-format error.
    pub fn unsupported(reason: impl Into<String>) -> Self {
        Self::UnsupportedFormat {
            reason: reason.into(),
        }
    }

    /// BSD sysexits-style process exit code for this failure kind.
    ///
    /// Callers that surface open failures as process exits map through
    /// this: `EX_NOINPUT` (66), `EX_DATAERR` (65), `EX_SOFTWARE` (70),
    /// `EX_IOERR` (74).
    pub fn exit_code(&self) -> i32 {
        match self {
            SourceError::CannotOpenInput { .. } => 66,
            SourceError::UnsupportedFormat { .. } => 65,
            SourceError::AllocationFailure { .. } => 70,
            SourceError::ShortRead { .. } => 74,
        }
    }
}
