//! Error types for record generation.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for generation operations
pub type Result<T> = std::result::Result<T, GenerateError>;

/// Errors that can occur while generating records
#[derive(Debug, Error)]
pub enum GenerateError {
    /// Destination file could not be created, written, finalized or measured.
    /// Only raised for files the writer opens itself.
    #[error("cannot write {}: {source}", path.display())]
    Resource {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Caller-supplied sink reported an error.
    ///
    /// Stream output has no path to report, so a failing `write` or `flush`
    /// on the caller's sink surfaces here instead of as [`Resource`].
    ///
    /// [`Resource`]: GenerateError::Resource
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Argument rejected before any output was produced
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A detached generation's worker thread panicked
    #[error("generation worker panicked")]
    WorkerPanicked,
}

impl GenerateError {
    pub(crate) fn resource(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        GenerateError::Resource {
            path: path.into(),
            source,
        }
    }
}

/// Convert a signed record count into a usable one.
///
/// Counts arrive signed from config files and command lines; negative values
/// are rejected rather than treated as zero.
pub fn record_count(count: i64) -> Result<usize> {
    usize::try_from(count).map_err(|_| {
        GenerateError::InvalidArgument(format!(
            "record count must be zero or positive, got {}",
            count
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_count() {
        assert_eq!(record_count(0).unwrap(), 0);
        assert_eq!(record_count(42).unwrap(), 42);
        assert!(matches!(
            record_count(-1),
            Err(GenerateError::InvalidArgument(_))
        ));
    }
}
