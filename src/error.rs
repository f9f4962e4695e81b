use std::path::PathBuf;

use thiserror::Error;

/// Convenience result type for ingestion and reporting operations.
pub type ReportResult<T> = Result<T, ReportError>;

/// Error type returned by the line reader, the report pipeline and the report writer.
///
/// Per-file variants (`FileNotFound`, `EmptyOrInvalidData`, `Io` while reading) are recovered by
/// the pipeline, which skips the file. `NoValidFiles` and `PermissionDenied` end the run.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The input path does not exist.
    #[error("File not found: {}", .path.display())]
    FileNotFound { path: PathBuf },

    /// The file produced no usable values after blank and unparsable lines were dropped.
    #[error("File is empty or contains no valid data: {}", .path.display())]
    EmptyOrInvalidData { path: PathBuf },

    /// Every input file was skipped.
    #[error("No valid files to process")]
    NoValidFiles,

    /// The results file (or its directory) could not be written.
    #[error("Permission denied writing to {}", .path.display())]
    PermissionDenied { path: PathBuf },

    /// Any other I/O failure (invalid UTF-8, console write failure, ...).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Severity classification used for observer callbacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ReportSeverity {
    /// Informational event.
    Info,
    /// A file was skipped but the run continues.
    Warning,
    /// An unexpected I/O failure.
    Error,
    /// The run cannot produce a saved report.
    Critical,
}

impl ReportError {
    /// Classify this error for observers.
    pub fn severity(&self) -> ReportSeverity {
        match self {
            ReportError::FileNotFound { .. } | ReportError::EmptyOrInvalidData { .. } => {
                ReportSeverity::Warning
            }
            ReportError::Io(_) => ReportSeverity::Error,
            ReportError::NoValidFiles | ReportError::PermissionDenied { .. } => {
                ReportSeverity::Critical
            }
        }
    }
}
