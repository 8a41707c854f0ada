//! Loader error types
//!
//! Error codes:
//! - ARCHIVE_DATA_NOT_FOUND (FATAL at server startup)
//! - ARCHIVE_DATA_UNREADABLE (FATAL at server startup)
//! - ARCHIVE_DATA_EMPTY (FATAL at server startup)
//!
//! Severity is from the server's point of view: it has no degraded mode
//! without data. Presentation consumers recover from every loader error by
//! falling back to the sample dataset.

use std::fmt;
use std::io;
use std::path::Path;

/// Loader error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoaderErrorCode {
    /// Data file does not exist
    DataNotFound,
    /// Data file could not be read or parsed
    DataUnreadable,
    /// Data source parsed but produced no records
    DataEmpty,
}

impl LoaderErrorCode {
    pub fn code(&self) -> &'static str {
        match self {
            LoaderErrorCode::DataNotFound => "ARCHIVE_DATA_NOT_FOUND",
            LoaderErrorCode::DataUnreadable => "ARCHIVE_DATA_UNREADABLE",
            LoaderErrorCode::DataEmpty => "ARCHIVE_DATA_EMPTY",
        }
    }
}

impl fmt::Display for LoaderErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Data source failure
#[derive(Debug)]
pub struct LoaderError {
    code: LoaderErrorCode,
    message: String,
    source: Option<io::Error>,
}

impl LoaderError {
    pub fn not_found(path: &Path) -> Self {
        Self {
            code: LoaderErrorCode::DataNotFound,
            message: format!("{} not found", path.display()),
            source: None,
        }
    }

    pub fn unreadable(reason: impl Into<String>) -> Self {
        Self {
            code: LoaderErrorCode::DataUnreadable,
            message: reason.into(),
            source: None,
        }
    }

    pub fn io(path: &Path, source: io::Error) -> Self {
        Self {
            code: LoaderErrorCode::DataUnreadable,
            message: format!("failed to read {}", path.display()),
            source: Some(source),
        }
    }

    pub fn empty(source_name: impl fmt::Display) -> Self {
        Self {
            code: LoaderErrorCode::DataEmpty,
            message: format!("no records found in {}", source_name),
            source: None,
        }
    }

    pub fn code(&self) -> LoaderErrorCode {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for LoaderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)?;
        if let Some(ref source) = self.source {
            write!(f, " (caused by: {})", source)?;
        }
        Ok(())
    }
}

impl std::error::Error for LoaderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source.as_ref().map(|e| e as &(dyn std::error::Error + 'static))
    }
}

impl From<csv::Error> for LoaderError {
    fn from(e: csv::Error) -> Self {
        Self::unreadable(format!("CSV error: {}", e))
    }
}

/// Result type for loader operations
pub type LoaderResult<T> = Result<T, LoaderError>;
