//! Observable lifecycle events
//!
//! Events are explicit and typed; each maps to a stable uppercase name and
//! a default severity.

use std::fmt;

use super::logger::Severity;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Lifecycle
    StartupBegin,
    /// Startup aborted; the process is about to exit non-zero
    StartupFailed,
    ConfigLoaded,
    /// HTTP listener bound and accepting requests
    Serving,
    ShutdownStart,
    ShutdownComplete,

    // Data loading
    DataLoadBegin,
    DataLoaded,
    DataLoadFailed,
    /// Data source failed; sample dataset substituted
    DataFallback,

    // Queries
    QueryExecuted,
    /// Caller error, such as a page outside the result
    QueryRejected,
}

impl Event {
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::StartupBegin => "ARCHIVE_STARTUP_BEGIN",
            Event::StartupFailed => "ARCHIVE_STARTUP_FAILED",
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::Serving => "ARCHIVE_SERVING",
            Event::ShutdownStart => "SHUTDOWN_START",
            Event::ShutdownComplete => "SHUTDOWN_COMPLETE",

            Event::DataLoadBegin => "DATA_LOAD_BEGIN",
            Event::DataLoaded => "DATA_LOADED",
            Event::DataLoadFailed => "DATA_LOAD_FAILED",
            Event::DataFallback => "DATA_FALLBACK",

            Event::QueryExecuted => "QUERY_COMPLETE",
            Event::QueryRejected => "QUERY_REJECTED",
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            Event::StartupFailed => Severity::Fatal,
            Event::DataLoadFailed => Severity::Error,
            Event::DataFallback | Event::QueryRejected => Severity::Warn,
            Event::QueryExecuted => Severity::Trace,
            _ => Severity::Info,
        }
    }

    pub fn is_fatal(&self) -> bool {
        self.severity() == Severity::Fatal
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
