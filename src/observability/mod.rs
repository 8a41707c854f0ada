//! Observability subsystem
//!
//! Structured JSON line logging of typed lifecycle events.
//!
//! # Usage
//!
//! ```ignore
//! use research_archive::observability::{log_event_with_fields, Event, Logger};
//!
//! log_event_with_fields(Event::DataLoaded, &[("records", "30")]);
//! Logger::warn("CSV_ROW_SKIPPED", &[("row", "12")]);
//! ```

mod events;
mod logger;

pub use events::Event;
pub use logger::{Logger, Severity};

/// Log a lifecycle event at its default severity
pub fn log_event(event: Event) {
    Logger::log(event.severity(), event.as_str(), &[]);
}

/// Log a lifecycle event with fields at its default severity
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    Logger::log(event.severity(), event.as_str(), fields);
}

/// Log a completed query. Called by the HTTP and CLI surfaces; the query
/// engine itself never logs.
pub fn log_query_complete(surface: &str, matched: usize, page: usize, sort: &str) {
    log_event_with_fields(
        Event::QueryExecuted,
        &[
            ("matched", matched.to_string().as_str()),
            ("page", page.to_string().as_str()),
            ("sort", sort),
            ("surface", surface),
        ],
    );
}
