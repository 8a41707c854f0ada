//! Data source contract and the fallback policy

use crate::observability::{log_event_with_fields, Event};
use crate::record::{sample_records, Record};

use super::errors::LoaderResult;

/// Anything that can produce the full record set
pub trait DataSource {
    /// Loads every record. An empty result is an error, not `Ok(vec![])`.
    fn load(&self) -> LoaderResult<Vec<Record>>;

    /// Human-readable name of the source, for logs
    fn describe(&self) -> String;
}

/// The built-in sample dataset as a data source
#[derive(Debug, Default, Clone, Copy)]
pub struct SampleSource;

impl DataSource for SampleSource {
    fn load(&self) -> LoaderResult<Vec<Record>> {
        Ok(sample_records())
    }

    fn describe(&self) -> String {
        "built-in sample dataset".to_string()
    }
}

/// Where the loaded records came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOrigin {
    /// The requested data source
    Source,
    /// The sample dataset, because the source failed
    Sample,
}

/// Records together with their origin
#[derive(Debug, Clone)]
pub struct LoadOutcome {
    pub records: Vec<Record>,
    pub origin: LoadOrigin,
}

impl LoadOutcome {
    pub fn used_fallback(&self) -> bool {
        self.origin == LoadOrigin::Sample
    }
}

/// Loads from `source`, failing loudly.
pub fn load(source: &dyn DataSource) -> LoaderResult<Vec<Record>> {
    let name = source.describe();
    log_event_with_fields(Event::DataLoadBegin, &[("source", name.as_str())]);

    match source.load() {
        Ok(records) => {
            log_event_with_fields(
                Event::DataLoaded,
                &[("records", records.len().to_string().as_str()), ("source", name.as_str())],
            );
            Ok(records)
        }
        Err(e) => {
            log_event_with_fields(Event::DataLoadFailed, &[("code", e.code().code()), ("reason", e.message())]);
            Err(e)
        }
    }
}

/// Loads from `source`, substituting the sample dataset on any failure.
///
/// Never fails: a broken data source must not leave the engine empty.
pub fn load_or_sample(source: &dyn DataSource) -> LoadOutcome {
    match load(source) {
        Ok(records) => LoadOutcome {
            records,
            origin: LoadOrigin::Source,
        },
        Err(e) => {
            let records = sample_records();
            log_event_with_fields(
                Event::DataFallback,
                &[
                    ("code", e.code().code()),
                    ("records", records.len().to_string().as_str()),
                    ("source", source.describe().as_str()),
                ],
            );
            LoadOutcome {
                records,
                origin: LoadOrigin::Sample,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::LoaderError;

    struct FailingSource;

    impl DataSource for FailingSource {
        fn load(&self) -> LoaderResult<Vec<Record>> {
            Err(LoaderError::unreadable("network unreachable"))
        }

        fn describe(&self) -> String {
            "failing".to_string()
        }
    }

    #[test]
    fn test_fallback_on_failure() {
        let outcome = load_or_sample(&FailingSource);
        assert!(outcome.used_fallback());
        assert_eq!(outcome.records, sample_records());
    }

    #[test]
    fn test_no_fallback_on_success() {
        let outcome = load_or_sample(&SampleSource);
        assert_eq!(outcome.origin, LoadOrigin::Source);
    }

    #[test]
    fn test_load_propagates_failure() {
        assert!(load(&FailingSource).is_err());
    }
}
