//! Structured filters
//!
//! All filters are AND-combined. A filter with no input is a no-op.
//! Text filters are case-insensitive substring containment; the date range
//! is inclusive on both ends and compares calendar dates.

use chrono::NaiveDate;

use crate::record::Record;

use super::state::Filters;

/// Filters prepared for repeated evaluation
#[derive(Debug, Clone, Default)]
pub struct RecordFilter {
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
    author: String,
    publication: String,
    keyword: String,
}

impl RecordFilter {
    pub fn new(filters: &Filters) -> Self {
        let prepare = |s: &str| s.trim().to_lowercase();
        Self {
            start_date: filters.start_date,
            end_date: filters.end_date,
            author: prepare(&filters.author),
            publication: prepare(&filters.publication),
            keyword: prepare(&filters.keyword),
        }
    }

    /// Checks a record against every active filter
    pub fn matches(&self, record: &Record) -> bool {
        self.matches_date(record.publication_date)
            && contains_folded(&record.joined_authors(), &self.author)
            && contains_folded(&record.publication, &self.publication)
            && contains_folded(&record.joined_keywords(), &self.keyword)
    }

    fn matches_date(&self, date: NaiveDate) -> bool {
        if let Some(start) = self.start_date {
            if date < start {
                return false;
            }
        }
        if let Some(end) = self.end_date {
            if date > end {
                return false;
            }
        }
        true
    }
}

/// Empty needle matches
fn contains_folded(haystack: &str, needle: &str) -> bool {
    needle.is_empty() || haystack.to_lowercase().contains(needle)
}

/// Returns whether `record` passes all of `filters`
pub fn matches_filters(record: &Record, filters: &Filters) -> bool {
    RecordFilter::new(filters).matches(record)
}
