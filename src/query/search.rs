//! Free-text search
//!
//! Single-substring containment over a record's searchable text. No
//! tokenization, no ranking, no boolean operators.

use crate::record::Record;

/// A prepared search term
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchMatcher {
    /// Trimmed and lowercased
    term: String,
}

impl SearchMatcher {
    pub fn new(term: &str) -> Self {
        Self {
            term: term.trim().to_lowercase(),
        }
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    /// An empty matcher accepts every record
    pub fn is_empty(&self) -> bool {
        self.term.is_empty()
    }

    pub fn matches(&self, record: &Record) -> bool {
        self.is_empty() || record.searchable_text().contains(&self.term)
    }

    /// Non-overlapping, case-insensitive occurrences of the term in the
    /// record's relevance text. Zero for an empty matcher.
    pub fn count_occurrences(&self, record: &Record) -> usize {
        if self.is_empty() {
            return 0;
        }
        record.relevance_text().matches(self.term.as_str()).count()
    }
}

/// Returns whether `record` matches the free-text `term`
pub fn matches_search(record: &Record, term: &str) -> bool {
    SearchMatcher::new(term).matches(record)
}
