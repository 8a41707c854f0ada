//! Keyword frequency
//!
//! Counts always run over the full record set, never the filtered one.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::record::Record;

/// Number of popular keywords offered as quick filters
pub const POPULAR_KEYWORD_LIMIT: usize = 12;

/// Keywords this short are noise ("ai", "3d") and never offered
const MIN_POPULAR_KEYWORD_LEN: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordCount {
    pub keyword: String,
    pub count: usize,
}

/// Frequency table that remembers first-seen order
#[derive(Debug, Default)]
pub struct KeywordTally {
    counts: Vec<KeywordCount>,
    index: HashMap<String, usize>,
}

impl KeywordTally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, keyword: &str) {
        match self.index.get(keyword) {
            Some(&slot) => self.counts[slot].count += 1,
            None => {
                self.index.insert(keyword.to_string(), self.counts.len());
                self.counts.push(KeywordCount {
                    keyword: keyword.to_string(),
                    count: 1,
                });
            }
        }
    }

    /// Highest counts first, ties in first-seen order, at most `limit`
    pub fn top(mut self, limit: usize) -> Vec<KeywordCount> {
        // stable: equal counts keep insertion order
        self.counts.sort_by(|a, b| b.count.cmp(&a.count));
        self.counts.truncate(limit);
        self.counts
    }
}

/// The most frequent keywords across `records`, lowercased.
///
/// Keywords are trimmed and case-folded before counting, so "Mars" and
/// "mars" are one entry. Keywords of two characters or fewer are skipped.
pub fn popular_keywords(records: &[Record], limit: usize) -> Vec<String> {
    let mut tally = KeywordTally::new();
    for keyword in records.iter().flat_map(|r| r.keywords.iter()) {
        let folded = keyword.trim().to_lowercase();
        if folded.chars().count() >= MIN_POPULAR_KEYWORD_LEN {
            tally.add(&folded);
        }
    }
    tally.top(limit).into_iter().map(|k| k.keyword).collect()
}
