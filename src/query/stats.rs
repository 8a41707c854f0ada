//! Corpus statistics

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::record::Record;

use super::keywords::{KeywordCount, KeywordTally};

/// Number of keywords reported in corpus statistics
pub const TOP_KEYWORD_LIMIT: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CorpusStats {
    pub total_papers: usize,
    /// Case preserved, most frequent first
    pub top_keywords: Vec<KeywordCount>,
    /// Distinct four-digit years, ascending
    pub publication_years: Vec<String>,
    pub year_stats: BTreeMap<String, usize>,
}

impl CorpusStats {
    pub fn compute(records: &[Record]) -> Self {
        let mut tally = KeywordTally::new();
        let mut year_stats: BTreeMap<String, usize> = BTreeMap::new();

        for record in records {
            for keyword in &record.keywords {
                let trimmed = keyword.trim();
                if !trimmed.is_empty() {
                    tally.add(trimmed);
                }
            }
            *year_stats.entry(record.year()).or_insert(0) += 1;
        }

        Self {
            total_papers: records.len(),
            top_keywords: tally.top(TOP_KEYWORD_LIMIT),
            publication_years: year_stats.keys().cloned().collect(),
            year_stats,
        }
    }
}
