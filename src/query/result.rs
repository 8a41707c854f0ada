//! One page of query results

use serde::{Deserialize, Serialize};

use crate::record::Record;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultPage {
    /// At most `page_size` records
    pub items: Vec<Record>,
    /// Matches across all pages
    pub total_matched: usize,
    pub page: usize,
    /// Zero when nothing matched
    pub total_pages: usize,
    pub page_size: usize,
}

impl ResultPage {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// 1-based positions of the first and last displayed item, or `None`
    /// when the page is empty
    pub fn range(&self) -> Option<(usize, usize)> {
        if self.items.is_empty() {
            return None;
        }
        let first = (self.page - 1) * self.page_size + 1;
        Some((first, first + self.items.len() - 1))
    }

    /// Human-readable result count line
    pub fn summary(&self) -> String {
        match self.range() {
            Some((first, last)) => format!(
                "Showing {}-{} of {} articles",
                first, last, self.total_matched
            ),
            None => "No articles found".to_string(),
        }
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}
