//! Query state: the caller's current search, filter, sort and page selection
//!
//! A plain serializable value. The presentation layer owns it and passes
//! it into the engine on every call; the engine keeps nothing between calls.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use super::errors::QueryError;

/// Records per page unless the caller says otherwise
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// Result ordering. Deserializes through `FromStr`, so names are
/// case-insensitive everywhere a sort key is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Newest first
    #[default]
    DateDesc,
    DateAsc,
    TitleAsc,
    TitleDesc,
    /// Most search-term occurrences first; input order without a term
    Relevance,
}

impl SortKey {
    pub const ALL: [SortKey; 5] = [
        SortKey::DateDesc,
        SortKey::DateAsc,
        SortKey::TitleAsc,
        SortKey::TitleDesc,
        SortKey::Relevance,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::DateDesc => "date-desc",
            SortKey::DateAsc => "date-asc",
            SortKey::TitleAsc => "title-asc",
            SortKey::TitleDesc => "title-desc",
            SortKey::Relevance => "relevance",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        SortKey::ALL
            .into_iter()
            .find(|key| key.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| QueryError::invalid_sort_key(wanted))
    }
}

impl<'de> Deserialize<'de> for SortKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}

/// Structured filters. Each is a no-op when unset or blank.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Filters {
    /// Inclusive lower bound on the publication date
    pub start_date: Option<NaiveDate>,
    /// Inclusive upper bound on the publication date
    pub end_date: Option<NaiveDate>,
    /// Substring of the joined author list
    pub author: String,
    /// Substring of the venue name
    pub publication: String,
    /// Substring of the joined keyword list
    pub keyword: String,
}

impl Filters {
    /// True when no filter constrains the result
    pub fn is_empty(&self) -> bool {
        self.start_date.is_none()
            && self.end_date.is_none()
            && self.author.trim().is_empty()
            && self.publication.trim().is_empty()
            && self.keyword.trim().is_empty()
    }
}

/// One complete query request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QueryState {
    pub search_term: String,
    pub filters: Filters,
    pub sort_key: SortKey,
    /// 1-based
    pub page: usize,
    pub page_size: usize,
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            filters: Filters::default(),
            sort_key: SortKey::default(),
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl QueryState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
        self
    }

    pub fn with_filters(mut self, filters: Filters) -> Self {
        self.filters = filters;
        self
    }

    pub fn with_sort(mut self, sort_key: SortKey) -> Self {
        self.sort_key = sort_key;
        self
    }

    pub fn with_page(mut self, page: usize) -> Self {
        self.page = page;
        self
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }
}
