//! Query execution
//!
//! A query runs as a fixed pipeline over the full record set:
//!
//! 1. search and filter (both must pass)
//! 2. sort the survivors
//! 3. cut the requested page
//!
//! The engine holds the records and nothing else. All per-request state
//! arrives in the `QueryState`.

use crate::record::Record;

use super::errors::QueryResult;
use super::filters::RecordFilter;
use super::keywords::{popular_keywords, POPULAR_KEYWORD_LIMIT};
use super::paginate::Paginator;
use super::result::ResultPage;
use super::search::SearchMatcher;
use super::sorter::ResultSorter;
use super::state::QueryState;
use super::stats::CorpusStats;

/// Read-only query engine over a loaded record set
#[derive(Debug, Clone, Default)]
pub struct QueryEngine {
    records: Vec<Record>,
}

impl QueryEngine {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// Replaces the record set
    pub fn set_records(&mut self, records: Vec<Record>) {
        self.records = records;
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Runs `state` against the full record set
    pub fn query(&self, state: &QueryState) -> QueryResult<ResultPage> {
        execute(&self.records, state)
    }

    /// Number of records matching the search and filters of `state`,
    /// ignoring its sort and page
    pub fn count(&self, state: &QueryState) -> usize {
        let search = SearchMatcher::new(&state.search_term);
        let filter = RecordFilter::new(&state.filters);
        self.records
            .iter()
            .filter(|r| search.matches(r) && filter.matches(r))
            .count()
    }

    /// First record with `id`
    pub fn find(&self, id: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Every record matching `term`, in source order
    pub fn search(&self, term: &str) -> Vec<&Record> {
        let search = SearchMatcher::new(term);
        self.records.iter().filter(|r| search.matches(r)).collect()
    }

    /// Popular keywords over the whole record set
    pub fn popular_keywords(&self) -> Vec<String> {
        popular_keywords(&self.records, POPULAR_KEYWORD_LIMIT)
    }

    pub fn stats(&self) -> CorpusStats {
        CorpusStats::compute(&self.records)
    }
}

/// Runs `state` against `records`.
///
/// Fails only for a zero page size or a page outside `[1, total_pages]`
/// (page 1 is always accepted).
pub fn execute(records: &[Record], state: &QueryState) -> QueryResult<ResultPage> {
    let paginator = Paginator::new(state.page_size)?;
    let search = SearchMatcher::new(&state.search_term);
    let filter = RecordFilter::new(&state.filters);

    let mut matched: Vec<&Record> = records
        .iter()
        .filter(|r| search.matches(r) && filter.matches(r))
        .collect();

    ResultSorter::sort(&mut matched, state.sort_key, &search);

    let total_matched = matched.len();
    let total_pages = paginator.total_pages(total_matched);
    let items: Vec<Record> = paginator
        .slice(&matched, state.page)?
        .iter()
        .map(|r| (*r).clone())
        .collect();

    Ok(ResultPage {
        items,
        total_matched,
        page: state.page,
        total_pages,
        page_size: paginator.page_size(),
    })
}
