//! Query engine
//!
//! Search, filter, sort and paginate over an in-memory record set, plus
//! keyword frequency and corpus statistics.
//!
//! Queries are pure: the same records and `QueryState` always produce the
//! same `ResultPage`.

mod engine;
mod errors;
mod filters;
mod keywords;
mod paginate;
mod result;
mod search;
mod sorter;
mod state;
mod stats;

pub use engine::{execute, QueryEngine};
pub use errors::{QueryError, QueryErrorCode, QueryResult};
pub use filters::{matches_filters, RecordFilter};
pub use keywords::{popular_keywords, KeywordCount, KeywordTally, POPULAR_KEYWORD_LIMIT};
pub use paginate::Paginator;
pub use result::ResultPage;
pub use search::{matches_search, SearchMatcher};
pub use sorter::ResultSorter;
pub use state::{Filters, QueryState, SortKey, DEFAULT_PAGE_SIZE};
pub use stats::{CorpusStats, TOP_KEYWORD_LIMIT};
