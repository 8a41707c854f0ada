//! Query error types
//!
//! Error codes:
//! - ARCHIVE_PAGE_OUT_OF_RANGE (ERROR)
//! - ARCHIVE_INVALID_PAGE_SIZE (ERROR)
//! - ARCHIVE_INVALID_SORT_KEY (ERROR)
//!
//! Malformed record data never produces a query error. Every code here is
//! a caller bug: a request the presentation layer should not have made.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryErrorCode {
    /// Requested page is outside `[1, total_pages]`
    PageOutOfRange,
    /// Page size of zero
    InvalidPageSize,
    /// Unrecognized sort key name
    InvalidSortKey,
}

impl QueryErrorCode {
    pub fn code(&self) -> &'static str {
        match self {
            QueryErrorCode::PageOutOfRange => "ARCHIVE_PAGE_OUT_OF_RANGE",
            QueryErrorCode::InvalidPageSize => "ARCHIVE_INVALID_PAGE_SIZE",
            QueryErrorCode::InvalidSortKey => "ARCHIVE_INVALID_SORT_KEY",
        }
    }
}

impl fmt::Display for QueryErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Query error with context
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryError {
    code: QueryErrorCode,
    message: String,
}

impl QueryError {
    pub fn page_out_of_range(page: usize, total_pages: usize) -> Self {
        Self {
            code: QueryErrorCode::PageOutOfRange,
            message: format!("page {} is outside 1..={}", page, total_pages.max(1)),
        }
    }

    pub fn invalid_page_size(page_size: usize) -> Self {
        Self {
            code: QueryErrorCode::InvalidPageSize,
            message: format!("page size must be at least 1, got {}", page_size),
        }
    }

    pub fn invalid_sort_key(key: &str) -> Self {
        Self {
            code: QueryErrorCode::InvalidSortKey,
            message: format!(
                "unknown sort key '{}', expected one of date-desc, date-asc, title-asc, title-desc, relevance",
                key
            ),
        }
    }

    pub fn code(&self) -> QueryErrorCode {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for QueryError {}

/// Result type for query operations
pub type QueryResult<T> = Result<T, QueryError>;
