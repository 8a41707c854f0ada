//! Pagination
//!
//! Pages are 1-indexed. Page 1 is always accepted, even when nothing
//! matched, so an empty result is a valid state rather than an error.

use super::errors::{QueryError, QueryResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    page_size: usize,
}

impl Paginator {
    pub fn new(page_size: usize) -> QueryResult<Self> {
        if page_size == 0 {
            return Err(QueryError::invalid_page_size(page_size));
        }
        Ok(Self { page_size })
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// `ceil(total / page_size)`; zero when `total` is zero
    pub fn total_pages(&self, total: usize) -> usize {
        total.div_ceil(self.page_size)
    }

    /// Returns the `page`-th window of `items`
    pub fn slice<'a, T>(&self, items: &'a [T], page: usize) -> QueryResult<&'a [T]> {
        let total_pages = self.total_pages(items.len());
        if page == 0 || page > total_pages.max(1) {
            return Err(QueryError::page_out_of_range(page, total_pages));
        }

        let start = ((page - 1) * self.page_size).min(items.len());
        let end = (start + self.page_size).min(items.len());
        Ok(&items[start..end])
    }
}
