//! Result sorting
//!
//! Every mode is stable: records that compare equal keep their input
//! order. Both `sort_by` and `sort_by_cached_key` on slices are stable, so
//! no explicit index tiebreak is needed.

use std::cmp::Reverse;

use deunicode::deunicode;

use crate::record::Record;

use super::search::SearchMatcher;
use super::state::SortKey;

/// Sorts matched records
pub struct ResultSorter;

impl ResultSorter {
    /// Sorts `records` in place by `key`.
    ///
    /// `search` is only consulted for `SortKey::Relevance`; with an empty
    /// matcher relevance leaves the order untouched.
    pub fn sort(records: &mut [&Record], key: SortKey, search: &SearchMatcher) {
        match key {
            SortKey::DateDesc => records.sort_by(|a, b| b.publication_date.cmp(&a.publication_date)),
            SortKey::DateAsc => records.sort_by(|a, b| a.publication_date.cmp(&b.publication_date)),
            SortKey::TitleAsc => records.sort_by_cached_key(|r| title_key(&r.title)),
            SortKey::TitleDesc => records.sort_by_cached_key(|r| Reverse(title_key(&r.title))),
            SortKey::Relevance => {
                if !search.is_empty() {
                    records.sort_by_cached_key(|r| Reverse(search.count_occurrences(r)));
                }
            }
        }
    }
}

/// Collation key approximating a locale-aware comparison.
///
/// Primary: transliterated to ASCII and case-folded, so "Émile" sorts with
/// "emile" rather than after "z". Secondary: the raw title, so distinct
/// titles never compare equal.
fn title_key(title: &str) -> (String, String) {
    (deunicode(title).to_lowercase(), title.to_string())
}
