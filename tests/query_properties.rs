//! Query Engine Property Tests
//!
//! Tests for query invariants:
//! - An empty query returns everything, newest first
//! - Search is sound and complete
//! - Filters only ever narrow the result
//! - Sorting is stable and paging covers the match set exactly
//! - Queries are idempotent

use std::collections::HashSet;

use chrono::NaiveDate;
use research_archive::query::{
    execute, popular_keywords, Filters, QueryEngine, QueryErrorCode, QueryState, SortKey,
};
use research_archive::record::{sample_records, Normalizer, RawRow, Record};

// =============================================================================
// Helper Functions
// =============================================================================

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// 45 records over three years, with a handful of shared dates
fn corpus() -> Vec<Record> {
    (0..45)
        .map(|i| {
            let author = if i % 5 == 0 { "Dr. Sarah Chen" } else { "Dr. Ben Carter" };
            let topic = ["Mars", "Radiation", "Genomics"][i % 3];
            Record::new(
                format!("paper-{:02}", i),
                format!("{} study {}", topic, i),
                ymd(2021 + (i % 3) as i32, (i % 12) as u32 + 1, 1),
            )
            .with_authors([author, "Dr. Liu Wei"])
            .with_keywords([topic, "Space Biology"])
            .with_publication(format!("Journal {}", i % 4))
            .with_abstract(format!("Findings on {} in orbit.", topic.to_lowercase()))
        })
        .collect()
}

fn everything(state: QueryState) -> QueryState {
    state.with_page_size(1000)
}

fn ids(records: &[Record]) -> Vec<String> {
    records.iter().map(|r| r.id.clone()).collect()
}

// =============================================================================
// Default Query Tests
// =============================================================================

/// Empty state returns every record, newest first, on page 1.
#[test]
fn test_empty_state_returns_all_sorted() {
    let records = corpus();
    let page = execute(&records, &everything(QueryState::default())).unwrap();

    assert_eq!(page.page, 1);
    assert_eq!(page.total_matched, records.len());
    assert_eq!(page.items.len(), records.len());
    for pair in page.items.windows(2) {
        assert!(pair[0].publication_date >= pair[1].publication_date);
    }
}

/// Empty record set yields the empty state, not an error.
#[test]
fn test_empty_record_set() {
    let page = execute(&[], &QueryState::default()).unwrap();
    assert_eq!(page.total_matched, 0);
    assert_eq!(page.total_pages, 0);
    assert!(page.items.is_empty());
    assert_eq!(page.summary(), "No articles found");
}

// =============================================================================
// Search Tests
// =============================================================================

/// Every returned record contains the term, and every record that
/// contains the term is returned.
#[test]
fn test_search_sound_and_complete() {
    let records = corpus();
    for term in ["mars", "RADIATION", " chen ", "journal 2", "orbit", "nothing-like-this"] {
        let page = execute(&records, &everything(QueryState::new().with_search(term))).unwrap();
        let needle = term.trim().to_lowercase();

        let returned: HashSet<_> = page.items.iter().map(|r| r.id.clone()).collect();
        let expected: HashSet<_> = records
            .iter()
            .filter(|r| r.searchable_text().contains(&needle))
            .map(|r| r.id.clone())
            .collect();

        assert_eq!(returned, expected, "term {:?}", term);
    }
}

// =============================================================================
// Filter Tests
// =============================================================================

/// Adding a filter never grows the match count.
#[test]
fn test_filter_monotonicity() {
    let records = corpus();
    let base = execute(&records, &everything(QueryState::new().with_search("study")))
        .unwrap()
        .total_matched;

    let narrowed = [
        Filters {
            author: "chen".to_string(),
            ..Filters::default()
        },
        Filters {
            keyword: "mars".to_string(),
            ..Filters::default()
        },
        Filters {
            start_date: Some(ymd(2022, 1, 1)),
            ..Filters::default()
        },
        Filters {
            end_date: Some(ymd(2022, 6, 30)),
            publication: "journal 1".to_string(),
            ..Filters::default()
        },
    ];

    for filters in narrowed {
        let count = execute(
            &records,
            &everything(QueryState::new().with_search("study").with_filters(filters.clone())),
        )
        .unwrap()
        .total_matched;
        assert!(count <= base, "{:?} grew the result", filters);
    }
}

/// Author filter "chen" returns exactly the records with a matching author.
#[test]
fn test_author_filter_chen() {
    let records = corpus();
    let filters = Filters {
        author: "chen".to_string(),
        ..Filters::default()
    };
    let page = execute(&records, &everything(QueryState::new().with_filters(filters))).unwrap();

    assert_eq!(page.total_matched, 9);
    assert!(page
        .items
        .iter()
        .all(|r| r.authors.iter().any(|a| a.to_lowercase().contains("chen"))));
}

/// Date range bounds are inclusive.
#[test]
fn test_date_range_inclusive() {
    let records = vec![
        Record::new("a", "a", ymd(2023, 12, 31)),
        Record::new("b", "b", ymd(2024, 1, 1)),
        Record::new("c", "c", ymd(2024, 12, 31)),
        Record::new("d", "d", ymd(2025, 1, 1)),
    ];
    let filters = Filters {
        start_date: Some(ymd(2024, 1, 1)),
        end_date: Some(ymd(2024, 12, 31)),
        ..Filters::default()
    };
    let page = execute(&records, &QueryState::new().with_filters(filters)).unwrap();
    assert_eq!(ids(&page.items), ["c", "b"]);
}

// =============================================================================
// Sort Tests
// =============================================================================

/// Equal dates keep source order under both date sorts.
#[test]
fn test_date_sort_stable() {
    let records = vec![
        Record::new("first", "x", ymd(2024, 5, 1)),
        Record::new("second", "y", ymd(2024, 5, 1)),
        Record::new("older", "z", ymd(2020, 1, 1)),
        Record::new("third", "w", ymd(2024, 5, 1)),
    ];

    let desc = execute(&records, &QueryState::new().with_sort(SortKey::DateDesc)).unwrap();
    assert_eq!(ids(&desc.items), ["first", "second", "third", "older"]);

    let asc = execute(&records, &QueryState::new().with_sort(SortKey::DateAsc)).unwrap();
    assert_eq!(ids(&asc.items), ["older", "first", "second", "third"]);
}

/// Relevance without a search term leaves source order untouched.
#[test]
fn test_relevance_without_term_keeps_source_order() {
    let records = corpus();
    let page = execute(&records, &everything(QueryState::new().with_sort(SortKey::Relevance))).unwrap();
    assert_eq!(ids(&page.items), ids(&records));
}

/// Relevance ranks by occurrence count across title, abstract, authors
/// and keywords.
#[test]
fn test_relevance_ranking() {
    let records = vec![
        Record::new("once", "Mars", ymd(2024, 1, 1)),
        Record::new("thrice", "Mars", ymd(2020, 1, 1))
            .with_abstract("mars again")
            .with_keywords(["MARS"]),
        Record::new("twice", "Mars", ymd(2022, 1, 1)).with_abstract("Mars."),
        Record::new("venue-only", "Venus", ymd(2024, 1, 1)).with_publication("Mars Letters"),
    ];
    let state = QueryState::new().with_search("mars").with_sort(SortKey::Relevance);
    let page = execute(&records, &state).unwrap();

    // the venue matches search but adds nothing to relevance
    assert_eq!(ids(&page.items), ["thrice", "twice", "once", "venue-only"]);
}

/// Title sorts fold case.
#[test]
fn test_title_sort_folds_case() {
    let records = vec![
        Record::new("1", "beta", ymd(2024, 1, 1)),
        Record::new("2", "Alpha", ymd(2024, 1, 1)),
        Record::new("3", "gamma", ymd(2024, 1, 1)),
    ];
    let page = execute(&records, &QueryState::new().with_sort(SortKey::TitleAsc)).unwrap();
    assert_eq!(ids(&page.items), ["2", "1", "3"]);
}

// =============================================================================
// Pagination Tests
// =============================================================================

/// 45 matches at 20 per page: 3 pages, the last holding 5.
#[test]
fn test_forty_five_records_paginate_into_three_pages() {
    let records = corpus();

    let first = execute(&records, &QueryState::new()).unwrap();
    assert_eq!(first.total_pages, 3);
    assert_eq!(first.items.len(), 20);
    assert_eq!(first.summary(), "Showing 1-20 of 45 articles");

    let last = execute(&records, &QueryState::new().with_page(3)).unwrap();
    assert_eq!(last.items.len(), 5);
    assert_eq!(last.summary(), "Showing 41-45 of 45 articles");

    let err = execute(&records, &QueryState::new().with_page(4)).unwrap_err();
    assert_eq!(err.code(), QueryErrorCode::PageOutOfRange);
}

/// Concatenating every page reproduces the full sorted match list.
#[test]
fn test_pages_cover_matches_exactly() {
    let records = corpus();
    for sort in SortKey::ALL {
        let state = QueryState::new().with_search("study").with_sort(sort).with_page_size(7);
        let full = execute(&records, &everything(state.clone())).unwrap();
        let paged = execute(&records, &state).unwrap();
        assert_eq!(paged.total_pages, full.total_matched.div_ceil(7), "sort {}", sort);

        let mut stitched = Vec::new();
        for page in 1..=paged.total_pages {
            let chunk = execute(&records, &state.clone().with_page(page)).unwrap();
            assert!(chunk.items.len() <= 7);
            stitched.extend(chunk.items);
        }

        assert_eq!(ids(&stitched), ids(&full.items), "sort {}", sort);
    }
}

/// Page size zero is rejected.
#[test]
fn test_zero_page_size() {
    let err = execute(&corpus(), &QueryState::new().with_page_size(0)).unwrap_err();
    assert_eq!(err.code(), QueryErrorCode::InvalidPageSize);
}

// =============================================================================
// Idempotence Tests
// =============================================================================

/// The same state over the same records gives the same page.
#[test]
fn test_idempotent() {
    let engine = QueryEngine::new(corpus());
    let state = QueryState::new()
        .with_search("mars")
        .with_sort(SortKey::TitleDesc)
        .with_page_size(4)
        .with_page(2);

    assert_eq!(engine.query(&state).unwrap(), engine.query(&state).unwrap());
}

// =============================================================================
// Keyword Tests
// =============================================================================

/// Popular keywords count over the full set, collapse case and skip
/// short keywords.
#[test]
fn test_popular_keywords() {
    let records = vec![
        Record::new("a", "a", ymd(2024, 1, 1)).with_keywords(["Mars", "AI", "Radiation"]),
        Record::new("b", "b", ymd(2024, 1, 1)).with_keywords(["mars", "ai"]),
        Record::new("c", "c", ymd(2024, 1, 1)).with_keywords(["MARS", "Genomics"]),
    ];
    assert_eq!(popular_keywords(&records, 12), vec!["mars", "radiation", "genomics"]);
}

/// Keywords ignore the active query.
#[test]
fn test_popular_keywords_ignore_filters() {
    let engine = QueryEngine::new(corpus());
    let before = engine.popular_keywords();
    let _ = engine
        .query(&QueryState::new().with_search("mars"))
        .unwrap();
    assert_eq!(engine.popular_keywords(), before);
    assert_eq!(before[0], "space biology");
}

// =============================================================================
// Ingestion Scenario Tests
// =============================================================================

/// A record with an unparseable date normalizes to the injected today.
#[test]
fn test_bad_date_becomes_today() {
    let today = ymd(2026, 10, 18);
    let normalizer = Normalizer::new(today);

    let mut row = RawRow::new();
    row.insert("Title".to_string(), "Undated".to_string());
    row.insert("publicationDate".to_string(), "sometime last spring".to_string());

    let record = normalizer.normalize(&row, 1);
    assert_eq!(record.publication_date, today);
    assert_eq!(record.id, "row-1");

    let engine = QueryEngine::new(vec![record]);
    let filters = Filters {
        start_date: Some(today),
        end_date: Some(today),
        ..Filters::default()
    };
    assert_eq!(engine.count(&QueryState::new().with_filters(filters)), 1);
}

/// The sample dataset is queryable end to end.
#[test]
fn test_sample_dataset_queries() {
    let engine = QueryEngine::new(sample_records());
    let page = engine.query(&QueryState::new().with_search("ISS")).unwrap();
    assert!(page.items.iter().any(|r| r.id == "sample-001"));
}
