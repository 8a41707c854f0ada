//! CSV Loader Tests
//!
//! Tests for ingestion:
//! - Header aliases resolve by priority
//! - Missing values take their documented defaults
//! - Source failures are reported, or replaced by the sample when allowed

use std::io::Write;

use chrono::NaiveDate;
use tempfile::{NamedTempFile, TempDir};

use research_archive::loader::{load, load_or_sample, CsvFileSource, LoadOrigin, LoaderErrorCode};
use research_archive::record::{Normalizer, DEFAULT_ABSTRACT, DEFAULT_PUBLICATION, DEFAULT_TITLE};

// =============================================================================
// Helper Functions
// =============================================================================

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
}

fn csv_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

fn source(file: &NamedTempFile) -> CsvFileSource {
    CsvFileSource::with_normalizer(file.path(), Normalizer::new(today()))
}

// =============================================================================
// Server-Style CSV Tests
// =============================================================================

/// The processed-papers layout: lowercase headers, comma-joined lists.
#[test]
fn test_processed_papers_layout() {
    let file = csv_file(
        "articleId,title,authors,publicationDate,keywords,abstract,content,pdfUrl\n\
         nasa001,Mars Atmospheric Composition,\"Dr. Sarah Chen, Dr. Michael Rodriguez\",2024-03-15,\"Mars, Atmosphere, Spectroscopy\",Trace gases.,Full text here.,https://example.org/nasa001.pdf\n\
         nasa002,Lunar Base Design,Dr. Amy Park,03/20/2024,\"Moon, Habitat\",Regolith.,,\n",
    );

    let records = load(&source(&file)).unwrap();
    assert_eq!(records.len(), 2);

    let first = &records[0];
    assert_eq!(first.id, "nasa001");
    assert_eq!(first.authors, ["Dr. Sarah Chen", "Dr. Michael Rodriguez"]);
    assert_eq!(first.keywords, ["Mars", "Atmosphere", "Spectroscopy"]);
    assert_eq!(first.publication_date, NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());
    assert_eq!(first.content.as_deref(), Some("Full text here."));
    assert_eq!(first.link.as_deref(), Some("https://example.org/nasa001.pdf"));
    assert_eq!(first.publication, DEFAULT_PUBLICATION);

    let second = &records[1];
    assert_eq!(second.publication_date, NaiveDate::from_ymd_opt(2024, 3, 20).unwrap());
    assert!(second.content.is_none());
    assert!(second.link.is_none());
}

// =============================================================================
// Browser-Style CSV Tests
// =============================================================================

/// Capitalized headers, JSON-array lists, and a journal column.
#[test]
fn test_capitalized_layout_with_json_lists() {
    let file = csv_file(
        "Title,Link,Authors,Date,Journal,Summary,Keywords\n\
         Microbes on the ISS,https://example.org/1,\"[\"\"Dr. Elena Petrov\"\", \"\"Dr. Kenji Tanaka\"\"]\",2024/08/15,Journal of Astrobiology,Microbial communities.,\"[\"\"ISS\"\",\"\"Genomics\"\"]\"\n",
    );

    let records = load(&source(&file)).unwrap();
    let record = &records[0];

    assert_eq!(record.id, "row-1");
    assert_eq!(record.title, "Microbes on the ISS");
    assert_eq!(record.authors, ["Dr. Elena Petrov", "Dr. Kenji Tanaka"]);
    assert_eq!(record.keywords, ["ISS", "Genomics"]);
    assert_eq!(record.publication, "Journal of Astrobiology");
    assert_eq!(record.abstract_text, "Microbial communities.");
    assert_eq!(record.publication_date, NaiveDate::from_ymd_opt(2024, 8, 15).unwrap());
    assert_eq!(record.link.as_deref(), Some("https://example.org/1"));
}

/// Blank and missing cells take defaults; bad dates become today.
#[test]
fn test_defaults_for_missing_values() {
    let file = csv_file("articleId,title,publicationDate\nx1,,not a date\nx2\n");

    let records = load(&source(&file)).unwrap();
    assert_eq!(records.len(), 2);

    for record in &records {
        assert_eq!(record.title, DEFAULT_TITLE);
        assert_eq!(record.abstract_text, DEFAULT_ABSTRACT);
        assert_eq!(record.publication, DEFAULT_PUBLICATION);
        assert_eq!(record.publication_date, today());
        assert!(record.authors.is_empty());
        assert!(record.keywords.is_empty());
    }
}

// =============================================================================
// Failure Tests
// =============================================================================

/// A missing file is DATA_NOT_FOUND.
#[test]
fn test_missing_file() {
    let dir = TempDir::new().unwrap();
    let missing = CsvFileSource::new(dir.path().join("papers_processed.csv"));

    let err = load(&missing).unwrap_err();
    assert_eq!(err.code(), LoaderErrorCode::DataNotFound);
}

/// A header with no rows is DATA_EMPTY.
#[test]
fn test_header_only_file() {
    let file = csv_file("articleId,title\n");
    let err = load(&source(&file)).unwrap_err();
    assert_eq!(err.code(), LoaderErrorCode::DataEmpty);
}

/// Any failure falls back to the 30-record sample.
#[test]
fn test_fallback_to_sample() {
    let dir = TempDir::new().unwrap();
    let missing = CsvFileSource::new(dir.path().join("absent.csv"));

    let outcome = load_or_sample(&missing);
    assert_eq!(outcome.origin, LoadOrigin::Sample);
    assert!(outcome.used_fallback());
    assert_eq!(outcome.records.len(), 30);
}

/// A good file is used as-is.
#[test]
fn test_no_fallback_when_source_loads() {
    let file = csv_file("id,title\n1,Only paper\n");
    let outcome = load_or_sample(&source(&file));
    assert_eq!(outcome.origin, LoadOrigin::Source);
    assert_eq!(outcome.records.len(), 1);
    assert_eq!(outcome.records[0].id, "1");
}
