//! CSV file data source

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::observability::Logger;
use crate::record::{Normalizer, RawRow, Record};

use super::errors::{LoaderError, LoaderResult};
use super::source::DataSource;

/// Reads records from a CSV file with a header row
pub struct CsvFileSource {
    path: PathBuf,
    normalizer: Normalizer,
}

impl CsvFileSource {
    /// Creates a source that normalizes dates against the current UTC date
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_normalizer(path, Normalizer::today_utc())
    }

    pub fn with_normalizer(path: impl Into<PathBuf>, normalizer: Normalizer) -> Self {
        Self {
            path: path.into(),
            normalizer,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DataSource for CsvFileSource {
    fn load(&self) -> LoaderResult<Vec<Record>> {
        if !self.path.exists() {
            return Err(LoaderError::not_found(&self.path));
        }
        let file = File::open(&self.path).map_err(|e| LoaderError::io(&self.path, e))?;
        let records = parse_csv(file, &self.normalizer)?;

        if records.is_empty() {
            return Err(LoaderError::empty(self.path.display()));
        }
        Ok(records)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Parses CSV text into normalized records.
///
/// The first row is the header. Rows that fail to parse are logged and
/// skipped; rows whose cells are all blank are ignored. Short rows are
/// accepted and their missing cells treated as absent.
pub fn parse_csv<R: Read>(reader: R, normalizer: &Normalizer) -> LoaderResult<Vec<Record>> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    let mut records = Vec::new();

    for (index, result) in reader.records().enumerate() {
        let row_number = index + 1;
        let row = match result {
            Ok(row) => row,
            Err(e) => {
                Logger::warn(
                    "CSV_ROW_SKIPPED",
                    &[("reason", e.to_string().as_str()), ("row", row_number.to_string().as_str())],
                );
                continue;
            }
        };

        if row.iter().all(str::is_empty) {
            continue;
        }

        let mut raw = RawRow::new();
        for (header, value) in headers.iter().zip(row.iter()) {
            raw.entry(header.clone()).or_insert_with(|| value.to_string());
        }
        records.push(normalizer.normalize(&raw, row_number));
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn normalizer() -> Normalizer {
        Normalizer::new(NaiveDate::from_ymd_opt(2026, 10, 18).unwrap())
    }

    #[test]
    fn test_parse_quoted_fields() {
        let csv = "articleId,title,authors,publicationDate,keywords\n\
                   nasa001,\"Mars, Revisited\",\"Dr. Sarah Chen, Dr. Lisa Wang\",2024-03-15,\"Mars, spectroscopy\"\n";
        let records = parse_csv(csv.as_bytes(), &normalizer()).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].title, "Mars, Revisited");
        assert_eq!(records[0].authors, vec!["Dr. Sarah Chen", "Dr. Lisa Wang"]);
        assert_eq!(records[0].keywords, vec!["Mars", "spectroscopy"]);
    }

    #[test]
    fn test_short_rows_and_blank_lines() {
        let csv = "Title,Link,Journal,Date\nOnly Title\n,,,\nFull,https://x,Icarus,01/02/2023\n";
        let records = parse_csv(csv.as_bytes(), &normalizer()).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].title, "Only Title");
        assert_eq!(records[0].publication, "Unknown");
        assert_eq!(records[1].publication_date, NaiveDate::from_ymd_opt(2023, 1, 2).unwrap());
        assert_eq!(records[1].link.as_deref(), Some("https://x"));
    }

    #[test]
    fn test_header_only_yields_no_records() {
        let records = parse_csv("title,authors\n".as_bytes(), &normalizer()).unwrap();
        assert!(records.is_empty());
    }
}
