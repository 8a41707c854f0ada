//! Ingestion-time normalization of raw rows into records
//!
//! Source files disagree on header casing and naming (`Title` vs `title`,
//! `Journal` vs `publication`, ...). Each canonical field declares the
//! columns it reads from, in priority order. The first non-blank column
//! wins; if none is present the field default applies.
//!
//! Normalization never rejects a row. Bad data degrades to a default.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use regex::Regex;
use serde_json::Value;

use super::record::Record;

/// A raw source row: column header -> cell value
pub type RawRow = BTreeMap<String, String>;

pub const DEFAULT_TITLE: &str = "Untitled";
pub const DEFAULT_PUBLICATION: &str = "Unknown";
pub const DEFAULT_ABSTRACT: &str = "No abstract available.";

const ID_COLUMNS: &[&str] = &["articleId", "ArticleId", "id", "ID"];
const TITLE_COLUMNS: &[&str] = &["Title", "title"];
const AUTHOR_COLUMNS: &[&str] = &["authors", "Authors"];
const DATE_COLUMNS: &[&str] = &["publicationDate", "PublicationDate", "Date", "date"];
const PUBLICATION_COLUMNS: &[&str] = &["publication", "Publication", "Journal", "journal"];
const ABSTRACT_COLUMNS: &[&str] = &["abstract", "Abstract", "Summary", "summary"];
const KEYWORD_COLUMNS: &[&str] = &["keywords", "Keywords"];
const LINK_COLUMNS: &[&str] = &["Link", "link", "URL", "url", "pdfUrl"];
const CONTENT_COLUMNS: &[&str] = &["content", "Content"];

/// Formats accepted as-is before structural matching is attempted
const DIRECT_DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%B %d, %Y", "%b %d, %Y", "%d %B %Y", "%d %b %Y"];
const DIRECT_DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f"];

/// Order of the captured groups in a structural date pattern
#[derive(Debug, Clone, Copy)]
enum FieldOrder {
    YearMonthDay,
    MonthDayYear,
}

#[derive(Debug)]
struct DatePattern {
    regex: Regex,
    order: FieldOrder,
}

impl DatePattern {
    fn new(pattern: &str, order: FieldOrder) -> Self {
        Self {
            regex: Regex::new(pattern).expect("date pattern is a valid regex"),
            order,
        }
    }

    /// Returns the calendar date for the first match, if it is a real date
    fn extract(&self, input: &str) -> Option<NaiveDate> {
        let caps = self.regex.captures(input)?;
        let field = |i: usize| caps.get(i).and_then(|m| m.as_str().parse::<u32>().ok());
        let (year, month, day) = match self.order {
            FieldOrder::YearMonthDay => (field(1)?, field(2)?, field(3)?),
            FieldOrder::MonthDayYear => (field(3)?, field(1)?, field(2)?),
        };
        NaiveDate::from_ymd_opt(i32::try_from(year).ok()?, month, day)
    }
}

/// Converts raw rows into canonical records.
///
/// Holds the date used in place of unparseable publication dates, so the
/// lossy "unknown date becomes today" policy is reproducible in tests.
#[derive(Debug)]
pub struct Normalizer {
    today: NaiveDate,
    patterns: [DatePattern; 3],
}

impl Normalizer {
    /// Creates a normalizer that substitutes `today` for bad dates
    pub fn new(today: NaiveDate) -> Self {
        Self {
            today,
            patterns: [
                DatePattern::new(r"(\d{4})-(\d{2})-(\d{2})", FieldOrder::YearMonthDay),
                DatePattern::new(r"\b(\d{1,2})/(\d{1,2})/(\d{4})\b", FieldOrder::MonthDayYear),
                DatePattern::new(r"\b(\d{4})/(\d{1,2})/(\d{1,2})\b", FieldOrder::YearMonthDay),
            ],
        }
    }

    /// Creates a normalizer using the current UTC date
    pub fn today_utc() -> Self {
        Self::new(Utc::now().date_naive())
    }

    /// The fallback date for unparseable input
    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Normalizes one row. `row_number` is 1-based and only used to
    /// synthesize an id when the row has none.
    pub fn normalize(&self, row: &RawRow, row_number: usize) -> Record {
        let id = first_present(row, ID_COLUMNS)
            .map(str::to_string)
            .unwrap_or_else(|| format!("row-{}", row_number));

        Record {
            id,
            title: first_present(row, TITLE_COLUMNS).unwrap_or(DEFAULT_TITLE).to_string(),
            authors: first_present(row, AUTHOR_COLUMNS).map(parse_list).unwrap_or_default(),
            publication_date: self.normalize_date(first_present(row, DATE_COLUMNS).unwrap_or("")),
            publication: first_present(row, PUBLICATION_COLUMNS)
                .unwrap_or(DEFAULT_PUBLICATION)
                .to_string(),
            abstract_text: first_present(row, ABSTRACT_COLUMNS).unwrap_or(DEFAULT_ABSTRACT).to_string(),
            keywords: first_present(row, KEYWORD_COLUMNS).map(parse_list).unwrap_or_default(),
            link: first_present(row, LINK_COLUMNS).map(str::to_string),
            content: first_present(row, CONTENT_COLUMNS).map(str::to_string),
        }
    }

    /// Applies the date policy: direct parse (including bare `YYYY` and
    /// `YYYY-MM`, which land on the first of the year or month), then
    /// structural patterns (`YYYY-MM-DD`, `M/D/YYYY`, `YYYY/M/D`), then today.
    pub fn normalize_date(&self, raw: &str) -> NaiveDate {
        let raw = raw.trim();
        if raw.is_empty() {
            return self.today;
        }

        if let Some(date) = parse_direct(raw) {
            return date;
        }

        self.patterns
            .iter()
            .find_map(|pattern| pattern.extract(raw))
            .unwrap_or(self.today)
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::today_utc()
    }
}

fn parse_direct(raw: &str) -> Option<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc).date_naive());
    }
    DIRECT_DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
        .or_else(|| {
            DIRECT_DATETIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
                .map(|dt| dt.date())
        })
        .or_else(|| parse_partial(raw))
}

/// `YYYY` or `YYYY-MM`
fn parse_partial(raw: &str) -> Option<NaiveDate> {
    let (year, month) = raw.split_once('-').unwrap_or((raw, "1"));
    let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    if year.len() != 4 || month.len() > 2 || !all_digits(year) || !all_digits(month) {
        return None;
    }
    NaiveDate::from_ymd_opt(year.parse().ok()?, month.parse().ok()?, 1)
}

fn first_present<'a>(row: &'a RawRow, columns: &[&str]) -> Option<&'a str> {
    columns
        .iter()
        .filter_map(|column| row.get(*column))
        .map(|value| value.trim())
        .find(|value| !value.is_empty())
}

/// Parses a list-valued cell.
///
/// Accepts a JSON array of strings or a comma-separated string. Items are
/// trimmed and stripped of one surrounding quote character on each side;
/// empty items are dropped.
pub fn parse_list(raw: &str) -> Vec<String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Vec::new();
    }

    if raw.starts_with('[') && raw.ends_with(']') {
        if let Ok(items) = serde_json::from_str::<Vec<Value>>(raw) {
            return items
                .into_iter()
                .filter_map(|item| match item {
                    Value::String(s) => Some(s.trim().to_string()),
                    Value::Null => None,
                    other => Some(other.to_string()),
                })
                .filter(|item| !item.is_empty())
                .collect();
        }
    }

    raw.split(',')
        .map(|item| strip_quotes(item.trim()).trim().to_string())
        .filter(|item| !item.is_empty())
        .collect()
}

fn strip_quotes(item: &str) -> &str {
    let is_quote = |c: char| c == '"' || c == '\'';
    let item = item.strip_prefix(is_quote).unwrap_or(item);
    item.strip_suffix(is_quote).unwrap_or(item)
}
