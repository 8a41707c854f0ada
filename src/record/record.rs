//! The canonical research paper record

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// One research paper, after normalization.
///
/// Every string field is present. Defaults for missing source data are
/// applied by the normalizer, never here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    /// Opaque identifier, assumed unique
    pub id: String,
    pub title: String,
    /// Authors in source order
    pub authors: Vec<String>,
    /// Serialized as `YYYY-MM-DD`
    pub publication_date: NaiveDate,
    /// Venue name
    pub publication: String,
    #[serde(rename = "abstract")]
    pub abstract_text: String,
    /// Case preserved for display; compared case-insensitively
    pub keywords: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl Record {
    /// Creates a record with the given identity and date.
    ///
    /// Remaining fields start empty; use the `with_*` methods to fill them.
    pub fn new(id: impl Into<String>, title: impl Into<String>, publication_date: NaiveDate) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            authors: Vec::new(),
            publication_date,
            publication: String::new(),
            abstract_text: String::new(),
            keywords: Vec::new(),
            link: None,
            content: None,
        }
    }

    pub fn with_authors<I, S>(mut self, authors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.authors = authors.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_publication(mut self, publication: impl Into<String>) -> Self {
        self.publication = publication.into();
        self
    }

    pub fn with_abstract(mut self, abstract_text: impl Into<String>) -> Self {
        self.abstract_text = abstract_text.into();
        self
    }

    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }

    /// Authors joined with a single space
    pub fn joined_authors(&self) -> String {
        self.authors.join(" ")
    }

    /// Keywords joined with a single space
    pub fn joined_keywords(&self) -> String {
        self.keywords.join(" ")
    }

    /// Lowercased text matched by free-text search.
    ///
    /// Title, abstract, authors, keywords and publication, in that order.
    pub fn searchable_text(&self) -> String {
        [
            self.title.as_str(),
            self.abstract_text.as_str(),
            self.joined_authors().as_str(),
            self.joined_keywords().as_str(),
            self.publication.as_str(),
        ]
        .join(" ")
        .to_lowercase()
    }

    /// Lowercased text scanned when ranking by relevance.
    ///
    /// Same as `searchable_text` without the publication.
    pub fn relevance_text(&self) -> String {
        [
            self.title.as_str(),
            self.abstract_text.as_str(),
            self.joined_authors().as_str(),
            self.joined_keywords().as_str(),
        ]
        .join(" ")
        .to_lowercase()
    }

    /// Four-digit publication year, as used for year statistics
    pub fn year(&self) -> String {
        format!("{:04}", self.publication_date.year())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn paper() -> Record {
        Record::new("nasa001", "Mars Atmospheric Composition", NaiveDate::from_ymd_opt(2024, 3, 15).unwrap())
            .with_authors(["Dr. Sarah Chen", "Dr. Michael Rodriguez"])
            .with_keywords(["Mars", "Spectroscopy"])
            .with_publication("Planetary Science Journal")
            .with_abstract("Trace gases in the MAVEN data.")
    }

    #[test]
    fn test_searchable_text_is_lowercase_and_complete() {
        let text = paper().searchable_text();
        assert!(text.contains("mars atmospheric"));
        assert!(text.contains("maven"));
        assert!(text.contains("sarah chen"));
        assert!(text.contains("spectroscopy"));
        assert!(text.contains("planetary science journal"));
        assert_eq!(text, text.to_lowercase());
    }

    #[test]
    fn test_relevance_text_excludes_publication() {
        let text = paper().relevance_text();
        assert!(!text.contains("journal"));
        assert!(text.contains("spectroscopy"));
    }

    #[test]
    fn test_serializes_camel_case_with_plain_date() {
        let value = serde_json::to_value(paper()).unwrap();
        assert_eq!(value["publicationDate"], json!("2024-03-15"));
        assert_eq!(value["abstract"], json!("Trace gases in the MAVEN data."));
        assert!(value.get("link").is_none());
    }

    #[test]
    fn test_year() {
        assert_eq!(paper().year(), "2024");
    }
}
