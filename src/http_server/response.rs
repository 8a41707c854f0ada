//! Response envelopes
//!
//! Every body carries `success`. Lists also carry `count`.

use serde::Serialize;

use crate::record::Record;

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// A list of records
#[derive(Debug, Serialize)]
pub struct PapersResponse {
    pub success: bool,
    pub data: Vec<Record>,
    pub count: usize,
    /// Echo of the search term, for `/search`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    pub message: String,
}

/// A single payload
#[derive(Debug, Serialize)]
pub struct DataResponse<T> {
    pub success: bool,
    pub data: T,
}

impl<T> DataResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct KeywordsResponse {
    pub success: bool,
    pub data: Vec<String>,
    pub count: usize,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub success: bool,
    pub message: String,
    /// RFC 3339, millisecond precision, UTC
    pub timestamp: String,
    pub papers_loaded: usize,
    pub status: String,
}
