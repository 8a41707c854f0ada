//! Archive HTTP Routes
//!
//! Read-only endpoints over the loaded record set, mounted under `/api`.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use chrono::{NaiveDate, SecondsFormat, Utc};
use serde::Deserialize;

use crate::observability::{log_event_with_fields, log_query_complete, Event};
use crate::query::{CorpusStats, Filters, QueryEngine, QueryState, ResultPage, SortKey, DEFAULT_PAGE_SIZE};
use crate::record::Record;

use super::errors::{ApiError, ApiResult};
use super::response::{DataResponse, HealthResponse, KeywordsResponse, PapersResponse};

// ==================
// Shared State
// ==================

/// Archive state shared across handlers. Never mutated after startup.
#[derive(Debug)]
pub struct ArchiveState {
    pub engine: QueryEngine,
    /// Page size for `/query` when the request names none
    pub page_size: usize,
}

impl ArchiveState {
    pub fn new(engine: QueryEngine) -> Self {
        Self {
            engine,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }
}

impl Default for ArchiveState {
    fn default() -> Self {
        Self::new(QueryEngine::default())
    }
}

// ==================
// Request Types
// ==================

#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
}

/// `/query` parameters. Kept as strings so bad values produce a JSON 400
/// instead of an extractor rejection.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryParams {
    pub q: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub author: Option<String>,
    pub publication: Option<String>,
    pub keyword: Option<String>,
    pub sort: Option<String>,
    pub page: Option<String>,
    pub page_size: Option<String>,
}

impl QueryParams {
    /// Builds the engine request, validating every parameter
    pub fn to_state(&self, default_page_size: usize) -> ApiResult<QueryState> {
        let filters = Filters {
            start_date: parse_date("startDate", self.start_date.as_deref())?,
            end_date: parse_date("endDate", self.end_date.as_deref())?,
            author: self.author.clone().unwrap_or_default(),
            publication: self.publication.clone().unwrap_or_default(),
            keyword: self.keyword.clone().unwrap_or_default(),
        };

        let sort_key = match non_blank(self.sort.as_deref()) {
            Some(name) => name.parse::<SortKey>()?,
            None => SortKey::default(),
        };

        Ok(QueryState::new()
            .with_search(self.q.clone().unwrap_or_default())
            .with_filters(filters)
            .with_sort(sort_key)
            .with_page(parse_number("page", self.page.as_deref())?.unwrap_or(1))
            .with_page_size(parse_number("pageSize", self.page_size.as_deref())?.unwrap_or(default_page_size)))
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn parse_date(name: &str, value: Option<&str>) -> ApiResult<Option<NaiveDate>> {
    non_blank(value)
        .map(|v| {
            NaiveDate::parse_from_str(v, "%Y-%m-%d")
                .map_err(|_| ApiError::invalid_param(name, format!("expected YYYY-MM-DD, got '{}'", v)))
        })
        .transpose()
}

fn parse_number(name: &str, value: Option<&str>) -> ApiResult<Option<usize>> {
    non_blank(value)
        .map(|v| {
            v.parse::<usize>()
                .map_err(|_| ApiError::invalid_param(name, format!("expected a non-negative integer, got '{}'", v)))
        })
        .transpose()
}

// ==================
// Archive Routes
// ==================

/// Create archive routes. Unmatched paths answer with a JSON 404.
pub fn archive_routes(state: Arc<ArchiveState>) -> Router {
    Router::new()
        .route("/papers", get(list_papers_handler))
        .route("/search", get(search_handler))
        .route("/article/:id", get(get_article_handler))
        .route("/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .route("/query", get(query_handler))
        .route("/keywords", get(keywords_handler))
        .fallback(endpoint_not_found_handler)
        .with_state(state)
}

/// Logs a client error before it is returned
fn rejected(endpoint: &str, err: ApiError) -> ApiError {
    log_event_with_fields(
        Event::QueryRejected,
        &[("endpoint", endpoint), ("reason", err.to_string().as_str())],
    );
    err
}

// ==================
// Handlers
// ==================

async fn list_papers_handler(State(state): State<Arc<ArchiveState>>) -> Json<PapersResponse> {
    let data = state.engine.records().to_vec();
    let count = data.len();
    Json(PapersResponse {
        success: true,
        data,
        count,
        query: None,
        message: format!("Retrieved {} research papers", count),
    })
}

async fn search_handler(
    State(state): State<Arc<ArchiveState>>,
    Query(params): Query<SearchParams>,
) -> ApiResult<Json<PapersResponse>> {
    let term = match non_blank(params.q.as_deref()) {
        Some(term) => term.to_string(),
        None => return Err(rejected("search", ApiError::MissingParam("q".to_string()))),
    };

    let data: Vec<Record> = state.engine.search(&term).into_iter().cloned().collect();
    let count = data.len();
    Ok(Json(PapersResponse {
        success: true,
        data,
        count,
        message: format!("Found {} papers matching \"{}\"", count, term),
        query: Some(term),
    }))
}

async fn get_article_handler(
    State(state): State<Arc<ArchiveState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<DataResponse<Record>>> {
    state
        .engine
        .find(&id)
        .cloned()
        .map(|record| Json(DataResponse::ok(record)))
        .ok_or(ApiError::ArticleNotFound(id))
}

async fn stats_handler(State(state): State<Arc<ArchiveState>>) -> Json<DataResponse<CorpusStats>> {
    Json(DataResponse::ok(state.engine.stats()))
}

async fn health_handler(State(state): State<Arc<ArchiveState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        success: true,
        message: "Research archive API is running".to_string(),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        papers_loaded: state.engine.len(),
        status: "healthy".to_string(),
    })
}

async fn query_handler(
    State(state): State<Arc<ArchiveState>>,
    Query(params): Query<QueryParams>,
) -> ApiResult<Json<DataResponse<ResultPage>>> {
    let request = params
        .to_state(state.page_size)
        .map_err(|e| rejected("query", e))?;
    let page = state
        .engine
        .query(&request)
        .map_err(|e| rejected("query", e.into()))?;
    log_query_complete("http", page.total_matched, page.page, request.sort_key.as_str());
    Ok(Json(DataResponse::ok(page)))
}

async fn keywords_handler(State(state): State<Arc<ArchiveState>>) -> Json<KeywordsResponse> {
    let data = state.engine.popular_keywords();
    Json(KeywordsResponse {
        success: true,
        count: data.len(),
        data,
    })
}

async fn endpoint_not_found_handler() -> ApiError {
    ApiError::EndpointNotFound
}
