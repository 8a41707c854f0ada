//! # API Errors
//!
//! Every failure the archive API can return, with its HTTP status.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use crate::query::QueryError;

use super::response::ErrorBody;

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Clone, Error)]
pub enum ApiError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// Required query parameter absent or blank
    #[error("Query parameter \"{0}\" is required")]
    MissingParam(String),

    /// Query parameter present but unusable
    #[error("Invalid query parameter \"{name}\": {reason}")]
    InvalidParam { name: String, reason: String },

    #[error("Article with ID \"{0}\" not found")]
    ArticleNotFound(String),

    #[error("API endpoint not found")]
    EndpointNotFound,

    /// Rejected by the query engine
    #[error("{}", .0.message())]
    Query(#[from] QueryError),
}

impl ApiError {
    pub fn invalid_param(name: &str, reason: impl Into<String>) -> Self {
        ApiError::InvalidParam {
            name: name.to_string(),
            reason: reason.into(),
        }
    }

    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MissingParam(_) => StatusCode::BAD_REQUEST,
            ApiError::InvalidParam { .. } => StatusCode::BAD_REQUEST,
            ApiError::Query(_) => StatusCode::BAD_REQUEST,

            ApiError::ArticleNotFound(_) => StatusCode::NOT_FOUND,
            ApiError::EndpointNotFound => StatusCode::NOT_FOUND,
        }
    }

    /// Machine-readable detail for the `error` field, if any
    fn detail(&self) -> Option<String> {
        match self {
            ApiError::Query(e) => Some(e.code().code().to_string()),
            _ => None,
        }
    }
}

impl From<ApiError> for ErrorBody {
    fn from(err: ApiError) -> Self {
        Self {
            success: false,
            message: err.to_string(),
            error: err.detail(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorBody::from(self));
        (status, body).into_response()
    }
}
