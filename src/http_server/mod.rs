//! # Archive HTTP Server Module
//!
//! Read-only JSON API over the loaded record set.
//!
//! # Endpoints
//!
//! - `/api/papers` - All records
//! - `/api/search?q=` - Free-text search
//! - `/api/article/:id` - One record
//! - `/api/stats` - Corpus statistics
//! - `/api/health` - Health check
//! - `/api/query` - Full search, filter, sort and paging
//! - `/api/keywords` - Popular keywords

pub mod config;
pub mod errors;
pub mod response;
pub mod routes;
pub mod server;

pub use config::HttpServerConfig;
pub use errors::{ApiError, ApiResult};
pub use routes::{archive_routes, ArchiveState, QueryParams};
pub use server::HttpServer;
