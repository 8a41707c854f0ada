//! research-archive - browse a catalog of research paper metadata
//!
//! Records are loaded once from a CSV data source, normalized into a
//! canonical shape, and served by a stateless query engine:
//! search, filter, sort, paginate.

pub mod cli;
pub mod http_server;
pub mod loader;
pub mod observability;
pub mod query;
pub mod record;
pub mod session;
