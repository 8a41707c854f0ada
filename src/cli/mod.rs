//! CLI module for research-archive
//!
//! Provides command-line interface for:
//! - serve: Load records and serve the HTTP API
//! - query: One-shot query from stdin
//! - keywords: Popular keywords
//! - stats: Corpus statistics
//! - browse: Line-by-line view actions from stdin

mod args;
mod commands;
mod config;
mod errors;
mod io;

pub use args::{Cli, Command, SourceArgs};
pub use commands::{browse, browse_step, keywords, load_config, query, run, run_command, run_query, serve, stats};
pub use config::{Config, PORT_ENV};
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{error_envelope, ok_envelope, read_request, read_requests, write_error, write_json, write_response};
