//! CLI argument definitions using clap
//!
//! Commands:
//! - research-archive serve [--config <path>] [--data <csv>] [--port <n>]
//! - research-archive query [--config <path>] [--data <csv>]
//! - research-archive keywords [--config <path>] [--data <csv>]
//! - research-archive stats [--config <path>] [--data <csv>]
//! - research-archive browse [--config <path>] [--data <csv>]

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// research-archive - search and browse research paper metadata
#[derive(Parser, Debug)]
#[command(name = "research-archive")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Where configuration and records come from
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceArgs {
    /// Path to configuration file (defaults apply when omitted)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// CSV data file, overriding `data_file` from the config
    #[arg(long)]
    pub data: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Load the records and serve the HTTP API
    Serve {
        #[command(flatten)]
        source: SourceArgs,

        /// Port to listen on, overriding config and PORT
        #[arg(long)]
        port: Option<u16>,
    },

    /// Run one query read as JSON from stdin
    Query {
        #[command(flatten)]
        source: SourceArgs,
    },

    /// Print the popular keywords
    Keywords {
        #[command(flatten)]
        source: SourceArgs,
    },

    /// Print corpus statistics
    Stats {
        #[command(flatten)]
        source: SourceArgs,
    },

    /// Apply view actions read line by line from stdin
    Browse {
        #[command(flatten)]
        source: SourceArgs,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
