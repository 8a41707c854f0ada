//! research-archive CLI entry point
//!
//! Parses arguments, dispatches to the CLI module, prints errors to
//! stderr and exits with non-zero on failure. All other logic lives in
//! `cli`.

use research_archive::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
