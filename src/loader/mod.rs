//! Data loading subsystem
//!
//! Produces the full record set handed to the query engine.
//!
//! # Failure policy
//!
//! - `load` fails loudly. The HTTP server uses it at startup and exits
//!   non-zero when its data file is missing or empty.
//! - `load_or_sample` never fails. On any data source failure it logs the
//!   error and returns the built-in sample dataset.

mod csv_source;
mod errors;
mod source;

pub use csv_source::{parse_csv, CsvFileSource};
pub use errors::{LoaderError, LoaderErrorCode, LoaderResult};
pub use source::{load, load_or_sample, DataSource, LoadOrigin, LoadOutcome, SampleSource};
