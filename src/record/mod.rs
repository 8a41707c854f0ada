//! Research paper records
//!
//! A `Record` is the canonical, fully-populated shape every query stage
//! works on. Raw rows are turned into records exactly once, at ingestion,
//! by the `Normalizer`; nothing downstream performs field fallbacks.

mod normalize;
mod record;
mod sample;

pub use normalize::{parse_list, Normalizer, RawRow, DEFAULT_ABSTRACT, DEFAULT_PUBLICATION, DEFAULT_TITLE};
pub use record::Record;
pub use sample::sample_records;
