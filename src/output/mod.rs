//! Output writers for analysis results.
//!
//! - [`write_csv`] / [`to_csv`] - Delimited rows with a header - requires `csv-output` feature
//! - [`write_json`] / [`to_json`] - Pretty-printed JSON - requires `json-output` feature
//!
//! Tabular writers take their columns from [`Tabular::HEADERS`], declared by
//! the record type itself, so an empty result still produces a header row.
//!
//! # Example
//!
//! ```rust
//! # #[cfg(feature = "csv-output")]
//! # fn main() -> chatstats::Result<()> {
//! use chatstats::analysis::CorpusEntry;
//! use chatstats::config::OutputConfig;
//! use chatstats::output::to_csv;
//!
//! let entries = vec![CorpusEntry { word: "hi".into(), count: 2 }];
//! assert_eq!(to_csv(&entries, &OutputConfig::new())?, "word,count\nhi,2\n");
//!
//! let empty: Vec<CorpusEntry> = vec![];
//! assert_eq!(to_csv(&empty, &OutputConfig::new())?, "word,count\n");
//! # Ok(())
//! # }
//! # #[cfg(not(feature = "csv-output"))]
//! # fn main() {}
//! ```

#[cfg(feature = "csv-output")]
mod csv_writer;
#[cfg(feature = "json-output")]
mod json_writer;
mod tabular;

#[cfg(feature = "csv-output")]
pub use csv_writer::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use json_writer::{to_json, write_json};
pub use tabular::Tabular;
