//! # Chatstats
//!
//! A Rust library for analyzing exported SMS conversations.
//!
//! ## Overview
//!
//! Given one conversation from an SMS backup, chatstats derives:
//! - **Activity statistics** — message counts by hour of day, month and weekday
//! - **Normalized records** — one flat row per message for spreadsheet time series
//! - **A word-frequency corpus** — normalized tokens with emoji names and
//!   English stopwords removed
//! - **Daily counts** — messages per local calendar day
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use chatstats::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let conversation = load_conversation("sms-backup.json", 0)?;
//!     let decoder = TemporalDecoder::local();
//!
//!     let stats = aggregate_with(&conversation, &decoder)?;
//!     println!("{} messages, busiest hour {:?}", stats.count, stats.busiest_hour());
//!
//!     let records = normalize_with(&conversation, &decoder)?;
//!     write_csv(&records, "messages.csv", &OutputConfig::new())?;
//!
//!     let corpus = build_corpus(&conversation, &TextNormalizer::english());
//!     write_csv(&corpus.entries(), "corpus.csv", &OutputConfig::new())?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Timezones
//!
//! Calendar fields depend on the timezone timestamps are resolved in. The
//! default is the host's local timezone, so the same backup can produce
//! different histograms on different machines. Use
//! [`TimezoneConfig::Utc`](config::TimezoneConfig::Utc) or a fixed offset
//! for reproducible output.
//!
//! ## Module Structure
//!
//! - [`analysis`] — The analysis pipeline
//!   - [`TemporalDecoder`](analysis::TemporalDecoder), [`TextNormalizer`](analysis::TextNormalizer)
//!   - [`aggregate`](analysis::aggregate), [`normalize`](analysis::normalize),
//!     [`build_corpus`](analysis::build_corpus), [`messages_per_day`](analysis::messages_per_day)
//! - [`message`] — [`Message`] and the SMS backup loader
//! - [`config`] — Analysis, normalizer, timezone and output configuration
//! - [`output`] — CSV and JSON writers
//! - [`format`] — Output format selection
//! - [`cli`] — CLI argument types (requires `cli` feature)
//! - [`error`] — Unified error types ([`ChatstatsError`], [`Result`])
//! - [`prelude`] — Convenient re-exports

pub mod analysis;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod error;
pub mod format;
pub mod message;
pub mod output;

// Re-export the main types at the crate root for convenience
pub use error::{ChatstatsError, Result};
pub use message::{Conversation, Message};

/// Convenient re-exports for common usage.
///
/// ```rust
/// use chatstats::prelude::*;
/// ```
pub mod prelude {
    // Core message types
    pub use crate::message::{Backup, load_conversation};
    pub use crate::{Conversation, Message};

    // Error types
    pub use crate::error::{ChatstatsError, Result};

    // Configuration
    pub use crate::config::{
        AnalysisConfig, NormalizerConfig, OutputConfig, StopwordSource, TimezoneConfig,
    };

    // Analysis pipeline
    pub use crate::analysis::{
        CalendarFields, Corpus, CorpusEntry, DailyCount, EmojiTable, NormalizedRecord,
        StatsResult, StopwordSet, TemporalDecoder, TextNormalizer, aggregate, aggregate_with,
        build_corpus, messages_per_day, messages_per_day_with, normalize, normalize_with,
    };

    // Output
    pub use crate::format::{OutputFormat, to_format_string, write_to_format};
    pub use crate::output::Tabular;
    #[cfg(feature = "csv-output")]
    pub use crate::output::{to_csv, write_csv};
    #[cfg(feature = "json-output")]
    pub use crate::output::{to_json, write_json};
}
