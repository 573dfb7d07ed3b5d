//! The message analysis pipeline.
//!
//! - [`temporal`] - Epoch timestamps to calendar fields
//! - [`emoji`], [`stopwords`], [`text`] - Text normalization into tokens
//! - [`stats`] - Hour/month/weekday histograms over every message
//! - [`records`] - One flat record per non-null message
//! - [`corpus`] - Word frequencies over non-null messages
//! - [`daily`] - Messages per local day
//!
//! The aggregators are independent: each takes the conversation by shared
//! reference and returns a freshly allocated result. `stats` counts
//! null-bodied messages, the others skip them.
//!
//! # Example
//!
//! ```
//! use chatstats::Message;
//! use chatstats::analysis::{TemporalDecoder, TextNormalizer, aggregate_with, build_corpus, normalize_with};
//!
//! let conversation = vec![
//!     Message::new(1_705_309_200_000, "hi there"),
//!     Message::without_body(1_705_309_500_000),
//! ];
//! let decoder = TemporalDecoder::utc();
//!
//! let stats = aggregate_with(&conversation, &decoder)?;
//! let records = normalize_with(&conversation, &decoder)?;
//! let corpus = build_corpus(&conversation, &TextNormalizer::english());
//!
//! assert_eq!(stats.count, 2);
//! assert_eq!(records.len(), 1);
//! assert_eq!(corpus.get("hi"), Some(1));
//! # Ok::<(), chatstats::ChatstatsError>(())
//! ```

pub mod corpus;
pub mod daily;
pub mod emoji;
pub mod records;
pub mod stats;
pub mod stopwords;
pub mod temporal;
pub mod text;

pub use corpus::{Corpus, CorpusEntry, build_corpus};
pub use daily::{DailyCount, messages_per_day, messages_per_day_with};
pub use emoji::EmojiTable;
pub use records::{NormalizedRecord, normalize, normalize_with};
pub use stats::{StatsResult, aggregate, aggregate_with};
pub use stopwords::StopwordSet;
pub use temporal::{CalendarFields, TemporalDecoder};
pub use text::TextNormalizer;
