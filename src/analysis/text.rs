//! Message text normalization into word tokens.
//!
//! The pipeline runs in a fixed order, each step feeding the next:
//!
//! 1. Emoji glyphs become `:name:` tokens
//! 2. Lowercase
//! 3. Trim surrounding whitespace
//! 4. Drop every character except ASCII letters/digits, `_`, `-`, `:` and whitespace
//! 5. Split on whitespace
//! 6. Remove stopwords
//!
//! Step 4 keeps `:` and `_` so that emoji tokens from step 1 survive intact.

use std::sync::LazyLock;

use regex::Regex;

use super::emoji::EmojiTable;
use super::stopwords::StopwordSet;
use crate::config::NormalizerConfig;
use crate::error::Result;

static DISALLOWED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^a-zA-Z0-9_\-:\s]+").expect("character filter pattern is valid")
});

/// Turns raw message bodies into filtered word tokens.
///
/// Linguistic resources are injected at construction and never change
/// afterwards, so one normalizer can be shared freely.
///
/// # Example
///
/// ```
/// use chatstats::analysis::{EmojiTable, StopwordSet, TextNormalizer};
///
/// let normalizer = TextNormalizer::new(
///     EmojiTable::empty(),
///     StopwordSet::from_words(["the", "is"]),
/// );
/// assert_eq!(normalizer.normalize_text("the cat is blue"), vec!["cat", "blue"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TextNormalizer {
    emoji: EmojiTable,
    stopwords: StopwordSet,
}

impl TextNormalizer {
    pub fn new(emoji: EmojiTable, stopwords: StopwordSet) -> Self {
        Self { emoji, stopwords }
    }

    /// Full Unicode emoji table and English stopwords.
    pub fn english() -> Self {
        Self::new(EmojiTable::unicode(), StopwordSet::english())
    }

    /// Builds a normalizer from configuration, loading stopword files as needed.
    pub fn from_config(config: &NormalizerConfig) -> Result<Self> {
        let emoji = if config.demojize {
            EmojiTable::unicode()
        } else {
            EmojiTable::empty()
        };
        let stopwords = StopwordSet::load(&config.stopwords)?;
        tracing::debug!(
            emoji = emoji.len(),
            stopwords = stopwords.len(),
            "text normalizer ready"
        );
        Ok(Self::new(emoji, stopwords))
    }

    pub fn stopwords(&self) -> &StopwordSet {
        &self.stopwords
    }

    pub fn emoji(&self) -> &EmojiTable {
        &self.emoji
    }

    /// Normalizes `raw` into an ordered token list. Duplicates are kept.
    pub fn normalize_text(&self, raw: &str) -> Vec<String> {
        let text = self.emoji.demojize(raw).to_lowercase();
        let text = DISALLOWED.replace_all(text.trim(), "");

        text.split_whitespace()
            .filter(|token| !self.stopwords.contains(token))
            .map(str::to_string)
            .collect()
    }
}
