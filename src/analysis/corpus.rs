//! Word-frequency corpus over a whole conversation.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::text::TextNormalizer;
use crate::Message;

/// One distinct normalized token and how often it occurs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorpusEntry {
    pub word: String,
    pub count: usize,
}

/// Token → frequency mapping that iterates in first-seen order.
///
/// # Example
///
/// ```
/// use chatstats::Message;
/// use chatstats::analysis::{EmojiTable, StopwordSet, TextNormalizer, build_corpus};
///
/// let normalizer = TextNormalizer::new(EmojiTable::empty(), StopwordSet::empty());
/// let conversation = vec![Message::new(0, "hi there"), Message::new(1, "hi")];
/// let corpus = build_corpus(&conversation, &normalizer);
///
/// assert_eq!(corpus.get("hi"), Some(2));
/// assert_eq!(corpus.get("there"), Some(1));
/// assert_eq!(corpus.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Corpus {
    counts: IndexMap<String, usize>,
}

impl Corpus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one occurrence of `word`.
    pub fn add(&mut self, word: impl Into<String>) {
        *self.counts.entry(word.into()).or_insert(0) += 1;
    }

    pub fn get(&self, word: &str) -> Option<usize> {
        self.counts.get(word).copied()
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Total number of counted tokens.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Iterates `(word, count)` in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(word, &count)| (word.as_str(), count))
    }

    /// Entries in first-seen order.
    pub fn entries(&self) -> Vec<CorpusEntry> {
        self.iter()
            .map(|(word, count)| CorpusEntry {
                word: word.to_string(),
                count,
            })
            .collect()
    }

    /// The `n` most frequent words; equal counts keep first-seen order.
    pub fn top(&self, n: usize) -> Vec<CorpusEntry> {
        let mut entries = self.entries();
        entries.sort_by(|a, b| b.count.cmp(&a.count));
        entries.truncate(n);
        entries
    }
}

impl<S: Into<String>> FromIterator<S> for Corpus {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut corpus = Corpus::new();
        for word in iter {
            corpus.add(word);
        }
        corpus
    }
}

/// Counts normalized tokens across every non-null message.
pub fn build_corpus(conversation: &[Message], normalizer: &TextNormalizer) -> Corpus {
    let corpus: Corpus = conversation
        .iter()
        .filter_map(Message::body)
        .flat_map(|body| normalizer.normalize_text(body))
        .collect();

    tracing::debug!(
        distinct = corpus.len(),
        tokens = corpus.total(),
        "built corpus"
    );
    corpus
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{EmojiTable, StopwordSet};

    fn plain() -> TextNormalizer {
        TextNormalizer::new(EmojiTable::empty(), StopwordSet::empty())
    }

    #[test]
    fn test_counts_across_messages() {
        let conversation = vec![
            Message::new(0, "hi there"),
            Message::new(1, "hi"),
            Message::without_body(2),
        ];
        let corpus = build_corpus(&conversation, &plain());
        assert_eq!(
            corpus.entries(),
            vec![
                CorpusEntry {
                    word: "hi".into(),
                    count: 2
                },
                CorpusEntry {
                    word: "there".into(),
                    count: 1
                },
            ]
        );
    }

    #[test]
    fn test_all_null_is_empty() {
        let conversation = vec![Message::without_body(0), Message::new(1, "")];
        assert!(build_corpus(&conversation, &plain()).is_empty());
    }

    #[test]
    fn test_stopwords_excluded() {
        let normalizer = TextNormalizer::new(EmojiTable::empty(), StopwordSet::english());
        let corpus = build_corpus(&[Message::new(0, "The cat is on the mat")], &normalizer);
        assert_eq!(corpus.get("the"), None);
        assert_eq!(corpus.get("cat"), Some(1));
        assert_eq!(corpus.get("mat"), Some(1));
    }

    #[test]
    fn test_deterministic_order() {
        let conversation = vec![
            Message::new(0, "zebra apple mango"),
            Message::new(1, "apple kiwi zebra"),
        ];
        let first = build_corpus(&conversation, &plain());
        let second = build_corpus(&conversation, &plain());
        assert_eq!(first, second);
        let words: Vec<&str> = first.iter().map(|(w, _)| w).collect();
        assert_eq!(words, vec!["zebra", "apple", "mango", "kiwi"]);
    }

    #[test]
    fn test_top_words() {
        let corpus: Corpus = ["b", "a", "a", "c", "b", "a"].into_iter().collect();
        let top = corpus.top(2);
        assert_eq!(top[0].word, "a");
        assert_eq!(top[0].count, 3);
        assert_eq!(top[1].word, "b");
        assert_eq!(corpus.total(), 6);
    }

    #[test]
    fn test_serializes_as_map() {
        let corpus: Corpus = ["hi", "hi", "yo"].into_iter().collect();
        assert_eq!(
            serde_json::to_string(&corpus).unwrap(),
            r#"{"hi":2,"yo":1}"#
        );
    }
}
