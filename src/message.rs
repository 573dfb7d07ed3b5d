//! Message records and the SMS backup loader.
//!
//! This module provides [`Message`], one entry of an exported conversation,
//! and [`Backup`], the decoded backup file that holds one or more
//! conversations.
//!
//! # Backup Format
//!
//! SMS backup exports are JSON documents with a `conversations` array, each
//! conversation being an array of message objects:
//!
//! ```json
//! {
//!   "conversations": [
//!     [
//!       {"date": 1705314600000, "body": "Hello!", "address": "+15550100"},
//!       {"date": "1705314660000", "body": null}
//!     ]
//!   ]
//! }
//! ```
//!
//! Only `date` (milliseconds since the Unix epoch, as a number or a numeric
//! string) and `body` are read; every other field is ignored.
//!
//! # Example
//!
//! ```
//! use chatstats::message::Backup;
//!
//! let json = r#"{"conversations": [[{"date": 1705314600000, "body": "hi"}]]}"#;
//! let backup = Backup::from_json(json)?;
//! let conversation = backup.conversation(0)?;
//!
//! assert_eq!(conversation.len(), 1);
//! assert_eq!(conversation[0].body(), Some("hi"));
//! # Ok::<(), chatstats::ChatstatsError>(())
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{ChatstatsError, Result};

/// An ordered sequence of messages analyzed as one unit.
pub type Conversation = Vec<Message>;

/// One conversation entry.
///
/// | Field | Type | Description |
/// |-------|------|-------------|
/// | `timestamp` | `Option<i64>` | Milliseconds since the Unix epoch (`date` in exports) |
/// | `body` | `Option<String>` | Message text; `None` and `""` are equivalent |
///
/// The timestamp is optional only so that malformed records can be loaded
/// and reported by the aggregators; a well-formed export always has one.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Message {
    /// Milliseconds since the Unix epoch.
    #[serde(rename = "date", alias = "timestamp")]
    #[serde(default, deserialize_with = "deserialize_timestamp")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,

    /// Message text, if any.
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

impl Message {
    /// Creates a message with a timestamp and a body.
    pub fn new(timestamp_ms: i64, body: impl Into<String>) -> Self {
        Self {
            timestamp: Some(timestamp_ms),
            body: Some(body.into()),
        }
    }

    /// Creates a null-bodied message (e.g. an MMS with only an attachment).
    pub fn without_body(timestamp_ms: i64) -> Self {
        Self {
            timestamp: Some(timestamp_ms),
            body: None,
        }
    }

    /// Returns the body text, treating an empty body as absent.
    pub fn body(&self) -> Option<&str> {
        self.body.as_deref().filter(|b| !b.is_empty())
    }

    /// Returns `true` if the message has no body or an empty one.
    pub fn is_null(&self) -> bool {
        self.body().is_none()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawTimestamp {
    Number(i64),
    Text(String),
}

fn deserialize_timestamp<'de, D>(deserializer: D) -> std::result::Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<RawTimestamp>::deserialize(deserializer)? {
        None => Ok(None),
        Some(RawTimestamp::Number(ms)) => Ok(Some(ms)),
        Some(RawTimestamp::Text(s)) => s
            .trim()
            .parse::<i64>()
            .map(Some)
            .map_err(|e| serde::de::Error::custom(format!("invalid date '{}': {}", s, e))),
    }
}

/// A decoded SMS backup containing one or more conversations.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Backup {
    /// All conversations in export order.
    #[serde(default)]
    pub conversations: Vec<Conversation>,
}

impl Backup {
    /// Parses a backup from a JSON string.
    pub fn from_json(content: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| ChatstatsError::backup_parse(e, None))
    }

    /// Reads and parses a backup file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let backup: Backup = serde_json::from_str(&content)
            .map_err(|e| ChatstatsError::backup_parse(e, Some(path.to_path_buf())))?;
        tracing::debug!(
            path = %path.display(),
            conversations = backup.conversations.len(),
            "loaded backup"
        );
        Ok(backup)
    }

    /// Returns the number of conversations in the backup.
    pub fn len(&self) -> usize {
        self.conversations.len()
    }

    /// Returns `true` if the backup holds no conversations.
    pub fn is_empty(&self) -> bool {
        self.conversations.is_empty()
    }

    /// Borrows the conversation at `index`.
    pub fn conversation(&self, index: usize) -> Result<&[Message]> {
        self.conversations
            .get(index)
            .map(Vec::as_slice)
            .ok_or(ChatstatsError::ConversationNotFound {
                index,
                available: self.conversations.len(),
            })
    }

    /// Takes ownership of the conversation at `index`.
    pub fn into_conversation(mut self, index: usize) -> Result<Conversation> {
        let available = self.conversations.len();
        if index >= available {
            return Err(ChatstatsError::ConversationNotFound { index, available });
        }
        Ok(self.conversations.swap_remove(index))
    }
}

/// Loads a single conversation from a backup file.
///
/// # Example
///
/// ```rust,no_run
/// use chatstats::message::load_conversation;
///
/// let conversation = load_conversation("sms-backup.json", 0)?;
/// println!("{} messages", conversation.len());
/// # Ok::<(), chatstats::ChatstatsError>(())
/// ```
pub fn load_conversation(path: impl AsRef<Path>, index: usize) -> Result<Conversation> {
    Backup::from_path(path)?.into_conversation(index)
}
