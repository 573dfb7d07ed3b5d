//! Unified error types for chatstats.
//!
//! This module provides a single [`ChatstatsError`] enum that covers every
//! failure the library can report. The analysis core only fails on malformed
//! input records; everything else comes from the I/O collaborators around it.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A specialized [`Result`] type for chatstats operations.
///
/// # Example
///
/// ```rust
/// use chatstats::error::Result;
/// use chatstats::Message;
///
/// fn load() -> Result<Vec<Message>> {
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatstatsError>;

/// The error type for all chatstats operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatstatsError {
    /// An I/O error occurred while reading input or writing output.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Failed to parse the input file.
    #[error("Failed to parse {format}{}: {source}", path.as_ref().map(|p| format!(" (file: {})", p.display())).unwrap_or_default())]
    Parse {
        /// The format being parsed (e.g., "SMS backup JSON", "stopword list")
        format: &'static str,
        /// The underlying parse error
        #[source]
        source: ParseErrorKind,
        /// The file path, if available
        path: Option<PathBuf>,
    },

    /// A message has no timestamp.
    ///
    /// Every histogram bucket depends on the timestamp, so the run fails
    /// instead of silently skipping the record.
    #[error("Message #{index} has no timestamp")]
    MissingTimestamp {
        /// Position of the message in the conversation
        index: usize,
    },

    /// A timestamp cannot be represented as a calendar date.
    #[error("Timestamp {timestamp_ms} ms is out of the representable date range")]
    TimestampOutOfRange {
        /// The offending timestamp in milliseconds since the Unix epoch
        timestamp_ms: i64,
    },

    /// The requested conversation does not exist in the backup.
    #[error("Conversation #{index} not found (backup contains {available})")]
    ConversationNotFound {
        /// Requested conversation index
        index: usize,
        /// Number of conversations in the backup
        available: usize,
    },

    /// A UTC offset string could not be parsed.
    #[error("Invalid UTC offset '{input}'. Expected format: {expected}")]
    InvalidOffset {
        /// The offset string that was provided
        input: String,
        /// Expected format description
        expected: &'static str,
    },

    /// The file format doesn't match the expected structure.
    #[error("Invalid {format} format: {message}")]
    InvalidFormat {
        /// The format that was expected
        format: &'static str,
        /// Description of what's wrong
        message: String,
    },

    /// CSV writing error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// UTF-8 encoding error.
    #[error("UTF-8 encoding error in {context}: {source}")]
    Utf8 {
        /// Description of where the error occurred
        context: String,
        /// The underlying UTF-8 error
        #[source]
        source: std::string::FromUtf8Error,
    },
}

/// Kinds of parse errors that can occur.
#[derive(Debug, Error)]
pub enum ParseErrorKind {
    /// JSON parsing error
    #[error("{0}")]
    Json(#[from] serde_json::Error),
    /// Generic parsing error
    #[error("{0}")]
    Other(String),
}

impl From<std::string::FromUtf8Error> for ChatstatsError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        ChatstatsError::Utf8 {
            context: "output conversion".to_string(),
            source: err,
        }
    }
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ChatstatsError {
    /// Creates a parse error for the SMS backup format.
    pub fn backup_parse(source: serde_json::Error, path: Option<PathBuf>) -> Self {
        ChatstatsError::Parse {
            format: "SMS backup JSON",
            source: ParseErrorKind::Json(source),
            path,
        }
    }

    /// Creates a parse error for a stopword list.
    pub fn stopwords_parse(message: impl Into<String>, path: Option<PathBuf>) -> Self {
        ChatstatsError::Parse {
            format: "stopword list",
            source: ParseErrorKind::Other(message.into()),
            path,
        }
    }

    /// Creates a missing timestamp error.
    pub fn missing_timestamp(index: usize) -> Self {
        ChatstatsError::MissingTimestamp { index }
    }

    /// Creates an invalid offset error.
    pub fn invalid_offset(input: impl Into<String>) -> Self {
        ChatstatsError::InvalidOffset {
            input: input.into(),
            expected: "+HH:MM or -HH:MM",
        }
    }

    /// Creates an invalid format error.
    pub fn invalid_format(format: &'static str, message: impl Into<String>) -> Self {
        ChatstatsError::InvalidFormat {
            format,
            message: message.into(),
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatstatsError::Io(_))
    }

    /// Returns `true` if this is a parse error.
    pub fn is_parse(&self) -> bool {
        matches!(self, ChatstatsError::Parse { .. })
    }

    /// Returns `true` if the input contained a malformed message record.
    pub fn is_malformed_record(&self) -> bool {
        matches!(
            self,
            ChatstatsError::MissingTimestamp { .. } | ChatstatsError::TimestampOutOfRange { .. }
        )
    }
}

// ============================================================================
// Tests
// ============================================================================
