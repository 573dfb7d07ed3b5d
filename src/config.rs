//! Configuration types for analysis and output.
//!
//! This module provides plain configuration structs for library usage,
//! without any CLI framework dependencies.
//!
//! - [`NormalizerConfig`] - Text normalization switches and stopword source
//! - [`TimezoneConfig`] - Timezone used to resolve message timestamps
//! - [`OutputConfig`] - Tabular output settings
//! - [`AnalysisConfig`] - Everything a full run needs
//!
//! # Example
//!
//! ```rust
//! use chatstats::config::{AnalysisConfig, NormalizerConfig, TimezoneConfig};
//!
//! let config = AnalysisConfig::new()
//!     .with_conversation(1)
//!     .with_timezone(TimezoneConfig::parse_offset("+02:00")?)
//!     .with_normalizer(NormalizerConfig::new().with_demojize(false));
//!
//! assert_eq!(config.conversation, 1);
//! # Ok::<(), chatstats::ChatstatsError>(())
//! ```

use std::path::PathBuf;

use chrono::FixedOffset;
use serde::{Deserialize, Serialize};

use crate::error::{ChatstatsError, Result};

/// Where the stopword set comes from.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StopwordSource {
    /// The compiled-in English list (NLTK corpus).
    #[default]
    English,
    /// No stopwords; every token is kept.
    None,
    /// A newline-separated word list on disk.
    File(PathBuf),
    /// An explicit list of words.
    Words(Vec<String>),
}

/// Configuration for the text normalizer.
///
/// # Example
///
/// ```rust
/// use chatstats::config::{NormalizerConfig, StopwordSource};
///
/// let config = NormalizerConfig::new()
///     .with_stopwords(StopwordSource::Words(vec!["the".into(), "is".into()]));
/// assert!(config.demojize);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizerConfig {
    /// Replace emoji glyphs with `:name:` tokens (default: true)
    pub demojize: bool,

    /// Stopword set to filter tokens with (default: English)
    pub stopwords: StopwordSource,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            demojize: true,
            stopwords: StopwordSource::English,
        }
    }
}

impl NormalizerConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables or disables emoji substitution.
    #[must_use]
    pub fn with_demojize(mut self, enabled: bool) -> Self {
        self.demojize = enabled;
        self
    }

    /// Sets the stopword source.
    #[must_use]
    pub fn with_stopwords(mut self, source: StopwordSource) -> Self {
        self.stopwords = source;
        self
    }
}

/// Timezone used to turn epoch timestamps into calendar fields.
///
/// The default is the host's local timezone, which makes results depend on
/// the machine running the analysis. Pin `Utc` or a fixed offset when
/// output must be reproducible across machines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimezoneConfig {
    /// Host local timezone (DST-aware)
    #[default]
    Local,
    /// Coordinated Universal Time
    Utc,
    /// Fixed offset east of UTC, in seconds
    Fixed {
        /// Seconds east of UTC
        offset_seconds: i32,
    },
}

impl TimezoneConfig {
    /// Parses a `+HH:MM` / `-HH:MM` offset (`Z` and `UTC` mean UTC).
    ///
    /// # Example
    ///
    /// ```rust
    /// use chatstats::config::TimezoneConfig;
    ///
    /// let tz = TimezoneConfig::parse_offset("-05:30").unwrap();
    /// assert_eq!(tz, TimezoneConfig::Fixed { offset_seconds: -(5 * 3600 + 30 * 60) });
    /// assert_eq!(TimezoneConfig::parse_offset("Z").unwrap(), TimezoneConfig::Utc);
    /// assert!(TimezoneConfig::parse_offset("0530").is_err());
    /// ```
    pub fn parse_offset(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        if trimmed.eq_ignore_ascii_case("z") || trimmed.eq_ignore_ascii_case("utc") {
            return Ok(TimezoneConfig::Utc);
        }

        let (sign, rest) = match trimmed.chars().next() {
            Some('+') => (1, &trimmed[1..]),
            Some('-') => (-1, &trimmed[1..]),
            _ => return Err(ChatstatsError::invalid_offset(input)),
        };

        let (hours, minutes) = rest
            .split_once(':')
            .ok_or_else(|| ChatstatsError::invalid_offset(input))?;
        let hours: i32 = hours
            .parse()
            .map_err(|_| ChatstatsError::invalid_offset(input))?;
        let minutes: i32 = minutes
            .parse()
            .map_err(|_| ChatstatsError::invalid_offset(input))?;
        if !(0..24).contains(&hours) || !(0..60).contains(&minutes) {
            return Err(ChatstatsError::invalid_offset(input));
        }

        Ok(TimezoneConfig::Fixed {
            offset_seconds: sign * (hours * 3600 + minutes * 60),
        })
    }

    /// Checks that a `Fixed` offset is representable (strictly within ±24h).
    ///
    /// Configs built with [`parse_offset`](Self::parse_offset) always pass;
    /// deserialized ones may not.
    pub fn validate(self) -> Result<Self> {
        match self {
            TimezoneConfig::Fixed { offset_seconds } if FixedOffset::east_opt(offset_seconds).is_none() => {
                Err(ChatstatsError::invalid_offset(format!("{offset_seconds}s")))
            }
            _ => Ok(self),
        }
    }

    /// Returns the fixed offset for `Utc` and `Fixed`, `None` for `Local`.
    pub fn fixed_offset(&self) -> Option<FixedOffset> {
        match self {
            TimezoneConfig::Local => None,
            TimezoneConfig::Utc => FixedOffset::east_opt(0),
            TimezoneConfig::Fixed { offset_seconds } => FixedOffset::east_opt(*offset_seconds),
        }
    }
}

impl std::fmt::Display for TimezoneConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimezoneConfig::Local => write!(f, "local"),
            TimezoneConfig::Utc => write!(f, "UTC"),
            TimezoneConfig::Fixed { offset_seconds } => {
                let sign = if *offset_seconds < 0 { '-' } else { '+' };
                let abs = offset_seconds.abs();
                write!(f, "{}{:02}:{:02}", sign, abs / 3600, (abs % 3600) / 60)
            }
        }
    }
}

/// Configuration for tabular (CSV) output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Field delimiter (default: `,`)
    pub delimiter: u8,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}

impl OutputConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }
}

/// Configuration for a complete analysis run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Index of the conversation to analyze within the backup (default: 0)
    pub conversation: usize,

    /// Timezone used by the temporal decoder
    pub timezone: TimezoneConfig,

    /// Text normalizer settings
    pub normalizer: NormalizerConfig,

    /// Tabular output settings
    pub output: OutputConfig,
}

impl AnalysisConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects the conversation to analyze.
    #[must_use]
    pub fn with_conversation(mut self, index: usize) -> Self {
        self.conversation = index;
        self
    }

    /// Sets the timezone.
    #[must_use]
    pub fn with_timezone(mut self, timezone: TimezoneConfig) -> Self {
        self.timezone = timezone;
        self
    }

    /// Sets the normalizer configuration.
    #[must_use]
    pub fn with_normalizer(mut self, normalizer: NormalizerConfig) -> Self {
        self.normalizer = normalizer;
        self
    }

    /// Sets the output configuration.
    #[must_use]
    pub fn with_output(mut self, output: OutputConfig) -> Self {
        self.output = output;
        self
    }
}
