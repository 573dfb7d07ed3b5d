//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - CLI argument structure (for use with clap)
//! - [`OutputFormat`] - Output format options
//!
//! `Args` converts into the library's [`AnalysisConfig`], so the binary
//! holds no analysis settings of its own.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::config::{AnalysisConfig, NormalizerConfig, OutputConfig, StopwordSource, TimezoneConfig};
use crate::error::{ChatstatsError, Result};

/// Analyze an SMS backup conversation: activity statistics, per-message
/// records and a word-frequency corpus.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatstats")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatstats sms.json messages.csv corpus.csv
    chatstats sms.json messages.json corpus.json --format json
    chatstats sms.json messages.csv corpus.csv --conversation 2 --utc
    chatstats sms.json messages.csv corpus.csv --stopwords slang.txt --daily days.csv

Timestamps resolve in the local timezone unless --utc or --offset is given.")]
pub struct Args {
    /// Path to the SMS backup JSON file
    #[arg(value_name = "DATAFILE")]
    pub datafile: PathBuf,

    /// Output file for normalized per-message records
    #[arg(value_name = "NORMOUTFILE")]
    pub norm_out: PathBuf,

    /// Output file for the word-frequency corpus
    #[arg(value_name = "CORPUSOUTFILE")]
    pub corpus_out: PathBuf,

    /// Index of the conversation to analyze
    #[arg(short, long, default_value_t = 0, value_name = "N")]
    pub conversation: usize,

    /// Output format for records, corpus and daily counts
    /// [default: from the NORMOUTFILE extension, else csv]
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Also write messages-per-day counts to this file
    #[arg(long, value_name = "PATH")]
    pub daily: Option<PathBuf>,

    /// Also write the stats as JSON to this file
    #[arg(long, value_name = "PATH")]
    pub stats: Option<PathBuf>,

    /// Newline-separated stopword list replacing the built-in English one
    #[arg(long, value_name = "PATH", conflicts_with = "no_stopwords")]
    pub stopwords: Option<PathBuf>,

    /// Keep every token (no stopword removal)
    #[arg(long)]
    pub no_stopwords: bool,

    /// Do not replace emoji with :name: tokens
    #[arg(long)]
    pub keep_emoji: bool,

    /// Resolve timestamps in UTC
    #[arg(long, conflicts_with = "offset")]
    pub utc: bool,

    /// Resolve timestamps at a fixed offset, e.g. +02:00
    #[arg(long, value_name = "+HH:MM", allow_hyphen_values = true)]
    pub offset: Option<String>,

    /// CSV field delimiter
    #[arg(short, long, default_value_t = ',')]
    pub delimiter: char,

    /// Enable debug logging (or set CHATSTATS_LOG)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// The explicit `--format`, or the one implied by the records path.
    pub fn output_format(&self) -> crate::format::OutputFormat {
        self.format.map_or_else(
            || crate::format::OutputFormat::from_path(&self.norm_out).unwrap_or_default(),
            Into::into,
        )
    }

    /// Builds the library configuration from command-line flags.
    pub fn analysis_config(&self) -> Result<AnalysisConfig> {
        let timezone = match (&self.offset, self.utc) {
            (Some(offset), _) => TimezoneConfig::parse_offset(offset)?,
            (None, true) => TimezoneConfig::Utc,
            (None, false) => TimezoneConfig::Local,
        };

        let stopwords = match (&self.stopwords, self.no_stopwords) {
            (_, true) => StopwordSource::None,
            (Some(path), false) => StopwordSource::File(path.clone()),
            (None, false) => StopwordSource::English,
        };

        let delimiter = u8::try_from(self.delimiter)
            .ok()
            .filter(u8::is_ascii)
            .ok_or_else(|| {
                ChatstatsError::invalid_format(
                    "delimiter",
                    format!("'{}' is not a single ASCII character", self.delimiter),
                )
            })?;

        Ok(AnalysisConfig::new()
            .with_conversation(self.conversation)
            .with_timezone(timezone)
            .with_normalizer(
                NormalizerConfig::new()
                    .with_demojize(!self.keep_emoji)
                    .with_stopwords(stopwords),
            )
            .with_output(OutputConfig::new().with_delimiter(delimiter)))
    }
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Comma-separated rows with a header (default)
    #[default]
    Csv,

    /// Pretty-printed JSON array
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Csv => write!(f, "CSV"),
            OutputFormat::Json => write!(f, "JSON"),
        }
    }
}

// Conversion to library format type
impl From<OutputFormat> for crate::format::OutputFormat {
    fn from(format: OutputFormat) -> crate::format::OutputFormat {
        match format {
            OutputFormat::Csv => crate::format::OutputFormat::Csv,
            OutputFormat::Json => crate::format::OutputFormat::Json,
        }
    }
}
