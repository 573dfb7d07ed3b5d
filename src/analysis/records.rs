//! One flat record per message for spreadsheet time-series work.

use serde::{Deserialize, Serialize};

use super::temporal::TemporalDecoder;
use crate::Message;
use crate::error::{ChatstatsError, Result};

/// A per-message row: local date-time, calendar fields and body length.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedRecord {
    /// Local date and time, `%m/%d/%y %H:%M:%S`
    pub datetime: String,
    pub hour: u32,
    pub month: u32,
    /// Monday = 0
    pub weekday: u32,
    /// Character count of the raw body
    pub length: usize,
}

/// Builds records in the host local timezone.
pub fn normalize(conversation: &[Message]) -> Result<Vec<NormalizedRecord>> {
    normalize_with(conversation, &TemporalDecoder::local())
}

/// Builds one record per non-null message, in input order.
pub fn normalize_with(
    conversation: &[Message],
    decoder: &TemporalDecoder,
) -> Result<Vec<NormalizedRecord>> {
    let mut records = Vec::with_capacity(conversation.len());

    for (index, message) in conversation.iter().enumerate() {
        let Some(body) = message.body() else {
            continue;
        };
        let timestamp = message
            .timestamp
            .ok_or_else(|| ChatstatsError::missing_timestamp(index))?;
        let fields = decoder.decode(timestamp)?;

        records.push(NormalizedRecord {
            datetime: fields.datetime_string(),
            hour: fields.hour,
            month: fields.month,
            weekday: fields.weekday,
            length: body.chars().count(),
        });
    }

    tracing::debug!(
        input = conversation.len(),
        records = records.len(),
        "normalized records"
    );
    Ok(records)
}
