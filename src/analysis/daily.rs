//! Messages per local calendar day.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::temporal::TemporalDecoder;
use crate::Message;
use crate::error::{ChatstatsError, Result};

/// Number of non-null messages sent on one local date (`%m/%d/%y`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyCount {
    pub date: String,
    pub count: usize,
}

/// Per-day counts in the host local timezone.
pub fn messages_per_day(conversation: &[Message]) -> Result<Vec<DailyCount>> {
    messages_per_day_with(conversation, &TemporalDecoder::local())
}

/// Per-day counts of non-null messages, in first-seen date order.
pub fn messages_per_day_with(
    conversation: &[Message],
    decoder: &TemporalDecoder,
) -> Result<Vec<DailyCount>> {
    let mut days: IndexMap<String, usize> = IndexMap::new();

    for (index, message) in conversation.iter().enumerate() {
        if message.is_null() {
            continue;
        }
        let timestamp = message
            .timestamp
            .ok_or_else(|| ChatstatsError::missing_timestamp(index))?;
        *days.entry(decoder.decode(timestamp)?.date_string()).or_insert(0) += 1;
    }

    Ok(days
        .into_iter()
        .map(|(date, count)| DailyCount { date, count })
        .collect())
}
