//! Hour, month and weekday activity histograms.

use serde::{Deserialize, Serialize};

use super::temporal::TemporalDecoder;
use crate::Message;
use crate::error::{ChatstatsError, Result};

/// Histogram counts over a whole conversation.
///
/// `month_histogram` has 13 slots so that months index it directly;
/// slot 0 is always zero. Weekdays start at Monday = 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsResult {
    /// Total number of messages, null-bodied ones included
    pub count: usize,
    pub hour_histogram: [usize; 24],
    pub month_histogram: [usize; 13],
    pub weekday_histogram: [usize; 7],
}

impl Default for StatsResult {
    fn default() -> Self {
        Self {
            count: 0,
            hour_histogram: [0; 24],
            month_histogram: [0; 13],
            weekday_histogram: [0; 7],
        }
    }
}

impl StatsResult {
    /// Hour with the most messages (earliest wins ties), `None` when empty.
    pub fn busiest_hour(&self) -> Option<usize> {
        busiest(&self.hour_histogram)
    }

    /// Weekday with the most messages, Monday = 0.
    pub fn busiest_weekday(&self) -> Option<usize> {
        busiest(&self.weekday_histogram)
    }

    /// Month with the most messages, 1–12.
    pub fn busiest_month(&self) -> Option<usize> {
        busiest(&self.month_histogram)
    }
}

fn busiest(histogram: &[usize]) -> Option<usize> {
    let max = *histogram.iter().max()?;
    if max == 0 {
        return None;
    }
    histogram.iter().position(|&n| n == max)
}

/// Counts every message into the histograms, in the host local timezone.
pub fn aggregate(conversation: &[Message]) -> Result<StatsResult> {
    aggregate_with(conversation, &TemporalDecoder::local())
}

/// Counts every message into the histograms using `decoder`.
///
/// Null-bodied messages are counted like any other. A message without a
/// timestamp fails the whole run, since the totals must match the input.
///
/// # Example
///
/// ```
/// use chatstats::Message;
/// use chatstats::analysis::{TemporalDecoder, aggregate_with};
///
/// let conversation = vec![
///     Message::new(1_705_309_200_000, "hi"), // Mon 09:00 UTC
///     Message::without_body(1_705_330_800_000), // Mon 15:00 UTC
/// ];
/// let stats = aggregate_with(&conversation, &TemporalDecoder::utc())?;
///
/// assert_eq!(stats.count, 2);
/// assert_eq!(stats.hour_histogram[9], 1);
/// assert_eq!(stats.weekday_histogram[0], 2);
/// # Ok::<(), chatstats::ChatstatsError>(())
/// ```
pub fn aggregate_with(conversation: &[Message], decoder: &TemporalDecoder) -> Result<StatsResult> {
    let mut stats = StatsResult {
        count: conversation.len(),
        ..StatsResult::default()
    };

    for (index, message) in conversation.iter().enumerate() {
        let timestamp = message
            .timestamp
            .ok_or_else(|| ChatstatsError::missing_timestamp(index))?;
        let fields = decoder.decode(timestamp)?;

        stats.hour_histogram[fields.hour as usize] += 1;
        stats.month_histogram[fields.month as usize] += 1;
        stats.weekday_histogram[fields.weekday as usize] += 1;
    }

    tracing::debug!(
        count = stats.count,
        timezone = %decoder.timezone(),
        "aggregated stats"
    );
    Ok(stats)
}
