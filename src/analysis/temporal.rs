//! Epoch timestamp to calendar field conversion.

use chrono::{DateTime, Datelike, FixedOffset, Local, TimeZone, Timelike, Utc};

use crate::config::TimezoneConfig;
use crate::error::{ChatstatsError, Result};

/// `%x %X` in the C locale, the layout spreadsheets parse as a date-time.
pub const DATETIME_FORMAT: &str = "%m/%d/%y %H:%M:%S";

/// `%x` in the C locale.
pub const DATE_FORMAT: &str = "%m/%d/%y";

/// Calendar fields derived from a message timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarFields {
    /// Hour of day, 0–23
    pub hour: u32,
    /// Month, 1–12
    pub month: u32,
    /// Day of week, 0–6 with Monday = 0
    pub weekday: u32,
    /// The resolved local date-time
    pub local_datetime: DateTime<FixedOffset>,
}

impl CalendarFields {
    /// Local date and time, e.g. `01/15/24 10:30:00`.
    pub fn datetime_string(&self) -> String {
        self.local_datetime.format(DATETIME_FORMAT).to_string()
    }

    /// Local date only, e.g. `01/15/24`.
    pub fn date_string(&self) -> String {
        self.local_datetime.format(DATE_FORMAT).to_string()
    }
}

/// Resolves epoch-millisecond timestamps against a timezone.
///
/// # Example
///
/// ```
/// use chatstats::analysis::TemporalDecoder;
/// use chatstats::config::TimezoneConfig;
///
/// // Monday 2024-01-15 10:30:00 UTC
/// let fields = TemporalDecoder::utc().decode(1_705_314_600_000)?;
/// assert_eq!((fields.hour, fields.month, fields.weekday), (10, 1, 0));
///
/// let decoder = TemporalDecoder::new(TimezoneConfig::parse_offset("+02:00")?)?;
/// assert_eq!(decoder.decode(1_705_314_600_000)?.hour, 12);
/// # Ok::<(), chatstats::ChatstatsError>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TemporalDecoder {
    timezone: TimezoneConfig,
}

impl TemporalDecoder {
    /// Fails with `InvalidOffset` when a fixed offset is out of range.
    pub fn new(timezone: TimezoneConfig) -> Result<Self> {
        Ok(Self {
            timezone: timezone.validate()?,
        })
    }

    /// Decoder using the host local timezone.
    pub fn local() -> Self {
        Self {
            timezone: TimezoneConfig::Local,
        }
    }

    pub fn utc() -> Self {
        Self {
            timezone: TimezoneConfig::Utc,
        }
    }

    pub fn timezone(&self) -> TimezoneConfig {
        self.timezone
    }

    /// Converts a millisecond timestamp into calendar fields.
    ///
    /// Sub-second precision is kept in `local_datetime`.
    pub fn decode(&self, timestamp_ms: i64) -> Result<CalendarFields> {
        let local_datetime = self
            .resolve(timestamp_ms)
            .ok_or(ChatstatsError::TimestampOutOfRange { timestamp_ms })?;

        Ok(CalendarFields {
            hour: local_datetime.hour(),
            month: local_datetime.month(),
            weekday: local_datetime.weekday().num_days_from_monday(),
            local_datetime,
        })
    }

    fn resolve(&self, timestamp_ms: i64) -> Option<DateTime<FixedOffset>> {
        match self.timezone {
            TimezoneConfig::Local => Local
                .timestamp_millis_opt(timestamp_ms)
                .single()
                .map(|dt| dt.fixed_offset()),
            TimezoneConfig::Utc => Utc
                .timestamp_millis_opt(timestamp_ms)
                .single()
                .map(|dt| dt.fixed_offset()),
            TimezoneConfig::Fixed { .. } => self
                .timezone
                .fixed_offset()?
                .timestamp_millis_opt(timestamp_ms)
                .single(),
        }
    }
}
