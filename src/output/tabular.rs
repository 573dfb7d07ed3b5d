use crate::analysis::{CorpusEntry, DailyCount, NormalizedRecord};

/// A record type with a fixed column layout.
pub trait Tabular {
    /// Column names, in the order [`Tabular::row`] yields values.
    const HEADERS: &'static [&'static str];

    /// The record's values as strings.
    fn row(&self) -> Vec<String>;
}

impl Tabular for NormalizedRecord {
    const HEADERS: &'static [&'static str] = &["datetime", "hour", "month", "weekday", "length"];

    fn row(&self) -> Vec<String> {
        vec![
            self.datetime.clone(),
            self.hour.to_string(),
            self.month.to_string(),
            self.weekday.to_string(),
            self.length.to_string(),
        ]
    }
}

impl Tabular for CorpusEntry {
    const HEADERS: &'static [&'static str] = &["word", "count"];

    fn row(&self) -> Vec<String> {
        vec![self.word.clone(), self.count.to_string()]
    }
}

impl Tabular for DailyCount {
    const HEADERS: &'static [&'static str] = &["date", "count"];

    fn row(&self) -> Vec<String> {
        vec![self.date.clone(), self.count.to_string()]
    }
}
