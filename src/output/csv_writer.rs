//! CSV output writer.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use super::Tabular;
use crate::config::OutputConfig;
use crate::error::Result;

/// Writes records to a CSV file.
///
/// # Format
/// - Delimiter: from `OutputConfig` (default `,`)
/// - Header row: `T::HEADERS`, always written
/// - Encoding: UTF-8
pub fn write_csv<T: Tabular>(
    records: &[T],
    output_path: impl AsRef<Path>,
    config: &OutputConfig,
) -> Result<()> {
    let file = File::create(output_path)?;
    write_rows(records, file, config)
}

/// Converts records to a CSV string.
///
/// Same format as `write_csv`, but returns a String instead of writing to file.
pub fn to_csv<T: Tabular>(records: &[T], config: &OutputConfig) -> Result<String> {
    let mut buffer = Vec::new();
    write_rows(records, &mut buffer, config)?;
    Ok(String::from_utf8(buffer)?)
}

fn write_rows<T: Tabular, W: Write>(records: &[T], sink: W, config: &OutputConfig) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(config.delimiter)
        .from_writer(sink);

    writer.write_record(T::HEADERS)?;
    for record in records {
        writer.write_record(record.row())?;
    }

    writer.flush()?;
    Ok(())
}
