//! CSV report writer
//!
//! Serializes the full ordered record sequence to `data.csv` with `;` as the
//! field delimiter, `\n` line endings, and a fixed header row. One row per
//! record, in the order the search returned them.

use std::path::Path;

use csv::{Terminator, WriterBuilder};

use crate::model::PaperRecord;
use crate::Result;

/// File name of the report inside the bundle directory
pub const CSV_FILE_NAME: &str = "data.csv";

/// Fixed header row of the report
pub const CSV_HEADER: [&str; 6] = ["title", "authors", "abstract", "citations", "source", "pdf"];

/// Writes the CSV report for the given records
///
/// # Arguments
///
/// * `dir` - Bundle directory receiving `data.csv`
/// * `records` - Full ordered record sequence; row order matches input order
///
/// # Errors
///
/// An unwritable path or a failed write is fatal.
pub fn write_report(dir: &Path, records: &[PaperRecord]) -> Result<()> {
    let path = dir.join(CSV_FILE_NAME);

    let mut writer = WriterBuilder::new()
        .delimiter(b';')
        .terminator(Terminator::Any(b'\n'))
        .from_path(&path)?;

    writer.write_record(CSV_HEADER)?;

    for record in records {
        let citations = record.citations.to_string();
        writer.write_record([
            record.title.as_str(),
            record.authors.as_str(),
            record.description.as_str(),
            citations.as_str(),
            record.source.as_str(),
            record.pdf.as_str(),
        ])?;
    }

    writer.flush()?;

    tracing::info!("Wrote {} rows to {}", records.len(), path.display());

    Ok(())
}
