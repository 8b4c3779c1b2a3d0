//! Bulk serialization of the flattened tables.

use std::path::Path;

use tracing::debug;

use crate::constants::tables::{DETAIL_FILENAME, SUMMARY_FILENAME};
use crate::errors::CorpusError;
use crate::records::{DetailRecord, FlatRecord, SummaryRecord};

/// Writes one in-memory table to one delimited destination.
#[derive(Clone, Copy, Debug, Default)]
pub struct TableWriter;

impl TableWriter {
    /// Serialize `rows` to `destination`: one comma-separated line per
    /// record, fields in declared order, no header, minimal quoting.
    /// An existing file is truncated.
    pub fn write<T: FlatRecord>(&self, rows: &[T], destination: &Path) -> Result<(), CorpusError> {
        let mut writer = csv::Writer::from_path(destination)?;
        for row in rows {
            let [first, second] = row.fields();
            writer.write_record([first.as_ref(), second.as_ref()])?;
        }
        writer.flush()?;
        debug!(
            destination = %destination.display(),
            rows = rows.len(),
            "table written"
        );
        Ok(())
    }

    /// Write both tables under `output_dir` using the default filenames.
    pub fn write_all(
        &self,
        summaries: &[SummaryRecord],
        details: &[DetailRecord],
        output_dir: &Path,
    ) -> Result<(), CorpusError> {
        self.write(summaries, &output_dir.join(SUMMARY_FILENAME))?;
        self.write(details, &output_dir.join(DETAIL_FILENAME))?;
        Ok(())
    }
}

/// Read a delimited table back as raw field rows (no header handling).
///
/// Counterpart to [`TableWriter::write`], used to verify persisted output.
pub fn read_rows(path: &Path) -> Result<Vec<Vec<String>>, CorpusError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_path(path)?;
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(str::to_string).collect());
    }
    Ok(rows)
}
