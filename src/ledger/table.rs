//! Reading and writing the delimited ledger text.

use crate::error::LedgerError;
use std::io::{Read, Write};

/// Raw ledger text split into a header and data rows, fields untouched.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LedgerTable {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl LedgerTable {
    /// Parse comma-separated text. Empty and whitespace-only lines are skipped;
    /// a line of bare delimiters is still a row.
    ///
    /// # Errors
    /// `EmptyInput` when there is no header line at all; `Csv` on malformed quoting.
    pub fn read<R: Read>(reader: R) -> Result<Self, LedgerError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);

        let mut lines = Vec::new();
        for record in reader.records() {
            let record = record?;
            if record.len() == 1 && record[0].trim().is_empty() {
                continue;
            }
            lines.push(record.iter().map(str::to_string).collect::<Vec<_>>());
        }

        let mut lines = lines.into_iter();
        let header = lines.next().ok_or(LedgerError::EmptyInput)?;
        Ok(LedgerTable {
            header,
            rows: lines.collect(),
        })
    }

    /// Write header and rows as comma-separated text.
    pub fn write<W: Write>(&self, writer: W) -> Result<(), LedgerError> {
        let mut writer = csv::WriterBuilder::new()
            .flexible(true)
            .from_writer(writer);
        writer.write_record(&self.header)?;
        for row in &self.rows {
            writer.write_record(row)?;
        }
        writer.flush()?;
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }
}
