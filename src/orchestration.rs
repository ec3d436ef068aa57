//! End-to-end runs: text in, augmented text out.

use crate::config::Config;
use crate::engine::compute_profit_loss;
use crate::error::LedgerError;
use crate::ledger::{assemble_output, build_records, resolve_columns, ColumnNames, LedgerTable};
use rust_decimal::Decimal;
use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};

/// Counts reported after a successful run.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RunSummary {
    pub rows: usize,
    pub instruments: usize,
    pub sells_realized: usize,
    pub total_profit_loss: Decimal,
}

/// Compute the augmented ledger in memory. Nothing is produced on failure.
pub fn process_table(
    table: &LedgerTable,
    names: &ColumnNames,
) -> Result<(LedgerTable, RunSummary), LedgerError> {
    if table.is_empty() {
        return Err(LedgerError::NoDataRows);
    }

    let columns = resolve_columns(&table.header, names)?;
    let records = build_records(&table.rows, &columns, names)?;

    let inert = records.iter().filter(|r| r.is_inert()).count();
    if inert > 0 {
        tracing::warn!(rows = inert, "Rows without an instrument code are ignored");
    }

    let results = compute_profit_loss(&records)?;
    let output = assemble_output(table, &results, &names.profit_loss);

    let instruments: BTreeSet<&str> = records
        .iter()
        .filter(|r| !r.is_inert())
        .map(|r| r.instrument.as_str())
        .collect();

    let summary = RunSummary {
        rows: records.len(),
        instruments: instruments.len(),
        sells_realized: results.len(),
        total_profit_loss: results.total()?,
    };
    Ok((output, summary))
}

/// Read a ledger from `input`, write the augmented ledger to `output`.
///
/// The output is only written once the whole input has been processed.
pub fn run<R: Read, W: Write>(
    input: R,
    output: W,
    names: &ColumnNames,
) -> Result<RunSummary, LedgerError> {
    let table = LedgerTable::read(input)?;
    let (augmented, summary) = process_table(&table, names)?;
    augmented.write(output)?;
    Ok(summary)
}

/// File-level run driven by configuration.
pub fn run_files(config: &Config) -> Result<RunSummary, LedgerError> {
    tracing::info!(
        input = %config.input_path.display(),
        output = %config.output_path.display(),
        "Computing realized profit/loss"
    );

    let input = BufReader::new(File::open(&config.input_path)?);
    let table = LedgerTable::read(input)?;
    let (augmented, summary) = process_table(&table, &config.columns)?;

    let mut output = BufWriter::new(File::create(&config.output_path)?);
    augmented.write(&mut output)?;
    output.flush()?;

    tracing::info!(
        rows = summary.rows,
        instruments = summary.instruments,
        sells = summary.sells_realized,
        total_profit_loss = %summary.total_profit_loss,
        "Ledger written"
    );
    Ok(summary)
}
