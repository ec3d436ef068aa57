//! Building typed trade records from raw ledger rows.

use crate::domain::{clean_field, parse_amount, InstrumentCode, OrderKind, TradeDate, TradeRecord};
use crate::error::LedgerError;
use crate::ledger::schema::{ColumnIndex, ColumnNames};

fn field(row: &[String], idx: usize) -> &str {
    row.get(idx).map(String::as_str).unwrap_or("")
}

/// Convert one raw row. `position` is the row's offset among data rows.
pub fn build_record(
    row: &[String],
    position: usize,
    columns: &ColumnIndex,
    names: &ColumnNames,
) -> Result<TradeRecord, LedgerError> {
    let trade_date = TradeDate::parse(field(row, columns.trade_date))
        .map_err(|e| e.at(&names.trade_date, position))?;
    let unit_price = parse_amount(field(row, columns.unit_price))
        .map_err(|e| e.at(&names.unit_price, position))?;
    let quantity = parse_amount(field(row, columns.quantity))
        .map_err(|e| e.at(&names.quantity, position))?;

    Ok(TradeRecord {
        original_position: position,
        instrument: InstrumentCode::parse(field(row, columns.instrument)),
        order_kind: OrderKind::classify(field(row, columns.order_type)),
        trade_date,
        unit_price,
        quantity,
        tie_break: columns
            .tie_break
            .map(|idx| clean_field(field(row, idx)).to_string()),
    })
}

/// Convert every data row, in input order. The first malformed row aborts the batch.
pub fn build_records(
    rows: &[Vec<String>],
    columns: &ColumnIndex,
    names: &ColumnNames,
) -> Result<Vec<TradeRecord>, LedgerError> {
    rows.iter()
        .enumerate()
        .map(|(position, row)| build_record(row, position, columns, names))
        .collect()
}
