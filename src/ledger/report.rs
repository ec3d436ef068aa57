//! Re-emitting the ledger with the profit/loss column appended.

use crate::domain::format_cents;
use crate::engine::ProfitLossResult;
use crate::ledger::LedgerTable;

/// Append one profit/loss field to the header and to every row, in input order.
pub fn assemble_output(table: &LedgerTable, results: &ProfitLossResult, column: &str) -> LedgerTable {
    let mut header = table.header.clone();
    header.push(column.to_string());

    let rows = table
        .rows
        .iter()
        .enumerate()
        .map(|(position, fields)| {
            let mut out = fields.clone();
            out.push(results.get(position).map(format_cents).unwrap_or_default());
            out
        })
        .collect();

    LedgerTable { header, rows }
}
