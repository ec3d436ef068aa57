//! Text surfaces of the ledger: parsing, schema, record building, report output.

pub mod records;
pub mod report;
pub mod schema;
pub mod table;

pub use records::{build_record, build_records};
pub use report::assemble_output;
pub use schema::{resolve_columns, ColumnIndex, ColumnNames};
pub use table::LedgerTable;
