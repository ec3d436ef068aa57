pub mod config;
pub mod domain;
pub mod engine;
pub mod error;
pub mod ledger;
pub mod orchestration;

pub use config::Config;
pub use domain::{InstrumentCode, OrderKind, TradeDate, TradeRecord};
pub use engine::{compute_profit_loss, CostBasisEngine, Position, ProfitLossResult};
pub use error::LedgerError;
pub use ledger::{ColumnIndex, ColumnNames, LedgerTable};
pub use orchestration::{process_table, run, run_files, RunSummary};
