//! Domain types for the trade ledger.
//!
//! This module provides:
//! - Field parsing for amounts and dates, with blank-field defaults
//! - Domain primitives: InstrumentCode, OrderKind, TradeDate
//! - The typed TradeRecord
//! - Stable chronological ordering for deterministic accounting

pub mod amount;
pub mod ordering;
pub mod primitives;
pub mod trade;

pub use amount::{format_cents, parse_amount, round_cents};
pub use ordering::{order_chronologically, TradeOrderingKey};
pub use primitives::{clean_field, InstrumentCode, OrderKind, TradeDate};
pub use trade::TradeRecord;
