//! Chronological ordering of trade records for deterministic processing.

use crate::domain::{TradeDate, TradeRecord};

/// Stable ordering key for trade records.
///
/// Ordering: trade_date -> tie_break (ordinal text) -> original_position.
/// Records without a tie-break column compare equal on that component.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct TradeOrderingKey<'a> {
    pub trade_date: TradeDate,
    pub tie_break: Option<&'a str>,
    pub original_position: usize,
}

impl<'a> TradeOrderingKey<'a> {
    pub fn from_record(record: &'a TradeRecord) -> Self {
        TradeOrderingKey {
            trade_date: record.trade_date,
            tie_break: record.tie_break.as_deref(),
            original_position: record.original_position,
        }
    }
}

/// Return the records in processing order, leaving the input untouched.
pub fn order_chronologically(records: &[TradeRecord]) -> Vec<&TradeRecord> {
    let mut ordered: Vec<&TradeRecord> = records.iter().collect();
    ordered.sort_by(|a, b| TradeOrderingKey::from_record(a).cmp(&TradeOrderingKey::from_record(b)));
    ordered
}
