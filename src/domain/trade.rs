//! TradeRecord: one typed row of the ledger.

use crate::domain::{InstrumentCode, OrderKind, TradeDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single ledger row after field parsing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeRecord {
    /// 0-based offset among data rows (header excluded).
    pub original_position: usize,
    /// Instrument traded; empty means the record is inert.
    pub instrument: InstrumentCode,
    pub order_kind: OrderKind,
    pub trade_date: TradeDate,
    /// Average execution price per unit.
    pub unit_price: Decimal,
    pub quantity: Decimal,
    /// Same-date ordering key; `None` when the ledger has no such column.
    pub tie_break: Option<String>,
}

impl TradeRecord {
    /// Whether this record takes part in position accounting at all.
    pub fn is_inert(&self) -> bool {
        self.instrument.is_empty()
    }

    /// Gross value of the row: price times quantity. `None` on overflow.
    pub fn notional(&self) -> Option<Decimal> {
        self.unit_price.checked_mul(self.quantity)
    }
}
