use crate::domain::amount::snap_to_zero;
use crate::domain::{order_chronologically, round_cents, InstrumentCode, OrderKind, TradeRecord};
use crate::error::LedgerError;
use rust_decimal::Decimal;
use std::collections::BTreeMap;

/// Allowed excess of sell quantity over held quantity; also the zero-snap epsilon for quantity.
pub const QUANTITY_TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 8);

/// Residual cost below this is treated as zero.
pub const COST_TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 6);

/// Running moving-average state for one instrument.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Position {
    /// Units currently held. Never negative.
    pub held_quantity: Decimal,

    /// Cumulative cost of the held units. Never negative.
    pub total_cost_basis: Decimal,
}

impl Position {
    pub fn is_flat(&self) -> bool {
        self.held_quantity.is_zero()
    }

    /// Average cost per held unit; `None` when flat.
    pub fn average_cost(&self) -> Option<Decimal> {
        if self.held_quantity.is_zero() {
            None
        } else {
            Some(self.total_cost_basis / self.held_quantity)
        }
    }

    /// Add bought units at `cost`. `None` on overflow, leaving the position untouched.
    fn apply_buy(&mut self, cost: Decimal, quantity: Decimal) -> Option<()> {
        let total_cost_basis = self.total_cost_basis.checked_add(cost)?;
        let held_quantity = self.held_quantity.checked_add(quantity)?;
        self.total_cost_basis = total_cost_basis;
        self.held_quantity = held_quantity;
        Some(())
    }

    /// Apply a sale and return its unrounded profit/loss.
    fn apply_sell(
        &mut self,
        instrument: &InstrumentCode,
        row: usize,
        unit_price: Decimal,
        quantity: Decimal,
    ) -> Result<Decimal, LedgerError> {
        if quantity <= Decimal::ZERO {
            return Err(LedgerError::NonPositiveSellQuantity {
                instrument: instrument.to_string(),
                quantity,
            });
        }
        if self.held_quantity <= Decimal::ZERO || self.total_cost_basis <= Decimal::ZERO {
            return Err(LedgerError::NoExistingPosition {
                instrument: instrument.to_string(),
            });
        }
        if quantity - self.held_quantity > QUANTITY_TOLERANCE {
            return Err(LedgerError::OversoldPosition {
                instrument: instrument.to_string(),
                quantity,
                held: self.held_quantity,
            });
        }

        let overflow =
            || LedgerError::ArithmeticOverflow(format!("selling {} at row {}", instrument, row));

        // Average taken from the position as it stood before this sale.
        let average_cost = self
            .total_cost_basis
            .checked_div(self.held_quantity)
            .ok_or_else(overflow)?;
        let cost_basis_sold = average_cost.checked_mul(quantity).ok_or_else(overflow)?;
        let profit_loss = unit_price
            .checked_mul(quantity)
            .and_then(|proceeds| proceeds.checked_sub(cost_basis_sold))
            .ok_or_else(overflow)?;

        let held_quantity = snap_to_zero(self.held_quantity - quantity, QUANTITY_TOLERANCE);
        self.held_quantity = held_quantity.max(Decimal::ZERO);
        // A flat position carries no cost, whatever residue the average left behind.
        self.total_cost_basis = if self.held_quantity.is_zero() {
            Decimal::ZERO
        } else {
            snap_to_zero(self.total_cost_basis - cost_basis_sold, COST_TOLERANCE).max(Decimal::ZERO)
        };

        Ok(profit_loss)
    }
}

/// Realized profit/loss per sell row, keyed by original row position.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProfitLossResult(BTreeMap<usize, Decimal>);

impl ProfitLossResult {
    pub fn insert(&mut self, position: usize, value: Decimal) {
        self.0.insert(position, value);
    }

    pub fn get(&self, position: usize) -> Option<Decimal> {
        self.0.get(&position).copied()
    }

    pub fn contains(&self, position: usize) -> bool {
        self.0.contains_key(&position)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sum of every recorded (rounded) value.
    pub fn total(&self) -> Result<Decimal, LedgerError> {
        self.0
            .values()
            .try_fold(Decimal::ZERO, |acc, value| acc.checked_add(*value))
            .ok_or_else(|| LedgerError::ArithmeticOverflow("totalling profit/loss".to_string()))
    }
}

/// Moving-average cost accounting over records fed in chronological order.
///
/// Owns one Position per instrument for the lifetime of a single run.
#[derive(Debug, Default)]
pub struct CostBasisEngine {
    positions: BTreeMap<InstrumentCode, Position>,
    results: ProfitLossResult,
}

impl CostBasisEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process a single record, updating its instrument's position.
    ///
    /// Callers must feed records in chronological order.
    pub fn process_record(&mut self, record: &TradeRecord) -> Result<(), LedgerError> {
        if record.is_inert() {
            return Ok(());
        }

        let position = self.positions.entry(record.instrument.clone()).or_default();
        match record.order_kind {
            OrderKind::Buy => record
                .notional()
                .and_then(|cost| position.apply_buy(cost, record.quantity))
                .ok_or_else(|| {
                    LedgerError::ArithmeticOverflow(format!(
                        "buying {} at row {}",
                        record.instrument, record.original_position
                    ))
                })?,
            OrderKind::Sell => {
                let profit_loss = position.apply_sell(
                    &record.instrument,
                    record.original_position,
                    record.unit_price,
                    record.quantity,
                )?;
                let rounded = round_cents(profit_loss);
                tracing::debug!(
                    instrument = %record.instrument,
                    row = record.original_position,
                    quantity = %record.quantity,
                    profit_loss = %rounded,
                    "Realized sell"
                );
                self.results.insert(record.original_position, rounded);
            }
            OrderKind::Other => {}
        }
        Ok(())
    }

    /// Current position for an instrument, if it has been seen.
    pub fn position(&self, instrument: &InstrumentCode) -> Option<&Position> {
        self.positions.get(instrument)
    }

    pub fn instrument_count(&self) -> usize {
        self.positions.len()
    }

    /// Finish the run, discarding position state.
    pub fn into_results(self) -> ProfitLossResult {
        for (instrument, position) in self.positions.iter().filter(|(_, p)| !p.is_flat()) {
            tracing::debug!(
                instrument = %instrument,
                held = %position.held_quantity,
                cost_basis = %position.total_cost_basis,
                "Position left open"
            );
        }
        self.results
    }
}

/// Run the engine over records in chronological order. Any failure aborts the run.
pub fn compute_profit_loss(records: &[TradeRecord]) -> Result<ProfitLossResult, LedgerError> {
    let mut engine = CostBasisEngine::new();
    for record in order_chronologically(records) {
        engine.process_record(record)?;
    }
    Ok(engine.into_results())
}
