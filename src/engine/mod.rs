//! Pure computation engine for moving-average cost accounting.

pub mod cost_basis;

pub use cost_basis::{compute_profit_loss, CostBasisEngine, Position, ProfitLossResult};
