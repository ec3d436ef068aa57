//! Resolving logical column names to header positions.

use crate::domain::clean_field;
use crate::error::LedgerError;
use std::collections::HashMap;

/// Header names for each logical column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnNames {
    pub instrument: String,
    pub order_type: String,
    pub trade_date: String,
    pub unit_price: String,
    pub quantity: String,
    pub tie_break: String,
    /// Name of the appended output column.
    pub profit_loss: String,
}

impl Default for ColumnNames {
    fn default() -> Self {
        ColumnNames {
            instrument: "Symbol".to_string(),
            order_type: "Order Type".to_string(),
            trade_date: "Trade Date".to_string(),
            unit_price: "Average Price".to_string(),
            quantity: "Quantity".to_string(),
            tie_break: "Confirmation Number".to_string(),
            profit_loss: "Profit/Loss".to_string(),
        }
    }
}

/// Resolved header positions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnIndex {
    pub instrument: usize,
    pub order_type: usize,
    pub trade_date: usize,
    pub unit_price: usize,
    pub quantity: usize,
    pub tie_break: Option<usize>,
}

/// Map required column names to their header positions.
///
/// # Errors
/// `MissingColumns` listing every absent required name. The tie-break column
/// is optional and never causes a failure.
pub fn resolve_columns(header: &[String], names: &ColumnNames) -> Result<ColumnIndex, LedgerError> {
    let mut positions: HashMap<&str, usize> = HashMap::new();
    for (idx, cell) in header.iter().enumerate() {
        let name = clean_field(cell.trim_start_matches('\u{feff}'));
        positions.entry(name).or_insert(idx);
    }

    let required = [
        &names.instrument,
        &names.order_type,
        &names.trade_date,
        &names.unit_price,
        &names.quantity,
    ];
    let missing: Vec<String> = required
        .iter()
        .filter(|name| !positions.contains_key(name.as_str()))
        .map(|name| name.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(LedgerError::MissingColumns(missing));
    }

    // Every required name is present past this point.
    let at = |name: &str| positions[name];
    Ok(ColumnIndex {
        instrument: at(&names.instrument),
        order_type: at(&names.order_type),
        trade_date: at(&names.trade_date),
        unit_price: at(&names.unit_price),
        quantity: at(&names.quantity),
        tie_break: positions.get(names.tie_break.as_str()).copied(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_resolve_in_any_order() {
        let h = header(&["Quantity", "Trade Date", "Symbol", "Average Price", "Order Type"]);
        let idx = resolve_columns(&h, &ColumnNames::default()).unwrap();
        assert_eq!(idx.quantity, 0);
        assert_eq!(idx.trade_date, 1);
        assert_eq!(idx.instrument, 2);
        assert_eq!(idx.unit_price, 3);
        assert_eq!(idx.order_type, 4);
        assert_eq!(idx.tie_break, None);
    }

    #[test]
    fn test_tie_break_recorded_when_present() {
        let h = header(&[
            "Symbol",
            "Order Type",
            "Trade Date",
            "Average Price",
            "Quantity",
            "Confirmation Number",
        ]);
        let idx = resolve_columns(&h, &ColumnNames::default()).unwrap();
        assert_eq!(idx.tie_break, Some(5));
    }

    #[test]
    fn test_missing_quantity_named() {
        let h = header(&["Symbol", "Order Type", "Trade Date", "Average Price"]);
        match resolve_columns(&h, &ColumnNames::default()) {
            Err(LedgerError::MissingColumns(names)) => assert_eq!(names, vec!["Quantity"]),
            other => panic!("Expected MissingColumns, got {:?}", other),
        }
    }

    #[test]
    fn test_all_missing_columns_reported_together() {
        let h = header(&["Symbol", "Notes"]);
        match resolve_columns(&h, &ColumnNames::default()) {
            Err(LedgerError::MissingColumns(names)) => assert_eq!(
                names,
                vec!["Order Type", "Trade Date", "Average Price", "Quantity"]
            ),
            other => panic!("Expected MissingColumns, got {:?}", other),
        }
    }

    #[test]
    fn test_header_cells_cleaned() {
        let h = header(&[
            "\u{feff}Symbol",
            " \"Order Type\" ",
            "Trade Date ",
            "Average Price",
            "Quantity",
            "Quantity",
        ]);
        let idx = resolve_columns(&h, &ColumnNames::default()).unwrap();
        assert_eq!(idx.instrument, 0);
        assert_eq!(idx.order_type, 1);
        // First occurrence wins.
        assert_eq!(idx.quantity, 4);
    }
}
