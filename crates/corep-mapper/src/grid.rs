//! The in-memory reporting grid.

use std::collections::BTreeMap;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use corep_core::constants::EXPORT_DECIMAL_PLACES;

/// Cell values keyed by (row code, column code), in code order.
///
/// Multiple items may share a cell; amounts are summed exactly in item
/// order. Iteration order is the BTreeMap key order, so rendering is
/// deterministic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TemplateGrid {
    cells: BTreeMap<(String, String), Decimal>,
}

impl TemplateGrid {
    pub fn new() -> Self {
        Self {
            cells: BTreeMap::new(),
        }
    }

    /// Add an amount into a cell, summing with any existing value.
    pub fn add(&mut self, row: &str, column: &str, amount: Decimal) {
        *self
            .cells
            .entry((row.to_string(), column.to_string()))
            .or_insert(Decimal::ZERO) += amount;
    }

    /// Overwrite a cell (used for derived rows).
    pub fn set(&mut self, row: &str, column: &str, amount: Decimal) {
        self.cells
            .insert((row.to_string(), column.to_string()), amount);
    }

    /// Exact cell value; zero for untouched cells.
    pub fn cell(&self, row: &str, column: &str) -> Decimal {
        self.cells
            .get(&(row.to_string(), column.to_string()))
            .copied()
            .unwrap_or(Decimal::ZERO)
    }

    /// Cell value rounded to cents (half-up) for export.
    pub fn cell_rounded(&self, row: &str, column: &str) -> Decimal {
        self.cell(row, column)
            .round_dp_with_strategy(EXPORT_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
    }

    /// Populated cells in (row, column) order.
    pub fn cells(&self) -> impl Iterator<Item = (&(String, String), &Decimal)> {
        self.cells.iter()
    }

    pub fn populated_count(&self) -> usize {
        self.cells.len()
    }
}
