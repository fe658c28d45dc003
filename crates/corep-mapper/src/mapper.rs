//! TemplateMapper — item projection plus the fixed total formulas.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use corep_core::models::{Category, ClassificationItem};
use corep_core::schema::TemplateSchema;

use crate::grid::TemplateGrid;

/// Derived C01.00 rows and the source rows each sums. "of which" memo
/// rows (020) are excluded from subtotals. Order matters: later rows
/// reference earlier derived values.
const DERIVED_ROWS: &[(&str, &[&str])] = &[
    // CET1 before deductions
    ("090", &["010", "030", "040", "050", "060", "070", "080"]),
    // Total deductions from CET1 (amounts carried negative)
    ("130", &["100", "110", "120"]),
    // CET1 = before-deductions + deductions
    ("140", &["090", "130"]),
    // T1 = CET1 + AT1
    ("160", &["140", "150"]),
    // Total Own Funds = T1 + T2
    ("180", &["160", "170"]),
];

/// Grid plus totals for one mapped run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MappedTemplate {
    pub template: String,
    pub grid: TemplateGrid,
    /// Named totals per the fixed formula table keyed by category:
    /// CET1 is net of deductions; AT1/T2/other are plain sums;
    /// the deduction entry is the (negative) deduction sum itself.
    pub totals: BTreeMap<Category, Decimal>,
    /// T1 = CET1 + AT1.
    pub tier1: Decimal,
    /// Total own funds = T1 + T2.
    pub total_own_funds: Decimal,
}

/// Projects validated items onto the template grid.
#[derive(Debug, Default)]
pub struct TemplateMapper;

impl TemplateMapper {
    pub fn new() -> Self {
        Self
    }

    /// Map items onto the grid and compute totals. Idempotent and pure —
    /// exact decimal arithmetic, no hidden state.
    pub fn map(&self, items: &[ClassificationItem], schema: &TemplateSchema) -> MappedTemplate {
        let mut grid = TemplateGrid::new();
        for item in items {
            grid.add(&item.row_code, &item.column_code, item.amount);
        }

        // Derived rows, per column, in formula order. Items mapped
        // directly onto a subtotal row are kept: the cell is the direct
        // contributions plus the computed sum, never an overwrite.
        let columns: Vec<String> = schema.column_codes().map(str::to_string).collect();
        for (derived, sources) in DERIVED_ROWS {
            // Only rows the schema marks derived get a computed subtotal;
            // custom grids without them are left untouched.
            if !schema.row(derived).is_some_and(|r| r.derived) {
                continue;
            }
            for column in &columns {
                let direct = grid.cell(derived, column);
                let sum: Decimal = sources.iter().map(|r| grid.cell(r, column)).sum();
                grid.set(derived, column, direct + sum);
            }
        }

        // Category sums in item order.
        let mut sums: BTreeMap<Category, Decimal> = BTreeMap::new();
        for item in items {
            *sums.entry(item.category).or_insert(Decimal::ZERO) += item.amount;
        }
        let deductions = sums.get(&Category::Deduction).copied().unwrap_or(Decimal::ZERO);

        // Formula table keyed by category.
        let mut totals: BTreeMap<Category, Decimal> = BTreeMap::new();
        let cet1 = sums.get(&Category::Cet1).copied().unwrap_or(Decimal::ZERO) + deductions;
        let at1 = sums.get(&Category::At1).copied().unwrap_or(Decimal::ZERO);
        let t2 = sums.get(&Category::T2).copied().unwrap_or(Decimal::ZERO);
        totals.insert(Category::Cet1, cet1);
        totals.insert(Category::At1, at1);
        totals.insert(Category::T2, t2);
        totals.insert(Category::Deduction, deductions);
        totals.insert(
            Category::Other,
            sums.get(&Category::Other).copied().unwrap_or(Decimal::ZERO),
        );

        let tier1 = cet1 + at1;
        let total_own_funds = tier1 + t2;

        debug!(
            template = %schema.template,
            items = items.len(),
            cells = grid.populated_count(),
            %cet1,
            %tier1,
            %total_own_funds,
            "mapping complete"
        );

        MappedTemplate {
            template: schema.template.clone(),
            grid,
            totals,
            tier1,
            total_own_funds,
        }
    }
}
