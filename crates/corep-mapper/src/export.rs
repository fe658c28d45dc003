//! Tabular views of a mapped template, ready for an external renderer
//! (spreadsheet writer or UI table). No file I/O here.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use corep_core::models::ClassificationItem;
use corep_core::schema::TemplateSchema;

use crate::mapper::MappedTemplate;

/// One template row with its label and per-column (rounded) values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportRow {
    pub code: String,
    pub label: String,
    /// Column code → value rounded to cents. Every schema column appears.
    pub values: BTreeMap<String, Decimal>,
}

/// A grid representation: one row per schema row code, in code order,
/// zeros for untouched cells.
pub fn to_rows(mapped: &MappedTemplate, schema: &TemplateSchema) -> Vec<ExportRow> {
    schema
        .row_specs()
        .map(|row| {
            let values = schema
                .column_codes()
                .map(|col| (col.to_string(), mapped.grid.cell_rounded(&row.code, col)))
                .collect();
            ExportRow {
                code: row.code.clone(),
                label: row.label.clone(),
                values,
            }
        })
        .collect()
}

/// One mapped item with its narrative, for the detailed breakdown sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakdownEntry {
    pub row_code: String,
    pub column_code: String,
    pub description: String,
    pub amount: Decimal,
    pub category: String,
    pub justification: String,
    pub citations: Vec<String>,
}

/// Item-level breakdown in item order.
pub fn to_breakdown(items: &[ClassificationItem]) -> Vec<BreakdownEntry> {
    items
        .iter()
        .map(|item| BreakdownEntry {
            row_code: item.row_code.clone(),
            column_code: item.column_code.clone(),
            description: item.description.clone(),
            amount: item.amount,
            category: item.category.to_string(),
            justification: item.justification.clone(),
            citations: item.citations.iter().cloned().collect(),
        })
        .collect()
}
