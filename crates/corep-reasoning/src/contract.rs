//! The output contract: field names, types, enumerated categories.
//!
//! Model output is parsed into `RawAnalysis` and only then converted to
//! domain `ClassificationItem`s, so a malformed response is rejected in
//! one place with a message the repair prompt can quote.

use std::collections::BTreeSet;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use corep_core::models::{Category, ClassificationItem};

/// Top-level shape the model must produce.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawAnalysis {
    pub template: String,
    pub fields: Vec<RawField>,
}

/// One classified item as the model reports it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawField {
    pub row: String,
    pub column: String,
    /// Kept as a JSON number so exact decimal conversion happens on our
    /// side, not through an f64 round-trip.
    pub value: serde_json::Number,
    pub item_name: String,
    pub category: Category,
    pub justification: String,
    #[serde(default)]
    pub citations: Vec<String>,
}

impl RawField {
    /// Exact decimal conversion of the reported value.
    pub fn amount(&self) -> Result<Decimal, String> {
        let text = self.value.to_string();
        Decimal::from_str(&text)
            .or_else(|_| Decimal::from_scientific(&text))
            .map_err(|e| format!("value {} is not a valid decimal: {}", text, e))
    }

    /// Convert to the domain item. Citations are deduplicated and ordered.
    pub fn into_item(self) -> Result<ClassificationItem, String> {
        let amount = self.amount()?;
        let citations: BTreeSet<String> = self.citations.into_iter().collect();
        Ok(ClassificationItem {
            description: self.item_name,
            amount,
            row_code: self.row,
            column_code: self.column,
            category: self.category,
            justification: self.justification,
            citations,
        })
    }
}

/// Parse model output as the contract schema.
///
/// Tolerates a fenced ```json block around the object (models add these
/// despite instructions) but nothing else.
pub fn parse_raw_analysis(text: &str) -> Result<RawAnalysis, String> {
    let stripped = strip_code_fence(text.trim());
    serde_json::from_str(stripped).map_err(|e| e.to_string())
}

fn strip_code_fence(text: &str) -> &str {
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    // Drop an optional language tag on the fence line.
    let rest = match rest.split_once('\n') {
        Some((_lang, body)) => body,
        None => rest,
    };
    rest.strip_suffix("```").map(str::trim).unwrap_or(rest)
}
