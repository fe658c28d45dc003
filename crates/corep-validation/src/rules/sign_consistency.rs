//! Amount signs must match the configured polarity of the target row.
//! Only rows the schema knows are checked — unknown codes are the
//! code-validity rule's finding, not a double report.

use rust_decimal::Decimal;

use corep_core::models::{ClassificationItem, Finding};
use corep_core::schema::TemplateSchema;

pub const RULE_ID: &str = "SIGN_CONSISTENCY";

pub fn check(items: &[ClassificationItem], schema: &TemplateSchema) -> Vec<Finding> {
    let mut findings = Vec::new();
    for (idx, item) in items.iter().enumerate() {
        let Some(row) = schema.row(&item.row_code) else {
            continue;
        };
        let is_negative = item.amount < Decimal::ZERO;
        let is_zero = item.amount == Decimal::ZERO;
        if !row.polarity.accepts(is_negative, is_zero) {
            findings.push(Finding::error(
                RULE_ID,
                format!(
                    "item {} ('{}') reports {} on row {} ({}), which expects {:?} amounts",
                    idx, item.description, item.amount, row.code, row.label, row.polarity
                ),
                Some(idx),
            ));
        }
    }
    findings
}
