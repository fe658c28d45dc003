//! Every item must carry a non-empty description, row code, and column
//! code. The amount is structurally present (typed Decimal), so only the
//! text fields can be missing.

use corep_core::models::{ClassificationItem, Finding};

pub const RULE_ID: &str = "REQUIRED_FIELDS";

pub fn check(items: &[ClassificationItem]) -> Vec<Finding> {
    let mut findings = Vec::new();
    for (idx, item) in items.iter().enumerate() {
        if item.description.trim().is_empty() {
            findings.push(Finding::error(
                RULE_ID,
                format!("item {} has an empty description", idx),
                Some(idx),
            ));
        }
        if item.row_code.trim().is_empty() {
            findings.push(Finding::error(
                RULE_ID,
                format!("item {} has an empty row code", idx),
                Some(idx),
            ));
        }
        if item.column_code.trim().is_empty() {
            findings.push(Finding::error(
                RULE_ID,
                format!("item {} has an empty column code", idx),
                Some(idx),
            ));
        }
        if item.justification.trim().is_empty() {
            findings.push(Finding::warning(
                RULE_ID,
                format!("item {} ('{}') has no justification", idx, item.description),
                Some(idx),
            ));
        }
    }
    findings
}
