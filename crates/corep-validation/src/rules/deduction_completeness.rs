//! Every deduction must reduce a capital base reported in the same run.
//! A deduction with no CET1/AT1/T2 base item alongside it cannot reduce
//! anything — that is a warning, not an error, because the base may be
//! reported in a separate run.

use corep_core::models::{Category, ClassificationItem, Finding};

pub const RULE_ID: &str = "DEDUCTION_COMPLETENESS";

pub fn check(items: &[ClassificationItem]) -> Vec<Finding> {
    let has_base = items.iter().any(|i| {
        matches!(i.category, Category::Cet1 | Category::At1 | Category::T2)
    });

    let mut findings = Vec::new();
    for (idx, item) in items.iter().enumerate() {
        if item.category == Category::Deduction && !has_base {
            findings.push(Finding::warning(
                RULE_ID,
                format!(
                    "item {} ('{}') is a deduction but no CET1/AT1/T2 base total is reported in this run",
                    idx, item.description
                ),
                Some(idx),
            ));
        }
    }
    findings
}
