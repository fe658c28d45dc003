//! Category totals must not be negative unless the category is a contra
//! bucket (deductions). A negative CET1/AT1/T2 total means the reported
//! items cannot form a coherent capital position.

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use corep_core::models::{Category, ClassificationItem, Finding};

pub const RULE_ID: &str = "AGGREGATE_CONSISTENCY";

pub fn check(items: &[ClassificationItem]) -> Vec<Finding> {
    let mut totals: BTreeMap<Category, Decimal> = BTreeMap::new();
    for item in items {
        *totals.entry(item.category).or_insert(Decimal::ZERO) += item.amount;
    }

    let mut findings = Vec::new();
    for (category, total) in &totals {
        if !category.is_contra() && *total < Decimal::ZERO {
            findings.push(Finding::error(
                RULE_ID,
                format!("category {} total is negative: {}", category, total),
                None,
            ));
        }
    }
    findings
}
