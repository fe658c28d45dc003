//! Row and column codes must exist in the template schema.

use corep_core::models::{ClassificationItem, Finding};
use corep_core::schema::TemplateSchema;

pub const RULE_ID: &str = "CODE_VALIDITY";

pub fn check(items: &[ClassificationItem], schema: &TemplateSchema) -> Vec<Finding> {
    let mut findings = Vec::new();
    for (idx, item) in items.iter().enumerate() {
        if !item.row_code.trim().is_empty() && !schema.is_valid_row(&item.row_code) {
            findings.push(Finding::error(
                RULE_ID,
                format!(
                    "item {} ('{}') uses row code {} unknown to template {}",
                    idx, item.description, item.row_code, schema.template
                ),
                Some(idx),
            ));
        }
        if !item.column_code.trim().is_empty() && !schema.is_valid_column(&item.column_code) {
            findings.push(Finding::error(
                RULE_ID,
                format!(
                    "item {} ('{}') uses column code {} unknown to template {}",
                    idx, item.description, item.column_code, schema.template
                ),
                Some(idx),
            ));
        }
    }
    findings
}
