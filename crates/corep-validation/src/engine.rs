//! ValidationEngine — runs all six rule categories and aggregates
//! findings into one report.

use tracing::debug;

use corep_core::models::{ClassificationItem, Finding, ValidationReport};
use corep_core::schema::TemplateSchema;

use crate::rules::{
    aggregate_consistency, citation_presence, code_validity, deduction_completeness,
    required_fields, sign_consistency,
};

/// Pure function of an item sequence and the template schema.
#[derive(Debug, Default)]
pub struct ValidationEngine;

impl ValidationEngine {
    pub fn new() -> Self {
        Self
    }

    /// Run all rule categories, in a fixed order, and derive the overall
    /// status. Deterministic: same items + schema always yield the same
    /// report.
    pub fn validate(
        &self,
        items: &[ClassificationItem],
        schema: &TemplateSchema,
    ) -> ValidationReport {
        let mut findings: Vec<Finding> = Vec::new();

        findings.extend(required_fields::check(items));
        findings.extend(code_validity::check(items, schema));
        findings.extend(sign_consistency::check(items, schema));
        findings.extend(deduction_completeness::check(items));
        findings.extend(citation_presence::check(items));
        findings.extend(aggregate_consistency::check(items));

        let report = ValidationReport::from_findings(findings);
        debug!(
            status = ?report.status,
            errors = report.error_count(),
            warnings = report.warning_count(),
            items = items.len(),
            "validation complete"
        );
        report
    }
}
