//! Property tests: status derivation and determinism of validation.

use std::collections::BTreeSet;

use proptest::prelude::*;
use rust_decimal::Decimal;

use corep_core::models::{Category, ClassificationItem, Severity, ValidationStatus};
use corep_core::schema::TemplateSchema;
use corep_validation::ValidationEngine;

// Non-derived base rows a model may legitimately target, paired with the
// category and sign that satisfy them.
fn well_formed_item_strategy() -> impl Strategy<Value = ClassificationItem> {
    let rows = prop::sample::select(vec![
        ("010", Category::Cet1, 1i64),
        ("030", Category::Cet1, 1),
        ("100", Category::Deduction, -1),
        ("110", Category::Deduction, -1),
        ("150", Category::At1, 1),
        ("170", Category::T2, 1),
    ]);
    (rows, 1i64..1_000_000_000).prop_map(|((row, category, sign), magnitude)| {
        ClassificationItem {
            description: format!("Item on row {row}"),
            amount: Decimal::from(sign * magnitude),
            row_code: row.to_string(),
            column_code: "010".to_string(),
            category,
            justification: "Per the cited rule.".to_string(),
            citations: BTreeSet::from(["chunk-0001".to_string()]),
        }
    })
}

fn arbitrary_item_strategy() -> impl Strategy<Value = ClassificationItem> {
    let category = prop::sample::select(vec![
        Category::Cet1,
        Category::At1,
        Category::T2,
        Category::Deduction,
        Category::Other,
    ]);
    (
        "[a-z ]{0,20}",
        -1_000_000_000i64..1_000_000_000,
        "[0-9]{0,3}",
        category,
        prop::bool::ANY,
    )
        .prop_map(|(description, amount, row, category, cited)| ClassificationItem {
            description,
            amount: Decimal::from(amount),
            row_code: row,
            column_code: "010".to_string(),
            category,
            justification: "j".to_string(),
            citations: if cited {
                BTreeSet::from(["chunk-0001".to_string()])
            } else {
                BTreeSet::new()
            },
        })
}

proptest! {
    // Same items, same schema: byte-identical report.
    #[test]
    fn validation_is_deterministic(
        items in prop::collection::vec(arbitrary_item_strategy(), 0..10)
    ) {
        let engine = ValidationEngine::new();
        let schema = TemplateSchema::c01_00();
        let first = engine.validate(&items, &schema);
        let second = engine.validate(&items, &schema);
        prop_assert_eq!(first, second);
    }

    // Status is exactly the worst finding severity.
    #[test]
    fn status_matches_worst_finding(
        items in prop::collection::vec(arbitrary_item_strategy(), 0..10)
    ) {
        let report = ValidationEngine::new().validate(&items, &TemplateSchema::c01_00());
        let has_error = report.findings.iter().any(|f| f.severity == Severity::Error);
        let has_warning = report.findings.iter().any(|f| f.severity == Severity::Warning);
        let expected = if has_error {
            ValidationStatus::Fail
        } else if has_warning {
            ValidationStatus::Warn
        } else {
            ValidationStatus::Pass
        };
        prop_assert_eq!(report.status, expected);
        prop_assert_eq!(report.blocks_export(), has_error);
    }

    // Well-formed items never produce error findings. Deduction-only runs
    // may still warn, so only errors are asserted away.
    #[test]
    fn well_formed_items_never_error(
        items in prop::collection::vec(well_formed_item_strategy(), 0..10)
    ) {
        let report = ValidationEngine::new().validate(&items, &TemplateSchema::c01_00());
        prop_assert_eq!(report.error_count(), 0);
        prop_assert!(report.status != ValidationStatus::Fail);
    }
}
