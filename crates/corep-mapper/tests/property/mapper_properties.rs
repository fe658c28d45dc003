//! Property tests: mapping is pure, idempotent, and its totals obey the
//! roll-up identities.

use std::collections::BTreeSet;

use proptest::prelude::*;
use rust_decimal::Decimal;

use corep_core::models::{Category, ClassificationItem};
use corep_core::schema::TemplateSchema;
use corep_mapper::TemplateMapper;

fn item_strategy() -> impl Strategy<Value = ClassificationItem> {
    // Non-derived rows only, with the sign convention each expects.
    let rows = prop::sample::select(vec![
        ("010", Category::Cet1, 1i64),
        ("030", Category::Cet1, 1),
        ("050", Category::Cet1, 1),
        ("100", Category::Deduction, -1),
        ("110", Category::Deduction, -1),
        ("120", Category::Deduction, -1),
        ("150", Category::At1, 1),
        ("170", Category::T2, 1),
    ]);
    let columns = prop::sample::select(vec!["010", "020", "030"]);
    (rows, columns, 1i64..1_000_000_000).prop_map(
        |((row, category, sign), column, magnitude)| ClassificationItem {
            description: format!("Item on row {row}"),
            amount: Decimal::from(sign * magnitude),
            row_code: row.to_string(),
            column_code: column.to_string(),
            category,
            justification: "j".to_string(),
            citations: BTreeSet::from(["chunk-0001".to_string()]),
        },
    )
}

proptest! {
    // Mapping the same items twice yields identical grids and totals.
    #[test]
    fn mapping_is_idempotent(
        items in prop::collection::vec(item_strategy(), 0..12)
    ) {
        let schema = TemplateSchema::c01_00();
        let mapper = TemplateMapper::new();
        let first = mapper.map(&items, &schema);
        let second = mapper.map(&items, &schema);
        prop_assert_eq!(first, second);
    }

    // CET1 is net of deductions; T1 and Total Own Funds stack on top.
    #[test]
    fn totals_obey_the_roll_up_identities(
        items in prop::collection::vec(item_strategy(), 0..12)
    ) {
        let mapped = TemplateMapper::new().map(&items, &TemplateSchema::c01_00());

        let sum_for = |category: Category| -> Decimal {
            items
                .iter()
                .filter(|i| i.category == category)
                .map(|i| i.amount)
                .sum()
        };
        let deductions = sum_for(Category::Deduction);
        prop_assert_eq!(mapped.totals[&Category::Cet1], sum_for(Category::Cet1) + deductions);
        prop_assert_eq!(mapped.totals[&Category::Deduction], deductions);
        prop_assert_eq!(
            mapped.tier1,
            mapped.totals[&Category::Cet1] + mapped.totals[&Category::At1]
        );
        prop_assert_eq!(
            mapped.total_own_funds,
            mapped.tier1 + mapped.totals[&Category::T2]
        );
    }

    // Item order never changes the grid: cells are exact sums.
    #[test]
    fn mapping_is_order_insensitive(
        items in prop::collection::vec(item_strategy(), 0..12)
    ) {
        let schema = TemplateSchema::c01_00();
        let mapper = TemplateMapper::new();
        let forward = mapper.map(&items, &schema);

        let mut reversed = items.clone();
        reversed.reverse();
        let backward = mapper.map(&reversed, &schema);

        prop_assert_eq!(forward.grid, backward.grid);
        prop_assert_eq!(forward.totals, backward.totals);
    }

    // Every populated cell sits on a known (row, column) pair.
    #[test]
    fn populated_cells_stay_within_the_schema(
        items in prop::collection::vec(item_strategy(), 0..12)
    ) {
        let schema = TemplateSchema::c01_00();
        let mapped = TemplateMapper::new().map(&items, &schema);
        for ((row, column), _) in mapped.grid.cells() {
            prop_assert!(schema.is_valid_row(row));
            prop_assert!(schema.is_valid_column(column));
        }
    }
}
