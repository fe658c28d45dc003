//! Every item should carry at least one citation. Missing citations are
//! warnings — a classification may be plausible without a perfectly
//! matched source.

use corep_core::models::{ClassificationItem, Finding};

pub const RULE_ID: &str = "CITATION_PRESENCE";

pub fn check(items: &[ClassificationItem]) -> Vec<Finding> {
    items
        .iter()
        .enumerate()
        .filter(|(_, item)| !item.is_cited())
        .map(|(idx, item)| {
            Finding::warning(
                RULE_ID,
                format!("item {} ('{}') carries no citation", idx, item.description),
                Some(idx),
            )
        })
        .collect()
}
