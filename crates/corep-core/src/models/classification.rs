use std::collections::BTreeSet;
use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Capital category a classified item belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Cet1,
    At1,
    T2,
    /// Contra bucket — amounts are carried negative.
    Deduction,
    Other,
}

impl Category {
    /// Whether amounts in this category are expected to be negative.
    pub fn is_contra(self) -> bool {
        matches!(self, Category::Deduction)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Cet1 => "cet1",
            Category::At1 => "at1",
            Category::T2 => "t2",
            Category::Deduction => "deduction",
            Category::Other => "other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One classified financial item proposed by the reasoning stage.
///
/// Invariants (enforced by the validation engine, not the constructor):
/// the amount's sign matches the category polarity (deductions negative),
/// and `row_code`/`column_code` belong to the template's valid code set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationItem {
    pub description: String,
    /// Signed monetary amount. Exact decimal — never a binary float.
    pub amount: Decimal,
    pub row_code: String,
    pub column_code: String,
    pub category: Category,
    /// Narrative justification citing the regulatory text.
    pub justification: String,
    /// Chunk ids grounding this classification. Ordered and deduplicated.
    pub citations: BTreeSet<String>,
}

impl ClassificationItem {
    /// Whether the item carries at least one citation.
    pub fn is_cited(&self) -> bool {
        !self.citations.is_empty()
    }
}
