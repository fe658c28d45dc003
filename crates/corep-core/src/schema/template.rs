use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::errors::{CorepResult, TemplateError};
use crate::models::Category;

/// Expected sign of amounts reported on a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Polarity {
    Positive,
    Negative,
    /// Rows that legitimately carry either sign (e.g. transitional
    /// adjustments).
    Either,
}

impl Polarity {
    /// Whether a signed amount satisfies this polarity. Zero always does.
    pub fn accepts(self, is_negative: bool, is_zero: bool) -> bool {
        if is_zero {
            return true;
        }
        match self {
            Polarity::Positive => !is_negative,
            Polarity::Negative => is_negative,
            Polarity::Either => true,
        }
    }
}

/// One template row: code, label, expected category and sign.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RowSpec {
    pub code: String,
    pub label: String,
    pub category: Category,
    pub polarity: Polarity,
    /// Derived rows are computed by the mapper, not reported directly.
    #[serde(default)]
    pub derived: bool,
}

/// One template column: code and label.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnSpec {
    pub code: String,
    pub label: String,
}

/// A fixed reporting grid: valid row/column codes plus per-row
/// category and sign conventions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateSchema {
    /// Template code, e.g. "C01.00".
    pub template: String,
    rows: BTreeMap<String, RowSpec>,
    columns: BTreeMap<String, ColumnSpec>,
}

impl TemplateSchema {
    /// Look up a schema by version code.
    pub fn for_version(version: &str) -> CorepResult<Self> {
        match version {
            "C01.00" => Ok(Self::c01_00()),
            other => Err(TemplateError::UnknownVersion {
                version: other.to_string(),
            }
            .into()),
        }
    }

    /// Parse a schema from TOML text for custom grids.
    pub fn from_toml_str(text: &str) -> CorepResult<Self> {
        let schema: Self = toml::from_str(text).map_err(|e| TemplateError::InvalidDefinition {
            reason: e.to_string(),
        })?;
        if schema.rows.is_empty() || schema.columns.is_empty() {
            return Err(TemplateError::InvalidDefinition {
                reason: "schema must define at least one row and one column".to_string(),
            }
            .into());
        }
        Ok(schema)
    }

    pub fn row(&self, code: &str) -> Option<&RowSpec> {
        self.rows.get(code)
    }

    pub fn column(&self, code: &str) -> Option<&ColumnSpec> {
        self.columns.get(code)
    }

    pub fn is_valid_row(&self, code: &str) -> bool {
        self.rows.contains_key(code)
    }

    pub fn is_valid_column(&self, code: &str) -> bool {
        self.columns.contains_key(code)
    }

    /// Row codes in ascending order.
    pub fn row_codes(&self) -> impl Iterator<Item = &str> {
        self.rows.keys().map(String::as_str)
    }

    /// Column codes in ascending order.
    pub fn column_codes(&self) -> impl Iterator<Item = &str> {
        self.columns.keys().map(String::as_str)
    }

    /// Rows in ascending code order.
    pub fn row_specs(&self) -> impl Iterator<Item = &RowSpec> {
        self.rows.values()
    }

    /// The builtin C01.00 Own Funds grid.
    pub fn c01_00() -> Self {
        use Category::*;
        use Polarity::*;

        let row_table: &[(&str, &str, Category, Polarity, bool)] = &[
            (
                "010",
                "Capital instruments and related share premium accounts",
                Cet1,
                Positive,
                false,
            ),
            ("020", "of which: ordinary shares", Cet1, Positive, false),
            ("030", "Retained earnings", Cet1, Positive, false),
            (
                "040",
                "Accumulated other comprehensive income",
                Cet1,
                Positive,
                false,
            ),
            ("050", "Other reserves", Cet1, Positive, false),
            (
                "060",
                "Funds for general banking risk",
                Cet1,
                Positive,
                false,
            ),
            ("070", "Minority interests", Cet1, Positive, false),
            ("080", "Transitional adjustments", Other, Either, false),
            (
                "090",
                "Common Equity Tier 1 capital before deductions",
                Cet1,
                Positive,
                true,
            ),
            ("100", "Intangible assets", Deduction, Negative, false),
            ("110", "Deferred tax assets", Deduction, Negative, false),
            ("120", "Other deductions", Deduction, Negative, false),
            (
                "130",
                "Total deductions from CET1",
                Deduction,
                Negative,
                true,
            ),
            (
                "140",
                "Common Equity Tier 1 capital (CET1)",
                Cet1,
                Positive,
                true,
            ),
            ("150", "Additional Tier 1 instruments", At1, Positive, false),
            (
                "160",
                "Tier 1 capital (T1 = CET1 + AT1)",
                Other,
                Positive,
                true,
            ),
            ("170", "Tier 2 instruments", T2, Positive, false),
            ("180", "Total Own Funds (T1 + T2)", Other, Positive, true),
        ];

        let rows = row_table
            .iter()
            .map(|(code, label, category, polarity, derived)| {
                (
                    code.to_string(),
                    RowSpec {
                        code: code.to_string(),
                        label: label.to_string(),
                        category: *category,
                        polarity: *polarity,
                        derived: *derived,
                    },
                )
            })
            .collect();

        let columns = [
            ("010", "Amount"),
            ("020", "of which: CRR transitional rules"),
            ("030", "of which: Regulation (EU) No 575/2013"),
        ]
        .iter()
        .map(|(code, label)| {
            (
                code.to_string(),
                ColumnSpec {
                    code: code.to_string(),
                    label: label.to_string(),
                },
            )
        })
        .collect();

        Self {
            template: "C01.00".to_string(),
            rows,
            columns,
        }
    }
}
