//! One module per rule category. Each exposes a `RULE_ID` constant and a
//! pure `check(...) -> Vec<Finding>`.

pub mod aggregate_consistency;
pub mod citation_presence;
pub mod code_validity;
pub mod deduction_completeness;
pub mod required_fields;
pub mod sign_consistency;
