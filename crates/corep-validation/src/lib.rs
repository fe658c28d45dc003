//! # corep-validation
//!
//! Rule-based validation of a proposed item sequence against the template
//! schema. Pure and deterministic: no external calls, no side effects.
//!
//! ## Rule categories
//! 1. **Required-field** — non-empty description, codes, amount present
//! 2. **Code-validity** — row/column codes exist in the schema
//! 3. **Sign/category consistency** — amount sign matches row polarity
//! 4. **Deduction-completeness** — every deduction reduces a base total
//! 5. **Citation-presence** — every item carries at least one citation
//! 6. **Aggregate consistency** — non-contra category totals not negative
//!
//! Overall status: Fail if any error finding, else Warn if any warning,
//! else Pass. A Fail blocks export downstream but the result is still
//! returned for caller inspection.

pub mod engine;
pub mod rules;

pub use engine::ValidationEngine;
