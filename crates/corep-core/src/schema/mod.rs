//! Static template schemas — the fixed reporting grids classified items
//! are projected onto. Loaded once, read-only for the process lifetime.

mod template;

pub use template::{ColumnSpec, Polarity, RowSpec, TemplateSchema};
