//! # corep-mapper
//!
//! Projects validated classification items onto the fixed reporting grid
//! and computes derived totals. Exact decimal arithmetic throughout —
//! mapping the same items twice yields identical grids and totals.
//!
//! No file I/O: the mapper returns in-memory structures an external
//! exporter renders.

pub mod export;
pub mod grid;
pub mod mapper;

pub use export::{to_breakdown, to_rows, BreakdownEntry, ExportRow};
pub use grid::TemplateGrid;
pub use mapper::{MappedTemplate, TemplateMapper};
