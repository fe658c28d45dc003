//! Export entry points. Results are immutable post-completion, so
//! callers may re-export at any time.

use corep_audit::AuditLogger;
use corep_core::errors::{CorepError, CorepResult};
use corep_core::models::{AnalysisResult, AuditEvent};
use corep_core::schema::TemplateSchema;
use corep_mapper::{to_rows, ExportRow, TemplateMapper};

/// Project a completed result onto the tabular grid for rendering.
///
/// A run whose validation failed blocks export — the result itself stays
/// available for inspection, but no grid leaves the pipeline.
pub fn to_tabular_export(
    result: &AnalysisResult,
    schema: &TemplateSchema,
) -> CorepResult<Vec<ExportRow>> {
    if result.validation.blocks_export() {
        return Err(CorepError::ExportBlocked {
            session_id: result.session_id.clone(),
        });
    }
    // Mapping is idempotent: re-mapping the stored items reproduces the
    // exact grid the run computed.
    let mapped = TemplateMapper::new().map(&result.items, schema);
    Ok(to_rows(&mapped, schema))
}

/// Export a session's audit trail in exact append order.
pub fn to_audit_export(audit: &AuditLogger, session_id: &str) -> CorepResult<Vec<AuditEvent>> {
    audit.export(session_id)
}
