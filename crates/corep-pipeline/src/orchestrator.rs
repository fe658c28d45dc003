//! AnalysisPipeline — sequences the stages and owns failure policy.

use std::sync::Arc;

use serde_json::json;
use tracing::{error, info};

use corep_audit::AuditLogger;
use corep_core::config::PipelineConfig;
use corep_core::errors::{CorepError, CorepResult, ReasoningError, RetrievalError};
use corep_core::models::{
    AnalysisResult, EventType, FailureKind, Finding, ValidationReport,
};
use corep_core::schema::TemplateSchema;
use corep_core::traits::{IChunkIndex, ILanguageModel};
use corep_mapper::TemplateMapper;
use corep_reasoning::ReasoningEngine;
use corep_retrieval::RetrievalOrchestrator;
use corep_validation::ValidationEngine;

use crate::analyze_span;
use crate::cancel::CancelToken;
use crate::state::PipelineState;

/// Rule id for the synthetic finding attached to a failed run.
pub const RULE_PIPELINE_FAILURE: &str = "PIPELINE_FAILURE";

/// Fresh session identifier for callers that do not bring their own.
pub fn new_session_id() -> String {
    format!("corep-{}", uuid::Uuid::new_v4())
}

/// One configured pipeline. Cheap to share across sessions: all state
/// for a run lives in that run's `AnalysisResult` and audit trail.
pub struct AnalysisPipeline {
    retrieval: RetrievalOrchestrator,
    reasoning: ReasoningEngine,
    validation: ValidationEngine,
    mapper: TemplateMapper,
    schema: TemplateSchema,
    audit: Arc<AuditLogger>,
    config: PipelineConfig,
}

impl AnalysisPipeline {
    /// Build a pipeline from its collaborators. The template schema is
    /// resolved from `config.template_version` once, here — never per run.
    pub fn new(
        index: Arc<dyn IChunkIndex>,
        model: Arc<dyn ILanguageModel>,
        audit: Arc<AuditLogger>,
        config: PipelineConfig,
    ) -> CorepResult<Self> {
        config.validate()?;
        let schema = TemplateSchema::for_version(&config.template_version)?;
        Ok(Self {
            retrieval: RetrievalOrchestrator::new(index, Arc::clone(&audit)),
            reasoning: ReasoningEngine::new(model, Arc::clone(&audit), config.temperature),
            validation: ValidationEngine::new(),
            mapper: TemplateMapper::new(),
            schema,
            audit,
            config,
        })
    }

    pub fn schema(&self) -> &TemplateSchema {
        &self.schema
    }

    pub fn audit(&self) -> &Arc<AuditLogger> {
        &self.audit
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Run the full pipeline for one session. Never panics across this
    /// boundary: a failed stage yields a partial result with
    /// `validation.status == Fail` and a typed `FailureKind`.
    pub fn analyze(
        &self,
        question: &str,
        scenario: &str,
        top_k: usize,
        session_id: &str,
    ) -> AnalysisResult {
        self.analyze_with_cancel(question, scenario, top_k, session_id, &CancelToken::new())
    }

    /// `analyze` with a caller-held cancellation token. Cancellation is
    /// checked at every state transition, not mid-external-call.
    pub fn analyze_with_cancel(
        &self,
        question: &str,
        scenario: &str,
        top_k: usize,
        session_id: &str,
        cancel: &CancelToken,
    ) -> AnalysisResult {
        let span = analyze_span!(session_id);
        let _guard = span.enter();

        let top_k = if top_k == 0 {
            self.config.default_top_k
        } else {
            top_k
        };

        let mut result = AnalysisResult::new(session_id, question, scenario);
        let mut state = PipelineState::Received;

        self.audit.log(
            session_id,
            EventType::Received,
            json!({
                "question": question,
                "scenario_chars": scenario.len(),
                "top_k": top_k,
            }),
        );

        // ── Retrieval ──
        match self.advance(&mut state, PipelineState::Retrieving, cancel) {
            Ok(()) => {}
            Err(e) => return self.fail(result, state, e),
        }
        let retrieved = match self.retrieval.retrieve(session_id, question, top_k) {
            Ok(r) => r,
            Err(e) => return self.fail(result, state, e),
        };
        result.retrieved = Some(retrieved.clone());

        // ── Reasoning (single parse-retry internal to the engine) ──
        match self.advance(&mut state, PipelineState::Reasoning, cancel) {
            Ok(()) => {}
            Err(e) => return self.fail(result, state, e),
        }
        let outcome = match self
            .reasoning
            .analyze(session_id, question, scenario, &retrieved)
        {
            Ok(o) => o,
            Err(e) => return self.fail(result, state, e),
        };
        result.items = outcome.items;
        let reasoning_findings = outcome.findings;

        // ── Validation ──
        match self.advance(&mut state, PipelineState::Validating, cancel) {
            Ok(()) => {}
            Err(e) => return self.fail(result, state, e),
        }
        let mut findings = reasoning_findings;
        let report = self.validation.validate(&result.items, &self.schema);
        findings.extend(report.findings);
        result.validation = ValidationReport::from_findings(findings);

        self.audit.log(
            session_id,
            EventType::Validation,
            json!({
                "status": result.validation.status,
                "errors": result.validation.error_count(),
                "warnings": result.validation.warning_count(),
                "items": result.items.len(),
            }),
        );

        // ── Mapping ──
        match self.advance(&mut state, PipelineState::Mapping, cancel) {
            Ok(()) => {}
            Err(e) => return self.fail(result, state, e),
        }
        let mapped = self.mapper.map(&result.items, &self.schema);
        result.totals = mapped.totals.clone();

        self.audit.log(
            session_id,
            EventType::Mapping,
            json!({
                "template": mapped.template,
                "items_mapped": result.items.len(),
                "cells_populated": mapped.grid.populated_count(),
                "total_own_funds": mapped.total_own_funds.to_string(),
            }),
        );

        match self.advance(&mut state, PipelineState::Complete, cancel) {
            Ok(()) => {}
            Err(e) => return self.fail(result, state, e),
        }

        info!(
            session_id = %session_id,
            items = result.items.len(),
            status = ?result.validation.status,
            "analysis complete"
        );
        result
    }

    /// Check cancellation, then move the state machine forward.
    fn advance(
        &self,
        state: &mut PipelineState,
        to: PipelineState,
        cancel: &CancelToken,
    ) -> CorepResult<()> {
        if cancel.is_cancelled() {
            return Err(CorepError::Cancelled {
                stage: state.as_str().to_string(),
            });
        }
        debug_assert!(state.can_advance_to(to), "illegal transition {state} -> {to}");
        *state = to;
        Ok(())
    }

    /// Enter the terminal Failed state: emit exactly one Failure audit
    /// event, force the validation status to Fail, record the typed
    /// reason, and hand the partial result back.
    fn fail(
        &self,
        mut result: AnalysisResult,
        stage: PipelineState,
        err: CorepError,
    ) -> AnalysisResult {
        let kind = failure_kind(&err);

        error!(
            session_id = %result.session_id,
            stage = stage.as_str(),
            kind = %kind,
            error = %err,
            "pipeline failed"
        );

        self.audit.log(
            &result.session_id,
            EventType::Failure,
            json!({
                "stage": stage.as_str(),
                "kind": kind,
                "reason": err.to_string(),
            }),
        );

        let mut findings = std::mem::take(&mut result.validation.findings);
        findings.push(Finding::error(
            RULE_PIPELINE_FAILURE,
            format!("run failed at stage {}: {}", stage.as_str(), err),
            None,
        ));
        result.validation = ValidationReport::failed(findings);
        result.failure = Some(kind);
        result
    }
}

/// Map an error to the typed reason recorded on the result.
fn failure_kind(err: &CorepError) -> FailureKind {
    match err {
        CorepError::Retrieval(RetrievalError::IndexUnavailable { .. })
        | CorepError::Retrieval(RetrievalError::SearchFailed { .. }) => {
            FailureKind::RetrievalUnavailable
        }
        CorepError::Retrieval(RetrievalError::Timeout { .. })
        | CorepError::Reasoning(ReasoningError::Timeout { .. }) => FailureKind::Timeout,
        CorepError::Reasoning(ReasoningError::ContractViolation { .. }) => {
            FailureKind::ReasoningContractViolation
        }
        CorepError::Reasoning(ReasoningError::ModelUnreachable { .. }) => {
            FailureKind::ModelUnreachable
        }
        CorepError::Template(_) => FailureKind::SchemaMismatch,
        CorepError::Cancelled { .. } => FailureKind::Cancelled,
        CorepError::Audit(_) | CorepError::Config { .. } | CorepError::ExportBlocked { .. } => {
            FailureKind::Internal
        }
    }
}
