//! End-to-end pipeline tests over the in-memory index and a scripted
//! model: happy path, every failure mode, and export gating.

use std::str::FromStr;
use std::sync::Arc;

use rust_decimal::Decimal;

use corep_audit::AuditLogger;
use corep_core::config::PipelineConfig;
use corep_core::errors::{CorepError, CorepResult, ReasoningError};
use corep_core::models::{Category, Chunk, EventType, FailureKind, ValidationStatus};
use corep_core::traits::{ILanguageModel, ModelResponse};
use corep_pipeline::orchestrator::RULE_PIPELINE_FAILURE;
use corep_pipeline::{
    new_session_id, to_audit_export, to_tabular_export, AnalysisPipeline, CancelToken,
};
use corep_retrieval::MemoryChunkIndex;
use test_fixtures::{load_fixture, load_fixture_text};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("corep=debug")
        .with_test_writer()
        .try_init();
}

/// Always answers with the same text.
struct StaticModel {
    text: String,
}

impl StaticModel {
    fn golden() -> Self {
        Self {
            text: load_fixture_text("golden/model_output.json"),
        }
    }

    fn with_text(text: &str) -> Self {
        Self {
            text: text.to_string(),
        }
    }
}

impl ILanguageModel for StaticModel {
    fn complete(&self, _prompt: &str, _temperature: f64) -> CorepResult<ModelResponse> {
        Ok(ModelResponse {
            text: self.text.clone(),
            model: "gemini-2.5-flash".to_string(),
            prompt_tokens: Some(1500),
            completion_tokens: Some(250),
        })
    }
}

/// Always fails, as if the endpoint were down.
struct UnreachableModel;

impl ILanguageModel for UnreachableModel {
    fn complete(&self, _prompt: &str, _temperature: f64) -> CorepResult<ModelResponse> {
        Err(ReasoningError::ModelUnreachable {
            reason: "connection refused".to_string(),
        }
        .into())
    }
}

fn fixture_index() -> MemoryChunkIndex {
    let chunks: Vec<Chunk> = load_fixture("chunks/regulatory_chunks.json");
    MemoryChunkIndex::from_chunks(chunks)
}

fn make_pipeline(
    index: MemoryChunkIndex,
    model: Arc<dyn ILanguageModel>,
) -> (AnalysisPipeline, Arc<AuditLogger>) {
    init_tracing();
    let audit = Arc::new(AuditLogger::new());
    let pipeline = AnalysisPipeline::new(
        Arc::new(index),
        model,
        Arc::clone(&audit),
        PipelineConfig::default(),
    )
    .unwrap();
    (pipeline, audit)
}

const QUESTION: &str = "How should the share issue and goodwill be reported on C01.00?";
const SCENARIO: &str =
    "A bank issues 50,000,000 of ordinary shares and carries 2,000,000 of goodwill.";

// ─── Happy path ───

#[test]
fn golden_scenario_runs_to_completion() {
    let (pipeline, audit) = make_pipeline(fixture_index(), Arc::new(StaticModel::golden()));

    let result = pipeline.analyze(QUESTION, SCENARIO, 6, "s-golden");

    assert!(result.completed());
    assert_eq!(result.failure, None);
    assert_eq!(result.validation.status, ValidationStatus::Pass);
    assert_eq!(result.items.len(), 2);
    assert_eq!(result.retrieved.as_ref().unwrap().hits.len(), 6);
    assert_eq!(
        result.totals[&Category::Cet1],
        Decimal::from_str("48000000").unwrap()
    );
    assert_eq!(
        result.totals[&Category::Deduction],
        Decimal::from_str("-2000000").unwrap()
    );

    // One event per stage, gap-free, in stage order.
    let trail = audit.export("s-golden").unwrap();
    let types: Vec<EventType> = trail.iter().map(|e| e.event_type).collect();
    assert_eq!(
        types,
        vec![
            EventType::Received,
            EventType::Retrieval,
            EventType::Reasoning,
            EventType::Validation,
            EventType::Mapping,
        ]
    );
    for (i, event) in trail.iter().enumerate() {
        assert_eq!(event.sequence, i as u64 + 1);
    }
}

#[test]
fn received_event_records_the_query_but_not_the_scenario_text() {
    let (pipeline, audit) = make_pipeline(fixture_index(), Arc::new(StaticModel::golden()));
    pipeline.analyze(QUESTION, SCENARIO, 6, "s-1");

    let trail = audit.export("s-1").unwrap();
    let received = &trail[0];
    assert_eq!(received.payload["question"], QUESTION);
    assert_eq!(received.payload["scenario_chars"], SCENARIO.len());
    assert!(received.payload.get("scenario").is_none());
}

#[test]
fn generated_session_ids_are_unique() {
    let a = new_session_id();
    let b = new_session_id();
    assert_ne!(a, b);
    assert!(a.starts_with("corep-"));
}

#[test]
fn zero_top_k_falls_back_to_the_configured_default() {
    let model = StaticModel::with_text(r#"{"template":"C01.00","fields":[]}"#);
    let (pipeline, _) = make_pipeline(fixture_index(), Arc::new(model));

    let result = pipeline.analyze(QUESTION, SCENARIO, 0, "s-1");
    assert!(result.completed());
    assert_eq!(result.retrieved.unwrap().top_k, 5);
}

// ─── Failure modes ───

#[test]
fn empty_index_fails_with_retrieval_unavailable() {
    let (pipeline, audit) = make_pipeline(MemoryChunkIndex::new(), Arc::new(StaticModel::golden()));

    let result = pipeline.analyze(QUESTION, SCENARIO, 6, "s-fail");

    assert!(!result.completed());
    assert_eq!(result.failure, Some(FailureKind::RetrievalUnavailable));
    assert!(result.retrieved.is_none());
    assert!(result.items.is_empty());
    assert_eq!(result.validation.status, ValidationStatus::Fail);
    assert!(result
        .validation
        .findings
        .iter()
        .any(|f| f.rule_id == RULE_PIPELINE_FAILURE));

    // Exactly one Failure event, after the Received event.
    let trail = audit.export("s-fail").unwrap();
    let failures: Vec<_> = trail
        .iter()
        .filter(|e| e.event_type == EventType::Failure)
        .collect();
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].payload["stage"], "retrieving");
    assert_eq!(failures[0].payload["kind"], "retrieval_unavailable");
}

#[test]
fn persistent_contract_violation_fails_the_run() {
    let model = StaticModel::with_text("I cannot produce JSON today.");
    let (pipeline, audit) = make_pipeline(fixture_index(), Arc::new(model));

    let result = pipeline.analyze(QUESTION, SCENARIO, 6, "s-1");

    assert_eq!(result.failure, Some(FailureKind::ReasoningContractViolation));
    assert_eq!(result.validation.status, ValidationStatus::Fail);
    // Retrieval succeeded before the failure, and the partial result keeps it.
    assert!(result.retrieved.is_some());

    let trail = audit.export("s-1").unwrap();
    let failure = trail
        .iter()
        .find(|e| e.event_type == EventType::Failure)
        .unwrap();
    assert_eq!(failure.payload["stage"], "reasoning");
}

#[test]
fn unreachable_model_is_a_typed_failure() {
    let (pipeline, _) = make_pipeline(fixture_index(), Arc::new(UnreachableModel));
    let result = pipeline.analyze(QUESTION, SCENARIO, 6, "s-1");
    assert_eq!(result.failure, Some(FailureKind::ModelUnreachable));
}

#[test]
fn pre_cancelled_token_fails_before_retrieval() {
    let (pipeline, audit) = make_pipeline(fixture_index(), Arc::new(StaticModel::golden()));
    let cancel = CancelToken::new();
    cancel.cancel();

    let result = pipeline.analyze_with_cancel(QUESTION, SCENARIO, 6, "s-1", &cancel);

    assert_eq!(result.failure, Some(FailureKind::Cancelled));
    assert!(result.retrieved.is_none());

    let trail = audit.export("s-1").unwrap();
    assert!(trail.iter().all(|e| e.event_type != EventType::Retrieval));
    let failures = trail
        .iter()
        .filter(|e| e.event_type == EventType::Failure)
        .count();
    assert_eq!(failures, 1);
}

#[test]
fn invalid_config_is_rejected_at_construction() {
    let config = PipelineConfig {
        default_top_k: 0,
        ..PipelineConfig::default()
    };
    let result = AnalysisPipeline::new(
        Arc::new(fixture_index()),
        Arc::new(StaticModel::golden()),
        Arc::new(AuditLogger::new()),
        config,
    );
    assert!(matches!(result, Err(CorepError::Config { .. })));
}

#[test]
fn unknown_template_version_is_rejected_at_construction() {
    let config = PipelineConfig {
        template_version: "C47.00".to_string(),
        ..PipelineConfig::default()
    };
    let result = AnalysisPipeline::new(
        Arc::new(fixture_index()),
        Arc::new(StaticModel::golden()),
        Arc::new(AuditLogger::new()),
        config,
    );
    assert!(matches!(result, Err(CorepError::Template(_))));
}

// ─── Export gating ───

#[test]
fn completed_run_exports_the_full_grid() {
    let (pipeline, _) = make_pipeline(fixture_index(), Arc::new(StaticModel::golden()));
    let result = pipeline.analyze(QUESTION, SCENARIO, 6, "s-1");

    let rows = to_tabular_export(&result, pipeline.schema()).unwrap();
    assert_eq!(rows.len(), 18);
    let cet1 = rows.iter().find(|r| r.code == "140").unwrap();
    assert_eq!(cet1.values["010"], Decimal::from_str("48000000").unwrap());
}

#[test]
fn failed_run_blocks_tabular_export() {
    let (pipeline, _) = make_pipeline(MemoryChunkIndex::new(), Arc::new(StaticModel::golden()));
    let result = pipeline.analyze(QUESTION, SCENARIO, 6, "s-blocked");

    let err = to_tabular_export(&result, pipeline.schema()).unwrap_err();
    match err {
        CorepError::ExportBlocked { session_id } => assert_eq!(session_id, "s-blocked"),
        other => panic!("expected ExportBlocked, got {other}"),
    }
}

#[test]
fn audit_export_stays_available_for_failed_runs() {
    let (pipeline, audit) = make_pipeline(MemoryChunkIndex::new(), Arc::new(StaticModel::golden()));
    pipeline.analyze(QUESTION, SCENARIO, 6, "s-1");

    let trail = to_audit_export(&audit, "s-1").unwrap();
    assert_eq!(trail.len(), 2); // Received + Failure
    assert!(to_audit_export(&audit, "s-unknown").is_err());
}

#[test]
fn re_export_reproduces_the_run_grid() {
    let (pipeline, _) = make_pipeline(fixture_index(), Arc::new(StaticModel::golden()));
    let result = pipeline.analyze(QUESTION, SCENARIO, 6, "s-1");

    let first = to_tabular_export(&result, pipeline.schema()).unwrap();
    let second = to_tabular_export(&result, pipeline.schema()).unwrap();
    assert_eq!(first, second);
}
