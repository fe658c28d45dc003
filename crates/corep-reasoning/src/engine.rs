//! ReasoningEngine — prompt, invoke, parse, repair once, ground citations.

use std::sync::Arc;

use serde_json::json;
use tracing::{debug, info, warn};

use corep_audit::AuditLogger;
use corep_core::constants::REASONING_REPAIR_RETRIES;
use corep_core::errors::{AuditError, CorepResult, ReasoningError};
use corep_core::models::{ClassificationItem, EventType, Finding, RetrievalResult};
use corep_core::traits::ILanguageModel;
use corep_retrieval::format_for_prompt;

use crate::contract::parse_raw_analysis;
use crate::prompt::{render_analysis_prompt, render_repair_prompt};

/// Rule id recorded when an item cites a chunk that was not retrieved.
pub const RULE_UNSUPPORTED_CITATION: &str = "UNSUPPORTED_CITATION";

/// What the reasoning stage hands to validation: the grounded items plus
/// findings for every item that was dropped on the way.
#[derive(Debug, Clone)]
pub struct ReasoningOutcome {
    pub items: Vec<ClassificationItem>,
    pub findings: Vec<Finding>,
}

/// Drives the structured reasoning contract against an `ILanguageModel`.
pub struct ReasoningEngine {
    model: Arc<dyn ILanguageModel>,
    audit: Arc<AuditLogger>,
    temperature: f64,
}

impl ReasoningEngine {
    pub fn new(model: Arc<dyn ILanguageModel>, audit: Arc<AuditLogger>, temperature: f64) -> Self {
        Self {
            model,
            audit,
            temperature,
        }
    }

    /// Produce grounded classification items for one run.
    ///
    /// Protocol: render prompt → invoke → parse; on parse failure, retry
    /// once with an explicit correction prompt; a second failure is a
    /// `ContractViolation` and fatal for the run. Items citing unknown
    /// chunk ids are dropped with a recorded finding, not a fatal error.
    pub fn analyze(
        &self,
        session_id: &str,
        question: &str,
        scenario: &str,
        retrieved: &RetrievalResult,
    ) -> CorepResult<ReasoningOutcome> {
        let formatted_rules = format_for_prompt(retrieved);
        let prompt = render_analysis_prompt(question, scenario, &formatted_rules);

        let mut response = self.model.complete(&prompt, self.temperature)?;
        let mut attempts = 1u32;
        let raw = loop {
            match parse_raw_analysis(&response.text) {
                Ok(raw) => break raw,
                Err(parse_error) if (attempts as usize) <= REASONING_REPAIR_RETRIES => {
                    warn!(session_id = %session_id, error = %parse_error, "malformed model output, retrying once");
                    let repair = render_repair_prompt(&prompt, &response.text, &parse_error);
                    response = self.model.complete(&repair, self.temperature)?;
                    attempts += 1;
                }
                Err(parse_error) => {
                    return Err(ReasoningError::ContractViolation {
                        reason: format!("output unparseable after repair retry: {}", parse_error),
                    }
                    .into());
                }
            }
        };

        debug!(
            session_id = %session_id,
            fields = raw.fields.len(),
            attempts,
            "model output parsed"
        );

        // Captured before the fields are consumed below, so the audit
        // trail carries the parsed structure exactly as the model gave it.
        let parsed = serde_json::to_value(&raw).map_err(|e| AuditError::PayloadSerialization {
            reason: e.to_string(),
        })?;

        // Convert and ground each field. A field whose value cannot be an
        // exact decimal violates the contract outright.
        let mut items = Vec::new();
        let mut findings = Vec::new();
        let mut dropped = 0usize;
        for field in raw.fields {
            let item = field
                .into_item()
                .map_err(|reason| ReasoningError::ContractViolation { reason })?;

            let unknown: Vec<&String> = item
                .citations
                .iter()
                .filter(|c| !retrieved.contains_chunk(c))
                .collect();
            if unknown.is_empty() {
                items.push(item);
            } else {
                dropped += 1;
                let message = format!(
                    "item '{}' cites chunks not in this run's retrieval ({}); item dropped",
                    item.description,
                    unknown
                        .iter()
                        .map(|s| s.as_str())
                        .collect::<Vec<_>>()
                        .join(", ")
                );
                warn!(session_id = %session_id, item = %item.description, "dropping ungrounded item");
                findings.push(Finding::warning(
                    RULE_UNSUPPORTED_CITATION,
                    message,
                    None,
                ));
            }
        }

        self.audit.log(
            session_id,
            EventType::Reasoning,
            json!({
                "model": response.model,
                "attempts": attempts,
                "prompt_tokens": response.prompt_tokens,
                "completion_tokens": response.completion_tokens,
                "raw_output": response.text,
                "parsed": parsed,
                "items_accepted": items.len(),
                "items_dropped": dropped,
            }),
        );

        info!(
            session_id = %session_id,
            accepted = items.len(),
            dropped,
            "reasoning complete"
        );

        Ok(ReasoningOutcome { items, findings })
    }
}
