// src/synergy/analyzer.rs
use std::time::Instant;
use tokio_util::sync::CancellationToken;

use crate::errors::{Result, SynergyError};
use crate::models::{AnalysisResult, SynergyScore};
use crate::providers::LlmProvider;
use crate::synergy::prompts::{synergy_prompt, synergy_schema, RESUME_CONTEXT};

/// Turns a job description into a synergy score with one model call.
pub struct SynergyAnalyzer<P> {
    provider: P,
    resume_context: String,
}

impl<P: LlmProvider> SynergyAnalyzer<P> {
    pub fn new(provider: P) -> Self {
        Self::with_resume_context(provider, RESUME_CONTEXT)
    }

    pub fn with_resume_context(provider: P, resume_context: impl Into<String>) -> Self {
        Self {
            provider,
            resume_context: resume_context.into(),
        }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Runs the check and keeps the cause of any failure.
    pub async fn try_analyze(&self, job_description: &str) -> Result<SynergyScore> {
        let prompt = synergy_prompt(&self.resume_context, job_description);
        let schema = synergy_schema();

        let (payload, latency_ms) = self.provider.generate_json(&prompt, &schema).await?;
        let score: SynergyScore = serde_json::from_str(payload.trim())?;

        log::info!(
            "✅ Synergy score {} ({}ms)",
            score.score_label(),
            latency_ms
        );
        Ok(score)
    }

    /// Runs the check and collapses every failure into the visitor-facing
    /// error result. Only cancellation is returned as `Err`.
    pub async fn analyze(
        &self,
        job_description: &str,
        cancel: &CancellationToken,
    ) -> Result<AnalysisResult> {
        let start = Instant::now();

        let outcome = tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                log::info!("Synergy request cancelled after {}ms", start.elapsed().as_millis());
                return Err(SynergyError::Cancelled);
            }
            outcome = self.try_analyze(job_description) => outcome,
        };

        Ok(match outcome {
            Ok(score) => AnalysisResult::Score(score),
            Err(e) => {
                log::error!("❌ Synergy analysis failed ({} error): {}", e.kind(), e);
                AnalysisResult::failed()
            }
        })
    }
}
