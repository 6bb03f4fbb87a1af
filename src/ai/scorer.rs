// src/ai/scorer.rs
use anyhow::Result;
use tracing::info;

use super::prompt::build_batch_prompt;
use super::response::parse_ai_response;
use super::{AiMatchResponse, SemanticClient};
use crate::config::AiServiceConfig;
use crate::types::{CandidateSummary, PositionSummary};

/// Scores the three AI-assisted categories (skills, language, sector)
/// with one batched call per matching run.
pub struct AiScorer {
    client: SemanticClient,
}

impl AiScorer {
    pub fn new(config: &AiServiceConfig) -> Result<Self> {
        Ok(Self {
            client: SemanticClient::new(config)?,
        })
    }

    /// One call for the whole batch. Transport errors bubble up as Err;
    /// a reply that fails validation comes back as Ok(None). Callers
    /// collapse both into "AI unavailable".
    pub async fn score_batch(
        &self,
        position: &PositionSummary,
        candidates: &[CandidateSummary],
    ) -> Result<Option<AiMatchResponse>> {
        if candidates.is_empty() {
            info!("No candidates to score, skipping AI call");
            return Ok(Some(AiMatchResponse { results: vec![] }));
        }

        let prompt = build_batch_prompt(position, candidates);
        let raw = self
            .client
            .send_completion("Candidate Match Scoring", &prompt)
            .await?;

        Ok(parse_ai_response(&raw))
    }
}
