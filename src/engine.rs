// src/engine.rs
use std::collections::HashMap;

use anyhow::Result;
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::ai::{AiCandidateScores, AiScorer};
use crate::config::EngineConfig;
use crate::scoring::{self, categories, compute_overall_score};
use crate::types::{
    CandidateMatchResult, CandidateSummary, CategoryScore, MatchOutcome, PositionSummary,
};

/// The matching orchestrator. One instance serves any number of
/// concurrent runs; each run owns its own input snapshot and result
/// values, so there is no shared mutable state.
pub struct MatchEngine {
    ai: Option<AiScorer>,
}

impl MatchEngine {
    pub fn new(config: &EngineConfig) -> Result<Self> {
        let ai = match &config.ai {
            Some(ai_config) => Some(AiScorer::new(ai_config)?),
            None => None,
        };
        Ok(Self { ai })
    }

    /// Run one matching pass: rule scores for every candidate, one AI
    /// attempt for the whole batch, merge, rank descending.
    ///
    /// The AI step fails open: any transport or validation failure
    /// downgrades the run to rule-only and sets ai_available to false.
    /// The ranked list itself is never empty because of an AI failure.
    pub async fn run_match(
        &self,
        position: &PositionSummary,
        candidates: &[CandidateSummary],
    ) -> MatchOutcome {
        let run_id = Uuid::new_v4().to_string();
        info!(
            "Match run {} for '{}' over {} candidates",
            run_id,
            position.title,
            candidates.len()
        );

        let ai_response = match &self.ai {
            Some(scorer) => match scorer.score_batch(position, candidates).await {
                Ok(Some(response)) => Some(response),
                Ok(None) => {
                    warn!("Match run {}: AI reply failed validation, continuing rule-only", run_id);
                    None
                }
                Err(e) => {
                    warn!("Match run {}: AI call failed, continuing rule-only: {}", run_id, e);
                    None
                }
            },
            None => None,
        };
        let ai_available = ai_response.is_some();

        let ai_by_candidate: HashMap<&str, &AiCandidateScores> = ai_response
            .as_ref()
            .map(|response| {
                response
                    .results
                    .iter()
                    .map(|record| (record.candidate_id.as_str(), record))
                    .collect()
            })
            .unwrap_or_default();

        let mut results: Vec<CandidateMatchResult> = candidates
            .iter()
            .map(|candidate| {
                let mut scores = scoring::rule_scores(position, candidate);
                if let Some(ai_scores) = ai_by_candidate.get(candidate.id.as_str()) {
                    scores.extend(convert_ai_scores(ai_scores));
                }
                let overall_score = compute_overall_score(&scores);
                CandidateMatchResult {
                    candidate_id: candidate.id.clone(),
                    display_name: candidate.display_name.clone(),
                    current_title: candidate.current_title.clone(),
                    overall_score,
                    category_scores: scores,
                }
            })
            .collect();

        // Stable sort: candidates with equal overall scores keep the
        // order they were fetched in.
        results.sort_by(|a, b| b.overall_score.cmp(&a.overall_score));

        info!(
            "Match run {} completed, ai_available={}, {} results",
            run_id,
            ai_available,
            results.len()
        );

        MatchOutcome {
            run_id,
            results,
            ai_available,
            generated_at: Utc::now(),
        }
    }
}

/// Validated AI scores are already guaranteed to be in 0-100.
fn convert_ai_scores(record: &AiCandidateScores) -> Vec<CategoryScore> {
    vec![
        CategoryScore::new(categories::SKILLS, record.skills.score as u8, record.skills.explanation.clone()),
        CategoryScore::new(
            categories::LANGUAGE,
            record.language.score as u8,
            record.language.explanation.clone(),
        ),
        CategoryScore::new(categories::SECTOR, record.sector.score as u8, record.sector.explanation.clone()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::WorkModel;

    fn position() -> PositionSummary {
        PositionSummary {
            title: "Backend Engineer".to_string(),
            department: None,
            required_skills: "Rust".to_string(),
            language_requirement: "English".to_string(),
            sector_preference: "Fintech".to_string(),
            description: "Payments".to_string(),
            required_experience_years: Some(5),
            salary_min: Some(40000.0),
            salary_max: Some(60000.0),
            salary_currency: Some("TRY".to_string()),
            city: Some("İstanbul".to_string()),
            work_model: Some(WorkModel::Office),
            required_education: Some("Bachelor's".to_string()),
        }
    }

    fn candidate(id: &str, years: Option<u32>) -> CandidateSummary {
        CandidateSummary {
            id: id.to_string(),
            display_name: format!("Candidate {}", id),
            current_title: None,
            current_sector: None,
            languages: vec![],
            experience_years: years,
            salary_expectation: Some(50000.0),
            salary_currency: Some("TRY".to_string()),
            city: Some("İstanbul".to_string()),
            remote_ok: false,
            hybrid_ok: false,
            education: Some("Bachelor's".to_string()),
        }
    }

    #[tokio::test]
    async fn rule_only_run_ranks_descending() {
        let engine = MatchEngine::new(&EngineConfig::rule_only()).unwrap();
        let candidates = vec![candidate("low", Some(1)), candidate("high", Some(8))];
        let outcome = engine.run_match(&position(), &candidates).await;

        assert!(!outcome.ai_available);
        assert_eq!(outcome.results.len(), 2);
        assert_eq!(outcome.results[0].candidate_id, "high");
        assert!(outcome.results[0].overall_score >= outcome.results[1].overall_score);
        // Rule-only runs carry exactly the four rule categories.
        assert_eq!(outcome.results[0].category_scores.len(), 4);
    }

    #[tokio::test]
    async fn equal_scores_keep_input_order() {
        let engine = MatchEngine::new(&EngineConfig::rule_only()).unwrap();
        let candidates = vec![
            candidate("first", Some(6)),
            candidate("second", Some(6)),
            candidate("third", Some(6)),
        ];
        let outcome = engine.run_match(&position(), &candidates).await;
        let order: Vec<&str> = outcome
            .results
            .iter()
            .map(|result| result.candidate_id.as_str())
            .collect();
        assert_eq!(order, vec!["first", "second", "third"]);
    }

    #[tokio::test]
    async fn rule_only_runs_are_deterministic() {
        let engine = MatchEngine::new(&EngineConfig::rule_only()).unwrap();
        let candidates = vec![candidate("a", Some(3)), candidate("b", None)];

        let first = engine.run_match(&position(), &candidates).await;
        let second = engine.run_match(&position(), &candidates).await;

        let strip = |outcome: &MatchOutcome| {
            outcome
                .results
                .iter()
                .map(|result| {
                    (
                        result.candidate_id.clone(),
                        result.overall_score,
                        result
                            .category_scores
                            .iter()
                            .map(|score| (score.category.clone(), score.score, score.explanation.clone()))
                            .collect::<Vec<_>>(),
                    )
                })
                .collect::<Vec<_>>()
        };
        assert_eq!(strip(&first), strip(&second));
    }

    #[tokio::test]
    async fn empty_candidate_list_yields_empty_results() {
        let engine = MatchEngine::new(&EngineConfig::rule_only()).unwrap();
        let outcome = engine.run_match(&position(), &[]).await;
        assert!(outcome.results.is_empty());
    }
}
