// src/types/results.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One scored dimension of a candidate/position comparison.
///
/// The category key is one of: experience, salary, location, education,
/// skills, language, sector. Scores are always clamped to 0-100.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryScore {
    pub category: String,
    pub score: u8,
    pub explanation: String,
}

impl CategoryScore {
    pub fn new(category: &str, score: u8, explanation: impl Into<String>) -> Self {
        Self {
            category: category.to_string(),
            score: score.min(100),
            explanation: explanation.into(),
        }
    }
}

/// Final per-candidate outcome of one matching run. Constructed fresh per
/// run, never mutated afterwards, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateMatchResult {
    pub candidate_id: String,
    pub display_name: String,
    pub current_title: Option<String>,
    pub overall_score: u8,
    pub category_scores: Vec<CategoryScore>,
}

/// Everything one matching run hands back to the caller.
#[derive(Debug, Clone, Serialize)]
pub struct MatchOutcome {
    /// Correlation id for log lines belonging to this run.
    pub run_id: String,
    /// Ranked descending by overall score; ties keep input order.
    pub results: Vec<CandidateMatchResult>,
    /// False when the AI call failed, was rejected, or is not configured.
    pub ai_available: bool,
    pub generated_at: DateTime<Utc>,
}
