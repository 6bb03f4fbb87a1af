// src/ai/mod.rs
use serde::{Deserialize, Serialize};

pub mod client;
pub mod prompt;
pub mod response;
pub mod scorer;

pub use client::SemanticClient;
pub use scorer::AiScorer;

/// One validated AI-assigned category score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiCategoryScore {
    pub score: i64,
    pub explanation: String,
}

/// Validated per-candidate block of the AI reply. Exactly the three
/// AI-assisted categories, nothing optional.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiCandidateScores {
    pub candidate_id: String,
    pub skills: AiCategoryScore,
    pub language: AiCategoryScore,
    pub sector: AiCategoryScore,
}

/// The whole validated reply. Either every record passed validation or
/// the reply was discarded in its entirety; there is no partially
/// accepted variant of this type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiMatchResponse {
    pub results: Vec<AiCandidateScores>,
}
