// src/types/mod.rs
pub mod results;
pub mod summaries;

pub use results::{CandidateMatchResult, CategoryScore, MatchOutcome};
pub use summaries::{CandidateSummary, LanguageSkill, PositionSummary, Proficiency, WorkModel};
