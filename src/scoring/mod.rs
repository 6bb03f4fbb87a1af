// src/scoring/mod.rs
//! Deterministic rule scorers and score aggregation.
//!
//! Every function here is pure: identical inputs always produce identical
//! scores, which is what makes the rule-only fallback path reproducible.

pub mod aggregate;
pub mod education;
pub mod experience;
pub mod location;
pub mod salary;

pub use aggregate::compute_overall_score;
pub use education::score_education;
pub use experience::score_experience;
pub use location::score_location;
pub use salary::score_salary;

/// Canonical category keys used across scorers, aggregation, and the AI
/// reply contract.
pub mod categories {
    pub const EXPERIENCE: &str = "experience";
    pub const SALARY: &str = "salary";
    pub const LOCATION: &str = "location";
    pub const EDUCATION: &str = "education";
    pub const SKILLS: &str = "skills";
    pub const LANGUAGE: &str = "language";
    pub const SECTOR: &str = "sector";
}

use crate::types::{CandidateSummary, CategoryScore, PositionSummary};

/// Run all four rule scorers for one candidate. Infallible; missing data
/// maps to specific mid-range scores inside each scorer.
pub fn rule_scores(position: &PositionSummary, candidate: &CandidateSummary) -> Vec<CategoryScore> {
    vec![
        score_experience(candidate.experience_years, position.required_experience_years),
        score_salary(
            candidate.salary_expectation,
            candidate.salary_currency.as_deref(),
            position.salary_min,
            position.salary_max,
            position.salary_currency.as_deref(),
        ),
        score_location(
            candidate.city.as_deref(),
            candidate.remote_ok,
            candidate.hybrid_ok,
            position.city.as_deref(),
            position.work_model,
        ),
        score_education(
            candidate.education.as_deref(),
            position.required_education.as_deref(),
        ),
    ]
}
