// src/types/summaries.rs
use serde::{Deserialize, Serialize};

/// Language proficiency levels as stored by the recruiting application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Proficiency {
    Beginner,
    Intermediate,
    Advanced,
    Native,
}

impl Proficiency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Proficiency::Beginner => "beginner",
            Proficiency::Intermediate => "intermediate",
            Proficiency::Advanced => "advanced",
            Proficiency::Native => "native",
        }
    }
}

/// Work model declared on an open position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkModel {
    Remote,
    Hybrid,
    Office,
}

/// One (language, proficiency) pair from a candidate record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguageSkill {
    pub language: String,
    pub proficiency: Proficiency,
}

/// Read-only snapshot of an open position, supplied by the data layer.
/// Immutable for the duration of one matching run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PositionSummary {
    pub title: String,
    pub department: Option<String>,
    pub required_skills: String,
    pub language_requirement: String,
    pub sector_preference: String,
    pub description: String,
    pub required_experience_years: Option<u32>,
    pub salary_min: Option<f64>,
    pub salary_max: Option<f64>,
    pub salary_currency: Option<String>,
    pub city: Option<String>,
    pub work_model: Option<WorkModel>,
    pub required_education: Option<String>,
}

/// Read-only snapshot of a candidate, supplied by the data layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateSummary {
    pub id: String,
    pub display_name: String,
    pub current_title: Option<String>,
    pub current_sector: Option<String>,
    #[serde(default)]
    pub languages: Vec<LanguageSkill>,
    pub experience_years: Option<u32>,
    pub salary_expectation: Option<f64>,
    pub salary_currency: Option<String>,
    pub city: Option<String>,
    #[serde(default)]
    pub remote_ok: bool,
    #[serde(default)]
    pub hybrid_ok: bool,
    pub education: Option<String>,
}
