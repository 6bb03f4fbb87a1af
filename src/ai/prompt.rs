// src/ai/prompt.rs
use crate::types::{CandidateSummary, PositionSummary};

/// Build the single batched prompt covering the position and every
/// candidate. One matching run makes exactly one external call, so the
/// whole batch is serialized into this prompt.
pub fn build_batch_prompt(position: &PositionSummary, candidates: &[CandidateSummary]) -> String {
    let mut prompt = String::new();

    prompt.push_str(
        "You are a recruiting assistant scoring how well candidates fit an open position.\n\
         Score each candidate on three categories, 0-100 each:\n\
         - skills: how the candidate's background fits the required skills\n\
         - language: how the candidate's languages fit the language requirement\n\
         - sector: how the candidate's sector experience fits the sector preference\n\
         Give a short one-sentence explanation in English for every score.\n\n",
    );

    prompt.push_str("POSITION:\n");
    prompt.push_str(&format!("Title: {}\n", position.title));
    if let Some(department) = &position.department {
        prompt.push_str(&format!("Department: {}\n", department));
    }
    prompt.push_str(&format!("Required skills: {}\n", position.required_skills));
    prompt.push_str(&format!(
        "Language requirement: {}\n",
        position.language_requirement
    ));
    prompt.push_str(&format!(
        "Sector preference: {}\n",
        position.sector_preference
    ));
    prompt.push_str(&format!("Description: {}\n\n", position.description));

    prompt.push_str("CANDIDATES:\n");
    for candidate in candidates {
        prompt.push_str(&format!("- id: {}\n", candidate.id));
        prompt.push_str(&format!("  name: {}\n", candidate.display_name));
        if let Some(title) = &candidate.current_title {
            prompt.push_str(&format!("  current title: {}\n", title));
        }
        if let Some(sector) = &candidate.current_sector {
            prompt.push_str(&format!("  current sector: {}\n", sector));
        }
        if !candidate.languages.is_empty() {
            let languages: Vec<String> = candidate
                .languages
                .iter()
                .map(|skill| format!("{} ({})", skill.language, skill.proficiency.as_str()))
                .collect();
            prompt.push_str(&format!("  languages: {}\n", languages.join(", ")));
        }
    }

    prompt.push_str(
        "\nReply with JSON only, no prose, in exactly this shape:\n\
         {\"results\": [{\"candidateId\": \"...\", \
         \"skills\": {\"score\": 0, \"explanation\": \"...\"}, \
         \"language\": {\"score\": 0, \"explanation\": \"...\"}, \
         \"sector\": {\"score\": 0, \"explanation\": \"...\"}}]}\n\
         Include one entry per candidate id listed above.\n",
    );

    prompt
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{LanguageSkill, Proficiency};

    fn position() -> PositionSummary {
        PositionSummary {
            title: "Backend Engineer".to_string(),
            department: Some("Engineering".to_string()),
            required_skills: "Rust, PostgreSQL".to_string(),
            language_requirement: "English C1".to_string(),
            sector_preference: "Fintech".to_string(),
            description: "Build payment services".to_string(),
            required_experience_years: Some(5),
            salary_min: None,
            salary_max: None,
            salary_currency: None,
            city: None,
            work_model: None,
            required_education: None,
        }
    }

    fn candidate(id: &str) -> CandidateSummary {
        CandidateSummary {
            id: id.to_string(),
            display_name: format!("Candidate {}", id),
            current_title: Some("Developer".to_string()),
            current_sector: Some("Banking".to_string()),
            languages: vec![LanguageSkill {
                language: "English".to_string(),
                proficiency: Proficiency::Advanced,
            }],
            experience_years: Some(6),
            salary_expectation: None,
            salary_currency: None,
            city: None,
            remote_ok: false,
            hybrid_ok: false,
            education: None,
        }
    }

    #[test]
    fn prompt_covers_position_and_every_candidate() {
        let prompt = build_batch_prompt(&position(), &[candidate("c-1"), candidate("c-2")]);
        assert!(prompt.contains("Backend Engineer"));
        assert!(prompt.contains("Rust, PostgreSQL"));
        assert!(prompt.contains("id: c-1"));
        assert!(prompt.contains("id: c-2"));
        assert!(prompt.contains("English (advanced)"));
    }

    #[test]
    fn prompt_demands_json_only() {
        let prompt = build_batch_prompt(&position(), &[candidate("c-1")]);
        assert!(prompt.contains("JSON only"));
        assert!(prompt.contains("candidateId"));
    }
}
