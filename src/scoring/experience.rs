// src/scoring/experience.rs
use crate::types::CategoryScore;

use super::categories;

/// Score how a candidate's years of experience compare to the position's
/// requirement. Missing data is a signal, not an error.
pub fn score_experience(
    candidate_years: Option<u32>,
    required_years: Option<u32>,
) -> CategoryScore {
    let required = match required_years {
        Some(years) => years,
        None => {
            return CategoryScore::new(
                categories::EXPERIENCE,
                75,
                "Experience requirement not specified for this position",
            );
        }
    };

    let candidate = match candidate_years {
        Some(years) => years,
        None => {
            return CategoryScore::new(
                categories::EXPERIENCE,
                25,
                format!(
                    "Candidate experience unknown, position requires {} years",
                    required
                ),
            );
        }
    };

    if candidate >= required {
        // Diminishing bonus for exceeding the bar, capped at +25.
        let bonus = (candidate - required).saturating_mul(5).min(25);
        let score = (75 + bonus).min(100) as u8;
        return CategoryScore::new(
            categories::EXPERIENCE,
            score,
            format!(
                "{} years of experience, minimum {} required",
                candidate, required
            ),
        );
    }

    let shortfall = required - candidate;
    let score = match shortfall {
        1 => 60,
        2 => 40,
        _ => 15,
    };
    CategoryScore::new(
        categories::EXPERIENCE,
        score,
        format!(
            "{} years of experience, {} short of the required {}",
            candidate, shortfall, required
        ),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_requirement_scores_mid_range() {
        assert_eq!(score_experience(Some(10), None).score, 75);
        assert_eq!(score_experience(None, None).score, 75);
    }

    #[test]
    fn missing_candidate_years_scores_low() {
        assert_eq!(score_experience(None, Some(5)).score, 25);
    }

    #[test]
    fn exceeding_requirement_earns_capped_bonus() {
        assert_eq!(score_experience(Some(8), Some(5)).score, 90);
        assert_eq!(score_experience(Some(5), Some(5)).score, 75);
        // Bonus caps at 25 no matter how far past the bar.
        assert_eq!(score_experience(Some(30), Some(5)).score, 100);
        assert_eq!(score_experience(Some(10), Some(5)).score, 100);
    }

    #[test]
    fn extreme_year_counts_do_not_overflow() {
        assert_eq!(score_experience(Some(u32::MAX), Some(0)).score, 100);
        assert_eq!(score_experience(Some(u32::MAX), Some(1)).score, 100);
    }

    #[test]
    fn shortfall_tiers() {
        assert_eq!(score_experience(Some(4), Some(5)).score, 60);
        assert_eq!(score_experience(Some(3), Some(5)).score, 40);
        assert_eq!(score_experience(Some(2), Some(5)).score, 15);
        assert_eq!(score_experience(Some(0), Some(5)).score, 15);
    }
}
