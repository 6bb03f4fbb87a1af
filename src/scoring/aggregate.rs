// src/scoring/aggregate.rs
use crate::types::CategoryScore;

use super::categories;

/// Fixed category weights. Not configurable at runtime; the weighted
/// average is renormalized over whichever categories are present, so a
/// rule-only run still produces a full-range overall score.
const CATEGORY_WEIGHTS: [(&str, f64); 7] = [
    (categories::EXPERIENCE, 0.12),
    (categories::SALARY, 0.12),
    (categories::LOCATION, 0.08),
    (categories::EDUCATION, 0.08),
    (categories::SKILLS, 0.25),
    (categories::LANGUAGE, 0.15),
    (categories::SECTOR, 0.20),
];

fn category_weight(category: &str) -> Option<f64> {
    CATEGORY_WEIGHTS
        .iter()
        .find(|(name, _)| *name == category)
        .map(|(_, weight)| *weight)
}

/// Weighted average of the present categories, rounded to an integer.
/// Categories without a weight entry are ignored rather than rejected,
/// so newer category keys do not break older aggregators. No categories
/// at all scores 0.
pub fn compute_overall_score(scores: &[CategoryScore]) -> u8 {
    let mut weighted_sum = 0.0;
    let mut weight_total = 0.0;
    for entry in scores {
        if let Some(weight) = category_weight(&entry.category) {
            weighted_sum += f64::from(entry.score) * weight;
            weight_total += weight;
        }
    }
    if weight_total == 0.0 {
        return 0;
    }
    (weighted_sum / weight_total).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CategoryScore;

    fn score(category: &str, value: u8) -> CategoryScore {
        CategoryScore::new(category, value, "test")
    }

    #[test]
    fn weights_sum_to_one() {
        let total: f64 = CATEGORY_WEIGHTS.iter().map(|(_, w)| w).sum();
        assert!((total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn no_categories_scores_zero() {
        assert_eq!(compute_overall_score(&[]), 0);
    }

    #[test]
    fn unknown_categories_are_ignored() {
        let scores = vec![score("charisma", 100)];
        assert_eq!(compute_overall_score(&scores), 0);

        let scores = vec![score("charisma", 0), score(categories::SKILLS, 80)];
        assert_eq!(compute_overall_score(&scores), 80);
    }

    #[test]
    fn renormalizes_over_present_categories() {
        // (80 * 0.25 + 60 * 0.20) / 0.45 = 71.11 -> 71
        let scores = vec![score(categories::SKILLS, 80), score(categories::SECTOR, 60)];
        assert_eq!(compute_overall_score(&scores), 71);
    }

    #[test]
    fn heavier_categories_dominate() {
        let skills_only = vec![score(categories::SKILLS, 100), score(categories::LOCATION, 0)];
        let location_only = vec![score(categories::SKILLS, 0), score(categories::LOCATION, 100)];
        assert!(compute_overall_score(&skills_only) > compute_overall_score(&location_only));
    }

    #[test]
    fn full_category_set_stays_in_range() {
        let scores: Vec<CategoryScore> = CATEGORY_WEIGHTS
            .iter()
            .map(|(name, _)| score(name, 100))
            .collect();
        assert_eq!(compute_overall_score(&scores), 100);
    }
}
