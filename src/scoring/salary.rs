// src/scoring/salary.rs
use crate::types::CategoryScore;

use super::categories;

/// Score a candidate's salary expectation against the position's budget.
///
/// Cross-currency expectations are scored 50 ("insufficient information")
/// rather than converted; a missing currency on either side is treated as
/// comparable.
pub fn score_salary(
    expectation: Option<f64>,
    candidate_currency: Option<&str>,
    salary_min: Option<f64>,
    salary_max: Option<f64>,
    position_currency: Option<&str>,
) -> CategoryScore {
    if salary_min.is_none() && salary_max.is_none() {
        return CategoryScore::new(
            categories::SALARY,
            75,
            "Salary range not specified for this position",
        );
    }

    let expectation = match expectation {
        Some(amount) => amount,
        None => {
            return CategoryScore::new(
                categories::SALARY,
                50,
                "Candidate salary expectation unknown",
            );
        }
    };

    if let (Some(cand), Some(pos)) = (candidate_currency, position_currency) {
        if !cand.eq_ignore_ascii_case(pos) {
            return CategoryScore::new(
                categories::SALARY,
                50,
                format!(
                    "Expectation in {} cannot be compared to a budget in {}",
                    cand, pos
                ),
            );
        }
    }

    let min = salary_min.unwrap_or(0.0);
    let max = salary_max.unwrap_or(f64::INFINITY);

    if expectation >= min && expectation <= max {
        return CategoryScore::new(
            categories::SALARY,
            100,
            format!("Expectation {} is within the position budget", expectation),
        );
    }

    if expectation < min {
        // Under-budget is a mild positive, not a penalty.
        return CategoryScore::new(
            categories::SALARY,
            90,
            format!(
                "Expectation {} is below the budget minimum {}",
                expectation, min
            ),
        );
    }

    let overshoot_pct = (expectation - max) / max * 100.0;
    let score = if overshoot_pct <= 10.0 {
        65
    } else if overshoot_pct <= 25.0 {
        40
    } else {
        15
    };
    CategoryScore::new(
        categories::SALARY,
        score,
        format!(
            "Expectation {} exceeds the budget maximum {} by {:.0}%",
            expectation, max, overshoot_pct
        ),
    )
}
