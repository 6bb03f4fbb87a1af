// src/scoring/location.rs
use crate::types::{CategoryScore, WorkModel};

use super::categories;

fn same_city(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

/// Score a candidate's location and flexibility against the position's
/// work model.
pub fn score_location(
    candidate_city: Option<&str>,
    remote_ok: bool,
    hybrid_ok: bool,
    position_city: Option<&str>,
    work_model: Option<WorkModel>,
) -> CategoryScore {
    let model = match work_model {
        Some(model) => model,
        None => {
            return CategoryScore::new(
                categories::LOCATION,
                75,
                "Work model not specified for this position",
            );
        }
    };

    match model {
        WorkModel::Remote => {
            if remote_ok {
                CategoryScore::new(categories::LOCATION, 100, "Remote position, candidate is open to remote work")
            } else {
                CategoryScore::new(
                    categories::LOCATION,
                    50,
                    "Remote position but candidate has not opted into remote work",
                )
            }
        }
        WorkModel::Hybrid => {
            if hybrid_ok || remote_ok {
                let cities_compatible = match (candidate_city, position_city) {
                    (Some(cand), Some(pos)) => same_city(cand, pos),
                    _ => true,
                };
                if cities_compatible {
                    CategoryScore::new(
                        categories::LOCATION,
                        100,
                        "Hybrid position, candidate is eligible and local",
                    )
                } else {
                    CategoryScore::new(
                        categories::LOCATION,
                        70,
                        "Hybrid position, candidate is eligible but in a different city",
                    )
                }
            } else {
                CategoryScore::new(
                    categories::LOCATION,
                    40,
                    "Hybrid position but candidate is open to neither hybrid nor remote work",
                )
            }
        }
        WorkModel::Office => match (candidate_city, position_city) {
            (Some(cand), Some(pos)) if same_city(cand, pos) => CategoryScore::new(
                categories::LOCATION,
                100,
                format!("On-site position in {}, candidate is local", pos),
            ),
            (Some(cand), Some(pos)) => CategoryScore::new(
                categories::LOCATION,
                20,
                format!("On-site position in {}, candidate is in {}", pos, cand),
            ),
            _ => CategoryScore::new(
                categories::LOCATION,
                50,
                "On-site position but a city is missing on one side",
            ),
        },
    }
}
