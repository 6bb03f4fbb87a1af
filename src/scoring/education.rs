// src/scoring/education.rs
use crate::types::CategoryScore;

use super::categories;

/// Fixed education hierarchy, lowest to highest. Each level lists the
/// phrases that identify it inside free text such as
/// "Bachelor's - Computer Engineering".
const EDUCATION_LEVELS: [(&[&str], &str); 5] = [
    (&["high school", "highschool"], "high school"),
    (&["associate"], "associate"),
    (&["bachelor"], "bachelor's"),
    (&["master"], "master's"),
    (&["doctorate", "doctoral", "phd", "ph.d"], "doctorate"),
];

/// Resolve a free-text education string to a rank in the hierarchy by
/// longest-match search. Returns the rank and canonical level name.
fn canonical_level(text: &str) -> Option<(usize, &'static str)> {
    let haystack = text.to_lowercase();
    let mut best: Option<(usize, &'static str, usize)> = None;
    for (rank, (markers, canonical)) in EDUCATION_LEVELS.iter().enumerate() {
        for marker in *markers {
            if haystack.contains(marker) {
                let longer = match best {
                    Some((_, _, len)) => marker.len() > len,
                    None => true,
                };
                if longer {
                    best = Some((rank, *canonical, marker.len()));
                }
            }
        }
    }
    best.map(|(rank, canonical, _)| (rank, canonical))
}

/// Score a candidate's education level against the position requirement.
/// Both inputs are free text and may carry a field of study alongside the
/// level.
pub fn score_education(
    candidate_level: Option<&str>,
    required_level: Option<&str>,
) -> CategoryScore {
    let required = match required_level {
        Some(text) => text,
        None => {
            return CategoryScore::new(
                categories::EDUCATION,
                75,
                "Education requirement not specified for this position",
            );
        }
    };

    let candidate = match candidate_level {
        Some(text) => text,
        None => {
            return CategoryScore::new(
                categories::EDUCATION,
                25,
                "Candidate education unknown",
            );
        }
    };

    let (required_rank, required_name) = match canonical_level(required) {
        Some(level) => level,
        None => {
            return CategoryScore::new(
                categories::EDUCATION,
                50,
                format!("Education levels not comparable: '{}'", required),
            );
        }
    };
    let (candidate_rank, candidate_name) = match canonical_level(candidate) {
        Some(level) => level,
        None => {
            return CategoryScore::new(
                categories::EDUCATION,
                50,
                format!("Education levels not comparable: '{}'", candidate),
            );
        }
    };

    let score = if candidate_rank >= required_rank {
        100
    } else if required_rank - candidate_rank == 1 {
        60
    } else {
        20
    };
    CategoryScore::new(
        categories::EDUCATION,
        score,
        format!(
            "Candidate holds {}, position requires {}",
            candidate_name, required_name
        ),
    )
}
