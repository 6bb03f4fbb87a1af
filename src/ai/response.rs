// src/ai/response.rs
use tracing::warn;

use super::AiMatchResponse;

/// Interior of the first fenced code block, if any. An optional "json"
/// tag right after the opening fence is stripped.
fn fenced_payload(raw: &str) -> Option<&str> {
    let start = raw.find("```")?;
    let after = &raw[start + 3..];
    let after = after.strip_prefix("json").unwrap_or(after);
    let end = after.find("```")?;
    Some(after[..end].trim())
}

/// Widest `{ ... }` substring, as a fallback when the reply has no usable
/// fence.
fn braced_payload(raw: &str) -> Option<&str> {
    let start = raw.find('{')?;
    let end = raw.rfind('}')?;
    if end < start {
        return None;
    }
    Some(raw[start..=end].trim())
}

fn validate(response: AiMatchResponse) -> Option<AiMatchResponse> {
    for record in &response.results {
        for (category, score) in [
            ("skills", &record.skills),
            ("language", &record.language),
            ("sector", &record.sector),
        ] {
            if !(0..=100).contains(&score.score) {
                warn!(
                    "Rejecting AI reply: {} score {} for candidate {} is out of range",
                    category, score.score, record.candidate_id
                );
                return None;
            }
            if score.explanation.trim().is_empty() {
                warn!(
                    "Rejecting AI reply: empty {} explanation for candidate {}",
                    category, record.candidate_id
                );
                return None;
            }
        }
    }
    Some(response)
}

/// Parse and strictly validate a raw text reply from the semantic
/// service.
///
/// Returns None for anything short of a fully valid reply: no JSON in
/// the text, a schema mismatch, a score outside 0-100, or an empty
/// explanation. One bad record discards the whole reply; a reply that
/// silently lost categories would skew the ranking with no visible
/// signal. Callers treat None as "AI unavailable", never as an error.
pub fn parse_ai_response(raw: &str) -> Option<AiMatchResponse> {
    for payload in [fenced_payload(raw), braced_payload(raw)].into_iter().flatten() {
        match serde_json::from_str::<AiMatchResponse>(payload) {
            Ok(response) => return validate(response),
            Err(e) => {
                warn!("AI reply payload did not parse as the expected schema: {}", e);
            }
        }
    }
    None
}
