// src/web/handlers.rs
use rocket::serde::json::Json;
use rocket::State;
use tracing::info;

use crate::engine::MatchEngine;
use crate::types::MatchOutcome;
use crate::web::types::{DataResponse, MatchRequest};

pub async fn analyze_match_handler(
    request: Json<MatchRequest>,
    engine: &State<MatchEngine>,
) -> Json<DataResponse<MatchOutcome>> {
    let request = request.into_inner();
    info!(
        "Matching {} candidates against position '{}'",
        request.candidates.len(),
        request.position.title
    );

    let outcome = engine
        .run_match(&request.position, &request.candidates)
        .await;

    // The caller is expected to surface a rule-based-only notice when the
    // AI signal was missing for this run.
    let message = if outcome.ai_available {
        "Match completed".to_string()
    } else {
        "Match completed using rule-based signals only".to_string()
    };

    Json(DataResponse::success(message, outcome))
}

pub async fn health_handler() -> Json<&'static str> {
    Json("OK")
}
