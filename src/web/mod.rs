// src/web/mod.rs
pub mod handlers;
pub mod types;

pub use types::*;

use anyhow::Result;
use rocket::fairing::{Fairing, Info, Kind};
use rocket::http::{Header, Status};
use rocket::serde::json::Json;
use rocket::{catchers, get, options, post, routes, Request, Response, State};
use tracing::info;

use crate::config::EngineConfig;
use crate::engine::MatchEngine;
use crate::types::MatchOutcome;

// CORS Fairing
pub struct Cors;

#[rocket::async_trait]
impl Fairing for Cors {
    fn info(&self) -> Info {
        Info {
            name: "Add CORS headers to responses",
            kind: Kind::Response,
        }
    }

    async fn on_response<'r>(&self, _request: &'r Request<'_>, response: &mut Response<'r>) {
        response.set_header(Header::new("Access-Control-Allow-Origin", "*"));
        response.set_header(Header::new(
            "Access-Control-Allow-Methods",
            "POST, GET, OPTIONS",
        ));
        response.set_header(Header::new("Access-Control-Allow-Headers", "*"));
    }
}

#[post("/analyze-match", data = "<request>")]
pub async fn analyze_match(
    request: Json<MatchRequest>,
    engine: &State<MatchEngine>,
) -> Json<DataResponse<MatchOutcome>> {
    handlers::analyze_match_handler(request, engine).await
}

#[get("/health")]
pub async fn health() -> Json<&'static str> {
    handlers::health_handler().await
}

#[options("/<_..>")]
pub async fn options() -> Status {
    Status::Ok
}

// Error catchers
#[rocket::catch(400)]
pub fn bad_request() -> Json<StandardErrorResponse> {
    Json(StandardErrorResponse::new(
        "Invalid request format".to_string(),
        "BAD_REQUEST".to_string(),
        vec![
            "Check your request JSON format".to_string(),
            "Verify all required fields are present".to_string(),
        ],
    ))
}

#[rocket::catch(422)]
pub fn unprocessable() -> Json<StandardErrorResponse> {
    Json(StandardErrorResponse::new(
        "Request body did not match the expected schema".to_string(),
        "INVALID_BODY".to_string(),
        vec![
            "Verify the position and candidates fields".to_string(),
            "Check field names and types against the API contract".to_string(),
        ],
    ))
}

#[rocket::catch(500)]
pub fn internal_error() -> Json<StandardErrorResponse> {
    Json(StandardErrorResponse::new(
        "Internal server error".to_string(),
        "INTERNAL_ERROR".to_string(),
        vec!["Try again in a few moments".to_string()],
    ))
}

// Main server start function
pub async fn start_web_server(engine_config: EngineConfig) -> Result<()> {
    let engine = MatchEngine::new(&engine_config)?;

    info!("Starting candidate match API server");

    let _rocket = rocket::build()
        .attach(Cors)
        .manage(engine)
        .register("/api", catchers![bad_request, unprocessable, internal_error])
        .mount("/api", routes![analyze_match, health, options])
        .launch()
        .await;

    Ok(())
}
