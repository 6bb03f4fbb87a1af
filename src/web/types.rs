// src/web/types.rs
use rocket::serde::{Deserialize, Serialize};

use crate::types::{CandidateSummary, PositionSummary};

#[derive(Serialize)]
#[serde(crate = "rocket::serde", rename_all = "lowercase")]
pub enum ResponseType {
    Data,
    Error,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct DataResponse<T> {
    #[serde(rename = "type")]
    pub response_type: ResponseType,
    pub success: bool,
    pub message: String,
    pub data: T,
}

impl<T> DataResponse<T> {
    pub fn success(message: String, data: T) -> Self {
        Self {
            response_type: ResponseType::Data,
            success: true,
            message,
            data,
        }
    }
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct StandardErrorResponse {
    #[serde(rename = "type")]
    pub response_type: ResponseType,
    pub success: bool,
    pub error: String,
    pub error_code: String,
    pub suggestions: Vec<String>,
}

impl StandardErrorResponse {
    pub fn new(error: String, error_code: String, suggestions: Vec<String>) -> Self {
        Self {
            response_type: ResponseType::Error,
            success: false,
            error,
            error_code,
            suggestions,
        }
    }
}

/// One matching request: the data layer's snapshot of a position and the
/// candidates to rank against it. The engine never mutates either.
#[derive(Deserialize)]
#[serde(crate = "rocket::serde")]
pub struct MatchRequest {
    pub position: PositionSummary,
    pub candidates: Vec<CandidateSummary>,
}
