// src/lib.rs
//! Candidate-position fit scoring engine.
//!
//! Four deterministic rule scorers plus one batched AI call per run,
//! aggregated into a ranked, explainable 0-100 score per candidate. The
//! AI path fails open: when the external service is down or replies with
//! something invalid, the run completes rule-only and reports
//! `ai_available = false`.

pub mod ai;
pub mod config;
pub mod engine;
pub mod scoring;
pub mod types;
pub mod web;

pub use config::{AiServiceConfig, EngineConfig};
pub use engine::MatchEngine;
pub use types::{
    CandidateMatchResult, CandidateSummary, CategoryScore, MatchOutcome, PositionSummary,
};
pub use web::start_web_server;
