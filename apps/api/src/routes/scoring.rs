//! Stateless scoring endpoints for hosts that keep their own session state.

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::domain::Domain;
use crate::errors::AppError;
use crate::models::interview::Response;
use crate::scoring::analyzer::{analyze, ResponseAnalysis};
use crate::scoring::feedback::{synthesize, FeedbackReport};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ResponseInput {
    pub question: String,
    pub answer: String,
    pub timestamp: Option<DateTime<Utc>>,
}

impl From<ResponseInput> for Response {
    fn from(input: ResponseInput) -> Self {
        Response {
            question: input.question,
            answer: input.answer,
            timestamp: input.timestamp.unwrap_or_else(Utc::now),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct FeedbackRequest {
    pub domain: String,
    pub responses: Vec<ResponseInput>,
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub domain: String,
    #[serde(flatten)]
    pub response: ResponseInput,
}

/// POST /api/v1/feedback
///
/// Scores a full interview. An empty `responses` list is a validation error.
pub async fn handle_feedback(
    State(state): State<AppState>,
    Json(req): Json<FeedbackRequest>,
) -> Result<Json<FeedbackReport>, AppError> {
    let domain = Domain::resolve(&req.domain);
    let responses: Vec<Response> = req.responses.into_iter().map(Response::from).collect();

    let mut rng = state.scoring_rng.lock().await;
    let report = synthesize(&responses, domain, &mut *rng)?;
    Ok(Json(report))
}

/// POST /api/v1/analyze
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(req): Json<AnalyzeRequest>,
) -> Result<Json<ResponseAnalysis>, AppError> {
    let domain = Domain::resolve(&req.domain);
    let response = Response::from(req.response);

    let mut rng = state.scoring_rng.lock().await;
    Ok(Json(analyze(&response, domain, &mut *rng)))
}
