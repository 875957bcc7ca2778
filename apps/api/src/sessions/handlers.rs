//! Axum route handlers for interview sessions.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::interview::InterviewSession;
use crate::sessions::lifecycle::{
    abandon_session, complete_session, start_session, submit_answer, SubmitAnswer, SubmitOutcome,
};
use crate::sessions::repository::get_session;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct StartSessionRequest {
    pub user_id: Uuid,
    pub domain: String,
}

/// POST /api/v1/sessions
pub async fn handle_start_session(
    State(state): State<AppState>,
    Json(req): Json<StartSessionRequest>,
) -> Result<(StatusCode, Json<InterviewSession>), AppError> {
    let session = start_session(state.store.as_ref(), req.user_id, &req.domain).await?;
    Ok((StatusCode::CREATED, Json(session)))
}

/// GET /api/v1/sessions/:id
pub async fn handle_get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<InterviewSession>, AppError> {
    Ok(Json(get_session(state.store.as_ref(), id).await?))
}

/// POST /api/v1/sessions/:id/responses
///
/// Records the answer to the current question. The response carries the next
/// question, or the feedback report once the last question is answered.
pub async fn handle_submit_answer(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<SubmitAnswer>,
) -> Result<Json<SubmitOutcome>, AppError> {
    let outcome = submit_answer(
        state.store.as_ref(),
        &state.session_locks,
        &*state.scoring_rng,
        id,
        req,
    ).await?;
    Ok(Json(outcome))
}

/// POST /api/v1/sessions/:id/complete
pub async fn handle_complete_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<InterviewSession>, AppError> {
    let session = complete_session(
        state.store.as_ref(),
        &state.session_locks,
        &*state.scoring_rng,
        id,
    ).await?;
    Ok(Json(session))
}

/// DELETE /api/v1/sessions/:id
pub async fn handle_abandon_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    abandon_session(state.store.as_ref(), &state.session_locks, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
