use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use serde::Deserialize;
use uuid::Uuid;

use crate::accounts::registry::{get_user, sign_in, sign_up, AuthOutcome};
use crate::errors::AppError;
use crate::models::interview::InterviewSession;
use crate::sessions::dashboard::{summarize, DashboardSummary};
use crate::sessions::repository::list_user_sessions;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SignUpRequest {
    pub email: String,
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct SignInRequest {
    pub email: String,
}

/// POST /api/v1/users/signup
pub async fn handle_sign_up(
    State(state): State<AppState>,
    Json(req): Json<SignUpRequest>,
) -> Result<(StatusCode, Json<AuthOutcome>), AppError> {
    let outcome = sign_up(state.store.as_ref(), &req.email, &req.name).await?;
    Ok((StatusCode::CREATED, Json(outcome)))
}

/// POST /api/v1/users/signin
pub async fn handle_sign_in(
    State(state): State<AppState>,
    Json(req): Json<SignInRequest>,
) -> Result<Json<AuthOutcome>, AppError> {
    Ok(Json(sign_in(state.store.as_ref(), &req.email).await?))
}

/// GET /api/v1/users/:id/sessions
///
/// Newest first.
pub async fn handle_list_sessions(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<Vec<InterviewSession>>, AppError> {
    get_user(state.store.as_ref(), user_id).await?;
    Ok(Json(list_user_sessions(state.store.as_ref(), user_id).await?))
}

/// GET /api/v1/users/:id/dashboard
pub async fn handle_dashboard(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<DashboardSummary>, AppError> {
    let user = get_user(state.store.as_ref(), user_id).await?;
    let sessions = list_user_sessions(state.store.as_ref(), user_id).await?;
    Ok(Json(summarize(&user, &sessions, Utc::now())))
}
